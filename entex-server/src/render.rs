//! HTML shells for the browser-facing routes.
//!
//! The interactive graph rendering itself is delegated to vis-network,
//! loaded from a CDN in the emitted page; the server only embeds the
//! node-link JSON and the configured rendering options.

use entex::pipeline::EntityGraph;

const STYLE: &str = r#"
  body { font-family: sans-serif; max-width: 50rem; margin: 2rem auto; padding: 0 1rem; }
  textarea { width: 100%; min-height: 8rem; }
  mark.entity { background: #bfeeb7; padding: 0.1em 0.3em; border-radius: 0.35em; }
  mark.entity .entity-label { font-size: 0.7em; font-weight: bold; margin-left: 0.4em; vertical-align: middle; }
  .error { color: #b00020; }
"#;

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">\
         <title>{title}</title><style>{STYLE}</style></head>\
         <body>{body}</body></html>"
    )
}

/// `GET /` welcome page.
pub fn welcome_page() -> String {
    page(
        "entex",
        "<h1>entex</h1>\
         <p>Named-entity extraction service.</p>\
         <ul>\
           <li><code>POST /entities</code> &mdash; JSON entity report</li>\
           <li><a href=\"/form\">/form</a> &mdash; interactive extraction and visualization</li>\
         </ul>",
    )
}

/// `GET /form` entry form.
pub fn form_page() -> String {
    page(
        "entex - extract",
        "<h1>Extract entities</h1>\
         <form method=\"post\" action=\"/form\">\
           <p><textarea name=\"msg\" placeholder=\"Paste text here\"></textarea></p>\
           <p>\
             <button name=\"action\" value=\"extract\">Extract</button>\
             <button name=\"action\" value=\"visualize\">Visualize</button>\
           </p>\
         </form>",
    )
}

/// Result page wrapping an entity-highlighted fragment.
pub fn highlight_page(fragment: &str) -> String {
    page(
        "entex - entities",
        &format!("<h1>Entities</h1><p>{fragment}</p><p><a href=\"/form\">Back</a></p>"),
    )
}

/// Co-occurrence graph page with embedded vis-network data.
pub fn graph_page(graph: &EntityGraph, options: &serde_json::Value) -> String {
    let nodes = serde_json::to_string(&graph.nodes).unwrap_or_else(|_| "[]".to_string());
    let edges = serde_json::to_string(&graph.edges).unwrap_or_else(|_| "[]".to_string());
    let options = serde_json::to_string(options).unwrap_or_else(|_| "{}".to_string());

    page(
        "entex - graph",
        &format!(
            "<h1>Entity graph</h1>\
             <div id=\"network\" style=\"height: 36rem; border: 1px solid #ccc;\"></div>\
             <p><a href=\"/form\">Back</a></p>\
             <script src=\"https://unpkg.com/vis-network/standalone/umd/vis-network.min.js\"></script>\
             <script>\
               const nodes = new vis.DataSet({nodes});\
               const edges = new vis.DataSet({edges});\
               new vis.Network(document.getElementById('network'), {{ nodes, edges }}, {options});\
             </script>"
        ),
    )
}

/// Fallback fragment for an unrecognized form action. Returned with a 200
/// status; an unknown action is a form problem, not an HTTP error.
pub fn fallback_page(action: &str) -> String {
    let action: String = action.chars().filter(|c| c.is_alphanumeric()).collect();
    page(
        "entex - error",
        &format!(
            "<p class=\"error\">Unknown action '{action}'.</p>\
             <p><a href=\"/form\">Back</a></p>"
        ),
    )
}
