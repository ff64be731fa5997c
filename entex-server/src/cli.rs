use clap::{Arg, Command, ValueHint};
use std::path::PathBuf;

/// CLI arguments for entex-server
#[derive(Debug, Clone)]
pub struct CliArgs {
    pub port: Option<u16>,
    pub config_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Parse command line arguments
    pub fn parse() -> Self {
        let matches = Command::new("entex-server")
            .version(entex::VERSION)
            .about("HTTP server for the entex named-entity extraction pipeline")
            .long_about(
                r#"Serves entity extraction over HTTP: a JSON report endpoint, a browser
form for highlighted text, and a sentence co-occurrence graph view.

Configuration (patterns, allow-list, model size, rendering options) comes
from the JSON file named by the ENTEX_CONFIG environment variable; the
--config flag overrides it. A missing or malformed configuration is a
fatal startup error.

Examples:
  ENTEX_CONFIG=entex.json entex-server --port 8080
  entex-server --config entex.json --log-level debug"#,
            )
            .arg(
                Arg::new("port")
                    .short('p')
                    .long("port")
                    .value_name("PORT")
                    .help("Port to listen on (default: 3000)")
                    .value_hint(ValueHint::Other)
                    .value_parser(clap::value_parser!(u16)),
            )
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .value_name("FILE")
                    .help("Configuration file path (overrides ENTEX_CONFIG)")
                    .value_hint(ValueHint::FilePath)
                    .value_parser(clap::value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("log_level")
                    .long("log-level")
                    .value_name("LEVEL")
                    .help("Logging level")
                    .value_parser(["error", "warn", "info", "debug", "trace"]),
            )
            .get_matches();

        Self {
            port: matches.get_one::<u16>("port").copied(),
            config_file: matches.get_one::<PathBuf>("config").cloned(),
            log_level: matches.get_one::<String>("log_level").cloned(),
        }
    }
}
