pub mod api;
pub mod cli;
pub mod error;
pub mod render;
pub mod state;

pub use api::create_router;
pub use error::ServerError;
pub use state::AppState;
