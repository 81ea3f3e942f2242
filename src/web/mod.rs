pub mod config;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use state::AppState;
