//! HTTP server for A7P profile files.
//!
//! Exposes one directory of `.a7p` files as a small JSON API so a browser
//! editor can list, view, edit and delete profiles. TLS is not terminated
//! here; bind to localhost or run behind a terminating proxy.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::{AppState, HealthResponse};
pub use router::{build_router, endpoints};
pub use server::A7pServer;
