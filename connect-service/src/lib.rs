//! # connect-service
//!
//! Small HTTP service with two stateless endpoints:
//!
//! - `POST /api/createUser` validates a JSON array of user records and echoes
//!   them back with the weekday of each `date_of_birth` and an RFC 3339
//!   rendering of `created_on`.
//! - `POST /api/images` accepts a multipart `file` upload (PNG or JPEG),
//!   normalizes it to PNG and returns it resized to 256x256.
//!
//! ## Example
//!
//! ```rust,no_run
//! use connect_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let router = app(&config);
//!     Server::new(config).serve(router).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod router;
pub mod server;
pub mod services;

pub use router::app;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, LogFormat, MiddlewareConfig, ServiceConfig};
    pub use crate::error::{Error, Result};
    pub use crate::models::{UserRecord, UserResponse, ValidationError};
    pub use crate::observability::{build_subscriber, init_tracing};
    pub use crate::router::app;
    pub use crate::server::Server;
    pub use crate::services::imaging::UploadedImage;
}
