//! Route table
//!
//! | Path | Method | Handler |
//! |---|---|---|
//! | `/api/createUser` | POST | [`handlers::create_users`] |
//! | `/api/images` | POST | [`handlers::upload_image`] |
//!
//! Other methods on these paths get 405, any other path 404, both with an
//! empty body.

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::{config::Config, handlers};

pub const CREATE_USER_PATH: &str = "/api/createUser";
pub const IMAGES_PATH: &str = "/api/images";

/// Build the application router
///
/// The body limit is applied here rather than in [`Server`](crate::server::Server)
/// so it holds for in-process use as well.
pub fn app(config: &Config) -> Router {
    Router::new()
        .route(CREATE_USER_PATH, post(handlers::create_users))
        .route(IMAGES_PATH, post(handlers::upload_image))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(config.middleware.body_limit_bytes()))
}
