// Handler modules
pub mod images;
pub mod users;

use axum::http::StatusCode;

// Re-export handlers for convenience
pub use images::upload_image;
pub use users::create_users;

/// Fallback for every path outside the API: 404 with an empty body
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
