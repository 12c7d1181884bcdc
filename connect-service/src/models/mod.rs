// Domain models
pub mod user;

pub use user::{validate_batch, UserRecord, UserResponse, ValidationError};
