use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::{Error, Result};
use crate::models::{validate_batch, UserRecord, UserResponse};

/// Validate a batch of user records and echo them back with derived fields
///
/// The whole batch is validated before anything is computed, so a single bad
/// record yields an error and no output for any record.
pub async fn create_users(body: std::result::Result<Bytes, BytesRejection>) -> Result<Response> {
    let body = body.map_err(|rejection| {
        Error::BadRequest(format!("Error reading request body: {}", rejection.body_text()))
    })?;

    let records: Vec<UserRecord> = serde_json::from_slice(&body)
        .map_err(|e| Error::BadRequest(format!("Error parsing JSON body: {}", e)))?;

    validate_batch(&records)?;

    let users = records
        .iter()
        .map(UserResponse::try_from)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let payload = serde_json::to_vec(&users)
        .map_err(|e| Error::Internal(format!("Failed to create response: {}", e)))?;

    tracing::info!(records = users.len(), "Created users");
    Ok(([(header::CONTENT_TYPE, "application/json")], payload).into_response())
}
