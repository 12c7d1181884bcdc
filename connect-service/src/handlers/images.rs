use axum::{
    extract::{multipart::MultipartRejection, Multipart},
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::{Error, Result};
use crate::services::imaging::{self, UploadedImage};

/// Multipart field holding the uploaded image
pub const FILE_FIELD: &str = "file";

/// Normalize an uploaded PNG or JPEG to a 256x256 PNG
pub async fn upload_image(
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Response> {
    let mut multipart = multipart.map_err(|rejection| Error::BadRequest(rejection.body_text()))?;
    let upload = read_file_field(&mut multipart).await?;

    let format = upload.mime_type();
    let size = upload.len();

    // Decode, resize and encode are CPU-bound
    let resized = tokio::task::spawn_blocking(move || imaging::normalize_and_resize(upload))
        .await
        .map_err(|e| Error::Internal(format!("Image processing task failed: {}", e)))??;

    tracing::info!(format, bytes = size, resized_bytes = resized.len(), "Resized uploaded image");
    Ok(([(header::CONTENT_TYPE, "image/png")], resized).into_response())
}

async fn read_file_field(multipart: &mut Multipart) -> Result<UploadedImage> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::BadRequest(e.body_text()))?
    {
        // Plain form values named `file` are not uploads
        if field.name() != Some(FILE_FIELD) || field.file_name().is_none() {
            continue;
        }

        tracing::debug!(
            file_name = field.file_name().unwrap_or_default(),
            declared_type = field.content_type().unwrap_or_default(),
            "Received upload"
        );

        let bytes = field
            .bytes()
            .await
            .map_err(|e| Error::BadRequest(e.body_text()))?;
        return Ok(UploadedImage::sniff(bytes.to_vec()));
    }

    Err(Error::BadRequest(format!("{} is required", FILE_FIELD)))
}
