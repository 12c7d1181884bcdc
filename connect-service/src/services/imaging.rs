//! Image normalization: content sniffing, JPEG to PNG conversion and the
//! fixed-size Lanczos3 resize.
//!
//! | Step | Implementation |
//! |---|---|
//! | **Sniff** | `image::guess_format` (magic bytes) |
//! | **Normalize** | PNG passes through, JPEG is decoded and re-encoded as PNG |
//! | **Resize** | `resize_exact` to 256x256 with `FilterType::Lanczos3`, encoded as PNG |
//!
//! Everything here is synchronous and CPU-bound; async callers should run it on
//! the blocking pool.

use std::io::Cursor;

use image::{imageops::FilterType, DynamicImage, ImageFormat};
use thiserror::Error;

pub const TARGET_WIDTH: u32 = 256;
pub const TARGET_HEIGHT: u32 = 256;

/// MIME type reported for binary content that is not a recognised image
pub const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// MIME type reported for content with no binary bytes in its leading window
pub const TEXT_MIME_TYPE: &str = "text/plain; charset=utf-8";

/// How many leading bytes are inspected when telling text from binary
const SNIFF_LEN: usize = 512;

#[derive(Debug, Error)]
pub enum ImagingError {
    #[error("unable to convert {0} to png")]
    Unsupported(&'static str),

    #[error("unable to decode {format}: {source}")]
    Decode {
        format: &'static str,
        #[source]
        source: image::ImageError,
    },

    #[error("unable to encode png: {0}")]
    Encode(#[source] image::ImageError),
}

/// Uploaded file contents with the format detected from its bytes
#[derive(Debug, Clone)]
pub struct UploadedImage {
    bytes: Vec<u8>,
    format: Option<ImageFormat>,
}

impl UploadedImage {
    /// Detect the encoding from the content, ignoring any declared type
    pub fn sniff(bytes: Vec<u8>) -> Self {
        let format = image::guess_format(&bytes).ok();
        Self { bytes, format }
    }

    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    pub fn mime_type(&self) -> &'static str {
        match self.format {
            Some(format) => format.to_mime_type(),
            None if looks_like_text(&self.bytes) => TEXT_MIME_TYPE,
            None => UNKNOWN_MIME_TYPE,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// PNG bytes for this upload: PNG as-is, JPEG transcoded, anything else rejected
    pub fn into_png(self) -> Result<Vec<u8>, ImagingError> {
        match self.format {
            Some(ImageFormat::Png) => {
                tracing::debug!("Upload is already a png");
                Ok(self.bytes)
            }
            Some(ImageFormat::Jpeg) => {
                let image = decode(&self.bytes, ImageFormat::Jpeg)?;
                encode_png(&image)
            }
            _ => Err(ImagingError::Unsupported(self.mime_type())),
        }
    }
}

/// Decode PNG bytes and resize them to exactly 256x256, ignoring aspect ratio
pub fn resize_png(png: &[u8]) -> Result<Vec<u8>, ImagingError> {
    let image = decode(png, ImageFormat::Png)?;
    let resized = image.resize_exact(TARGET_WIDTH, TARGET_HEIGHT, FilterType::Lanczos3);
    encode_png(&resized)
}

/// Full upload pipeline: normalize to PNG, then resize
pub fn normalize_and_resize(upload: UploadedImage) -> Result<Vec<u8>, ImagingError> {
    let png = upload.into_png()?;
    resize_png(&png)
}

fn looks_like_text(bytes: &[u8]) -> bool {
    !bytes[..bytes.len().min(SNIFF_LEN)]
        .iter()
        .any(|&b| matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F))
}

fn decode(bytes: &[u8], format: ImageFormat) -> Result<DynamicImage, ImagingError> {
    image::load_from_memory_with_format(bytes, format).map_err(|source| ImagingError::Decode {
        format: format.to_mime_type(),
        source,
    })
}

fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, ImagingError> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(ImagingError::Encode)?;
    Ok(buf.into_inner())
}
