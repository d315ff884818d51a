use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use log::debug;
use std::path::Path;

/// File types the upload control offers. Checked case-insensitively.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// An upload re-encoded for transport, plus what is needed to show it back.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedImage {
    pub base64_jpeg: String,
    pub width: u32,
    pub height: u32,
    /// `data:` URL of the bytes exactly as uploaded.
    pub preview: String,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("unsupported image type '{0}', expected one of jpg, jpeg, png")]
    UnsupportedType(String),
    #[error("cannot decode image '{file_name}': {source}")]
    Decode {
        file_name: String,
        #[source]
        source: image::ImageError,
    },
    #[error("cannot encode image as JPEG: {0}")]
    Encode(#[source] image::ImageError),
}

pub fn has_accepted_extension(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}

/// Decodes the upload, flattens it to RGB and re-encodes it as JPEG at the
/// given quality.
pub fn normalize_upload(upload: &ImageUpload, quality: u8) -> Result<NormalizedImage, UploadError> {
    if !has_accepted_extension(&upload.file_name) {
        return Err(UploadError::UnsupportedType(upload.file_name.clone()));
    }
    let decoded = image::load_from_memory(&upload.bytes).map_err(|source| UploadError::Decode {
        file_name: upload.file_name.clone(),
        source,
    })?;
    let rgb = decoded.to_rgb8();

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, quality)
        .encode_image(&rgb)
        .map_err(UploadError::Encode)?;
    debug!(
        "normalized {} ({}x{}, {} bytes) to {} bytes of JPEG",
        upload.file_name,
        rgb.width(),
        rgb.height(),
        upload.bytes.len(),
        jpeg.len()
    );

    let mime = image::guess_format(&upload.bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or("application/octet-stream");

    Ok(NormalizedImage {
        base64_jpeg: STANDARD.encode(&jpeg),
        width: rgb.width(),
        height: rgb.height(),
        preview: format!("data:{mime};base64,{}", STANDARD.encode(&upload.bytes)),
    })
}
