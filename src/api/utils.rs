//! API utility functions
//!
//! Pure, stateless helpers for HTTP request processing, kept out of
//! services.rs so they can be unit tested.

use url::Url;

use crate::api::error::ApiError;

/// Parses and validates a Content-Type header for application/json
///
/// Accepts `application/json` with or without parameters; rejects
/// `application/jsonp`, `text/json`, `text/plain` and malformed media types.
pub fn parse_content_type(content_type: &str) -> Result<mime::Mime, ApiError> {
    let media_type: mime::Mime = content_type.parse().map_err(|_| {
        ApiError::InvalidPayload(format!("invalid Content-Type: {}", content_type))
    })?;

    if media_type.type_() != mime::APPLICATION || media_type.subtype() != mime::JSON {
        return Err(ApiError::InvalidPayload(format!(
            "Content-Type must be application/json, got: {}/{}",
            media_type.type_(),
            media_type.subtype()
        )));
    }

    Ok(media_type)
}

/// Appends `file=<name>` to the configured download URL
pub fn build_download_link(base_url: &str, file_name: &str) -> Result<String, ApiError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ApiError::Internal(format!("invalid base_url '{}': {}", base_url, e)))?;
    url.query_pairs_mut().append_pair("file", file_name);
    Ok(url.into())
}

/// `Content-Disposition` value for an attachment download
pub fn content_disposition(file_name: &str) -> String {
    format!("attachment; filename={}", file_name)
}
