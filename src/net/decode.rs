// SPDX-License-Identifier: MPL-2.0
//! Upload-and-decode round trip against the `/json` endpoint.

use super::{upload_form, Upload, UploadError};
use crate::level::Level;

/// POSTs the file to `{base_url}/json` and parses the response body as
/// a [`Level`].
///
/// Exactly one request is outstanding per call. A superseding call does
/// not abort an earlier one; the caller decides which completion wins.
///
/// # Errors
///
/// - [`UploadError::Transport`] when the request fails before an HTTP
///   status is available.
/// - [`UploadError::Server`] for any non-200 status, carrying the raw
///   body text (possibly empty).
/// - [`UploadError::Malformed`] when a 200 body is not a valid level.
pub async fn decode(
    client: reqwest::Client,
    base_url: String,
    upload: Upload,
) -> Result<Level, UploadError> {
    let url = format!("{}/json", base_url.trim_end_matches('/'));
    log::debug!("decoding {} via {}", upload.file_name, url);

    let response = client
        .post(&url)
        .multipart(upload_form(upload))
        .send()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;

    let level = level_from_response(status, body)?;
    log::debug!(
        "decoded level '{}' with {} blocks",
        level.title,
        level.data.len()
    );
    Ok(level)
}

/// Maps a completed HTTP exchange to a level or an error.
///
/// Split from [`decode`] so the status/body policy is testable without
/// a live server.
fn level_from_response(status: u16, body: String) -> Result<Level, UploadError> {
    if status != 200 {
        log::warn!("decode endpoint returned {}", status);
        return Err(UploadError::Server { status, body });
    }
    Level::from_json(&body).map_err(|e| UploadError::Malformed(e.to_string()))
}
