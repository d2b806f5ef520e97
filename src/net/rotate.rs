// SPDX-License-Identifier: MPL-2.0
//! Upload-and-rotate round trip. The response is binary image data,
//! not text.

use super::{upload_form, Upload, UploadError};

/// POSTs the file to the caller-supplied rotation URL and returns the
/// response bytes after checking they decode as an image.
///
/// # Errors
///
/// - [`UploadError::Transport`] when the request fails outright.
/// - [`UploadError::Server`] for any non-200 status; the body bytes are
///   carried as text since failure bodies are plain-text diagnostics.
/// - [`UploadError::Malformed`] when a 200 body is not a recognizable
///   image.
pub async fn rotate(
    client: reqwest::Client,
    url: String,
    upload: Upload,
) -> Result<Vec<u8>, UploadError> {
    log::debug!("rotating {} via {}", upload.file_name, url);

    let response = client
        .post(&url)
        .multipart(upload_form(upload))
        .send()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;

    image_from_response(status, bytes.to_vec())
}

/// Maps a completed HTTP exchange to image bytes or an error.
fn image_from_response(status: u16, bytes: Vec<u8>) -> Result<Vec<u8>, UploadError> {
    if status != 200 {
        log::warn!("rotate endpoint returned {}", status);
        return Err(UploadError::Server {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }
    image_rs::guess_format(&bytes)
        .map_err(|e| UploadError::Malformed(e.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Smallest payload guess_format recognizes as PNG.
    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn ok_status_with_image_bytes_passes_through() {
        let bytes = image_from_response(200, PNG_MAGIC.to_vec()).expect("should pass");
        assert_eq!(bytes, PNG_MAGIC);
    }

    #[test]
    fn ok_status_with_non_image_bytes_is_malformed() {
        let err = image_from_response(200, b"definitely text".to_vec()).unwrap_err();
        assert!(matches!(err, UploadError::Malformed(_)));
    }

    #[test]
    fn non_200_carries_body_as_text() {
        let err = image_from_response(422, b"no level found".to_vec()).unwrap_err();
        assert_eq!(
            err,
            UploadError::Server {
                status: 422,
                body: "no level found".to_string()
            }
        );
    }

    #[test]
    fn non_200_with_empty_body_is_server_error_with_empty_text() {
        let err = image_from_response(500, Vec::new()).unwrap_err();
        assert_eq!(
            err,
            UploadError::Server {
                status: 500,
                body: String::new()
            }
        );
    }
}
