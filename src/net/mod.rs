// SPDX-License-Identifier: MPL-2.0
//! HTTP round trips to the decode and rotate endpoints.
//!
//! Both endpoints take one multipart file field and answer either with
//! their documented payload (JSON level, binary image) or a plain-text
//! diagnostic body. Failures are returned as [`UploadError`] values and
//! rendered inline by the calling screen; nothing here retries or
//! panics.

pub mod decode;
pub mod rotate;

use std::fmt;

/// Form field name both endpoints expect the file under.
pub const UPLOAD_FIELD: &str = "uploaded_file";

/// A file staged for upload: its display name plus the raw bytes.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Per-request failures, surfaced inline in the requesting screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The request never produced an HTTP response.
    Transport(String),
    /// Non-200 response; `body` is the server's raw diagnostic text,
    /// which may be empty.
    Server { status: u16, body: String },
    /// 200 response whose body failed to parse as the documented
    /// payload (JSON for decode, image bytes for rotate).
    Malformed(String),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Transport(msg) => write!(f, "Transport error: {}", msg),
            UploadError::Server { status, body } => {
                write!(f, "Server returned {}: {}", status, body)
            }
            UploadError::Malformed(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

/// Builds the shared HTTP client with explicit redirect policy and
/// user agent.
///
/// # Errors
///
/// Returns the builder's message as [`UploadError::Transport`] when the
/// TLS backend fails to initialize.
pub fn client() -> Result<reqwest::Client, UploadError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("LevelLens/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| UploadError::Transport(e.to_string()))
}

/// Assembles the one-field multipart form both endpoints expect.
fn upload_form(upload: Upload) -> reqwest::multipart::Form {
    let part = reqwest::multipart::Part::bytes(upload.bytes).file_name(upload.file_name);
    reqwest::multipart::Form::new().part(UPLOAD_FIELD, part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_display() {
        let err = UploadError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "Transport error: connection refused");
    }

    #[test]
    fn server_error_display_includes_status_and_body() {
        let err = UploadError::Server {
            status: 500,
            body: "bad qr".into(),
        };
        assert_eq!(err.to_string(), "Server returned 500: bad qr");
    }

    #[test]
    fn server_error_tolerates_empty_body() {
        let err = UploadError::Server {
            status: 404,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "Server returned 404: ");
    }

    #[test]
    fn client_builds() {
        assert!(client().is_ok());
    }
}
