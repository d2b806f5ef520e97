// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::decoder;
use crate::ui::navbar;
use crate::ui::rotator;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update
/// entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Decoder(decoder::Message),
    Rotator(rotator::Message),
    Navbar(navbar::Message),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional decode-service base URL overriding the configured one
    /// for this run.
    pub server_url: Option<String>,
    /// Optional image path to preload and decode on startup.
    pub file_path: Option<String>,
}
