// SPDX-License-Identifier: MPL-2.0
//! Local image preview: validate a selected file and render it inline.
//!
//! The preview never touches the network. Once the file's bytes are
//! read they back a self-contained [`image::Handle`], so no further
//! filesystem access happens on re-render.

use crate::error::{Error, Result};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{container, image, text, Image};
use iced::{Element, Length};
use std::path::{Path, PathBuf};

/// Checks that the file's extension maps to a known raster image
/// format before anything else happens.
///
/// # Errors
///
/// Returns [`Error::InvalidFileType`] for unknown extensions. The
/// caller must leave its preview state untouched in that case.
pub fn validate(path: &Path) -> Result<()> {
    image_rs::ImageFormat::from_path(path)
        .map(|_| ())
        .map_err(|_| Error::InvalidFileType(display_name(path)))
}

/// Reads the file and wraps its bytes in a display handle.
///
/// Runs on the async runtime; the preview image is swapped in only
/// once this read completes.
pub async fn load(path: PathBuf) -> Result<image::Handle> {
    let bytes = tokio::fs::read(&path).await?;
    Ok(image::Handle::from_bytes(bytes))
}

/// File name shown in errors and upload forms.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Preview pane state: the currently displayed image, if any.
#[derive(Debug, Clone, Default)]
pub struct State {
    handle: Option<image::Handle>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any prior preview with the freshly loaded image.
    pub fn set_loaded(&mut self, handle: image::Handle) {
        self.handle = Some(handle);
    }

    pub fn clear(&mut self) {
        self.handle = None;
    }

    pub fn has_image(&self) -> bool {
        self.handle.is_some()
    }

    /// Renders the preview image, or a hint while nothing is selected.
    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        let content: Element<'a, Message> = match &self.handle {
            Some(handle) => Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::IMAGE_PANE))
                .into(),
            None => text("Select or drop an image to begin")
                .size(typography::CAPTION)
                .into(),
        };

        container(content)
            .width(Length::Fill)
            .padding(spacing::SM)
            .into()
    }
}
