// SPDX-License-Identifier: MPL-2.0
//! Rotate screen: upload an image to the rotation endpoint and swap
//! the returned bitmap into view.
//!
//! The rotated image is held as an `image::Handle`; replacing it (or
//! clearing the screen) drops the previous byte buffer, so the display
//! resource is released on every exit path by ownership.

use crate::net::{self, Upload, UploadError};
use crate::ui::components::error_panel::ErrorPanel;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::preview;
use crate::ui::styles;
use iced::widget::{button, container, image, scrollable, text, Column, Image, Row};
use iced::{Element, Length, Task};
use std::path::PathBuf;

/// Fallback error text when the failure carries no diagnostic body.
const GENERIC_ERROR: &str = "Error rotating level";

/// Quarter turns the rotation endpoint accepts.
pub const ROTATION_CHOICES: [u8; 3] = [1, 2, 3];

#[derive(Debug, Clone)]
enum Outcome {
    Empty,
    Uploading,
    /// Fresh handle backing the rotated image; distinct from any prior
    /// handle.
    Rotated(image::Handle),
    Failed(String),
}

#[derive(Debug, Clone)]
pub enum Message {
    FileSelected(PathBuf),
    PreviewLoaded(Result<image::Handle, crate::error::Error>),
    SetRotations(u8),
    Rotate,
    RotateCompleted(Result<Vec<u8>, UploadError>),
}

/// Rotate screen state.
#[derive(Debug, Clone)]
pub struct State {
    client: reqwest::Client,
    base_url: String,
    preview: preview::State,
    selected: Option<PathBuf>,
    rotations: u8,
    outcome: Outcome,
    file_error: Option<String>,
}

impl State {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url,
            preview: preview::State::new(),
            selected: None,
            rotations: 1,
            outcome: Outcome::Empty,
            file_error: None,
        }
    }

    /// The URL the next rotation request will POST to.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/rotate/{}",
            self.base_url.trim_end_matches('/'),
            self.rotations
        )
    }

    pub fn select_file(&mut self, path: PathBuf) -> Task<Message> {
        if let Err(err) = preview::validate(&path) {
            log::warn!("rejected selection: {}", err);
            self.file_error = Some(err.to_string());
            return Task::none();
        }

        self.file_error = None;
        self.selected = Some(path.clone());
        Task::perform(preview::load(path), Message::PreviewLoaded)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FileSelected(path) => return self.select_file(path),
            Message::PreviewLoaded(Ok(handle)) => self.preview.set_loaded(handle),
            Message::PreviewLoaded(Err(err)) => {
                log::warn!("preview read failed: {}", err);
                self.file_error = Some(err.to_string());
            }
            Message::SetRotations(turns) => {
                if ROTATION_CHOICES.contains(&turns) {
                    self.rotations = turns;
                }
            }
            Message::Rotate => {
                let Some(path) = self.selected.clone() else {
                    return Task::none();
                };
                self.outcome = Outcome::Uploading;

                let client = self.client.clone();
                let url = self.endpoint_url();
                let file_name = preview::display_name(&path);
                return Task::perform(
                    async move {
                        let bytes = tokio::fs::read(&path)
                            .await
                            .map_err(|e| UploadError::Transport(e.to_string()))?;
                        net::rotate::rotate(client, url, Upload { file_name, bytes }).await
                    },
                    Message::RotateCompleted,
                );
            }
            Message::RotateCompleted(Ok(bytes)) => {
                // Swapping the handle releases the previous buffer.
                self.outcome = Outcome::Rotated(image::Handle::from_bytes(bytes));
            }
            Message::RotateCompleted(Err(err)) => {
                log::warn!("rotate failed: {}", err);
                self.outcome = Outcome::Failed(inline_message(&err));
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut column = Column::new()
            .spacing(spacing::MD)
            .push(self.preview.view())
            .push(self.controls());

        if let Some(error) = &self.file_error {
            column = column.push(
                text(error.clone())
                    .size(typography::CAPTION)
                    .color(palette::ERROR_500),
            );
        }

        match &self.outcome {
            Outcome::Empty => {}
            Outcome::Uploading => {
                column = column.push(text("Rotating…").size(typography::BODY));
            }
            Outcome::Rotated(handle) => {
                column = column.push(
                    container(
                        Image::new(handle.clone())
                            .width(Length::Fill)
                            .height(Length::Fixed(sizing::IMAGE_PANE)),
                    )
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .style(styles::container::panel),
                );
            }
            Outcome::Failed(body) => {
                column = column.push(ErrorPanel::new(body.clone()).view());
            }
        }

        scrollable(column.width(Length::Fill).padding(spacing::MD)).into()
    }

    fn controls(&self) -> Element<'_, Message> {
        let mut row = Row::new()
            .spacing(spacing::SM)
            .push(text("Quarter turns:").size(typography::BODY));

        for turns in ROTATION_CHOICES {
            let label = text(turns.to_string()).size(typography::BODY);
            let choice = if turns == self.rotations {
                button(label).style(styles::button::selected)
            } else {
                button(label).on_press(Message::SetRotations(turns))
            };
            row = row.push(choice);
        }

        let rotate_button = if self.selected.is_some() {
            button(text("Rotate").size(typography::BODY))
                .on_press(Message::Rotate)
                .style(styles::button::primary)
        } else {
            button(text("Rotate").size(typography::BODY)).style(styles::button::disabled())
        };

        row.push(rotate_button).into()
    }
}

/// Text shown inline for a failed rotation: the diagnostic body when
/// one exists, otherwise the fixed generic message.
fn inline_message(err: &UploadError) -> String {
    match err {
        UploadError::Server { body, .. } if !body.is_empty() => body.clone(),
        _ => GENERIC_ERROR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn state() -> State {
        State::new(
            reqwest::Client::new(),
            "http://localhost:4567".to_string(),
        )
    }

    #[test]
    fn endpoint_url_includes_rotation_count() {
        let mut state = state();
        assert_eq!(state.endpoint_url(), "http://localhost:4567/rotate/1");

        let _ = state.update(Message::SetRotations(3));
        assert_eq!(state.endpoint_url(), "http://localhost:4567/rotate/3");
    }

    #[test]
    fn out_of_range_rotations_are_ignored() {
        let mut state = state();
        let _ = state.update(Message::SetRotations(7));
        assert_eq!(state.rotations, 1);
    }

    #[test]
    fn invalid_selection_leaves_state_untouched() {
        let mut state = state();
        let _ = state.select_file(PathBuf::from("notes.txt"));
        assert!(state.file_error.is_some());
        assert!(state.selected.is_none());
        assert!(!state.preview.has_image());
    }

    #[test]
    fn rotate_without_selection_is_a_no_op() {
        let mut state = state();
        let _ = state.update(Message::Rotate);
        assert!(matches!(state.outcome, Outcome::Empty));
    }

    #[test]
    fn successful_rotation_swaps_in_a_fresh_handle() {
        let mut state = state();
        let _ = state.update(Message::RotateCompleted(Ok(PNG_MAGIC.to_vec())));
        let first = match &state.outcome {
            Outcome::Rotated(handle) => handle.clone(),
            other => panic!("expected rotated outcome, got {:?}", other),
        };

        let _ = state.update(Message::RotateCompleted(Ok(PNG_MAGIC.to_vec())));
        match &state.outcome {
            Outcome::Rotated(handle) => assert_ne!(handle.id(), first.id()),
            other => panic!("expected rotated outcome, got {:?}", other),
        }
    }

    #[test]
    fn failure_with_body_shows_the_body() {
        let mut state = state();
        let _ = state.update(Message::RotateCompleted(Err(UploadError::Server {
            status: 422,
            body: "no level found".into(),
        })));
        assert!(matches!(&state.outcome, Outcome::Failed(body) if body == "no level found"));
    }

    #[test]
    fn failure_without_body_shows_generic_message() {
        let mut state = state();
        let _ = state.update(Message::RotateCompleted(Err(UploadError::Server {
            status: 500,
            body: String::new(),
        })));
        assert!(matches!(&state.outcome, Outcome::Failed(body) if body == GENERIC_ERROR));

        let _ = state.update(Message::RotateCompleted(Err(UploadError::Transport(
            "connection refused".into(),
        ))));
        assert!(matches!(&state.outcome, Outcome::Failed(body) if body == GENERIC_ERROR));
    }
}
