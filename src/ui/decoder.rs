// SPDX-License-Identifier: MPL-2.0
//! Decode screen: preview a selected image, upload it to the decode
//! endpoint, and render the level (or the failure) that comes back.
//!
//! Selecting a file kicks off two independent futures: the local
//! preview read and the upload. They may complete in either order.
//! In-flight requests are never cancelled; when calls overlap, the
//! last completion wins the content area.

use crate::level::{summary, Level};
use crate::net::{self, Upload, UploadError};
use crate::ui::components::error_panel::ErrorPanel;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::level_panel;
use crate::ui::preview;
use iced::widget::{container, image, scrollable, text, Column};
use iced::{Element, Font, Length, Task};
use std::path::PathBuf;

/// Result of the most recent decode request.
#[derive(Debug, Clone)]
enum Outcome {
    /// Nothing uploaded yet.
    Empty,
    /// Upload in flight; the previous content stays visible until the
    /// response lands.
    Uploading,
    /// Level rendered, plus its pretty-printed debug summary.
    Decoded {
        panel: level_panel::State,
        debug_json: String,
    },
    /// Inline error text replacing the info area. May be empty.
    Failed(String),
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A file was chosen via dialog or dropped on the window.
    FileSelected(PathBuf),
    PreviewLoaded(Result<image::Handle, crate::error::Error>),
    DecodeCompleted(Result<Level, UploadError>),
    LevelPanel(level_panel::Message),
}

/// Decode screen state.
#[derive(Debug, Clone)]
pub struct State {
    client: reqwest::Client,
    base_url: String,
    preview: preview::State,
    outcome: Outcome,
    /// Local validation failure, shown without disturbing the preview.
    file_error: Option<String>,
}

impl State {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url,
            preview: preview::State::new(),
            outcome: Outcome::Empty,
            file_error: None,
        }
    }

    /// Validates the selection and, when it is an image, starts the
    /// preview read and the upload as independent tasks.
    ///
    /// An invalid file type leaves the preview and any rendered level
    /// untouched; only the error line changes.
    pub fn select_file(&mut self, path: PathBuf) -> Task<Message> {
        if let Err(err) = preview::validate(&path) {
            log::warn!("rejected selection: {}", err);
            self.file_error = Some(err.to_string());
            return Task::none();
        }

        self.file_error = None;
        self.outcome = Outcome::Uploading;

        let preview_task =
            Task::perform(preview::load(path.clone()), Message::PreviewLoaded);

        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let file_name = preview::display_name(&path);
        let upload_task = Task::perform(
            async move {
                let bytes = tokio::fs::read(&path)
                    .await
                    .map_err(|e| UploadError::Transport(e.to_string()))?;
                net::decode::decode(client, base_url, Upload { file_name, bytes }).await
            },
            Message::DecodeCompleted,
        );

        Task::batch([preview_task, upload_task])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FileSelected(path) => return self.select_file(path),
            Message::PreviewLoaded(Ok(handle)) => self.preview.set_loaded(handle),
            Message::PreviewLoaded(Err(err)) => {
                log::warn!("preview read failed: {}", err);
                self.file_error = Some(err.to_string());
            }
            Message::DecodeCompleted(Ok(level)) => {
                // Summarize after sorting so the debug JSON matches the
                // rendered row order.
                let panel = level_panel::State::new(level);
                let debug_json = summary::summarize(panel.level());
                self.outcome = Outcome::Decoded { panel, debug_json };
            }
            Message::DecodeCompleted(Err(err)) => {
                log::warn!("decode failed: {}", err);
                self.outcome = Outcome::Failed(inline_message(&err));
            }
            Message::LevelPanel(msg) => {
                if let Outcome::Decoded { panel, .. } = &mut self.outcome {
                    panel.update(msg);
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut column = Column::new()
            .spacing(spacing::MD)
            .push(self.preview.view());

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
                column = column.push(text("Decoding…").size(typography::BODY));
            }
            Outcome::Decoded { panel, debug_json } => {
                column = column
                    .push(panel.view_info().map(Message::LevelPanel))
                    .push(panel.view_table().map(Message::LevelPanel))
                    .push(debug_view(debug_json));
            }
            Outcome::Failed(body) => {
                column = column.push(ErrorPanel::new(body.clone()).view());
            }
        }

        scrollable(column.width(Length::Fill).padding(spacing::MD)).into()
    }
}

/// Scrollable monospace rendering of the truncated debug JSON.
fn debug_view(debug_json: &str) -> Element<'_, Message> {
    let pre = text(debug_json)
        .size(typography::CAPTION)
        .font(Font::MONOSPACE);

    container(scrollable(pre).height(Length::Fixed(sizing::IMAGE_PANE)))
        .width(Length::Fill)
        .padding(spacing::SM)
        .into()
}

/// Text shown in the inline error panel for a failed decode.
///
/// Server failures show the raw body verbatim, even when empty; the
/// panel itself must always render.
fn inline_message(err: &UploadError) -> String {
    match err {
        UploadError::Server { body, .. } => body.clone(),
        UploadError::Transport(msg) | UploadError::Malformed(msg) => msg.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{Block, BlockType};

    fn state() -> State {
        State::new(
            reqwest::Client::new(),
            "http://localhost:4567".to_string(),
        )
    }

    fn sample_level() -> Level {
        Level {
            title: "T".into(),
            author: "A".into(),
            raw_data: "R".into(),
            serialized_data: "S".into(),
            data: vec![Block {
                x: 1,
                y: 2,
                z: 0,
                block_type: BlockType {
                    name: "N".into(),
                    value: "v".into(),
                    parent: None,
                },
            }],
        }
    }

    #[test]
    fn invalid_selection_sets_error_and_keeps_outcome() {
        let mut state = state();
        let _ = state.select_file(PathBuf::from("notes.txt"));
        assert!(state.file_error.is_some());
        assert!(matches!(state.outcome, Outcome::Empty));
        assert!(!state.preview.has_image());
    }

    #[test]
    fn successful_decode_renders_level_with_sorted_rows() {
        let mut state = state();
        let _ = state.update(Message::DecodeCompleted(Ok(sample_level())));

        match &state.outcome {
            Outcome::Decoded { panel, debug_json } => {
                let rows = panel.rows();
                assert_eq!(rows.len(), 1);
                assert_eq!(
                    (rows[0].x, rows[0].y, rows[0].z),
                    (1, 2, 0)
                );
                assert_eq!(rows[0].name, "N");
                assert_eq!(rows[0].base_value, "v");
                assert_eq!(rows[0].orientation, "");
                assert!(debug_json.contains("\"title\": \"T\""));
            }
            other => panic!("expected decoded outcome, got {:?}", other),
        }
    }

    #[test]
    fn server_failure_shows_raw_body() {
        let mut state = state();
        let _ = state.update(Message::DecodeCompleted(Err(UploadError::Server {
            status: 500,
            body: "bad qr".into(),
        })));
        assert!(matches!(&state.outcome, Outcome::Failed(body) if body == "bad qr"));
    }

    #[test]
    fn server_failure_with_empty_body_still_fails_inline() {
        let mut state = state();
        let _ = state.update(Message::DecodeCompleted(Err(UploadError::Server {
            status: 500,
            body: String::new(),
        })));
        assert!(matches!(&state.outcome, Outcome::Failed(body) if body.is_empty()));
    }

    #[test]
    fn malformed_response_is_surfaced_not_swallowed() {
        let mut state = state();
        let _ = state.update(Message::DecodeCompleted(Err(UploadError::Malformed(
            "missing field `author`".into(),
        ))));
        assert!(
            matches!(&state.outcome, Outcome::Failed(body) if body.contains("author"))
        );
    }

    #[test]
    fn new_decode_replaces_previous_level() {
        let mut state = state();
        let _ = state.update(Message::DecodeCompleted(Ok(sample_level())));

        let mut second = sample_level();
        second.title = "Second".into();
        let _ = state.update(Message::DecodeCompleted(Ok(second)));

        match &state.outcome {
            Outcome::Decoded { panel, .. } => assert_eq!(panel.level().title, "Second"),
            other => panic!("expected decoded outcome, got {:?}", other),
        }
    }

    #[test]
    fn view_builds_for_every_outcome() {
        let mut state = state();
        let _ = state.view();

        let _ = state.update(Message::DecodeCompleted(Ok(sample_level())));
        let _ = state.view();

        let _ = state.update(Message::DecodeCompleted(Err(UploadError::Transport(
            "connection refused".into(),
        ))));
        let _ = state.view();
    }
}
