// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, Screen};
use crate::ui::navbar;
use iced::Task;
use std::path::PathBuf;

/// Image formats offered by the file dialog. Validation proper happens
/// in the preview module; this just keeps the picker focused.
const IMAGE_FILTER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Decoder(msg) => app.decoder.update(msg).map(Message::Decoder),
        Message::Rotator(msg) => app.rotator.update(msg).map(Message::Rotator),
        Message::Navbar(msg) => match navbar::update(msg) {
            navbar::Event::SwitchScreen(screen) => {
                app.screen = screen;
                Task::none()
            }
            navbar::Event::ChooseFile => open_file_dialog(),
        },
        Message::OpenFileDialogResult(Some(path)) | Message::FileDropped(path) => {
            route_selection(app, path)
        }
        Message::OpenFileDialogResult(None) => Task::none(),
    }
}

/// Opens the native file picker, filtered to image formats.
fn open_file_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", IMAGE_FILTER_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Hands a picked or dropped file to whichever screen is active.
fn route_selection(app: &mut App, path: PathBuf) -> Task<Message> {
    match app.screen {
        Screen::Decode => app.decoder.select_file(path).map(Message::Decoder),
        Screen::Rotate => app.rotator.select_file(path).map(Message::Rotator),
    }
}
