// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only window file-drop events are routed; everything else reaches
//! the widgets through the normal event path.

use super::Message;
use iced::{event, Subscription};

/// Listens for files dropped on the window. The active screen decides
/// what to do with the path.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
            return Some(Message::FileDropped(path.clone()));
        }
        None
    })
}
