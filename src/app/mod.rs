// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the decode and
//! rotate screens.
//!
//! The `App` struct wires the screens to the shared HTTP client and
//! configuration, and translates top-level messages into side effects
//! like file dialogs and uploads. Policy decisions (window sizing,
//! which screen receives a dropped file) stay close to the update loop
//! so user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::net;
use crate::ui::{decoder, rotator};
use iced::{window, Element, Subscription, Task};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 500;
pub const MIN_WINDOW_WIDTH: u32 = 600;

/// Root Iced application state bridging the screens and the shared
/// HTTP client.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    decoder: decoder::State,
    rotator: rotator::State,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait
    // requirement while only consuming flags once (iced 0.14 requires
    // Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally kicks off an
    /// initial decode based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            log::warn!("failed to load config: {}", err);
            config::Config::default()
        });

        let base_url = flags
            .server_url
            .unwrap_or_else(|| config.server_url().to_string());
        log::debug!("using decode service at {}", base_url);

        let client = net::client().unwrap_or_else(|err| {
            log::warn!("falling back to default HTTP client: {}", err);
            reqwest::Client::new()
        });

        let mut app = App {
            screen: Screen::Decode,
            decoder: decoder::State::new(client.clone(), base_url.clone()),
            rotator: rotator::State::new(client, base_url),
        };

        let task = match flags.file_path {
            Some(path) => app
                .decoder
                .select_file(PathBuf::from(path))
                .map(Message::Decoder),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        String::from("Level Lens")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }
}
