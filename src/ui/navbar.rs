// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar: screen tabs plus the file picker button.

use crate::app::Screen;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text, Container, Row},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub screen: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    SwitchScreen(Screen),
    ChooseFile,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    SwitchScreen(Screen),
    ChooseFile,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::SwitchScreen(screen) => Event::SwitchScreen(screen),
        Message::ChooseFile => Event::ChooseFile,
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext) -> Element<'static, Message> {
    let decode_tab = tab("Decode", Screen::Decode, ctx.screen);
    let rotate_tab = tab("Rotate", Screen::Rotate, ctx.screen);

    let choose_button = button(text("Choose image…").size(typography::BODY))
        .on_press(Message::ChooseFile)
        .style(styles::button::primary);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(decode_tab)
        .push(rotate_tab)
        .push(choose_button);

    Container::new(row).width(Length::Fill).into()
}

fn tab(label: &str, target: Screen, current: Screen) -> Element<'static, Message> {
    let label = text(label.to_string()).size(typography::BODY);
    if target == current {
        button(label).style(styles::button::selected).into()
    } else {
        button(label)
            .on_press(Message::SwitchScreen(target))
            .into()
    }
}
