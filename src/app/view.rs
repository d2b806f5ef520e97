// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message, Screen};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Renders the navbar above the active screen's content.
pub fn view(app: &App) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext { screen: app.screen }).map(Message::Navbar);

    let screen_view: Element<'_, Message> = match app.screen {
        Screen::Decode => app.decoder.view().map(Message::Decoder),
        Screen::Rotate => app.rotator.view().map(Message::Rotator),
    };

    let column = Column::new().push(navbar_view).push(
        Container::new(screen_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
