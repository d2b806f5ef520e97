// SPDX-License-Identifier: MPL-2.0
//! Generic disclosure (show/hide) panels for arbitrary text content.
//!
//! A disclosure pairs a header toggle with a body region holding
//! literal text. Panels are closed by default. Construction is pure:
//! [`disclosure`] returns a detached element tree and the expansion
//! state lives in the caller's [`State`], keyed by a panel id that must
//! be unique within the owning screen.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Row, Text};
use iced::{alignment::Vertical, Element, Length};
use std::collections::HashSet;
use std::hash::Hash;

/// Expansion state for a set of disclosure panels, keyed by id.
#[derive(Debug, Clone)]
pub struct State<Id> {
    expanded: HashSet<Id>,
}

impl<Id: Copy + Eq + Hash> State<Id> {
    /// All panels collapsed.
    pub fn new() -> Self {
        Self {
            expanded: HashSet::new(),
        }
    }

    pub fn is_expanded(&self, id: Id) -> bool {
        self.expanded.contains(&id)
    }

    pub fn toggle(&mut self, id: Id) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }
}

impl<Id: Copy + Eq + Hash> Default for State<Id> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a disclosure panel.
///
/// `body` is rendered as plain text, never interpreted as markup, so
/// panel content originating from a server payload cannot inject UI.
pub fn disclosure<'a, Message: Clone + 'a>(
    header: &str,
    body: &'a str,
    expanded: bool,
    on_toggle: Message,
) -> Element<'a, Message> {
    let indicator = Text::new(if expanded { "▼" } else { "▶" }).size(typography::BODY);

    let header_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(indicator)
        .push(Text::new(header.to_string()).size(typography::BODY));

    let toggle = button(header_row)
        .on_press(on_toggle)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::button::disclosure_header);

    let mut column = Column::new().spacing(spacing::XXS).push(toggle);

    if expanded {
        let content = container(text(body).size(typography::BODY))
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::container::disclosure_body);
        column = column.push(content);
    }

    column.into()
}
