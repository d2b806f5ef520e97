// SPDX-License-Identifier: MPL-2.0
//! Inline error panel with consistent styling.
//!
//! Shown in place of a screen's content area after a failed request.
//! The body is whatever diagnostic text the failure carried, often a
//! raw server body, sometimes empty. An empty body still renders a
//! visible panel; the failure must never be silent.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{container, text, Column};
use iced::{Element, Length};

/// Configuration for an inline error panel.
#[derive(Debug, Clone)]
pub struct ErrorPanel {
    title: Option<String>,
    body: String,
}

impl ErrorPanel {
    /// Creates a panel showing `body` as literal text.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            title: None,
            body: body.into(),
        }
    }

    /// Adds a short heading above the diagnostic text.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Renders the panel. Never fails, even for empty bodies.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let mut column = Column::new().spacing(spacing::XS);

        if let Some(title) = self.title {
            column = column.push(text(title).size(typography::TITLE_SM));
        }

        column = column.push(text(self.body).size(typography::BODY));

        container(column)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::error_panel)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_still_builds_a_panel() {
        let panel = ErrorPanel::new("");
        let _element: Element<'_, ()> = panel.view();
    }

    #[test]
    fn title_is_retained() {
        let panel = ErrorPanel::new("bad qr").title("Decoding failed");
        assert_eq!(panel.title.as_deref(), Some("Decoding failed"));
        assert_eq!(panel.body, "bad qr");
    }
}
