// SPDX-License-Identifier: MPL-2.0
//! Renders a decoded level: title, author, payload disclosure panels,
//! and the block table.
//!
//! The panel owns its `Level` for one decode cycle; a new upload
//! replaces the whole state, and with it the rendered subtree.

use crate::level::{self, BlockRow, Level};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::disclosure::{self, disclosure};
use crate::ui::styles;
use iced::widget::{container, text, Column, Row};
use iced::{Element, Length};

/// Disclosure panels on the level info area. Ids are unique within the
/// screen; they key the expansion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    RawData,
    UncompressedData,
}

/// Messages emitted by the level panel.
#[derive(Debug, Clone)]
pub enum Message {
    TogglePanel(PanelId),
}

/// Rendered-level state: the level itself plus derived table rows and
/// panel expansion.
#[derive(Debug, Clone)]
pub struct State {
    level: Level,
    rows: Vec<BlockRow>,
    panels: disclosure::State<PanelId>,
}

impl State {
    /// Takes ownership of a freshly parsed level, sorts its blocks in
    /// place, and derives the table rows.
    pub fn new(mut level: Level) -> Self {
        level.sort_blocks();
        let rows = level::table_rows(&level);
        Self {
            level,
            rows,
            panels: disclosure::State::new(),
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::TogglePanel(id) => self.panels.toggle(id),
        }
    }

    /// Table rows in render order.
    pub fn rows(&self) -> &[BlockRow] {
        &self.rows
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Renders title, author, and the two payload disclosures.
    pub fn view_info(&self) -> Element<'_, Message> {
        let raw_panel = disclosure(
            "Show QR code data",
            &self.level.raw_data,
            self.panels.is_expanded(PanelId::RawData),
            Message::TogglePanel(PanelId::RawData),
        );
        let uncompressed_panel = disclosure(
            "Show uncompressed data",
            &self.level.serialized_data,
            self.panels.is_expanded(PanelId::UncompressedData),
            Message::TogglePanel(PanelId::UncompressedData),
        );

        let column = Column::new()
            .spacing(spacing::SM)
            .push(text(&self.level.title).size(typography::TITLE_LG))
            .push(text(&self.level.author).size(typography::TITLE_MD))
            .push(raw_panel)
            .push(uncompressed_panel);

        container(column)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::panel)
            .into()
    }

    /// Renders the block table: a header row plus one row per block in
    /// sorted order.
    pub fn view_table(&self) -> Element<'_, Message> {
        let mut column = Column::new().spacing(spacing::XXS).push(header_row());

        for (index, row) in self.rows.iter().enumerate() {
            column = column.push(block_row(row, index % 2 == 0));
        }

        container(column)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::panel)
            .into()
    }
}

fn header_row<'a>() -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(header_cell("x", sizing::TABLE_COORD_COL))
        .push(header_cell("y", sizing::TABLE_COORD_COL))
        .push(header_cell("z", sizing::TABLE_COORD_COL))
        .push(header_cell("Type", sizing::TABLE_NAME_COL))
        .push(header_cell("Value", sizing::TABLE_VALUE_COL))
        .push(header_cell("Orientation", sizing::TABLE_VALUE_COL))
        .into()
}

fn header_cell<'a>(label: &'a str, width: f32) -> Element<'a, Message> {
    text(label)
        .size(typography::TITLE_SM)
        .width(Length::Fixed(width))
        .into()
}

fn block_row(row: &BlockRow, even: bool) -> Element<'_, Message> {
    let cells = Row::new()
        .spacing(spacing::SM)
        .push(cell(row.x.to_string(), sizing::TABLE_COORD_COL))
        .push(cell(row.y.to_string(), sizing::TABLE_COORD_COL))
        .push(cell(row.z.to_string(), sizing::TABLE_COORD_COL))
        .push(cell(row.name.clone(), sizing::TABLE_NAME_COL))
        .push(cell(row.base_value.clone(), sizing::TABLE_VALUE_COL))
        .push(cell(row.orientation.clone(), sizing::TABLE_VALUE_COL));

    container(cells)
        .width(Length::Fill)
        .padding([spacing::XXS, 0.0])
        .style(styles::container::table_row(even))
        .into()
}

fn cell<'a>(value: String, width: f32) -> Element<'a, Message> {
    text(value)
        .size(typography::BODY)
        .width(Length::Fixed(width))
        .into()
}
