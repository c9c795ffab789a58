//! Toolbar component
//!
//! App header with the two file operations (Load Spreadsheet, Export PDF)
//! and the dark mode toggle.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the toolbar. The export button is only pressable while at
/// least one item is selected.
pub fn view_toolbar(can_export: bool, dark_mode: bool) -> Element<'static, Message> {
    let file_buttons = row![
        button(text("Load Spreadsheet").size(11))
            .on_press(Message::PickSpreadsheet)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
        button(text("Export PDF").size(11))
            .on_press_maybe(can_export.then_some(Message::ExportPdf))
            .padding(Padding::from([4, 8]))
            .style(button::primary),
    ]
    .spacing(4);

    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };
    let theme_button = button(text(theme_label).size(11))
        .on_press(Message::ToggleDarkMode)
        .padding(Padding::from([4, 8]))
        .style(button::secondary);

    row![
        text("Tally").size(24),
        Space::new().width(12),
        file_buttons,
        Space::new().width(Length::Fill),
        theme_button,
    ]
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
