//! Totals bar (bottom)
//!
//! Displays:
//! - Status messages (load results, export path, errors)
//! - The running total over all selected items

use iced::widget::{container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use tally_core::pdf::format_money;

use crate::Message;

/// Render the totals bar
pub fn view_totals_bar(status: &str, total: f64) -> Element<'_, Message> {
    let bar = row![
        text(status).size(10),
        Space::new().width(Length::Fill),
        text("TOTAL").size(11),
        Space::new().width(8),
        text(format!("${}", format_money(total))).size(24),
    ]
    .align_y(Alignment::Center)
    .padding(Padding::from([4, 8]));

    container(bar)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}
