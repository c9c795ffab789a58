//! Quote info fields
//!
//! Business and buyer name inputs. Free text, never validated; the
//! business name titles the exported document and the buyer name names
//! the file.

use iced::widget::{row, text, text_input};
use iced::{Alignment, Element, Length};

use tally_core::quote::QuoteMetadata;

use crate::Message;

/// Render the two name fields side by side
pub fn view(meta: &QuoteMetadata) -> Element<'_, Message> {
    row![
        labeled_input("Business:", &meta.business_name, Message::BusinessNameChanged),
        labeled_input("Buyer:", &meta.buyer_name, Message::BuyerNameChanged),
    ]
    .spacing(12)
    .into()
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(64.0)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
