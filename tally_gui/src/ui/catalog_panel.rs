//! Catalog panel
//!
//! Scrollable list of sections, each with its items and a -/count/+
//! counter per item. Items with a non-zero quantity also show their
//! running subtotal.

use iced::widget::{button, column, container, row, rule, scrollable, text, Column};
use iced::{Alignment, Element, Length, Padding};

use tally_core::catalog::CatalogItem;
use tally_core::pdf::format_money;
use tally_core::quote::Quote;

use crate::Message;

/// Render the catalog panel (fills the space between the name fields
/// and the totals bar)
pub fn view(quote: &Quote) -> Element<'_, Message> {
    let mut content: Column<'_, Message> = column![].spacing(10);

    if quote.catalog.is_empty() {
        content = content.push(
            text("No catalog loaded. Use 'Load Spreadsheet' to pick a price list.")
                .size(11)
                .color([0.5, 0.5, 0.5]),
        );
    }

    for section in &quote.catalog.sections {
        let mut items: Column<'_, Message> = column![].spacing(2);
        for item in &section.items {
            items = items.push(view_item_row(item, quote.ledger.quantity(item.id)));
        }

        content = content.push(
            column![
                text(&section.title).size(11).color([0.45, 0.3, 0.6]),
                rule::horizontal(1),
                items,
            ]
            .spacing(4),
        );
    }

    container(scrollable(content.padding(8)).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(4)
        .into()
}

/// One item row: name (plus subtotal when selected) and the counter.
fn view_item_row(item: &CatalogItem, quantity: u32) -> Element<'_, Message> {
    let mut info: Column<'_, Message> = column![text(&item.name).size(11)].spacing(1);
    if quantity > 0 {
        info = info.push(
            text(format!("${}", format_money(item.price * quantity as f64)))
                .size(11)
                .color([0.1, 0.55, 0.35]),
        );
    }

    let counter = row![
        button(text("-").size(12))
            .on_press(Message::Decrement(item.id))
            .padding(Padding::from([2, 10]))
            .style(button::danger),
        container(text(quantity.to_string()).size(12))
            .width(Length::Fixed(28.0))
            .align_x(iced::alignment::Horizontal::Center),
        button(text("+").size(12))
            .on_press(Message::Increment(item.id))
            .padding(Padding::from([2, 10]))
            .style(button::success),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    row![
        info.width(Length::Fill),
        counter,
    ]
    .padding(Padding::from([3, 4]))
    .align_y(Alignment::Center)
    .into()
}
