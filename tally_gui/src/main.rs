//! # Tally GUI Application
//!
//! Desktop interface for building price quotes from a spreadsheet
//! catalog. Built with Iced; all state lives in one [`tally_core::Quote`]
//! value and every interaction is a [`Message`] handled in [`App::update`].
//!
//! ## Flow
//!
//! Load spreadsheet -> pick quantities with the +/- counters -> export
//! the quote as a PDF named after the buyer.

use iced::widget::column;
use iced::{Element, Length, Task, Theme};

use tally_core::catalog::Catalog;
use tally_core::errors::QuoteError;
use tally_core::quote::Quote;
use tally_core::{read_catalog_bytes, render_quote_pdf};

mod ui;

fn main() -> iced::Result {
    iced::application(App::default, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .run()
}

/// Top-level application state.
#[derive(Default)]
pub struct App {
    /// The one quote session this window edits
    quote: Quote,
    /// Status line shown in the totals bar (load results, errors)
    status: String,
    /// Dark mode toggle
    dark_mode: bool,
}

/// All user interactions and async task completions.
#[derive(Debug, Clone)]
pub enum Message {
    // Name fields
    BusinessNameChanged(String),
    BuyerNameChanged(String),

    // Catalog loading
    PickSpreadsheet,
    /// `None` when the file dialog was cancelled (silent no-op)
    CatalogLoaded(Option<Result<(String, Catalog), QuoteError>>),

    // Selection counters
    Increment(u32),
    Decrement(u32),

    // Export
    ExportPdf,
    /// `None` when the save dialog was cancelled
    PdfSaved(Option<Result<String, QuoteError>>),

    // Appearance
    ToggleDarkMode,
}

impl App {
    fn title(&self) -> String {
        if self.quote.meta.business_name.is_empty() {
            "Tally".to_string()
        } else {
            format!("Tally - {}", self.quote.meta.business_name)
        }
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BusinessNameChanged(value) => {
                self.quote.set_business_name(value);
                Task::none()
            }
            Message::BuyerNameChanged(value) => {
                self.quote.set_buyer_name(value);
                Task::none()
            }

            Message::PickSpreadsheet => {
                // A second pick while one is in flight just races; the
                // last completed load wins.
                Task::perform(pick_and_read_catalog(), Message::CatalogLoaded)
            }
            Message::CatalogLoaded(None) => Task::none(),
            Message::CatalogLoaded(Some(Ok((file_name, catalog)))) => {
                let item_count = catalog.item_count();
                self.quote.load_catalog(catalog);
                self.status = format!("Loaded {} items from {}", item_count, file_name);
                Task::none()
            }
            Message::CatalogLoaded(Some(Err(error))) => {
                self.status = error.to_string();
                Task::none()
            }

            Message::Increment(id) => {
                self.quote.increment(id);
                Task::none()
            }
            Message::Decrement(id) => {
                self.quote.decrement(id);
                Task::none()
            }

            Message::ExportPdf => match render_quote_pdf(&self.quote) {
                Ok(bytes) => {
                    let suggested = self.quote.export_file_name();
                    Task::perform(save_pdf(bytes, suggested), Message::PdfSaved)
                }
                Err(error) => {
                    self.status = error.to_string();
                    Task::none()
                }
            },
            Message::PdfSaved(None) => Task::none(),
            Message::PdfSaved(Some(Ok(path))) => {
                self.status = format!("Exported {}", path);
                Task::none()
            }
            Message::PdfSaved(Some(Err(error))) => {
                self.status = error.to_string();
                Task::none()
            }

            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let can_export = !self.quote.ledger.is_empty();

        column![
            ui::toolbar::view_toolbar(can_export, self.dark_mode),
            ui::quote_info::view(&self.quote.meta),
            ui::catalog_panel::view(&self.quote),
            ui::totals_bar::view_totals_bar(&self.status, self.quote.total()),
        ]
        .spacing(8)
        .padding(8)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

/// Show the open dialog, read the picked workbook, and parse it.
/// Returns `None` when the dialog is cancelled.
async fn pick_and_read_catalog() -> Option<Result<(String, Catalog), QuoteError>> {
    let handle = rfd::AsyncFileDialog::new()
        .add_filter("Spreadsheets", &["xlsx", "xls", "xlsb", "ods"])
        .set_title("Load price catalog")
        .pick_file()
        .await?;

    let bytes = handle.read().await;
    Some(read_catalog_bytes(&bytes).map(|catalog| (handle.file_name(), catalog)))
}

/// Show the save dialog and write the rendered PDF.
/// Returns `None` when the dialog is cancelled.
async fn save_pdf(bytes: Vec<u8>, suggested_name: String) -> Option<Result<String, QuoteError>> {
    let handle = rfd::AsyncFileDialog::new()
        .add_filter("PDF", &["pdf"])
        .set_file_name(&suggested_name)
        .set_title("Export quote")
        .save_file()
        .await?;

    let path = handle.path().display().to_string();
    Some(
        handle
            .write(&bytes)
            .await
            .map(|_| path.clone())
            .map_err(|e| QuoteError::file_error("write", path, e.to_string())),
    )
}
