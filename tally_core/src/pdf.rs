//! # PDF Generation Module
//!
//! Renders the current quote into a styled PDF document using Typst.
//!
//! ## Architecture
//!
//! - The Typst template is embedded as a string constant
//! - Data is injected via string replacement before compilation
//! - Output is raw PDF bytes (`Vec<u8>`)
//!
//! The layout transcribes the tool's house style: pastel lavender page,
//! centered title, dated header, item table with a pink header band and
//! alternating row shading, and a highlighted total block. Typst
//! paginates the table automatically when it runs past the page.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tally_core::pdf::render_quote_pdf;
//! use tally_core::quote::Quote;
//! use tally_core::catalog::{parse_rows, Cell};
//!
//! let mut quote = Quote::new("Luna Cakes", "Maria");
//! quote.load_catalog(parse_rows(vec![
//!     vec![Cell::Text("Bolt".to_string()), Cell::Number(10.0)],
//! ]));
//! quote.increment(0);
//!
//! let pdf_bytes = render_quote_pdf(&quote).unwrap();
//! std::fs::write("Maria.pdf", pdf_bytes).unwrap();
//! ```

use chrono::Utc;
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::errors::{QuoteError, QuoteResult};
use crate::ledger::SelectionEntry;
use crate::quote::Quote;

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling documents without external files.
struct PdfWorld {
    /// The main source document
    main: Source,
    /// Font book
    book: LazyHash<FontBook>,
    /// Available fonts
    fonts: Vec<Font>,
    /// Library (standard functions)
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        let fonts = Self::load_fonts();
        let book = FontBook::from_fonts(&fonts);

        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
        }
    }

    /// Bundled fonts from typst-assets (Libertinus, New Computer Modern, ...)
    fn load_fonts() -> Vec<Font> {
        let mut fonts = Vec::new();
        for font_bytes in typst_assets::fonts() {
            let buffer = Bytes::new(font_bytes.to_vec());
            for font in Font::iter(buffer) {
                fonts.push(font);
            }
        }
        fonts
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(
            now.format("%Y").to_string().parse().ok()?,
            now.format("%m").to_string().parse().ok()?,
            now.format("%d").to_string().parse().ok()?,
        )
    }
}

// ============================================================================
// Quote Template
// ============================================================================

/// Typst template for the exported quote document
const QUOTE_TEMPLATE: &str = r##"
#set page(
  paper: "a4",
  margin: (top: 0.9in, bottom: 0.9in, left: 0.6in, right: 0.6in),
  fill: rgb("#faf0ff"),
)

#set text(font: "Libertinus Serif", size: 11pt)

// Title
#align(center)[
  #text(size: 22pt, weight: "bold", fill: rgb("#7b1fa2"))[{{TITLE}}]
]

#v(6pt)

#align(right)[
  #text(size: 10pt, fill: rgb("#505050"))[Date: {{DATE}}]
]

#v(10pt)

// Item listing: pink header band, alternating lavender row shading
#table(
  columns: (1fr, auto, auto),
  inset: 8pt,
  stroke: none,
  align: (left, center, right),
  fill: (_, y) => if y == 0 {
    rgb("#ffe4f1")
  } else if calc.odd(y) {
    rgb("#f5ebfa")
  },
  table.header(
    [#text(weight: "bold", fill: rgb("#5f0080"))[Item]],
    [#text(weight: "bold", fill: rgb("#5f0080"))[Qty]],
    [#text(weight: "bold", fill: rgb("#5f0080"))[Subtotal]],
  ),
{{ITEM_ROWS}}
)

#v(10pt)
#line(length: 100%, stroke: 0.5pt + rgb("#969696"))
#v(10pt)

// Total block
#align(right)[
  #block(fill: rgb("#e6d2ff"), inset: 10pt, radius: 4pt)[
    #text(size: 14pt, weight: "bold", fill: rgb("#7b1fa2"))[TOTAL: \${{TOTAL}}]
  ]
]
"##;

// ============================================================================
// PDF Rendering
// ============================================================================

/// Render the current quote to PDF.
///
/// Every ledger entry appears exactly once, in the order it was first
/// selected, with its computed subtotal; the document total equals the
/// ledger's total.
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(QuoteError::EmptySelection)` - nothing is selected
/// * `Err(QuoteError::RenderFailed)` - Typst compilation or encoding failed
pub fn render_quote_pdf(quote: &Quote) -> QuoteResult<Vec<u8>> {
    if quote.ledger.is_empty() {
        return Err(QuoteError::EmptySelection);
    }

    let title = if quote.meta.business_name.trim().is_empty() {
        "Quote".to_string()
    } else {
        escape_typst(quote.meta.business_name.trim())
    };

    let source = QUOTE_TEMPLATE
        .replace("{{TITLE}}", &title)
        .replace("{{DATE}}", &Utc::now().format("%Y-%m-%d").to_string())
        .replace("{{ITEM_ROWS}}", &build_item_rows(quote.ledger.entries()))
        .replace("{{TOTAL}}", &format_money(quote.total()));

    let world = PdfWorld::new(source);
    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        QuoteError::render_failed("compile", error_msgs.join("; "))
    })?;

    let pdf_bytes = typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        QuoteError::render_failed("encode", error_msgs.join("; "))
    })?;

    Ok(pdf_bytes)
}

/// Build the table body rows, one per ledger entry in insertion order.
fn build_item_rows(entries: &[SelectionEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "  [{}], [{}], [\\${}],",
                escape_typst(&entry.name),
                entry.quantity,
                format_money(entry.subtotal()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape special Typst characters in user-provided text
fn escape_typst(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '*' => "\\*".to_string(),
            '_' => "\\_".to_string(),
            '#' => "\\#".to_string(),
            '$' => "\\$".to_string(),
            '@' => "\\@".to_string(),
            '<' => "\\<".to_string(),
            '>' => "\\>".to_string(),
            '\\' => "\\\\".to_string(),
            '`' => "\\`".to_string(),
            '[' => "\\[".to_string(),
            ']' => "\\]".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Format a money amount with thousands separators. Whole amounts drop
/// the cents; fractional amounts keep two decimals.
pub fn format_money(value: f64) -> String {
    let cents = (value * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if frac == 0 {
        grouped
    } else {
        format!("{}.{:02}", grouped, frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{parse_rows, Cell};

    fn sample_quote() -> Quote {
        let mut quote = Quote::new("Luna Cakes", "Maria");
        quote.load_catalog(parse_rows(vec![
            vec![Cell::Text("WIDGETS".to_string())],
            vec![Cell::Text("Bolt".to_string()), Cell::Number(10.0)],
            vec![Cell::Text("LED".to_string()), Cell::Number(2.0)],
        ]));
        quote.increment(0);
        quote.increment(0);
        quote.increment(1);
        quote
    }

    #[test]
    fn test_pdf_generation() {
        let pdf = render_quote_pdf(&sample_quote());
        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());

        let pdf_bytes = pdf.unwrap();
        // PDF should start with %PDF
        assert!(pdf_bytes.starts_with(b"%PDF"), "Output is not a valid PDF");
        // Should be a reasonable size (at least 1KB)
        assert!(pdf_bytes.len() > 1000, "PDF seems too small");
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let quote = Quote::default();
        let err = render_quote_pdf(&quote).unwrap_err();
        assert_eq!(err, QuoteError::EmptySelection);
    }

    #[test]
    fn test_blank_business_name_gets_fallback_title() {
        let mut quote = sample_quote();
        quote.set_business_name("  ");
        // Should still compile with the fallback title
        assert!(render_quote_pdf(&quote).is_ok());
    }

    #[test]
    fn test_special_characters_survive_escaping() {
        let mut quote = Quote::new("Bits & Bobs #1 [$ included]", "Buyer");
        quote.load_catalog(parse_rows(vec![vec![
            Cell::Text("M3 bolt *special* <10mm>".to_string()),
            Cell::Number(1.5),
        ]]));
        quote.increment(0);
        assert!(render_quote_pdf(&quote).is_ok());
    }

    #[test]
    fn test_build_item_rows_order_and_subtotals() {
        let quote = sample_quote();
        let rows = build_item_rows(quote.ledger.entries());
        let bolt_pos = rows.find("Bolt").unwrap();
        let led_pos = rows.find("LED").unwrap();
        assert!(bolt_pos < led_pos, "rows must keep insertion order");
        assert!(rows.contains("[2]"), "Bolt quantity");
        assert!(rows.contains("\\$20"), "Bolt subtotal");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0");
        assert_eq!(format_money(22.0), "22");
        assert_eq!(format_money(1234.0), "1,234");
        assert_eq!(format_money(1234567.5), "1,234,567.50");
        assert_eq!(format_money(2.25), "2.25");
    }
}
