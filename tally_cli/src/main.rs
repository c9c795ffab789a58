//! # Tally CLI Application
//!
//! Terminal front-end for building a quote from a spreadsheet catalog.
//! Drives the same `tally_core` state transitions as the GUI: load a
//! workbook, pick quantities by item id, export the PDF.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use tally_core::quote::Quote;
use tally_core::{read_catalog_file, render_quote_pdf};

fn prompt_text(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn main() -> ExitCode {
    println!("Tally CLI - Quote Builder");
    println!("=========================");
    println!();

    let path = match std::env::args().nth(1) {
        Some(p) => p,
        None => {
            eprintln!("Usage: tally_cli <catalog.xlsx>");
            return ExitCode::FAILURE;
        }
    };

    let catalog = match read_catalog_file(Path::new(&path)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let business = prompt_text("Business name (optional): ");
    let buyer = prompt_text("Buyer name (optional): ");

    let mut quote = Quote::new(business, buyer);
    quote.load_catalog(catalog);

    print_catalog(&quote);
    println!();
    println!("Commands: +<id> add one, -<id> remove one, list, total, json, export [file], quit");

    loop {
        let line = prompt_text("> ");
        match line.as_str() {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "list" => print_catalog(&quote),
            "total" => println!("Total: ${:.2}", quote.total()),
            "json" => {
                if let Ok(json) = serde_json::to_string_pretty(&quote) {
                    println!("{}", json);
                }
            }
            cmd if cmd.starts_with('+') => match cmd[1..].trim().parse::<u32>() {
                Ok(id) => {
                    quote.increment(id);
                    print_selection(&quote);
                }
                Err(_) => println!("Expected an item id, e.g. +3"),
            },
            cmd if cmd.starts_with('-') => match cmd[1..].trim().parse::<u32>() {
                Ok(id) => {
                    quote.decrement(id);
                    print_selection(&quote);
                }
                Err(_) => println!("Expected an item id, e.g. -3"),
            },
            cmd if cmd.starts_with("export") => {
                let target = cmd
                    .strip_prefix("export")
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| quote.export_file_name());

                match render_quote_pdf(&quote) {
                    Ok(bytes) => match std::fs::write(&target, &bytes) {
                        Ok(()) => println!("Exported {} ({} bytes)", target, bytes.len()),
                        Err(e) => eprintln!("Error: could not write {}: {}", target, e),
                    },
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            _ => println!("Unknown command: {}", line),
        }
    }

    ExitCode::SUCCESS
}

fn print_catalog(quote: &Quote) {
    println!();
    for section in &quote.catalog.sections {
        println!("═══ {} ═══", section.title);
        for item in &section.items {
            let qty = quote.ledger.quantity(item.id);
            let marker = if qty > 0 {
                format!("  x{}", qty)
            } else {
                String::new()
            };
            println!("  [{}] {} - ${:.2}{}", item.id, item.name, item.price, marker);
        }
    }
    if quote.catalog.is_empty() {
        println!("(catalog is empty - no item rows found)");
    }
}

fn print_selection(quote: &Quote) {
    for entry in quote.ledger.entries() {
        println!("  {} x{} = ${:.2}", entry.name, entry.quantity, entry.subtotal());
    }
    println!("Total: ${:.2}", quote.total());
}
