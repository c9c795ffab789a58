//! UI module for the Tally GUI
//!
//! # Panel Structure
//! - `toolbar` - App header plus Load Spreadsheet / Export PDF actions
//! - `quote_info` - Business and buyer name fields
//! - `catalog_panel` - Scrollable section list with +/- counters per item
//! - `totals_bar` - Bottom bar: status messages and the running total

pub mod catalog_panel;
pub mod quote_info;
pub mod toolbar;
pub mod totals_bar;
