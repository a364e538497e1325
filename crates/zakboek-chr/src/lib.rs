//! Parsing of CHR deposit statements.
//!
//! A statement is a semicolon-separated text file: one header line carrying
//! the processing date, then detail lines with one counted bag (or crate)
//! each. Bad detail lines are collected, not fatal; a bad header is.

pub mod error;
pub mod parser;
pub mod schema;
pub mod totals;

pub use error::{Error, Result};
pub use parser::{parse_file, parse_text};
pub use schema::{ChrBatch, ChrRecord, LineIssue};
pub use totals::batch_totals;
