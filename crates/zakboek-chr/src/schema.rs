use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use zakboek_types::{Amount, BagId};

/// CHR statements are semicolon-separated. The first non-blank line is the
/// header; its eighth field carries the processing date as `D-M-YYYY`
/// (day and month without zero padding, e.g. `29-2-2024`).
pub(crate) const FIELD_SEPARATOR: char = ';';
pub(crate) const HEADER_DATE_FIELD: usize = 7;
pub(crate) const HEADER_DATE_FORMAT: &str = "%d-%m-%Y";

/// Detail lines with fewer fields than this are structural noise
/// (footers, counters) and are skipped without comment.
pub(crate) const DETAIL_MIN_FIELDS: usize = 11;
pub(crate) const BAG_ID_FIELD: usize = 5;
pub(crate) const KIND_CODE_FIELD: usize = 8;
pub(crate) const AMOUNT_FIELD: usize = 10;

/// Kind codes ending in `50` after their leading system digit mark crate
/// (container) lines instead of bag lines.
pub(crate) const CRATE_CODE_SUFFIX: &str = "50";

/// One bag's accumulated total within a statement.
///
/// A statement may mention the same bag on several detail lines; those
/// amounts are summed into a single record during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChrRecord {
    pub id: BagId,
    pub amount: Amount,
}

/// A detail line the parser could not use, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineIssue {
    pub line: usize,
    pub reason: String,
}

/// A fully parsed CHR statement.
///
/// `records` holds one entry per bag in order of first appearance;
/// `issues` holds the lines that were dropped, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChrBatch {
    pub processing_date: NaiveDate,
    pub records: Vec<ChrRecord>,
    pub issues: Vec<LineIssue>,
}
