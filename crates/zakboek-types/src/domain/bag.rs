use crate::domain::money::Amount;
use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique bag number printed on the deposit bag seal.
///
/// Numeric and strictly positive; the ledger is kept sorted on this value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BagId(u64);

impl BagId {
    pub fn new(value: u64) -> Self {
        BagId(value)
    }

    /// Parse a bag number from text. Zero and anything non-numeric are
    /// rejected; zero is the sentinel CHR writes for unreadable seals.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        match text.parse::<u64>() {
            Ok(0) | Err(_) => Err(Error::InvalidId(text.to_string())),
            Ok(value) => Ok(BagId(value)),
        }
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Physical bag format handed out at the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BagType {
    Mini,
    Small,
}

impl BagType {
    pub fn parse(text: &str) -> Result<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "mini" => Ok(BagType::Mini),
            "small" => Ok(BagType::Small),
            other => Err(Error::InvalidType(other.to_string())),
        }
    }

    /// Capitalized form used in workbook cells.
    pub fn as_cell(self) -> &'static str {
        match self {
            BagType::Mini => "Mini",
            BagType::Small => "Small",
        }
    }
}

impl fmt::Display for BagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_cell())
    }
}

/// Where a registered bag was handed in (a branch or drop-off point).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BagSource(String);

impl BagSource {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptySource);
        }
        Ok(BagSource(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BagSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One ledger row: the full lifecycle of a single deposit bag.
///
/// A bag enters the ledger either when it is registered at hand-in (source,
/// type and submission date known; not yet processed) or when it first shows
/// up in a CHR batch (processed with an amount; registration fields empty).
/// The two halves meet when a registered bag is later processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagRecord {
    pub id: BagId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<BagSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bag_type: Option<BagType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_date: Option<NaiveDate>,
    pub processed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
}

impl BagRecord {
    /// Row for a bag registered at hand-in, awaiting processing.
    pub fn pending(
        id: BagId,
        source: BagSource,
        bag_type: BagType,
        submission_date: NaiveDate,
    ) -> Self {
        BagRecord {
            id,
            source: Some(source),
            bag_type: Some(bag_type),
            submission_date: Some(submission_date),
            processed: false,
            processed_date: None,
            amount: None,
        }
    }

    /// Row for a bag first seen in a CHR batch, with no registration half.
    pub fn realized(id: BagId, amount: Amount, processed_date: NaiveDate) -> Self {
        BagRecord {
            id,
            source: None,
            bag_type: None,
            submission_date: None,
            processed: true,
            processed_date: Some(processed_date),
            amount: Some(amount),
        }
    }

    /// Check the processed/amount/date fields agree.
    ///
    /// A processed row must carry both an amount and a processing date; an
    /// unprocessed row must carry neither. Rows violating this are refused
    /// rather than written back.
    pub fn validate(&self) -> Result<()> {
        if self.processed {
            if self.amount.is_none() {
                return Err(Error::Inconsistent(format!(
                    "bag {} marked processed without an amount",
                    self.id
                )));
            }
            if self.processed_date.is_none() {
                return Err(Error::Inconsistent(format!(
                    "bag {} marked processed without a processing date",
                    self.id
                )));
            }
        } else {
            if self.amount.is_some() {
                return Err(Error::Inconsistent(format!(
                    "bag {} carries an amount but is not marked processed",
                    self.id
                )));
            }
            if self.processed_date.is_some() {
                return Err(Error::Inconsistent(format!(
                    "bag {} carries a processing date but is not marked processed",
                    self.id
                )));
            }
        }
        Ok(())
    }
}
