use crate::error::{Error, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Monetary amount in whole euro-cents.
///
/// Deposit amounts are non-negative and at most two decimals; integer cents
/// keep batch sums exact where floats would drift.
///
/// Two parse conventions exist and are never mixed:
/// - [`Amount::parse_chr`] — CHR files use a comma separator (`"1,50"`);
/// - [`Amount::parse_cell`] — workbook cells use a dot separator (`"1.50"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn from_cents(cents: u64) -> Self {
        Amount(cents)
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    /// Parse an amount in the CHR convention: comma as decimal separator.
    ///
    /// A dot anywhere in the text is rejected rather than silently accepted,
    /// so a mis-exported file fails loudly instead of shifting amounts.
    pub fn parse_chr(text: &str) -> Result<Self> {
        if text.contains('.') {
            return Err(Error::InvalidAmount(text.to_string()));
        }
        parse_decimal(text, ',').ok_or_else(|| Error::InvalidAmount(text.to_string()))
    }

    /// Parse an amount in the workbook convention: dot as decimal separator.
    pub fn parse_cell(text: &str) -> Result<Self> {
        if text.contains(',') {
            return Err(Error::InvalidAmount(text.to_string()));
        }
        parse_decimal(text, '.').ok_or_else(|| Error::InvalidAmount(text.to_string()))
    }
}

/// Parse `"<whole><sep><frac>"` into cents. Fraction is 0-2 digits; sign,
/// grouping and empty input are all rejected.
fn parse_decimal(text: &str, separator: char) -> Option<Amount> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let (whole, frac) = match text.split_once(separator) {
        Some((w, f)) => (w, f),
        None => (text, ""),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let whole: u64 = whole.parse().ok()?;
    let frac_cents = match frac.len() {
        0 => 0,
        1 => frac.parse::<u64>().ok()? * 10,
        _ => frac.parse::<u64>().ok()?,
    };

    whole
        .checked_mul(100)
        .and_then(|c| c.checked_add(frac_cents))
        .map(Amount)
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 += rhs.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Amount {
        iter.copied().sum()
    }
}

// Serialized as the cell form ("1.50") so JSON output and workbook cells
// agree on one canonical rendering.
impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Amount::parse_cell(&text).map_err(D::Error::custom)
    }
}
