use crate::Result;
use serde::Serialize;
use zakboek_sheet::LedgerGateway;
use zakboek_types::{Amount, BagRecord};

/// Which rows a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LedgerFilter {
    #[default]
    All,
    Pending,
    Processed,
}

impl LedgerFilter {
    fn keeps(self, record: &BagRecord) -> bool {
        match self {
            LedgerFilter::All => true,
            LedgerFilter::Pending => !record.processed,
            LedgerFilter::Processed => record.processed,
        }
    }
}

/// Headline numbers over the whole ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LedgerStats {
    pub total: usize,
    pub pending: usize,
    pub processed: usize,
    /// Sum of all reconciled amounts.
    pub total_amount: Amount,
}

/// Read-only views over the ledger.
pub struct LedgerService<'a> {
    gateway: &'a dyn LedgerGateway,
}

impl<'a> LedgerService<'a> {
    pub fn new(gateway: &'a dyn LedgerGateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, filter: LedgerFilter, limit: Option<usize>) -> Result<Vec<BagRecord>> {
        let rows = self.gateway.read_all()?;
        let filtered = rows.into_iter().filter(|record| filter.keeps(record));
        Ok(match limit {
            Some(limit) => filtered.take(limit).collect(),
            None => filtered.collect(),
        })
    }

    pub fn stats(&self) -> Result<LedgerStats> {
        let rows = self.gateway.read_all()?;
        let mut stats = LedgerStats {
            total: rows.len(),
            ..Default::default()
        };
        for record in &rows {
            if record.processed {
                stats.processed += 1;
            } else {
                stats.pending += 1;
            }
            if let Some(amount) = record.amount {
                stats.total_amount += amount;
            }
        }
        Ok(stats)
    }
}
