use crate::domain::bag::BagId;
use crate::domain::money::Amount;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the synchronizer settled a single bag record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// Bag was new; a row was appended at its sorted position.
    Inserted,
    /// Bag was pending; its row now carries the processing half.
    Updated,
    /// Bag was already accounted for; the record was discarded.
    DuplicateRejected,
    /// Record fields disagree with each other; nothing was written.
    Error,
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SyncStatus::Inserted => "inserted",
            SyncStatus::Updated => "updated",
            SyncStatus::DuplicateRejected => "duplicate",
            SyncStatus::Error => "error",
        };
        f.write_str(label)
    }
}

/// Per-record synchronizer verdict, reported in batch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncOutcome {
    pub id: BagId,
    pub status: SyncStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl SyncOutcome {
    pub fn inserted(id: BagId) -> Self {
        SyncOutcome {
            id,
            status: SyncStatus::Inserted,
            detail: None,
        }
    }

    pub fn updated(id: BagId) -> Self {
        SyncOutcome {
            id,
            status: SyncStatus::Updated,
            detail: None,
        }
    }

    pub fn duplicate(id: BagId, detail: impl Into<String>) -> Self {
        SyncOutcome {
            id,
            status: SyncStatus::DuplicateRejected,
            detail: Some(detail.into()),
        }
    }

    pub fn error(id: BagId, detail: impl Into<String>) -> Self {
        SyncOutcome {
            id,
            status: SyncStatus::Error,
            detail: Some(detail.into()),
        }
    }
}

/// Headline figures for a parsed CHR batch, computed before any ledger work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchTotals {
    pub bag_count: usize,
    pub total_amount: Amount,
}
