use crate::schema::ChrBatch;
use zakboek_types::BatchTotals;

/// Headline figures for a parsed statement.
///
/// Computed from the parse result alone, before any ledger is touched, so
/// totals can be shown even when synchronization later fails.
pub fn batch_totals(batch: &ChrBatch) -> BatchTotals {
    BatchTotals {
        bag_count: batch.records.len(),
        total_amount: batch.records.iter().map(|r| r.amount).sum(),
    }
}
