use crate::error::Result;
use zakboek_types::BagRecord;

/// Storage boundary for the bag ledger.
///
/// One process owns the workbook at a time; the runtime serializes batches,
/// so implementations never see concurrent writers.
pub trait LedgerGateway {
    /// Read the full ledger, rows in workbook order.
    fn read_all(&self) -> Result<Vec<BagRecord>>;

    /// Replace the full ledger with `rows`, all or nothing.
    ///
    /// Callers pass the complete new sequence; partial writes must never
    /// become visible, even across a crash.
    fn write_all(&self, rows: &[BagRecord]) -> Result<()>;
}
