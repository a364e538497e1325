// Ledger engine - pure merge logic between parsed statements and the
// workbook snapshot. No IO here; gateways live in zakboek-sheet.

pub mod model;
pub mod sync;

pub use model::{LedgerModel, WriteSet};
pub use sync::{SyncReport, synchronize};
