//! Ledger gateways: where the bag ledger is actually stored.
//!
//! The synchronizer works against [`LedgerGateway`], so the engine never
//! knows whether rows live in a CSV workbook or in memory.

pub mod columns;
pub mod error;
pub mod memory;
pub mod traits;
pub mod workbook;

pub use error::{Error, Result};
pub use memory::MemoryLedger;
pub use traits::LedgerGateway;
pub use workbook::CsvWorkbook;
