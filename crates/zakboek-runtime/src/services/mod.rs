pub mod ledger;
pub mod process;
pub mod register;

pub use ledger::{LedgerFilter, LedgerService, LedgerStats};
pub use process::{BatchReport, OutcomeCounts, ProcessService, find_statements};
pub use register::{CodeOutcome, RegisterService};
