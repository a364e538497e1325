pub mod config;
pub mod error;
pub mod services;

pub use config::{Config, resolve_data_path};
pub use error::{Error, Result};
pub use services::{
    BatchReport, CodeOutcome, LedgerFilter, LedgerService, LedgerStats, OutcomeCounts,
    ProcessService, RegisterService, find_statements,
};
