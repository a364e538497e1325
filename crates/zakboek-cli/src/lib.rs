mod args;
mod commands;
mod handlers;
pub mod types;

pub use args::{Cli, Commands, LedgerCommand};
pub use commands::run;
