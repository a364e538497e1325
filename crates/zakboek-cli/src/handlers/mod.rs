pub mod init;
pub mod ledger_list;
pub mod ledger_status;
pub mod process;
pub mod register;
