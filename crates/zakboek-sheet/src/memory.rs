use crate::error::{Error, Result};
use crate::traits::LedgerGateway;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use zakboek_types::BagRecord;

/// In-memory ledger gateway for tests and fixtures.
///
/// Behaves like a workbook that always round-trips cleanly, and can be
/// armed to fail its next write for gateway-failure scenarios.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    rows: Mutex<Vec<BagRecord>>,
    fail_next_write: AtomicBool,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<BagRecord>) -> Self {
        MemoryLedger {
            rows: Mutex::new(rows),
            fail_next_write: AtomicBool::new(false),
        }
    }

    /// Make the next `write_all` fail without touching the stored rows.
    pub fn fail_next_write(&self) {
        self.fail_next_write.store(true, Ordering::SeqCst);
    }

    /// Current stored rows, outside the gateway contract.
    pub fn rows(&self) -> Vec<BagRecord> {
        match self.rows.lock() {
            Ok(rows) => rows.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl LedgerGateway for MemoryLedger {
    fn read_all(&self) -> Result<Vec<BagRecord>> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| Error::Unavailable("ledger lock poisoned".to_string()))?;
        Ok(rows.clone())
    }

    fn write_all(&self, new_rows: &[BagRecord]) -> Result<()> {
        if self.fail_next_write.swap(false, Ordering::SeqCst) {
            return Err(Error::Unavailable("injected write failure".to_string()));
        }
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| Error::Unavailable("ledger lock poisoned".to_string()))?;
        *rows = new_rows.to_vec();
        Ok(())
    }
}
