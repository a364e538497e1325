use crate::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zakboek_chr::{ChrBatch, LineIssue};
use zakboek_ledger::{LedgerModel, synchronize};
use zakboek_sheet::LedgerGateway;
use zakboek_types::{BagRecord, BatchTotals, SyncOutcome, SyncStatus};

/// Everything one processed statement produced, for rendering or JSON.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Statement file, when the batch came from disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    pub processing_date: chrono::NaiveDate,
    pub totals: BatchTotals,
    /// Detail lines the parser had to drop.
    pub issues: Vec<LineIssue>,
    /// Synchronizer verdicts in statement order.
    pub outcomes: Vec<SyncOutcome>,
}

/// Outcome tallies for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub inserted: usize,
    pub updated: usize,
    pub duplicates: usize,
    pub errors: usize,
}

impl BatchReport {
    pub fn counts(&self) -> OutcomeCounts {
        let mut counts = OutcomeCounts::default();
        for outcome in &self.outcomes {
            match outcome.status {
                SyncStatus::Inserted => counts.inserted += 1,
                SyncStatus::Updated => counts.updated += 1,
                SyncStatus::DuplicateRejected => counts.duplicates += 1,
                SyncStatus::Error => counts.errors += 1,
            }
        }
        counts
    }
}

/// Runs one statement through parse, merge and write-back.
///
/// The read-merge-write cycle is not isolated; overlapping runs against the
/// same workbook are last-writer-wins per batch.
pub struct ProcessService<'a> {
    gateway: &'a dyn LedgerGateway,
}

impl<'a> ProcessService<'a> {
    pub fn new(gateway: &'a dyn LedgerGateway) -> Self {
        Self { gateway }
    }

    pub fn process_file(&self, path: &Path) -> Result<BatchReport> {
        let batch = zakboek_chr::parse_file(path)?;
        let mut report = self.run_batch(batch)?;
        report.source = Some(path.to_path_buf());
        Ok(report)
    }

    pub fn process_text(&self, payload: &str) -> Result<BatchReport> {
        let batch = zakboek_chr::parse_text(payload)?;
        self.run_batch(batch)
    }

    /// Merge one parsed batch into the ledger.
    ///
    /// Rejected and errored records are part of a normal report; only a
    /// failed gateway read/write or a broken snapshot aborts. The write is
    /// skipped entirely when the batch changed nothing, so a replayed
    /// statement never rewrites an unchanged workbook.
    fn run_batch(&self, batch: ChrBatch) -> Result<BatchReport> {
        let totals = zakboek_chr::batch_totals(&batch);
        let incoming: Vec<BagRecord> = batch
            .records
            .iter()
            .map(|record| BagRecord::realized(record.id, record.amount, batch.processing_date))
            .collect();

        let snapshot = self.gateway.read_all()?;
        let model = LedgerModel::from_snapshot(snapshot)?;
        let report = synchronize(&model, &incoming);

        if !report.write_set.is_empty() {
            let rows = model.apply(&report.write_set);
            self.gateway.write_all(&rows)?;
        }

        Ok(BatchReport {
            source: None,
            processing_date: batch.processing_date,
            totals,
            issues: batch.issues,
            outcomes: report.outcomes,
        })
    }
}

/// Statement files under `path`, each to be processed as its own batch.
///
/// A file is taken as-is; a directory is walked for `*.chr` files, sorted
/// by path so runs are reproducible.
pub fn find_statements(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(Error::InvalidOperation(format!(
            "{} is neither a file nor a directory",
            path.display()
        )));
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(path) {
        let entry = entry.map_err(|err| Error::Io(err.into()))?;
        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("chr"))
        {
            found.push(entry.into_path());
        }
    }
    found.sort();
    Ok(found)
}
