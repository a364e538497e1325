use crate::{Error, Result};
use chrono::NaiveDate;
use serde::Serialize;
use zakboek_ledger::{LedgerModel, synchronize};
use zakboek_sheet::LedgerGateway;
use zakboek_types::{BagId, BagRecord, BagSource, BagType, SyncStatus};

/// Verdict for one submitted code, in submission order.
///
/// Unlike a statement record, a submitted code may not even be a bag
/// number; `id` is only present once the code normalized cleanly.
#[derive(Debug, Clone, Serialize)]
pub struct CodeOutcome {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<BagId>,
    pub status: SyncStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Registers handed-in bags ahead of their CHR statement.
pub struct RegisterService<'a> {
    gateway: &'a dyn LedgerGateway,
    barcode_prefix: String,
}

impl<'a> RegisterService<'a> {
    pub fn new(gateway: &'a dyn LedgerGateway, barcode_prefix: impl Into<String>) -> Self {
        Self {
            gateway,
            barcode_prefix: barcode_prefix.into(),
        }
    }

    /// Strip the label prefix a scanner includes in front of the bag number.
    fn normalize(&self, code: &str) -> zakboek_types::Result<BagId> {
        let code = code.trim();
        let digits = match code.strip_prefix(self.barcode_prefix.as_str()) {
            Some(rest) if !rest.is_empty() => rest,
            _ => code,
        };
        BagId::parse(digits)
    }

    /// Register a submission of codes as pending rows.
    ///
    /// One unreadable code, or one code already in the ledger, never sinks
    /// the rest of the submission; each code gets its own verdict. The
    /// whole submission shares one source, type and hand-in date.
    pub fn register(
        &self,
        codes: &[String],
        source: &str,
        bag_type: BagType,
        submission_date: NaiveDate,
    ) -> Result<Vec<CodeOutcome>> {
        let source =
            BagSource::new(source).map_err(|err| Error::InvalidOperation(err.to_string()))?;

        // normalize first; only clean codes reach the synchronizer
        let mut parsed: Vec<Option<BagId>> = Vec::with_capacity(codes.len());
        let mut failures: Vec<Option<String>> = Vec::with_capacity(codes.len());
        let mut incoming: Vec<BagRecord> = Vec::new();
        for code in codes {
            match self.normalize(code) {
                Ok(id) => {
                    parsed.push(Some(id));
                    failures.push(None);
                    incoming.push(BagRecord::pending(
                        id,
                        source.clone(),
                        bag_type,
                        submission_date,
                    ));
                }
                Err(err) => {
                    parsed.push(None);
                    failures.push(Some(err.to_string()));
                }
            }
        }

        let snapshot = self.gateway.read_all()?;
        let model = LedgerModel::from_snapshot(snapshot)?;
        let report = synchronize(&model, &incoming);

        if !report.write_set.is_empty() {
            let rows = model.apply(&report.write_set);
            self.gateway.write_all(&rows)?;
        }

        // stitch verdicts back onto the submitted codes, in order
        let mut sync_outcomes = report.outcomes.into_iter();
        let mut outcomes = Vec::with_capacity(codes.len());
        for (index, code) in codes.iter().enumerate() {
            match parsed[index] {
                Some(id) => {
                    let verdict = sync_outcomes.next().ok_or_else(|| {
                        Error::InvalidOperation("synchronizer dropped a record".to_string())
                    })?;
                    outcomes.push(CodeOutcome {
                        code: code.clone(),
                        id: Some(id),
                        status: verdict.status,
                        detail: verdict.detail,
                    });
                }
                None => outcomes.push(CodeOutcome {
                    code: code.clone(),
                    id: None,
                    status: SyncStatus::Error,
                    detail: failures[index].clone(),
                }),
            }
        }
        Ok(outcomes)
    }
}
