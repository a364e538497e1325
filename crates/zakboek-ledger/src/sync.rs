use crate::model::{LedgerModel, WriteSet};
use std::collections::HashSet;
use zakboek_types::{BagId, BagRecord, SyncOutcome};

/// Result of merging one batch into the ledger: a verdict per incoming
/// record, in input order, plus the changes to write back.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub outcomes: Vec<SyncOutcome>,
    pub write_set: WriteSet,
}

/// Merge a batch of records into the ledger.
///
/// Evaluated per record, in input order, each record independently; one bad
/// record never takes the batch down. The model itself is not touched; the
/// changes come back as a write set for [`LedgerModel::apply`].
///
/// Per record:
/// - an id already handled earlier in this batch is rejected before the
///   ledger is consulted (first occurrence wins);
/// - a record whose fields disagree (processed without amount and the like)
///   is an error verdict;
/// - an unknown id is inserted at its sorted position;
/// - a counted record landing on a pending row completes that row, keeping
///   the registration fields;
/// - a counted record landing on an already processed row is rejected, so a
///   replayed statement can never overwrite a reconciled amount;
/// - a registration for an id already in the ledger is rejected.
pub fn synchronize(model: &LedgerModel, incoming: &[BagRecord]) -> SyncReport {
    let mut working = model.clone();
    let mut write_set = WriteSet::default();
    let mut outcomes = Vec::with_capacity(incoming.len());
    let mut seen: HashSet<BagId> = HashSet::with_capacity(incoming.len());

    for record in incoming {
        if !seen.insert(record.id) {
            outcomes.push(SyncOutcome::duplicate(record.id, "duplicate id within batch"));
            continue;
        }
        if let Err(err) = record.validate() {
            outcomes.push(SyncOutcome::error(record.id, err.to_string()));
            continue;
        }

        match working.find(record.id) {
            None => {
                let index = working.insertion_index(record.id);
                working.insert(index, record.clone());
                write_set.insertions.push((index, record.clone()));
                outcomes.push(SyncOutcome::inserted(record.id));
            }
            Some(existing) => {
                if !existing.processed && record.processed {
                    let mut merged = existing.clone();
                    merged.processed = true;
                    merged.processed_date = record.processed_date;
                    merged.amount = record.amount;
                    working.replace(merged.clone());
                    write_set.updates.push(merged);
                    outcomes.push(SyncOutcome::updated(record.id));
                } else if existing.processed && record.amount.is_some() {
                    outcomes.push(SyncOutcome::duplicate(record.id, "already processed"));
                } else {
                    outcomes.push(SyncOutcome::duplicate(record.id, "already in ledger"));
                }
            }
        }
    }

    SyncReport {
        outcomes,
        write_set,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use zakboek_types::{Amount, BagSource, BagType, SyncStatus};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn pending(id: u64) -> BagRecord {
        BagRecord::pending(
            BagId::new(id),
            BagSource::new("Hoofdstraat").unwrap(),
            BagType::Mini,
            date(1),
        )
    }

    fn realized(id: u64, cents: u64) -> BagRecord {
        BagRecord::realized(BagId::new(id), Amount::from_cents(cents), date(5))
    }

    #[test]
    fn test_unknown_id_inserted_sorted() {
        let model = LedgerModel::from_snapshot(vec![pending(10), pending(30)]).unwrap();
        let report = synchronize(&model, &[realized(20, 175)]);

        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(report.outcomes[0].status, SyncStatus::Inserted);
        assert_eq!(report.write_set.insertions, vec![(1, realized(20, 175))]);

        let rows = model.apply(&report.write_set);
        let ids: Vec<u64> = rows.iter().map(|row| row.id.value()).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn test_pending_row_completed() {
        let model = LedgerModel::from_snapshot(vec![pending(10)]).unwrap();
        let report = synchronize(&model, &[realized(10, 175)]);

        assert_eq!(report.outcomes[0].status, SyncStatus::Updated);
        let rows = model.apply(&report.write_set);
        let row = &rows[0];
        assert!(row.processed);
        assert_eq!(row.amount, Some(Amount::from_cents(175)));
        assert_eq!(row.processed_date, Some(date(5)));
        // registration half untouched
        assert_eq!(row.source.as_ref().unwrap().as_str(), "Hoofdstraat");
        assert_eq!(row.bag_type, Some(BagType::Mini));
        assert_eq!(row.submission_date, Some(date(1)));
    }

    #[test]
    fn test_processed_row_rejects_recount() {
        let model = LedgerModel::from_snapshot(vec![realized(10, 175)]).unwrap();
        let report = synchronize(&model, &[realized(10, 999)]);

        assert_eq!(report.outcomes[0].status, SyncStatus::DuplicateRejected);
        assert!(report.write_set.is_empty());
        assert_eq!(model.apply(&report.write_set), model.rows());
    }

    #[test]
    fn test_registration_of_known_id_rejected() {
        let model = LedgerModel::from_snapshot(vec![pending(10), realized(20, 100)]).unwrap();
        let report = synchronize(&model, &[pending(10), pending(20)]);

        assert_eq!(report.outcomes[0].status, SyncStatus::DuplicateRejected);
        assert_eq!(report.outcomes[1].status, SyncStatus::DuplicateRejected);
        assert!(report.write_set.is_empty());
    }

    #[test]
    fn test_in_batch_duplicate_first_wins() {
        let model = LedgerModel::from_snapshot(vec![]).unwrap();
        let report = synchronize(&model, &[realized(10, 100), realized(10, 200)]);

        assert_eq!(report.outcomes[0].status, SyncStatus::Inserted);
        assert_eq!(report.outcomes[1].status, SyncStatus::DuplicateRejected);
        assert_eq!(
            report.outcomes[1].detail.as_deref(),
            Some("duplicate id within batch")
        );

        let rows = model.apply(&report.write_set);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, Some(Amount::from_cents(100)));
    }

    #[test]
    fn test_inconsistent_record_is_error_verdict() {
        let model = LedgerModel::from_snapshot(vec![]).unwrap();
        let mut bad = realized(10, 100);
        bad.processed_date = None;
        let report = synchronize(&model, &[bad, realized(20, 50)]);

        assert_eq!(report.outcomes[0].status, SyncStatus::Error);
        assert!(report.outcomes[0].detail.is_some());
        assert_eq!(report.outcomes[1].status, SyncStatus::Inserted);
        assert_eq!(report.write_set.len(), 1);
    }

    #[test]
    fn test_multiple_insertions_keep_positions() {
        let model = LedgerModel::from_snapshot(vec![pending(20)]).unwrap();
        let report = synchronize(
            &model,
            &[realized(30, 300), realized(10, 100), realized(25, 250)],
        );

        let rows = model.apply(&report.write_set);
        let ids: Vec<u64> = rows.iter().map(|row| row.id.value()).collect();
        assert_eq!(ids, vec![10, 20, 25, 30]);
        assert!(report
            .outcomes
            .iter()
            .all(|outcome| outcome.status == SyncStatus::Inserted));
    }

    #[test]
    fn test_outcomes_keep_input_order() {
        let model = LedgerModel::from_snapshot(vec![realized(20, 100)]).unwrap();
        let report = synchronize(
            &model,
            &[realized(30, 300), realized(20, 999), realized(10, 100)],
        );

        let ids: Vec<u64> = report
            .outcomes
            .iter()
            .map(|outcome| outcome.id.value())
            .collect();
        assert_eq!(ids, vec![30, 20, 10]);
    }
}
