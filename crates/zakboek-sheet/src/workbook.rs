use crate::columns::{self, HEADERS};
use crate::error::{Error, Result};
use crate::traits::LedgerGateway;
use std::fs::File;
use std::path::{Path, PathBuf};
use zakboek_types::BagRecord;

/// Ledger gateway over a single CSV workbook file.
pub struct CsvWorkbook {
    path: PathBuf,
}

impl CsvWorkbook {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvWorkbook { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an empty ledger (header row only) unless the workbook exists.
    ///
    /// Returns whether a new workbook was created.
    pub fn create_if_missing(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.write_rows(&[])?;
        Ok(true)
    }

    fn write_rows(&self, rows: &[BagRecord]) -> Result<()> {
        let tmp_path = self.path.with_extension("tmp");
        if tmp_path.exists() {
            std::fs::remove_file(&tmp_path)?;
        }
        let file = File::create(&tmp_path)
            .map_err(|err| Error::Unavailable(format!("{}: {}", tmp_path.display(), err)))?;

        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(HEADERS)?;
        for record in rows {
            writer.write_record(columns::record_to_row(record))?;
        }
        writer.flush()?;
        drop(writer);

        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl LedgerGateway for CsvWorkbook {
    /// Read the workbook, verifying header, every cell, and row order.
    ///
    /// The first bad row fails the read; a half-usable snapshot would let a
    /// later write silently drop the rows that did not parse.
    fn read_all(&self) -> Result<Vec<BagRecord>> {
        let file = File::open(&self.path)
            .map_err(|err| Error::Unavailable(format!("{}: {}", self.path.display(), err)))?;
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

        let headers = reader.headers()?.clone();
        if headers.iter().ne(HEADERS) {
            return Err(Error::SchemaMismatch(format!(
                "header row is {:?}, expected {:?}",
                headers.iter().collect::<Vec<_>>(),
                HEADERS
            )));
        }

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let row = result?;
            let cells: Vec<&str> = row.iter().collect();
            // header is row 1, first data row is row 2
            rows.push(columns::row_to_record(&cells, index + 2)?);
        }

        for pair in rows.windows(2) {
            if pair[0].id >= pair[1].id {
                return Err(Error::SchemaMismatch(format!(
                    "rows out of order: bag {} precedes bag {}",
                    pair[0].id, pair[1].id
                )));
            }
        }
        Ok(rows)
    }

    /// Replace the workbook via a sibling temp file and a rename, so a
    /// crash mid-write leaves the previous ledger intact.
    fn write_all(&self, rows: &[BagRecord]) -> Result<()> {
        self.write_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use zakboek_types::{Amount, BagId, BagSource, BagType};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn workbook_in(dir: &tempfile::TempDir) -> CsvWorkbook {
        CsvWorkbook::new(dir.path().join("zakboek.csv"))
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let workbook = workbook_in(&dir);

        let rows = vec![
            BagRecord::pending(
                BagId::new(10),
                BagSource::new("Hoofdstraat").unwrap(),
                BagType::Mini,
                date(1),
            ),
            BagRecord::realized(BagId::new(20), Amount::from_cents(175), date(5)),
        ];
        workbook.write_all(&rows).unwrap();

        assert_eq!(workbook.read_all().unwrap(), rows);
        assert!(!workbook.path().with_extension("tmp").exists());
    }

    #[test]
    fn test_missing_workbook_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = workbook_in(&dir).read_all().unwrap_err();
        assert!(matches!(err, Error::Unavailable(_)));
    }

    #[test]
    fn test_write_into_missing_directory_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let workbook = CsvWorkbook::new(dir.path().join("nope").join("zakboek.csv"));
        let err = workbook.write_all(&[]).unwrap_err();
        assert!(matches!(err, Error::Unavailable(_)));
    }

    #[test]
    fn test_foreign_header_is_schema_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let workbook = workbook_in(&dir);
        let mut file = File::create(workbook.path()).unwrap();
        writeln!(file, "Id,Amount").unwrap();
        writeln!(file, "1,2.50").unwrap();
        drop(file);

        let err = workbook.read_all().unwrap_err();
        assert!(matches!(err, Error::SchemaMismatch(_)));
    }

    #[test]
    fn test_bad_row_reports_its_number() {
        let dir = tempfile::tempdir().unwrap();
        let workbook = workbook_in(&dir);
        let mut file = File::create(workbook.path()).unwrap();
        writeln!(file, "{}", HEADERS.join(",")).unwrap();
        writeln!(file, "10,,,,X,2024-03-05,1.75").unwrap();
        writeln!(file, "twenty,,,,X,2024-03-05,1.75").unwrap();
        drop(file);

        let err = workbook.read_all().unwrap_err();
        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn test_out_of_order_rows_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let workbook = workbook_in(&dir);
        let rows = vec![
            BagRecord::realized(BagId::new(20), Amount::from_cents(100), date(5)),
            BagRecord::realized(BagId::new(10), Amount::from_cents(200), date(5)),
        ];
        // write_all does not re-check order; read_all does
        workbook.write_all(&rows).unwrap();

        let err = workbook.read_all().unwrap_err();
        assert!(matches!(err, Error::SchemaMismatch(_)));
        assert!(err.to_string().contains("out of order"));
    }

    #[test]
    fn test_rewrite_replaces_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let workbook = workbook_in(&dir);

        workbook
            .write_all(&[BagRecord::realized(
                BagId::new(10),
                Amount::from_cents(100),
                date(5),
            )])
            .unwrap();
        workbook
            .write_all(&[BagRecord::realized(
                BagId::new(20),
                Amount::from_cents(200),
                date(6),
            )])
            .unwrap();

        let rows = workbook.read_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, BagId::new(20));
    }

    #[test]
    fn test_create_if_missing() {
        let dir = tempfile::tempdir().unwrap();
        let workbook = workbook_in(&dir);

        assert!(workbook.create_if_missing().unwrap());
        assert!(!workbook.create_if_missing().unwrap());
        assert!(workbook.read_all().unwrap().is_empty());
    }
}
