use crate::error::{Error, Result};
use chrono::NaiveDate;
use zakboek_types::{Amount, BagId, BagRecord, BagSource, BagType};

/// Workbook column layout, fixed at seven columns.
///
/// The headers are the Dutch labels the ledger has always used. Rows a
/// statement inserted without a prior registration leave Bron, Type and
/// Afgiftedatum empty; unprocessed rows leave Verwerkt, Verwerkingsdatum
/// and Bedrag empty. Verwerkt holds a literal `X` when processed.
pub const HEADERS: [&str; 7] = [
    "Zaknummer",
    "Bron",
    "Type",
    "Afgiftedatum",
    "Verwerkt",
    "Verwerkingsdatum",
    "Bedrag",
];

pub(crate) const PROCESSED_MARK: &str = "X";
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render one record as its seven workbook cells.
pub fn record_to_row(record: &BagRecord) -> [String; 7] {
    [
        record.id.to_string(),
        record
            .source
            .as_ref()
            .map(|source| source.as_str().to_string())
            .unwrap_or_default(),
        record
            .bag_type
            .map(|bag_type| bag_type.as_cell().to_string())
            .unwrap_or_default(),
        record
            .submission_date
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_default(),
        if record.processed {
            PROCESSED_MARK.to_string()
        } else {
            String::new()
        },
        record
            .processed_date
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_default(),
        record
            .amount
            .map(|amount| amount.to_string())
            .unwrap_or_default(),
    ]
}

/// Convert one workbook row back into a record.
///
/// `row_number` is the 1-based position in the file (header included) and
/// only feeds error messages. Cells are taken literally; nothing is
/// inferred from a value that is not exactly what this tool writes.
pub fn row_to_record(cells: &[&str], row_number: usize) -> Result<BagRecord> {
    if cells.len() != HEADERS.len() {
        return Err(Error::SchemaMismatch(format!(
            "row {}: expected {} columns, found {}",
            row_number,
            HEADERS.len(),
            cells.len()
        )));
    }

    let id = BagId::parse(cells[0])
        .map_err(|err| Error::SchemaMismatch(format!("row {}: {}", row_number, err)))?;

    let source = match cells[1].trim() {
        "" => None,
        text => Some(
            BagSource::new(text)
                .map_err(|err| Error::SchemaMismatch(format!("row {}: {}", row_number, err)))?,
        ),
    };
    let bag_type = match cells[2].trim() {
        "" => None,
        text => Some(
            BagType::parse(text)
                .map_err(|err| Error::SchemaMismatch(format!("row {}: {}", row_number, err)))?,
        ),
    };
    let submission_date = parse_date_cell(cells[3], "Afgiftedatum", row_number)?;

    let processed = match cells[4].trim() {
        "" => false,
        PROCESSED_MARK => true,
        other => {
            return Err(Error::SchemaMismatch(format!(
                "row {}: Verwerkt must be empty or {:?}, found {:?}",
                row_number, PROCESSED_MARK, other
            )));
        }
    };
    let processed_date = parse_date_cell(cells[5], "Verwerkingsdatum", row_number)?;

    let amount = match cells[6].trim() {
        "" => None,
        text => Some(
            Amount::parse_cell(text)
                .map_err(|err| Error::SchemaMismatch(format!("row {}: {}", row_number, err)))?,
        ),
    };

    let record = BagRecord {
        id,
        source,
        bag_type,
        submission_date,
        processed,
        processed_date,
        amount,
    };
    record
        .validate()
        .map_err(|err| Error::SchemaMismatch(format!("row {}: {}", row_number, err)))?;
    Ok(record)
}

fn parse_date_cell(cell: &str, column: &str, row_number: usize) -> Result<Option<NaiveDate>> {
    match cell.trim() {
        "" => Ok(None),
        text => NaiveDate::parse_from_str(text, DATE_FORMAT).map(Some).map_err(|_| {
            Error::SchemaMismatch(format!(
                "row {}: {} holds unusable date {:?}",
                row_number, column, text
            ))
        }),
    }
}
