use crate::error::{Error, Result};
use crate::schema::*;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::Path;
use zakboek_types::{Amount, BagId};

/// Parse a CHR statement file.
pub fn parse_file(path: &Path) -> Result<ChrBatch> {
    let text = std::fs::read_to_string(path)?;
    parse_text(&text)
}

/// Parse CHR statement text.
///
/// The header is batch-fatal: without a usable processing date none of the
/// detail lines can be dated. Detail lines fail individually; a bad line is
/// recorded as a [`LineIssue`] and parsing moves on.
pub fn parse_text(text: &str) -> Result<ChrBatch> {
    let mut lines = text.lines().enumerate();

    let header = loop {
        match lines.next() {
            Some((_, line)) if !line.trim().is_empty() => break line,
            Some(_) => continue,
            None => return Err(Error::Empty),
        }
    };
    let processing_date = parse_header_date(header)?;

    let mut records: Vec<ChrRecord> = Vec::new();
    let mut positions: HashMap<BagId, usize> = HashMap::new();
    let mut issues: Vec<LineIssue> = Vec::new();

    for (idx, line) in lines {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() < DETAIL_MIN_FIELDS {
            continue;
        }
        if is_crate_line(fields[KIND_CODE_FIELD]) {
            continue;
        }

        let id = match BagId::parse(fields[BAG_ID_FIELD]) {
            Ok(id) => id,
            Err(err) => {
                issues.push(LineIssue {
                    line: line_no,
                    reason: err.to_string(),
                });
                continue;
            }
        };
        let amount = match Amount::parse_chr(fields[AMOUNT_FIELD]) {
            Ok(amount) => amount,
            Err(err) => {
                issues.push(LineIssue {
                    line: line_no,
                    reason: format!("bag {}: {}", id, err),
                });
                continue;
            }
        };

        match positions.get(&id) {
            Some(&pos) => records[pos].amount += amount,
            None => {
                positions.insert(id, records.len());
                records.push(ChrRecord { id, amount });
            }
        }
    }

    Ok(ChrBatch {
        processing_date,
        records,
        issues,
    })
}

fn parse_header_date(header: &str) -> Result<NaiveDate> {
    let fields: Vec<&str> = header.split(FIELD_SEPARATOR).collect();
    let raw = fields
        .get(HEADER_DATE_FIELD)
        .map(|field| field.trim())
        .filter(|field| !field.is_empty())
        .ok_or_else(|| {
            Error::Header(format!(
                "no processing date in field {}",
                HEADER_DATE_FIELD + 1
            ))
        })?;

    NaiveDate::parse_from_str(raw, HEADER_DATE_FORMAT)
        .map_err(|_| Error::Header(format!("unusable processing date {:?}", raw)))
}

fn is_crate_line(kind_code: &str) -> bool {
    kind_code.trim().get(1..) == Some(CRATE_CODE_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(date: &str) -> String {
        format!("0;CHR;STATEMENT;038;1;0;0;{date}")
    }

    fn detail(id: &str, kind: &str, amount: &str) -> String {
        format!("2;891;0;0;0;{id};0;0;{kind};0;{amount}")
    }

    #[test]
    fn test_parse_statement() {
        let text = [
            header("29-2-2024"),
            detail("8412", "110", "1,75"),
            detail("8413", "110", "0,25"),
        ]
        .join("\n");

        let batch = parse_text(&text).unwrap();
        assert_eq!(
            batch.processing_date,
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            batch.records,
            vec![
                ChrRecord {
                    id: BagId::new(8412),
                    amount: Amount::from_cents(175),
                },
                ChrRecord {
                    id: BagId::new(8413),
                    amount: Amount::from_cents(25),
                },
            ]
        );
        assert!(batch.issues.is_empty());
    }

    #[test]
    fn test_repeated_bag_accumulates() {
        let text = [
            header("1-3-2024"),
            detail("8412", "110", "1,00"),
            detail("8413", "110", "0,25"),
            detail("8412", "110", "0,50"),
        ]
        .join("\n");

        let batch = parse_text(&text).unwrap();
        assert_eq!(batch.records.len(), 2);
        assert_eq!(batch.records[0].id, BagId::new(8412));
        assert_eq!(batch.records[0].amount, Amount::from_cents(150));
        assert_eq!(batch.records[1].id, BagId::new(8413));
    }

    #[test]
    fn test_crate_lines_skipped() {
        let text = [
            header("1-3-2024"),
            detail("8412", "150", "4,00"),
            detail("8413", "250", "2,00"),
            detail("8414", "110", "0,25"),
        ]
        .join("\n");

        let batch = parse_text(&text).unwrap();
        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.records[0].id, BagId::new(8414));
        assert!(batch.issues.is_empty());
    }

    #[test]
    fn test_bad_lines_reported_and_skipped() {
        let text = [
            header("1-3-2024"),
            detail("8412", "110", "1,75"),
            detail("not-a-bag", "110", "1,00"),
            detail("8414", "110", "oops"),
            detail("8415", "110", "0,25"),
        ]
        .join("\n");

        let batch = parse_text(&text).unwrap();
        assert_eq!(batch.records.len(), 2);
        assert_eq!(batch.records[0].id, BagId::new(8412));
        assert_eq!(batch.records[1].id, BagId::new(8415));

        assert_eq!(batch.issues.len(), 2);
        assert_eq!(batch.issues[0].line, 3);
        assert_eq!(batch.issues[1].line, 4);
        assert!(batch.issues[1].reason.contains("8414"));
    }

    #[test]
    fn test_short_and_blank_lines_ignored() {
        let text = [
            header("1-3-2024").as_str(),
            "",
            "9;TRAILER;3",
            &detail("8412", "110", "1,75"),
            "   ",
        ]
        .join("\n");

        let batch = parse_text(&text).unwrap();
        assert_eq!(batch.records.len(), 1);
        assert!(batch.issues.is_empty());
    }

    #[test]
    fn test_empty_statement() {
        assert!(matches!(parse_text(""), Err(Error::Empty)));
        assert!(matches!(parse_text("\n  \n"), Err(Error::Empty)));
    }

    #[test]
    fn test_header_without_date() {
        let err = parse_text("0;CHR;STATEMENT\n").unwrap_err();
        assert!(matches!(err, Error::Header(_)));

        let err = parse_text("0;CHR;STATEMENT;038;1;0;0;;extra\n").unwrap_err();
        assert!(matches!(err, Error::Header(_)));
    }

    #[test]
    fn test_header_with_bad_date() {
        let text = header("2024-02-29");
        let err = parse_text(&text).unwrap_err();
        assert!(matches!(err, Error::Header(_)));
    }

    #[test]
    fn test_unpadded_header_date() {
        let batch = parse_text(&header("1-3-2024")).unwrap();
        assert_eq!(
            batch.processing_date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(batch.records.is_empty());
    }
}
