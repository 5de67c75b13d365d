use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::{LoadError, ParseErrorKind};
use super::model::StateRenewable;

/// Column names of the numeric fields, in file order (after `Location`).
const NUMERIC_COLUMNS: [&str; 5] = [
    "TotalGenTWh",
    "PercentRenewable",
    "RenewableGenTWh",
    "PercentOfUSRenewable",
    "CO2MtPerTWh",
];

const FIELD_COUNT: usize = 1 + NUMERIC_COLUMNS.len();

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Open a CSV file for [`append_rows`].
pub fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: Some(path.to_path_buf()),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Read a header line followed by data rows, pushing one record per row.
///
/// CSV layout:
/// `Location,TotalGenTWh,PercentRenewable,RenewableGenTWh,PercentOfUSRenewable,CO2MtPerTWh`
///
/// The header is skipped without inspection. Fields are split on every `,`
/// (no quoting). The first failing line aborts the read; records pushed
/// before it are left in `out`.
///
/// Returns the number of records pushed by this call.
pub fn append_rows<R: BufRead>(
    reader: R,
    out: &mut Vec<StateRenewable>,
) -> Result<usize, LoadError> {
    let mut lines = reader.lines();

    match lines.next() {
        Some(header) => {
            header.map_err(io_error)?;
        }
        None => {
            return Err(LoadError::Parse {
                line: 1,
                kind: ParseErrorKind::MissingHeader,
            })
        }
    }

    let mut appended = 0;
    for (idx, line) in lines.enumerate() {
        // +2: 1-based, and the header took line 1.
        let line_no = idx + 2;
        let line = line.map_err(io_error)?;
        let record = parse_row(&line).map_err(|kind| LoadError::Parse { line: line_no, kind })?;
        out.push(record);
        appended += 1;
    }

    Ok(appended)
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

fn parse_row(line: &str) -> Result<StateRenewable, ParseErrorKind> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < FIELD_COUNT {
        return Err(ParseErrorKind::FieldCount { found: fields.len() });
    }
    if fields.len() > FIELD_COUNT {
        log::debug!(
            "ignoring {} trailing field(s) after {}",
            fields.len() - FIELD_COUNT,
            NUMERIC_COLUMNS[NUMERIC_COLUMNS.len() - 1]
        );
    }

    let mut values = [0.0_f64; NUMERIC_COLUMNS.len()];
    for ((slot, column), raw) in values.iter_mut().zip(NUMERIC_COLUMNS).zip(&fields[1..]) {
        *slot = parse_number(raw, column)?;
    }
    let [total, percent, renewable, share_of_us, co2] = values;

    Ok(StateRenewable::new(
        fields[0],
        total,
        percent,
        renewable,
        share_of_us,
        co2,
    ))
}

fn parse_number(raw: &str, column: &'static str) -> Result<f64, ParseErrorKind> {
    raw.trim()
        .parse::<f64>()
        .map_err(|source| ParseErrorKind::InvalidNumber {
            column,
            value: raw.to_string(),
            source,
        })
}

fn io_error(source: std::io::Error) -> LoadError {
    LoadError::Io { path: None, source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::error::ErrorKind;

    const HEADER: &str =
        "Location,TotalGenTWh,PercentRenewable,RenewableGenTWh,PercentOfUSRenewable,CO2MtPerTWh\n";

    fn load(text: &str) -> (Vec<StateRenewable>, Result<usize, LoadError>) {
        let mut out = Vec::new();
        let result = append_rows(text.as_bytes(), &mut out);
        (out, result)
    }

    #[test]
    fn parses_rows_in_order() {
        let text = format!("{HEADER}California,280,45,126,10,150\nTexas,500,20,100,8,400\n");
        let (rows, result) = load(&text);

        assert_eq!(result.unwrap(), 2);
        assert_eq!(rows[0].name(), "California");
        assert_eq!(rows[0].renewable_gen_twh(), 126.0);
        assert_eq!(rows[1].name(), "Texas");
        assert_eq!(rows[1].co2_per_twh(), 400.0);
    }

    #[test]
    fn header_is_not_validated() {
        let (rows, result) = load("whatever,goes,here\nOhio,120.5,3.2,3.9,0.9,0.55\n");
        assert_eq!(result.unwrap(), 1);
        assert_eq!(rows[0].percent_renewable(), 3.2);
    }

    #[test]
    fn header_only_appends_nothing() {
        let (rows, result) = load(HEADER);
        assert_eq!(result.unwrap(), 0);
        assert!(rows.is_empty());
    }

    #[test]
    fn empty_source_is_missing_header() {
        let (_, result) = load("");
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(matches!(
            err,
            LoadError::Parse {
                line: 1,
                kind: ParseErrorKind::MissingHeader
            }
        ));
    }

    #[test]
    fn accepts_signs_decimals_and_padding() {
        let text = format!("{HEADER}Testland, 1.5 ,-2,+3.25,4e1,0.0\r\n");
        let (rows, result) = load(&text);
        assert_eq!(result.unwrap(), 1);
        let r = &rows[0];
        assert_eq!(r.total_gen_twh(), 1.5);
        assert_eq!(r.percent_renewable(), -2.0);
        assert_eq!(r.renewable_gen_twh(), 3.25);
        assert_eq!(r.percent_of_us_renewable(), 40.0);
        assert_eq!(r.co2_per_twh(), 0.0);
    }

    #[test]
    fn name_is_kept_verbatim() {
        let text = format!("{HEADER} New York ,100,30,30,4,200\n");
        let (rows, _) = load(&text);
        assert_eq!(rows[0].name(), " New York ");
    }

    #[test]
    fn five_fields_is_a_parse_error_after_earlier_rows() {
        let text = format!(
            "{HEADER}California,280,45,126,10,150\nTexas,500,20,100,8\nOregon,60,70,42,5,50\n"
        );
        let (rows, result) = load(&text);

        let err = result.unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse {
                line: 3,
                kind: ParseErrorKind::FieldCount { found: 5 }
            }
        ));
        // Earlier row kept, later row never reached.
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name(), "California");
    }

    #[test]
    fn blank_line_is_a_field_count_error() {
        let text = format!("{HEADER}California,280,45,126,10,150\n\n");
        let (rows, result) = load(&text);
        assert!(matches!(
            result.unwrap_err(),
            LoadError::Parse {
                line: 3,
                kind: ParseErrorKind::FieldCount { found: 1 }
            }
        ));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn non_numeric_field_names_the_column() {
        let text = format!("{HEADER}Texas,500,twenty,100,8,400\n");
        let (rows, result) = load(&text);
        match result.unwrap_err() {
            LoadError::Parse {
                line,
                kind: ParseErrorKind::InvalidNumber { column, value, .. },
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, "PercentRenewable");
                assert_eq!(value, "twenty");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(rows.is_empty());
    }

    #[test]
    fn quoted_commas_are_not_supported() {
        let text = format!("{HEADER}\"Washington, DC\",10,5,0.5,0.1,300\n");
        let (_, result) = load(&text);
        assert!(matches!(
            result.unwrap_err(),
            LoadError::Parse {
                kind: ParseErrorKind::InvalidNumber { column: "TotalGenTWh", .. },
                ..
            }
        ));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let text = format!("{HEADER}Iowa,60,62,37,8,300,extra,columns\n");
        let (rows, result) = load(&text);
        assert_eq!(result.unwrap(), 1);
        assert_eq!(rows[0].co2_per_twh(), 300.0);
    }

    #[test]
    fn missing_file_is_a_resource_error() {
        let err = open(Path::new("/definitely/not/here/states.csv")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Resource);
        assert!(err.to_string().contains("states.csv"));
    }
}
