use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use super::CSV_HEADER;
use crate::core::{GrantError, GrantRow};

/// Write `rows` as CSV to `writer`.
///
/// The header is written even when `rows` is empty.
pub fn write_csv<W: Write>(rows: &[GrantRow], writer: W) -> Result<(), GrantError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for row in rows {
        wtr.write_record([row.recipient.as_str(), format_amount(row.amount).as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Plain decimal with at least one fractional digit: `500.0`, `1234.56`.
fn format_amount(amount: f64) -> String {
    let mut s = amount.to_string();
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}

/// Write `rows` to a new file at `path`, replacing any existing file.
pub fn write_csv_path(rows: &[GrantRow], path: impl AsRef<Path>) -> Result<(), GrantError> {
    let file = File::create(path)?;
    write_csv(rows, file)
}

/// Read rows back from CSV produced by [`write_csv`].
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<GrantRow>, GrantError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?;
    if headers.iter().ne(CSV_HEADER) {
        return Err(GrantError::Csv(csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("unexpected header: {:?}", headers.iter().collect::<Vec<_>>()),
        ))));
    }

    let rows = rdr.deserialize().collect::<Result<Vec<GrantRow>, _>>()?;
    Ok(rows)
}

/// Read rows from a CSV file at `path`.
pub fn read_csv_path(path: impl AsRef<Path>) -> Result<Vec<GrantRow>, GrantError> {
    let file = File::open(path)?;
    read_csv(file)
}
