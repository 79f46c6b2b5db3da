// crates/gazetteer-core/src/loader/dataset.rs

//! Parser for the persisted dataset: a header line, then one city per line
//! with six comma-separated fields:
//!
//! `LocalName,ForeignName,RegionLocalName,RegionForeignName,CountryLocalName,CountryForeignName`
//!
//! The format defines no quoting or escaping, so a quote character is just
//! text and a comma always separates fields.

use crate::error::{GazetteerError, Result};
use crate::model::SourceRow;
use std::io::{BufRead, BufReader, Read};

/// Header written by the dataset builder. Readers ignore the first line
/// whatever it contains.
pub const DATASET_HEADER: [&str; 6] = [
    "ChineseName",
    "EnglishName",
    "StateName",
    "StateNameEn",
    "CountryName",
    "CountryNameEn",
];

const FIELD_COUNT: usize = 6;

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::None);
    builder
}

/// Reads every data row, in file order.
///
/// The first physical line is the header and is dropped unread, even when
/// blank. Fails on the first malformed row: fewer than six fields, an empty
/// city name in either script, or a region named in one script only. Fields
/// past the sixth are ignored; blank lines after the header are skipped.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<SourceRow>> {
    let mut buf = BufReader::new(reader);
    let mut header = Vec::new();
    buf.read_until(b'\n', &mut header)?;

    let mut rdr = reader_builder().from_reader(buf);
    let mut rows = Vec::new();
    let mut record = csv::StringRecord::new();

    while rdr.read_record(&mut record)? {
        // csv counts from the line after the header.
        let line = record.position().map_or(0, |p| p.line() + 1);
        if record.len() < FIELD_COUNT {
            return Err(GazetteerError::InvalidData(format!(
                "line {line}: expected {FIELD_COUNT} fields, found {}",
                record.len()
            )));
        }

        let mut fields = [""; FIELD_COUNT];
        for (slot, value) in fields.iter_mut().zip(record.iter()) {
            *slot = value;
        }
        // Line-level whitespace only: interior fields are kept verbatim.
        fields[0] = fields[0].trim_start();
        if record.len() == FIELD_COUNT {
            fields[FIELD_COUNT - 1] = fields[FIELD_COUNT - 1].trim_end();
        }

        let row = SourceRow::new(fields);
        if let Some(defect) = row.defect() {
            return Err(GazetteerError::InvalidData(format!("line {line}: {defect}")));
        }
        rows.push(row);
    }
    Ok(rows)
}
