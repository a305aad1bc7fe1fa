//! CSV loading and writing for admission datasets
//!
//! Columns are located by header name, so order does not matter and extra
//! columns are ignored. Every value is type-checked; the first offending
//! cell aborts the load with a schema error naming its row and column.

use super::record::{AdmissionRecord, Dataset, Gender};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

/// Columns every input file must provide
pub const REQUIRED_COLUMNS: [&str; 6] = ["admit", "gre_v", "gre_q", "gre_w", "gpa", "gender"];

struct ColumnIndex {
    admit: usize,
    gre_v: usize,
    gre_q: usize,
    gre_w: usize,
    gpa: usize,
    gender: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| Error::Schema(format!("missing required column '{name}'")))
        };
        Ok(Self {
            admit: find("admit")?,
            gre_v: find("gre_v")?,
            gre_q: find("gre_q")?,
            gre_w: find("gre_w")?,
            gpa: find("gpa")?,
            gender: find("gender")?,
        })
    }
}

fn field<'a>(record: &'a csv::StringRecord, idx: usize, row: usize, name: &str) -> Result<&'a str> {
    record
        .get(idx)
        .map(str::trim)
        .ok_or_else(|| Error::Schema(format!("row {row}: missing value for '{name}'")))
}

fn parse<T: FromStr>(raw: &str, row: usize, name: &str, expected: &str) -> Result<T> {
    raw.parse::<T>().map_err(|_| {
        Error::Schema(format!(
            "row {row}: column '{name}' expected {expected}, got '{raw}'"
        ))
    })
}

fn parse_finite(raw: &str, row: usize, name: &str) -> Result<f64> {
    let value: f64 = parse(raw, row, name, "a number")?;
    if !value.is_finite() {
        return Err(Error::Schema(format!(
            "row {row}: column '{name}' must be finite, got '{raw}'"
        )));
    }
    Ok(value)
}

fn parse_row(record: &csv::StringRecord, cols: &ColumnIndex, row: usize) -> Result<AdmissionRecord> {
    let admit: u8 = parse(field(record, cols.admit, row, "admit")?, row, "admit", "0 or 1")?;
    if admit > 1 {
        return Err(Error::Schema(format!(
            "row {row}: column 'admit' expected 0 or 1, got {admit}"
        )));
    }

    let gender_raw = field(record, cols.gender, row, "gender")?;
    let gender = Gender::from_str(gender_raw)
        .map_err(|e| Error::Schema(format!("row {row}: column 'gender': {e}")))?;

    Ok(AdmissionRecord {
        admit,
        gre_v: parse(field(record, cols.gre_v, row, "gre_v")?, row, "gre_v", "an integer")?,
        gre_q: parse(field(record, cols.gre_q, row, "gre_q")?, row, "gre_q", "an integer")?,
        gre_w: parse_finite(field(record, cols.gre_w, row, "gre_w")?, row, "gre_w")?,
        gpa: parse_finite(field(record, cols.gpa, row, "gpa")?, row, "gpa")?,
        gender,
    })
}

impl Dataset {
    /// Parse a dataset from CSV text with a header row
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let cols = ColumnIndex::from_headers(rdr.headers()?)?;

        let mut records = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            records.push(parse_row(&record, &cols, i + 1)?);
        }

        tracing::debug!(rows = records.len(), "parsed admissions CSV");
        Dataset::from_records(records)
    }

    /// Write the dataset as CSV with the canonical column order
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(REQUIRED_COLUMNS)?;
        for r in self.records() {
            wtr.write_record(&[
                r.admit.to_string(),
                r.gre_v.to_string(),
                r.gre_q.to_string(),
                r.gre_w.to_string(),
                r.gpa.to_string(),
                r.gender.to_string(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Load an admissions dataset from a CSV file
pub fn load_csv(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let dataset = Dataset::from_reader(file)?;
    tracing::info!(path = %path.display(), rows = dataset.len(), "loaded dataset");
    Ok(dataset)
}

/// Write an admissions dataset to a CSV file
pub fn write_csv(dataset: &Dataset, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path.as_ref())?;
    dataset.to_writer(file)
}
