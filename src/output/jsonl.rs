use crate::crawler::QuoteRecord;
use crate::output::OutputError;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Writes records to a JSON Lines file, one object per line
///
/// Input order is preserved; an existing file at the path is replaced.
///
/// # Arguments
///
/// * `path` - Destination file path
/// * `records` - The records to persist
pub fn write_records(path: &Path, records: &[QuoteRecord]) -> Result<(), OutputError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Reads records back from a JSON Lines file
///
/// Blank lines are skipped; any malformed line is an error.
pub fn read_records(path: &Path) -> Result<Vec<QuoteRecord>, OutputError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }

    Ok(records)
}
