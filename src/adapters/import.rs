use std::path::Path;

use crate::adapters::table_key;
use crate::utils::error::{PostcodeError, Result};

const KEY_COLUMN: &str = "postcode";

fn delimiter_for(path: &Path) -> u8 {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("tsv") => b'\t',
        _ => b',',
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub rows: usize,
    pub columns: Vec<String>,
}

/// Builds a lookup table file from a delimited source file.
///
/// The source must carry a header row naming a `postcode` column; every other
/// column is carried through as a string field. Keys are canonicalized on the
/// way in, and the output is written with `postcode` first, delimited per its
/// extension. This is a one-shot setup step: a pre-existing output file, an
/// unreadable input, or a duplicate key all fail outright, leaving no partial
/// table behind.
pub fn import_table(input: &Path, output: &Path) -> Result<ImportSummary> {
    if output.exists() {
        return Err(PostcodeError::ImportError {
            message: format!("Output table {} already exists", output.display()),
        });
    }
    if !input.exists() {
        return Err(PostcodeError::ImportError {
            message: format!("Input file {} does not exist", input.display()),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_for(input))
        .from_path(input)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let Some(key_index) = headers.iter().position(|h| h == KEY_COLUMN) else {
        return Err(PostcodeError::ImportError {
            message: format!(
                "{} has no '{}' column in its header row",
                input.display(),
                KEY_COLUMN
            ),
        });
    };

    // Primary key first, remaining columns in source order.
    let mut columns = vec![KEY_COLUMN.to_string()];
    columns.extend(headers.iter().filter(|h| *h != KEY_COLUMN).cloned());

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for row in reader.records() {
        let row = row?;
        let Some(raw_key) = row.get(key_index) else {
            return Err(PostcodeError::ImportError {
                message: format!("Row {} is missing its key column", rows.len() + 2),
            });
        };
        let key = table_key(raw_key);
        if !seen.insert(key.clone()) {
            return Err(PostcodeError::ImportError {
                message: format!("Duplicate postcode key: {}", key),
            });
        }

        let mut record = vec![key];
        for (index, value) in row.iter().enumerate() {
            if index != key_index {
                record.push(value.to_string());
            }
        }
        rows.push(record);
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter_for(output))
        .from_path(output)?;
    writer.write_record(&columns)?;
    for record in &rows {
        writer.write_record(record)?;
    }
    writer.flush()?;

    tracing::info!(
        "Imported {} records ({} columns) into {}",
        rows.len(),
        columns.len(),
        output.display()
    );

    Ok(ImportSummary {
        rows: rows.len(),
        columns,
    })
}
