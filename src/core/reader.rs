use crate::domain::model::{RawRecord, RawTable};
use crate::utils::error::{EtlError, Result};
use serde_json::Value;
use std::collections::HashMap;

/// Parses delimited source bytes into raw records, header row required.
///
/// Column types are inferred by scanning the whole column: a column is
/// numeric iff it has at least one non-empty value and every non-empty value
/// parses as a decimal number. Empty fields become nulls.
pub fn read_csv(data: &[u8]) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(data);

    let header: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() != header.len() {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(EtlError::MalformedInput {
                line,
                detail: format!(
                    "expected {} fields, found {}",
                    header.len(),
                    record.len()
                ),
            });
        }
        rows.push(record);
    }

    let numeric = infer_numeric_columns(&header, &rows);

    let raw_rows = rows
        .iter()
        .map(|record| {
            let mut data = HashMap::new();
            for (index, label) in header.iter().enumerate() {
                let cell = record.get(index).unwrap_or("");
                data.insert(label.clone(), cell_value(cell, numeric[index]));
            }
            RawRecord { data }
        })
        .collect();

    Ok(RawTable {
        header,
        rows: raw_rows,
    })
}

fn infer_numeric_columns(header: &[String], rows: &[csv::StringRecord]) -> Vec<bool> {
    (0..header.len())
        .map(|index| {
            let mut saw_value = false;
            for record in rows {
                let cell = record.get(index).unwrap_or("");
                if cell.is_empty() {
                    continue;
                }
                saw_value = true;
                if cell.parse::<f64>().is_err() {
                    return false;
                }
            }
            saw_value
        })
        .collect()
}

fn cell_value(cell: &str, numeric: bool) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    if numeric {
        if let Some(number) = cell.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
            return Value::Number(number);
        }
    }
    Value::String(cell.to_string())
}
