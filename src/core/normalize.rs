use crate::domain::model::{CanonicalRecord, RawRecord};
use crate::utils::error::{EtlError, Result};
use serde_json::Value;

/// Fixed rename table from source labels to canonical field names.
pub const RENAME_TABLE: [(&str, &str); 2] = [
    ("Customer ID", "customer_id"),
    ("Purchase Amount", "purchase_amount"),
];

/// Fails with `SchemaMismatch` when a required canonical field has no source
/// column in the observed header. Runs once, before any row is converted.
pub fn check_header(header: &[String]) -> Result<()> {
    for (source_label, canonical_field) in RENAME_TABLE {
        if !header.iter().any(|label| label == source_label) {
            return Err(EtlError::SchemaMismatch {
                field: canonical_field.to_string(),
            });
        }
    }
    Ok(())
}

/// Maps a raw record onto the fixed canonical field set. Unmapped source
/// columns are dropped.
pub fn normalize(record: &RawRecord) -> CanonicalRecord {
    let customer_id = record
        .data
        .get("Customer ID")
        .map(scalar_to_string)
        .unwrap_or_default();
    let purchase_amount = record
        .data
        .get("Purchase Amount")
        .and_then(Value::as_f64);

    CanonicalRecord {
        customer_id,
        purchase_amount,
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
