use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row as read from the source: source column label to loosely typed
/// scalar (string, number, or null). Discarded after normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub data: HashMap<String, serde_json::Value>,
}

/// Header plus all raw rows of the source, in file order.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<RawRecord>,
}

/// Raw record with labels mapped to the fixed internal field set.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalRecord {
    pub customer_id: String,
    pub purchase_amount: Option<f64>,
}

/// Canonical record whose amount is known to be present and strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRecord {
    pub customer_id: String,
    pub purchase_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseCategory {
    HighValue,
    MediumValue,
    LowValue,
}

impl PurchaseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseCategory::HighValue => "High Value",
            PurchaseCategory::MediumValue => "Medium Value",
            PurchaseCategory::LowValue => "Low Value",
        }
    }
}

impl std::fmt::Display for PurchaseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorizedRecord {
    pub customer_id: String,
    pub purchase_amount: f64,
    pub purchase_category: PurchaseCategory,
}

/// Terminal aggregate, one per distinct customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub customer_id: String,
    pub avg_purchase: f64,
    pub unique_categories: u32,
}

/// Result of the transform phase: the per-customer summaries plus the row
/// counts the engine reports. Counts never change filtering behavior.
#[derive(Debug, Clone)]
pub struct TransformOutcome {
    pub summaries: Vec<CustomerSummary>,
    pub input_rows: usize,
    pub dropped_null_amount: usize,
    pub dropped_non_positive: usize,
}
