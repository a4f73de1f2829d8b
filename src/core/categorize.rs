use crate::domain::model::{CategorizedRecord, CleanRecord, PurchaseCategory};

/// Threshold classification, first match wins. Strictly greater than, so
/// exactly 500 and exactly 100 fall to the next lower tier.
pub fn categorize_amount(amount: f64) -> PurchaseCategory {
    if amount > 500.0 {
        PurchaseCategory::HighValue
    } else if amount > 100.0 {
        PurchaseCategory::MediumValue
    } else {
        PurchaseCategory::LowValue
    }
}

pub fn categorize(record: CleanRecord) -> CategorizedRecord {
    let purchase_category = categorize_amount(record.purchase_amount);
    CategorizedRecord {
        customer_id: record.customer_id,
        purchase_amount: record.purchase_amount,
        purchase_category,
    }
}
