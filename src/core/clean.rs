use crate::domain::model::{CanonicalRecord, CleanRecord};

/// How many rows the cleaner excluded, by reason. Surfaced in logs only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    pub dropped_null_amount: usize,
    pub dropped_non_positive: usize,
}

/// Keeps a record iff its amount is present and strictly greater than zero.
/// Failing rows are excluded silently; bad economic data is filtered, it
/// never fails the job.
pub fn clean(records: Vec<CanonicalRecord>) -> (Vec<CleanRecord>, CleanStats) {
    let mut stats = CleanStats::default();
    let mut kept = Vec::with_capacity(records.len());

    for record in records {
        match record.purchase_amount {
            None => stats.dropped_null_amount += 1,
            Some(amount) if amount <= 0.0 => stats.dropped_non_positive += 1,
            Some(amount) => kept.push(CleanRecord {
                customer_id: record.customer_id,
                purchase_amount: amount,
            }),
        }
    }

    (kept, stats)
}
