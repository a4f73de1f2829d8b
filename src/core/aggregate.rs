use crate::domain::model::{CategorizedRecord, CustomerSummary, PurchaseCategory};
use std::collections::{HashMap, HashSet};

/// Partial per-customer aggregate. Associative and commutative under
/// `merge`, so partitioned runs can combine shard accumulators before
/// finalizing.
#[derive(Debug, Clone, Default)]
pub struct CustomerAccumulator {
    sum: f64,
    count: u64,
    categories: HashSet<PurchaseCategory>,
}

impl CustomerAccumulator {
    pub fn observe(&mut self, amount: f64, category: PurchaseCategory) {
        self.sum += amount;
        self.count += 1;
        self.categories.insert(category);
    }

    pub fn merge(&mut self, other: CustomerAccumulator) {
        self.sum += other.sum;
        self.count += other.count;
        self.categories.extend(other.categories);
    }

    /// Every accumulator has seen at least one record before finalization,
    /// so the mean is always defined.
    pub fn finalize(self, customer_id: String) -> CustomerSummary {
        CustomerSummary {
            customer_id,
            avg_purchase: self.sum / self.count as f64,
            unique_categories: self.categories.len() as u32,
        }
    }
}

/// Groups the full record sequence by customer id (exact string equality)
/// and computes the per-customer summary. Output ordering is not
/// significant.
pub fn aggregate(records: Vec<CategorizedRecord>) -> Vec<CustomerSummary> {
    let mut groups: HashMap<String, CustomerAccumulator> = HashMap::new();

    for record in records {
        groups
            .entry(record.customer_id)
            .or_default()
            .observe(record.purchase_amount, record.purchase_category);
    }

    groups
        .into_iter()
        .map(|(customer_id, accumulator)| accumulator.finalize(customer_id))
        .collect()
}
