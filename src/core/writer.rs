use crate::domain::model::CustomerSummary;
use crate::utils::error::Result;
use polars::prelude::*;
use std::io::Cursor;

/// Serializes the summaries to a Parquet buffer in memory. The caller writes
/// the buffer to the destination in one call, so nothing reaches the sink
/// until serialization has fully succeeded.
pub fn to_parquet_bytes(summaries: &[CustomerSummary]) -> Result<Vec<u8>> {
    let customer_ids: Vec<&str> = summaries.iter().map(|s| s.customer_id.as_str()).collect();
    let avg_purchases: Vec<f64> = summaries.iter().map(|s| s.avg_purchase).collect();
    let unique_categories: Vec<u32> = summaries.iter().map(|s| s.unique_categories).collect();

    let columns = vec![
        Series::new("customer_id".into(), customer_ids).into(),
        Series::new("avg_purchase".into(), avg_purchases).into(),
        Series::new("unique_categories".into(), unique_categories).into(),
    ];
    let mut frame = DataFrame::new(columns)?;

    let mut buffer = Cursor::new(Vec::new());
    ParquetWriter::new(&mut buffer).finish(&mut frame)?;
    Ok(buffer.into_inner())
}
