use crate::core::{aggregate, categorize, clean, normalize, reader, writer};
use crate::core::{ConfigProvider, Pipeline, RawTable, Storage, TransformOutcome};
use crate::utils::error::{EtlError, Result};

/// The batch purchase pipeline: CSV source, rename/clean/categorize
/// transform, per-customer aggregation, Parquet sink.
pub struct PurchasePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> PurchasePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for PurchasePipeline<S, C> {
    async fn extract(&self) -> Result<RawTable> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading source: {}", input_path);

        let data = self
            .storage
            .read_file(input_path)
            .await
            .map_err(|source| EtlError::SourceUnavailable {
                path: input_path.to_string(),
                source,
            })?;

        reader::read_csv(&data)
    }

    async fn transform(&self, table: RawTable) -> Result<TransformOutcome> {
        // Header check first: a schema mismatch fails the run before any
        // row is touched.
        normalize::check_header(&table.header)?;

        let input_rows = table.rows.len();
        let canonical: Vec<_> = table.rows.iter().map(normalize::normalize).collect();
        let (cleaned, stats) = clean::clean(canonical);
        let categorized: Vec<_> = cleaned.into_iter().map(categorize::categorize).collect();
        let summaries = aggregate::aggregate(categorized);

        Ok(TransformOutcome {
            summaries,
            input_rows,
            dropped_null_amount: stats.dropped_null_amount,
            dropped_non_positive: stats.dropped_non_positive,
        })
    }

    async fn load(&self, outcome: TransformOutcome) -> Result<String> {
        let output_path = self.config.output_path();
        tracing::debug!(
            "Writing {} summaries to: {}",
            outcome.summaries.len(),
            output_path
        );

        let bytes = writer::to_parquet_bytes(&outcome.summaries)?;

        self.storage
            .write_file(output_path, &bytes)
            .await
            .map_err(|err| EtlError::SinkUnavailable {
                path: output_path.to_string(),
                reason: err.to_string(),
            })?;

        Ok(output_path.to_string())
    }
}
