use crate::core::Pipeline;
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::monitor::SystemMonitor;

/// Runs a pipeline exactly once: extract, transform, load. The engine owns
/// the run lifecycle and reports stage progress and drop counts.
pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor_enabled: bool,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor_enabled: false,
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
        }
    }

    pub async fn run(&self) -> Result<String> {
        #[cfg(feature = "cli")]
        let mut monitor = SystemMonitor::new(self.monitor_enabled);
        #[cfg(not(feature = "cli"))]
        let _ = self.monitor_enabled;

        tracing::info!("Starting ETL run");

        let table = self.pipeline.extract().await?;
        tracing::info!("Extracted {} rows", table.rows.len());

        let outcome = self.pipeline.transform(table).await?;
        tracing::info!(
            "Transformed {} rows into {} customer summaries (dropped {} null, {} non-positive)",
            outcome.input_rows,
            outcome.summaries.len(),
            outcome.dropped_null_amount,
            outcome.dropped_non_positive,
        );

        let output_path = self.pipeline.load(outcome).await?;
        tracing::info!("Output saved to: {}", output_path);

        #[cfg(feature = "cli")]
        if let Some(stats) = monitor.sample() {
            tracing::info!(
                "Run used {:.1}% CPU, {} MB memory (peak {} MB), elapsed {:.2?}",
                stats.cpu_usage,
                stats.memory_usage_mb,
                stats.peak_memory_mb,
                stats.elapsed_time,
            );
        }

        Ok(output_path)
    }
}
