use crate::core::{ConfigProvider, Storage};
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "purchase-etl")]
#[command(about = "Batch ETL over customer purchase records: CSV in, per-customer Parquet summary out")]
pub struct CliConfig {
    #[arg(long, help = "Delimited input file with a header row")]
    pub input: String,

    #[arg(long, default_value = "./output/customer_summary.parquet")]
    pub output: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Report CPU/memory usage for the run")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_path("input", &self.input)?;
        validate_file_extension("input", &self.input, "csv")?;
        validate_path("output", &self.output)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> std::io::Result<Vec<u8>> {
        fs::read(path)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, data)
    }
}
