pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, LocalStorage};

pub use crate::core::{etl::EtlEngine, pipeline::PurchasePipeline};
pub use crate::domain::model::{CustomerSummary, PurchaseCategory};
pub use crate::utils::error::{EtlError, Result};
