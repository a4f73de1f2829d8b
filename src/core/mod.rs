pub mod aggregate;
pub mod categorize;
pub mod clean;
pub mod etl;
pub mod normalize;
pub mod pipeline;
pub mod reader;
pub mod writer;

pub use crate::domain::model::{
    CanonicalRecord, CategorizedRecord, CleanRecord, CustomerSummary, PurchaseCategory,
    RawRecord, RawTable, TransformOutcome,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
