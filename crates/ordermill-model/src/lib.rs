//! Core data model for the transaction pipeline.
//!
//! This crate defines everything the stages share: the fixed transaction
//! table schema, the run configuration, the discount ladder, and the
//! error taxonomy.

pub mod config;
pub mod discount;
pub mod error;
pub mod frame;
pub mod schema;

pub use config::RunConfig;
pub use discount::{DiscountLadder, LadderRule};
pub use error::{PipelineError, Result};
pub use frame::require_column;
pub use schema::{AttributeRecord, TransactionDocument};
