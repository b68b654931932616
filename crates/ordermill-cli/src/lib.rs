//! Library surface of the batch CLI: logging setup and the staged
//! pipeline runner.

pub mod logging;
pub mod pipeline;
pub mod summary;
