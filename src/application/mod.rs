//! Application layer: record loading and use cases
//!
//! This layer orchestrates domain logic and owns the fallible I/O boundary.

pub mod error;
pub mod records;

pub use error::{ApplicationError, ApplicationResult};
pub use records::ChartService;
