//! Domain layer: chart construction, pure computation
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod record;

pub use arena::{DeptArena, Department, TreeIterator};
pub use builder::ChartBuilder;
pub use record::{Employee, FieldMap, RecordNormalizer, RANK_SENTINEL, UNASSIGNED_DEPT};
