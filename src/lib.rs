//! Organization chart builder.
//!
//! Groups flat employee records into department nodes, splits staff from
//! contractors by a contract-type allow-list, resolves the department
//! hierarchy from superior links, and orders members and subtrees by rank
//! code. The domain layer is pure computation; record loading and the CLI
//! sit above it.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod util;
