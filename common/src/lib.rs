//! # nparse common
//!
//! Types and helpers shared by the `nparse` crates:
//!
//! * **[`report`]**: the port-list model produced by the report filter.
//! * **[`config`]**: presentation settings built from command-line flags.
//! * **[`terminal`]**: status printing and the `tracing` formatter.

pub mod config;
pub mod report;
pub mod terminal;
