//! # nparse core
//!
//! * **[`parser`]** / **[`render`]** / **[`report`]**: turn Nmap's normal
//!   output into `<host> -p <ports>` lines.
//! * **[`batch`]**: open a URL list in the browser a batch at a time.
//! * **[`error`]**: failures surfaced to the binaries.

pub mod batch;
pub mod error;
pub mod parser;
pub mod render;
pub mod report;
