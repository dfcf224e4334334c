//! Presentation pieces shared by the `nparser` and `urlbust` binaries.

pub mod terminal;
