//! Shared pieces of the labelcheck binaries.

pub mod logging;
pub mod report;
