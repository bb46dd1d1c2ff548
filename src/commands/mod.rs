//! CLI command implementations

pub mod clean;
pub mod generate;
pub mod latest;
pub mod list;
pub mod new;
pub mod show;
