//! CLI library components for tabmap.

pub mod commands;
pub mod logging;
pub mod summary;
