//! UI components grouped by feature domain.
pub mod common;
