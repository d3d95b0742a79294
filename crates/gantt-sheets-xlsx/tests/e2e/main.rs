//! End-to-end tests for gantt-sheets-xlsx.
//!
//! Each test writes the package it needs to a temp file with `zip::ZipWriter`,
//! then extracts it with `XlsxExtractor::extract_file` and asserts on the rows.

mod common;
mod reading;

// Re-export common utilities for submodules
pub use common::*;
