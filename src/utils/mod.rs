//! Utility functions for validation and code generation.
//!
//! - [`validation`] - Per-field checks for URL entries
//! - [`code_generator`] - Session identifiers and fabricated short links

pub mod code_generator;
pub mod validation;
