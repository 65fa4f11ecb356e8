//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics produced while parsing. It includes:
//!
//! - Error structures carrying the byte offset of the offending token
//! - Specific error variants for syntax errors and accessor misuse
//! - Helpful error messages and suggestions

pub mod errors;
