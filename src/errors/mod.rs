//! Error types and error handling for the front end.
//!
//! This module defines the syntax errors the parser records. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each way a production can fail
//! - Error names and suggestions for reporting

pub mod errors;
