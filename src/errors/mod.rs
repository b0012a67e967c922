//! Error types and error handling for the front end.
//!
//! This module defines the error types returned by parsing and arena
//! allocation. It includes:
//!
//! - Error structures with the offending token's byte position and span
//! - The two-outcome `ErrorKind` (`Eof` / `Bad`) verdict
//! - Helpful error messages and suggestions

pub mod errors;
