//! The tools module provides the helper pieces around the BWT.
//!
//! The tools are:
//! - cli: Command line interface.
//! - freq_count: Frequency count of byte values.
//! - mtf: Move-To-Front transform, encode and decode.
//!
pub mod cli;
pub mod freq_count;
pub mod mtf;
