//! Block-sorting transforms used ahead of an entropy coder.
//!
//! Provides the Burrows-Wheeler Transform (forward and inverse), the circular suffix sort it is
//! built on, and the Move-To-Front transform. Everything works on a whole block held in memory.
//!
//! Compressing runs the BWT and then MTF over the permuted block:
//!
//! `$> bwtmtf pipeline - test.txt -o test.bwt`
//!
//! and decompressing runs them in reverse:
//!
//! `$> bwtmtf pipeline + test.bwt`
//!
//! Each transform can also be run by itself with the `bwt` and `mtf` stages.
//!
pub mod bwt_algorithms;
pub mod compression;
pub mod error;
pub mod tools;

pub use error::{Result, TransformError};
