//! The bwt_algorithms module forms the sorting subsystem of the crate.
//!
//! The Burrow-Wheeler Transform alters the data in such a way that runs of similar bytes are more
//! likely to occur. This allows for more effective compression by later stages.
//!
//! The forward transform needs every circular rotation of the block in sorted order, which is the
//! "computationally expensive" part. The inverse needs no sorting at all, only a frequency count.
//!
pub mod bwt_sort;
pub mod circular_suffix;
