//! Local search operators for improving tours.
//!
//! - [`two_opt_improve`]: Open-tour 2-opt segment reversal

mod two_opt;

pub use two_opt::{tour_distance, two_opt_improve};
