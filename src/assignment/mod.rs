//! Matching of clusters to vehicles from a shared pool.
//!
//! - [`assign_vehicles`]: Priority-ordered, class-preferring greedy matching

mod assigner;

pub use assigner::{assign_vehicles, Assignment, AssignmentOutcome, AssignmentPolicy};
