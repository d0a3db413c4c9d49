//! Grouping of pending orders into delivery batches.
//!
//! - [`cluster_orders`]: Expedited singletons, then seed-radius grouping, O(n²)

mod cluster;
mod radius;

pub use cluster::Cluster;
pub use radius::cluster_orders;
