// Library exports for percolation
pub mod error;
pub mod grid;
pub mod percolation;
pub mod render;
pub mod stats;
pub mod union_find;

pub use error::PercolationError;
pub use grid::Site;
pub use percolation::Percolation;
pub use stats::{PercolationStats, StatsConfig, StatsError};
pub use union_find::UnionFind;
