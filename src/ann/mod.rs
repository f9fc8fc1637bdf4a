pub mod graph;
pub use graph::*;

pub mod metric;
pub use metric::*;
