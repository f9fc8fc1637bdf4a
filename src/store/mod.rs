pub mod disk;
pub use disk::*;

pub mod memory;
pub use memory::*;

pub mod cache;
pub use cache::*;
