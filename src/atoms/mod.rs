pub mod aid;
pub use aid::*;

pub mod cell;
pub use cell::*;

pub mod collection;
pub use collection::*;

pub mod elements;
pub use elements::*;

pub mod lattice;
pub use lattice::*;

pub mod species;
pub use species::*;

pub mod structure;
pub use structure::*;
