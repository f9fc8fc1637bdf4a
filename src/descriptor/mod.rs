pub mod asr;
pub use asr::*;

pub mod describe;
pub use describe::*;

pub mod matrix;
pub use matrix::*;

pub mod neighbors;
pub use neighbors::*;

pub mod params;
pub use params::*;

pub mod soap;
pub use soap::*;
