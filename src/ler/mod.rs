pub mod assignment;
pub use assignment::*;

pub mod centers;
pub use centers::*;

pub mod engine;
pub use engine::*;

pub mod environments;
pub use environments::*;

pub mod result;
pub use result::*;

pub mod seed;
pub use seed::*;

pub mod site;
pub use site::*;
