pub mod constants;
pub mod field;
pub mod spring;

pub use field::*;
pub use spring::*;
