pub mod base;
pub mod name;
