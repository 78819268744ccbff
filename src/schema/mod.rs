pub mod meta;
pub mod model;
