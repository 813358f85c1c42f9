pub mod builder;
pub mod condition;
