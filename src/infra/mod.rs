pub mod azd;
pub mod tools;
