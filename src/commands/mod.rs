pub mod check;
pub mod provision;
