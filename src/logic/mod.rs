pub mod naming;
pub mod parsing;
pub mod retry;
