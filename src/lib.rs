pub mod az_cli;
pub mod commands;
pub mod error;
pub mod infra;
pub mod logic;
pub mod models;
pub mod telemetry;
