pub mod assembler;
pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod logging;
pub mod parser;
pub mod pipeline;
pub mod types;

// Ports and their adapters for the two external collaborators
pub mod app;
pub mod infra;
