pub mod cli;
pub mod tracing;
