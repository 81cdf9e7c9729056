//! fpscalc library: argument parsing, dispatch and output for the CLI.

pub mod app;
pub mod config;
pub mod errors;
