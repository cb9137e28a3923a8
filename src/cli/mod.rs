//! CLI module: argument parsing and output handling.

pub mod output;
pub mod parser;
pub mod utils;
