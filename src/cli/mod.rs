//! CLI argument parsing for the Quest Mapper.

mod args;

pub use args::{Args, CliConfig, VERSION, parse_args};
