//! Command-line interface module.

mod args;
pub mod index;

pub use args::{Cli, IndexArgs};
