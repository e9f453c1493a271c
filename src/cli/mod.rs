//! CLI module
//!
//! Command-line interface for browsing HAL collections.
//!
//! # Commands
//!
//! - `get` - Load a collection
//! - `next` / `prev` / `first` / `last` - Follow a navigation link
//! - `page` / `size` / `sort` - Reload with different query parameters
//! - `walk` - Follow `next` links to the end

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
