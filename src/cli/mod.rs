//! CLI module
//!
//! Command-line interface over the paging provider.
//!
//! # Commands
//!
//! - `seed` - Write sample files into an empty root directory
//! - `query` - Run a single offset/limit query
//! - `browse` - Scroll through the whole listing page by page
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve};
