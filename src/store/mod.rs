//! Backing store module
//!
//! Enumerates the entries a paginator slices.
//!
//! # Overview
//!
//! The store module provides:
//! - `EntrySource` - Trait for anything that can list all of its entries
//! - `DirectoryStore` - Lists the files of a directory in natural name order
//! - `MemoryStore` - Shared in-memory collection, also used to freeze a listing
//! - `seed_directory` - Populates an empty directory with sample files

mod directory;
mod memory;
mod seed;
mod types;

pub use directory::DirectoryStore;
pub use memory::MemoryStore;
pub use seed::{seed_directory, SeedConfig};
pub use types::{natural_cmp, EntrySource};
