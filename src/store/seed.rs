//! Sample data seeding
//!
//! Fills an empty directory with placeholder files so there is something to
//! page through.

use crate::error::{Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Describes the sample files to write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Base names; each is written `repeat` times
    #[serde(default = "default_stems")]
    pub stems: Vec<String>,

    /// Copies per stem, numbered from 0
    #[serde(default = "default_repeat")]
    pub repeat: usize,

    /// Optional file extension (without the dot)
    #[serde(default)]
    pub extension: Option<String>,

    /// Size of each file in bytes
    #[serde(default = "default_size_bytes")]
    pub size_bytes: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            stems: default_stems(),
            repeat: default_repeat(),
            extension: None,
            size_bytes: default_size_bytes(),
        }
    }
}

fn default_stems() -> Vec<String> {
    vec!["file".to_string()]
}

fn default_repeat() -> usize {
    25
}

fn default_size_bytes() -> usize {
    1024
}

impl SeedConfig {
    /// File names in write order: `{stem}-{i}[.{extension}]`
    pub fn file_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.repeat * self.stems.len());
        for i in 0..self.repeat {
            for stem in &self.stems {
                match &self.extension {
                    Some(ext) => names.push(format!("{stem}-{i}.{ext}")),
                    None => names.push(format!("{stem}-{i}")),
                }
            }
        }
        names
    }
}

/// Write the sample files into `root` if it is empty
///
/// Creates `root` when missing. Returns the number of files written, which is
/// zero when the directory already had content.
pub fn seed_directory(root: &Path, config: &SeedConfig) -> Result<usize> {
    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory {}", root.display()))?;

    let has_content = fs::read_dir(root)
        .with_context(|| format!("Failed to read directory {}", root.display()))?
        .next()
        .is_some();
    if has_content {
        tracing::info!("{} is not empty, skipping seed", root.display());
        return Ok(0);
    }

    let contents = vec![0u8; config.size_bytes];
    let names = config.file_names();
    for name in &names {
        let path = root.join(name);
        fs::write(&path, &contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    tracing::info!("Seeded {} files into {}", names.len(), root.display());
    Ok(names.len())
}
