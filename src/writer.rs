use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use spdlog::info;

#[derive(Debug, PartialEq)]
pub enum WriteOutcome {
    Created,
    AlreadyExists,
}

/// Writes rendered posts into the output directory. A file that already
/// exists is never touched again - existence doubles as the "already synced"
/// marker, which is what makes re-runs safe.
pub struct PostWriter {
    pub posts_dir: PathBuf,
}

impl PostWriter {
    pub fn write(&self, file_name: &str, rendered: &str) -> Result<WriteOutcome> {
        let target = self.posts_dir.join(file_name);
        if target.exists() {
            info!("Skipping {} - already exists", file_name);
            return Ok(WriteOutcome::AlreadyExists);
        }

        fs::create_dir_all(&self.posts_dir)?;
        fs::write(&target, rendered)?;
        info!("Created: {}", file_name);

        Ok(WriteOutcome::Created)
    }
}
