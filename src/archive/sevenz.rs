use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use sevenz_rust::{Password, SevenZReader};
use tracing::info;

use super::{ArchiveAdapter, Member, member_path};

/// `.7z` archives. Extraction blocks the calling task.
pub struct SevenZipAdapter {
    archive: PathBuf,
}

impl SevenZipAdapter {
    pub fn new(archive: PathBuf) -> Self {
        Self { archive }
    }

    fn extract_blocking(&self, dest: &Path) -> Result<Vec<Member>> {
        let reader = SevenZReader::open(&self.archive, Password::empty())
            .map_err(|e| anyhow!("Cannot read {}: {}", self.archive.display(), e))?;
        let members: Vec<Member> = reader
            .archive()
            .files
            .iter()
            .map(|entry| Member::new(entry.name(), entry.is_directory()))
            .collect();
        drop(reader);

        // Check every name before anything touches the disk
        for member in &members {
            member_path(dest, &member.name)?;
        }

        sevenz_rust::decompress_file(&self.archive, dest)
            .map_err(|e| anyhow!("Failed to extract {}: {}", self.archive.display(), e))?;

        info!(entries = members.len(), archive = %self.archive.display(), "extracted 7z");
        Ok(members)
    }
}

#[async_trait]
impl ArchiveAdapter for SevenZipAdapter {
    async fn extract_to(&self, dest: &Path) -> Result<Vec<Member>> {
        self.extract_blocking(dest)
    }
}
