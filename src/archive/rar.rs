use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tracing::info;

use super::{ArchiveAdapter, Member, member_path};

/// `.rar` archives, through the bundled unrar library. Extraction blocks the
/// calling task.
pub struct RarAdapter {
    archive: PathBuf,
}

impl RarAdapter {
    pub fn new(archive: PathBuf) -> Self {
        Self { archive }
    }

    fn extract_blocking(&self, dest: &Path) -> Result<Vec<Member>> {
        let mut archive = unrar::Archive::new(&self.archive)
            .open_for_processing()
            .map_err(|e| anyhow!("Cannot read {}: {}", self.archive.display(), e))?;
        let mut members = Vec::new();

        while let Some(header) = archive
            .read_header()
            .map_err(|e| anyhow!("Corrupt archive {}: {}", self.archive.display(), e))?
        {
            let entry = header.entry();
            let name = entry.filename.to_string_lossy().into_owned();
            let is_dir = entry.is_directory();
            let target = member_path(dest, &name)?;

            archive = if is_dir {
                std::fs::create_dir_all(&target)?;
                header.skip()
            } else {
                header.extract_with_base(dest)
            }
            .map_err(|e| anyhow!("Failed to extract {}: {}", name, e))?;

            members.push(Member::new(name, is_dir));
        }

        info!(entries = members.len(), archive = %self.archive.display(), "extracted rar");
        Ok(members)
    }
}

#[async_trait]
impl ArchiveAdapter for RarAdapter {
    async fn extract_to(&self, dest: &Path) -> Result<Vec<Member>> {
        self.extract_blocking(dest)
    }
}
