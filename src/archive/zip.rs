use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::fs;
use tracing::info;

use super::{ArchiveAdapter, Member, member_path};
use crate::io::LocalFileReader;
use crate::zip::ZipExtractor;

/// `.zip` archives, read through the Central Directory parser.
pub struct ZipAdapter {
    archive: PathBuf,
}

impl ZipAdapter {
    pub fn new(archive: PathBuf) -> Self {
        Self { archive }
    }
}

#[async_trait]
impl ArchiveAdapter for ZipAdapter {
    async fn extract_to(&self, dest: &Path) -> Result<Vec<Member>> {
        let reader = Arc::new(LocalFileReader::new(&self.archive)?);
        let extractor = ZipExtractor::new(reader);

        let entries = extractor.list_files().await?;
        info!(entries = entries.len(), archive = %self.archive.display(), "extracting zip");

        let mut members = Vec::with_capacity(entries.len());
        for entry in &entries {
            let target = member_path(dest, &entry.file_name)?;
            if entry.is_directory {
                fs::create_dir_all(&target).await?;
            } else {
                extractor.extract_to_file(entry, &target).await?;
            }
            members.push(Member::new(entry.file_name.as_str(), entry.is_directory));
        }

        Ok(members)
    }
}
