use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use bzip2::read::BzDecoder;
use flate2::read::MultiGzDecoder;
use tracing::{debug, info};

use super::{ArchiveAdapter, Member, member_path};

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];
const BZIP2_MAGIC: [u8; 3] = *b"BZh";

/// Tar archives, plain or wrapped in gzip/bzip2.
///
/// The compression layer is chosen from the stream's magic bytes, not from
/// the suffix. Extraction blocks the calling task.
pub struct TarAdapter {
    archive: PathBuf,
}

impl TarAdapter {
    pub fn new(archive: PathBuf) -> Self {
        Self { archive }
    }

    fn open(&self) -> Result<Box<dyn Read + Send>> {
        let mut file = File::open(&self.archive)
            .with_context(|| format!("Cannot open {}", self.archive.display()))?;

        let mut magic = Vec::with_capacity(3);
        (&mut file).take(3).read_to_end(&mut magic)?;
        file.seek(SeekFrom::Start(0))?;

        let reader = BufReader::new(file);
        Ok(if magic.starts_with(&GZIP_MAGIC) {
            debug!("gzip compressed tar");
            Box::new(MultiGzDecoder::new(reader))
        } else if magic.starts_with(&BZIP2_MAGIC) {
            debug!("bzip2 compressed tar");
            Box::new(BzDecoder::new(reader))
        } else {
            Box::new(reader)
        })
    }

    fn extract_blocking(&self, dest: &Path) -> Result<Vec<Member>> {
        let mut archive = ::tar::Archive::new(self.open()?);
        let mut members = Vec::new();

        for entry in archive.entries()? {
            let mut entry = entry?;
            let name = entry.path()?.to_string_lossy().into_owned();
            let is_dir = entry.header().entry_type().is_dir();

            member_path(dest, &name)?;
            entry
                .unpack_in(dest)
                .with_context(|| format!("Failed to extract {name}"))?;
            // Tar listings name directories without the trailing slash
            members.push(Member::new(name.trim_end_matches('/'), is_dir));
        }

        info!(entries = members.len(), archive = %self.archive.display(), "extracted tar");
        Ok(members)
    }
}

#[async_trait]
impl ArchiveAdapter for TarAdapter {
    async fn extract_to(&self, dest: &Path) -> Result<Vec<Member>> {
        self.extract_blocking(dest)
    }
}
