//! Archive formats and their extraction adapters.
//!
//! A format is picked from the archive's file name suffix. Every adapter
//! unpacks all members below a destination directory and reports the
//! members in the order the archive lists them.

mod rar;
mod sevenz;
mod tar;
mod zip;

pub use self::rar::RarAdapter;
pub use self::sevenz::SevenZipAdapter;
pub use self::tar::TarAdapter;
pub use self::zip::ZipAdapter;

use std::path::{Component, Path, PathBuf};

use anyhow::{Result, bail};
use async_trait::async_trait;

/// One name listed by an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Path inside the archive, `/`-separated
    pub name: String,
    pub is_dir: bool,
}

impl Member {
    pub fn new(name: impl Into<String>, is_dir: bool) -> Self {
        let name = name.into().replace('\\', "/");
        Self { name, is_dir }
    }
}

/// Extracts an archive to disk.
///
/// Only the ZIP adapter awaits real I/O. The tar, 7z and RAR libraries are
/// blocking, so those adapters run extraction inline on the calling task and
/// hold the (current-thread) runtime until it finishes.
#[async_trait]
pub trait ArchiveAdapter: Send + Sync {
    /// Unpack every member below `dest` and list them in archive order.
    async fn extract_to(&self, dest: &Path) -> Result<Vec<Member>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Rar,
    /// Plain, gzip or bzip2 compressed tar
    Tar,
    SevenZip,
}

impl ArchiveFormat {
    /// Pick a format from the (case-sensitive) file name suffix.
    pub fn detect(path: &Path) -> Option<Self> {
        let name = path.to_string_lossy();
        if name.ends_with(".zip") {
            Some(ArchiveFormat::Zip)
        } else if name.ends_with(".rar") {
            Some(ArchiveFormat::Rar)
        } else if [".tar", ".tar.gz", ".tar.bz2"]
            .iter()
            .any(|suffix| name.ends_with(suffix))
        {
            Some(ArchiveFormat::Tar)
        } else if name.ends_with(".7z") {
            Some(ArchiveFormat::SevenZip)
        } else {
            None
        }
    }

    pub fn adapter(self, archive: &Path) -> Box<dyn ArchiveAdapter> {
        let archive = archive.to_path_buf();
        match self {
            ArchiveFormat::Zip => Box::new(ZipAdapter::new(archive)),
            ArchiveFormat::Rar => Box::new(RarAdapter::new(archive)),
            ArchiveFormat::Tar => Box::new(TarAdapter::new(archive)),
            ArchiveFormat::SevenZip => Box::new(SevenZipAdapter::new(archive)),
        }
    }
}

/// Resolve a member name below `dest`, refusing names that would land
/// outside of it.
pub fn member_path(dest: &Path, name: &str) -> Result<PathBuf> {
    let mut path = dest.to_path_buf();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                bail!("Refusing to extract {name} outside of {}", dest.display());
            }
        }
    }
    Ok(path)
}
