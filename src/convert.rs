//! Archive to markdown conversion driver.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::info;

use crate::archive::ArchiveFormat;
use crate::error::{ConvertError, Result};
use crate::markdown::render_top_level;

/// File name of the generated document, placed next to the archive
pub const OUTPUT_FILE_NAME: &str = "output.md";

/// Absolute directory holding `archive`.
///
/// Members are extracted here and `output.md` is written here.
pub fn output_dir(archive: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(archive).map_err(|e| ConvertError::io(archive, e))?;
    Ok(absolute
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(absolute))
}

pub fn output_path(archive: &Path) -> Result<PathBuf> {
    Ok(output_dir(archive)?.join(OUTPUT_FILE_NAME))
}

/// Extract `archive` next to itself and render the extracted tree.
///
/// Unsupported suffixes are rejected before the archive is opened.
pub async fn archive_to_markdown(archive: &Path) -> Result<String> {
    let format = ArchiveFormat::detect(archive).ok_or_else(|| ConvertError::UnsupportedFormat {
        path: archive.to_path_buf(),
    })?;
    let dest = output_dir(archive)?;
    info!(?format, archive = %archive.display(), dest = %dest.display(), "converting");

    let members = format
        .adapter(archive)
        .extract_to(&dest)
        .await
        .map_err(|source| ConvertError::Extract {
            archive: archive.to_path_buf(),
            source,
        })?;

    // Every member gets its own level-1 fragment, nested ones included
    render_top_level(
        &dest,
        members
            .iter()
            .map(|member| member.name.as_str())
            .filter(|name| !name.is_empty()),
    )
}

/// Convert `archive` and write the document to `output.md` beside it.
///
/// The document is fully rendered before the output file is opened, so a
/// failed conversion leaves any previous `output.md` untouched.
pub async fn convert(archive: &Path) -> Result<PathBuf> {
    let document = archive_to_markdown(archive).await?;

    let output = output_path(archive)?;
    fs::write(&output, document)
        .await
        .map_err(|e| ConvertError::io(&output, e))?;
    info!(output = %output.display(), "wrote markdown");

    Ok(output)
}
