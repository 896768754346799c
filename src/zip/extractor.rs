use flate2::Crc;
use flate2::read::DeflateDecoder;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::debug;

use crate::io::ReadAt;
use anyhow::{Context, Result, bail};

use super::parser::ZipParser;
use super::structures::{CompressionMethod, ZipFileEntry};

/// ZIP file extractor
pub struct ZipExtractor<R: ReadAt> {
    parser: ZipParser<R>,
}

impl<R: ReadAt> ZipExtractor<R> {
    pub fn new(reader: Arc<R>) -> Self {
        Self {
            parser: ZipParser::new(reader),
        }
    }

    /// List all files in the archive
    pub async fn list_files(&self) -> Result<Vec<ZipFileEntry>> {
        self.parser.list_files().await
    }

    /// Decompress one entry into memory and check its CRC-32.
    pub async fn extract_to_memory(&self, entry: &ZipFileEntry) -> Result<Vec<u8>> {
        if entry.is_encrypted() {
            bail!("Encrypted entry not supported: {}", entry.file_name);
        }

        let data_offset = self.parser.get_data_offset(entry).await?;
        // Sizes come from the archive itself; never allocate past its end
        let data_end = data_offset.checked_add(entry.compressed_size);
        if data_end.is_none_or(|end| end > self.parser.reader().size()) {
            bail!(
                "Entry {} claims {} bytes past the end of the archive",
                entry.file_name,
                entry.compressed_size
            );
        }
        let mut raw = vec![0u8; entry.compressed_size as usize];
        self.parser
            .reader()
            .read_exact_at(data_offset, &mut raw)
            .await
            .with_context(|| format!("Truncated data for {}", entry.file_name))?;

        let data = match entry.compression_method {
            CompressionMethod::Stored => raw,
            CompressionMethod::Deflate => {
                let mut out = Vec::new();
                DeflateDecoder::new(raw.as_slice())
                    .take(entry.uncompressed_size)
                    .read_to_end(&mut out)
                    .with_context(|| format!("Corrupt DEFLATE stream in {}", entry.file_name))?;
                out
            }
            CompressionMethod::Unknown(method) => {
                bail!(
                    "Unsupported compression method {} for {}",
                    method,
                    entry.file_name
                );
            }
        };

        let mut crc = Crc::new();
        crc.update(&data);
        if crc.sum() != entry.crc32 {
            bail!("CRC mismatch for {}", entry.file_name);
        }

        Ok(data)
    }

    /// Extract file to disk
    pub async fn extract_to_file(&self, entry: &ZipFileEntry, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let data = self.extract_to_memory(entry).await?;
        fs::write(output_path, &data).await?;
        debug!(entry = %entry.file_name, bytes = data.len(), "extracted");

        Ok(())
    }
}
