//! # arc2md
//!
//! Extract a compressed archive and render its contents as one markdown
//! document.
//!
//! Each top-level member becomes a level-1 heading. Directories nest their
//! children one level deeper, text files are embedded in fenced blocks
//! (`.json` members pretty-printed with four-space indentation), and binary
//! files are listed by name only.
//!
//! ## Supported formats
//!
//! - `.zip` (STORED and DEFLATE, ZIP64)
//! - `.tar`, `.tar.gz`, `.tar.bz2`
//! - `.7z`
//! - `.rar`
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let output = arc2md::convert(Path::new("bundle.tar.gz")).await?;
//!     println!("{}", output.display());
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod classify;
pub mod cli;
pub mod convert;
pub mod error;
pub mod io;
pub mod markdown;
pub mod zip;

pub use archive::{ArchiveAdapter, ArchiveFormat, Member};
pub use classify::{Classification, classify, classify_bytes};
pub use cli::Cli;
pub use convert::{OUTPUT_FILE_NAME, archive_to_markdown, convert};
pub use error::{ConvertError, ErrorKind};
pub use io::{LocalFileReader, ReadAt};
pub use markdown::{Entry, render_top_level};
pub use zip::{ZipExtractor, ZipFileEntry};
