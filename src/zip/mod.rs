//! ZIP archive parsing and extraction.
//!
//! - [`structures`]: fixed-layout records (EOCD, ZIP64 records, entries)
//! - [`parser`]: reads those records from a [`ReadAt`](crate::io::ReadAt) source
//! - [`extractor`]: decompresses entries to memory or disk
//!
//! STORED and DEFLATE members are supported, ZIP64 included. Encrypted and
//! multi-disk archives are not.

mod extractor;
mod parser;
mod structures;

pub use extractor::ZipExtractor;
pub use parser::ZipParser;
pub use structures::*;
