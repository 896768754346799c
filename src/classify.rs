//! Text/binary classification by content sniffing.
//!
//! A file is binary if it starts with one of a small set of known signatures,
//! or if its bytes are not well-formed UTF-8. Everything else is text.

use std::io;
use std::path::Path;

/// PNG file signature (first 4 bytes)
pub const PNG_SIGNATURE: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];

/// JPEG with a JFIF APP0 marker (first 4 bytes)
pub const JPEG_APP0_SIGNATURE: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xE0];

const SIGNATURES: [&[u8; 4]; 2] = [&PNG_SIGNATURE, &JPEG_APP0_SIGNATURE];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Text,
    Binary,
}

/// Classify an in-memory file body.
///
/// Bodies shorter than a signature never match one and fall through to the
/// UTF-8 check, so the empty body is [`Classification::Text`].
pub fn classify_bytes(data: &[u8]) -> Classification {
    if let Some(header) = data.first_chunk::<4>()
        && SIGNATURES.iter().any(|sig| *sig == header)
    {
        return Classification::Binary;
    }

    match std::str::from_utf8(data) {
        Ok(_) => Classification::Text,
        Err(_) => Classification::Binary,
    }
}

/// Read the file at `path` and classify it.
///
/// The handle is closed before returning. Open or read failures are
/// returned as-is rather than being treated as binary.
pub fn classify(path: &Path) -> io::Result<Classification> {
    let data = std::fs::read(path)?;
    Ok(classify_bytes(&data))
}
