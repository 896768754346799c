//! Archive builders shared by the integration tests.
#![allow(dead_code)]

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use flate2::Compression;
use flate2::Crc;
use flate2::write::DeflateEncoder;

pub const PNG: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// RAR 1.5-4.x archive with a stored `notes.txt` ("hello rar") followed by
/// an empty directory `empty`. No crate in the stack writes RAR, so the bytes
/// are spelled out; header CRCs are the low 16 bits of CRC-32.
pub const RAR_FIXTURE: [u8; 114] = [
    0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x00, 0xCF, 0x90, 0x73, 0x00, 0x00,
    0x0D, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x95, 0xA9, 0x74, 0x00,
    0x80, 0x29, 0x00, 0x09, 0x00, 0x00, 0x00, 0x09, 0x00, 0x00, 0x00, 0x03,
    0x17, 0xC9, 0x51, 0x84, 0x00, 0x00, 0x21, 0x5A, 0x14, 0x30, 0x09, 0x00,
    0xA4, 0x81, 0x00, 0x00, 0x6E, 0x6F, 0x74, 0x65, 0x73, 0x2E, 0x74, 0x78,
    0x74, 0x68, 0x65, 0x6C, 0x6C, 0x6F, 0x20, 0x72, 0x61, 0x72, 0x1D, 0xE0,
    0x74, 0xE0, 0x80, 0x25, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x21, 0x5A, 0x14, 0x30,
    0x05, 0x00, 0xED, 0x41, 0x00, 0x00, 0x65, 0x6D, 0x70, 0x74, 0x79, 0xC4,
    0x3D, 0x7B, 0x00, 0x40, 0x07, 0x00,
];

#[derive(Clone, Copy)]
pub enum Method {
    Stored,
    Deflate,
}

pub struct ZipMember {
    pub name: String,
    pub data: Vec<u8>,
    pub method: Method,
    /// Overrides the computed CRC-32
    pub crc: Option<u32>,
    /// Central Directory compressed size, moved into a ZIP64 extra field
    pub zip64_compressed: Option<u64>,
}

impl ZipMember {
    pub fn file(name: &str, data: impl AsRef<[u8]>, method: Method) -> Self {
        Self {
            name: name.to_string(),
            data: data.as_ref().to_vec(),
            method,
            crc: None,
            zip64_compressed: None,
        }
    }

    pub fn dir(name: &str) -> Self {
        Self::file(name, b"", Method::Stored)
    }
}

/// Assemble a single-disk ZIP archive in memory.
pub fn build_zip(members: &[ZipMember], comment: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut central = Vec::new();

    for member in members {
        let mut crc = Crc::new();
        crc.update(&member.data);
        let crc = member.crc.unwrap_or(crc.sum());

        let (method, payload) = match member.method {
            Method::Stored => (0u16, member.data.clone()),
            Method::Deflate => {
                let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(&member.data).unwrap();
                (8u16, encoder.finish().unwrap())
            }
        };
        let lfh_offset = out.len() as u32;
        let name = member.name.as_bytes();
        let mut extra = Vec::new();
        if let Some(size) = member.zip64_compressed {
            extra.write_u16::<LittleEndian>(0x0001).unwrap();
            extra.write_u16::<LittleEndian>(8).unwrap();
            extra.write_u64::<LittleEndian>(size).unwrap();
        }
        let cd_compressed = match member.zip64_compressed {
            Some(_) => 0xFFFFFFFF,
            None => payload.len() as u32,
        };

        out.extend_from_slice(b"PK\x03\x04");
        out.write_u16::<LittleEndian>(20).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap();
        out.write_u16::<LittleEndian>(method).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap();
        out.write_u16::<LittleEndian>(0x21).unwrap();
        out.write_u32::<LittleEndian>(crc).unwrap();
        out.write_u32::<LittleEndian>(payload.len() as u32).unwrap();
        out.write_u32::<LittleEndian>(member.data.len() as u32).unwrap();
        out.write_u16::<LittleEndian>(name.len() as u16).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap();
        out.extend_from_slice(name);
        out.extend_from_slice(&payload);

        central.extend_from_slice(b"PK\x01\x02");
        central.write_u16::<LittleEndian>(20).unwrap();
        central.write_u16::<LittleEndian>(20).unwrap();
        central.write_u16::<LittleEndian>(0).unwrap();
        central.write_u16::<LittleEndian>(method).unwrap();
        central.write_u16::<LittleEndian>(0).unwrap();
        central.write_u16::<LittleEndian>(0x21).unwrap();
        central.write_u32::<LittleEndian>(crc).unwrap();
        central.write_u32::<LittleEndian>(cd_compressed).unwrap();
        central.write_u32::<LittleEndian>(member.data.len() as u32).unwrap();
        central.write_u16::<LittleEndian>(name.len() as u16).unwrap();
        central.write_u16::<LittleEndian>(extra.len() as u16).unwrap();
        central.write_u16::<LittleEndian>(0).unwrap();
        central.write_u16::<LittleEndian>(0).unwrap();
        central.write_u16::<LittleEndian>(0).unwrap();
        central.write_u32::<LittleEndian>(0).unwrap();
        central.write_u32::<LittleEndian>(lfh_offset).unwrap();
        central.extend_from_slice(name);
        central.extend_from_slice(&extra);
    }

    let cd_offset = out.len() as u32;
    out.extend_from_slice(&central);

    out.extend_from_slice(b"PK\x05\x06");
    out.write_u16::<LittleEndian>(0).unwrap();
    out.write_u16::<LittleEndian>(0).unwrap();
    out.write_u16::<LittleEndian>(members.len() as u16).unwrap();
    out.write_u16::<LittleEndian>(members.len() as u16).unwrap();
    out.write_u32::<LittleEndian>(central.len() as u32).unwrap();
    out.write_u32::<LittleEndian>(cd_offset).unwrap();
    out.write_u16::<LittleEndian>(comment.len() as u16).unwrap();
    out.extend_from_slice(comment);

    out
}

pub fn append_tar_file<W: Write>(builder: &mut tar::Builder<W>, name: &str, data: &[u8]) {
    let mut header = tar::Header::new_gnu();
    header.set_size(data.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    builder.append_data(&mut header, name, data).unwrap();
}

pub fn append_tar_dir<W: Write>(builder: &mut tar::Builder<W>, name: &str) {
    let mut header = tar::Header::new_gnu();
    header.set_entry_type(tar::EntryType::Directory);
    header.set_size(0);
    header.set_mode(0o755);
    header.set_cksum();
    builder.append_data(&mut header, name, std::io::empty()).unwrap();
}
