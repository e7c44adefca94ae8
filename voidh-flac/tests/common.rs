#![allow(dead_code)]

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::io::Write;

pub const MD5: [u8; 16] = [
    0xee, 0xc1, 0xef, 0x02, 0x73, 0xe8, 0xc0, 0x26, 0x1e, 0x52, 0x15, 0x9f, 0xc2, 0x13, 0x67, 0xb0,
];

/// Metadata block header followed by `body`, with the length taken from `body`.
pub fn block(is_last: bool, block_type: u8, body: &[u8]) -> Vec<u8> {
    block_with_length(is_last, block_type, body.len() as u32, body)
}

pub fn block_with_length(is_last: bool, block_type: u8, length: u32, body: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.write_u8((if is_last { 0x80 } else { 0 }) | block_type).unwrap();
    buf.write_u24::<BigEndian>(length).unwrap();
    buf.write_all(body).unwrap();
    buf
}

pub fn flac(blocks: &[Vec<u8>]) -> Vec<u8> {
    let mut buf = b"fLaC".to_vec();
    for b in blocks {
        buf.extend_from_slice(b);
    }
    buf
}

pub fn stream_info(sample_rate: u32, channels: u8, bits_per_sample: u8, total_samples: u64) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.write_u16::<BigEndian>(4608).unwrap();
    buf.write_u16::<BigEndian>(4608).unwrap();
    buf.write_u24::<BigEndian>(798).unwrap();
    buf.write_u24::<BigEndian>(1317).unwrap();
    let packed = ((sample_rate as u64) << 44)
        | (((channels - 1) as u64) << 41)
        | (((bits_per_sample - 1) as u64) << 36)
        | total_samples;
    buf.write_u64::<BigEndian>(packed).unwrap();
    buf.write_all(&MD5).unwrap();
    buf
}

pub fn picture(picture_type: u32, mime_type: &str, description: &str, width: u32, height: u32, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.write_u32::<BigEndian>(picture_type).unwrap();
    buf.write_u32::<BigEndian>(mime_type.len() as u32).unwrap();
    buf.write_all(mime_type.as_bytes()).unwrap();
    buf.write_u32::<BigEndian>(description.len() as u32).unwrap();
    buf.write_all(description.as_bytes()).unwrap();
    buf.write_u32::<BigEndian>(width).unwrap();
    buf.write_u32::<BigEndian>(height).unwrap();
    buf.write_u32::<BigEndian>(24).unwrap();
    buf.write_u32::<BigEndian>(0).unwrap();
    buf.write_u32::<BigEndian>(data.len() as u32).unwrap();
    buf.write_all(data).unwrap();
    buf
}

pub fn vorbis_comment(vendor: &str, comments: &[&str]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.write_u32::<LittleEndian>(vendor.len() as u32).unwrap();
    buf.write_all(vendor.as_bytes()).unwrap();
    buf.write_u32::<LittleEndian>(comments.len() as u32).unwrap();
    for c in comments {
        buf.write_u32::<LittleEndian>(c.len() as u32).unwrap();
        buf.write_all(c.as_bytes()).unwrap();
    }
    buf
}

pub fn seek_table(points: &[(u64, u64, u16)]) -> Vec<u8> {
    let mut buf = Vec::new();
    for (sample_number, stream_offset, frame_samples) in points {
        buf.write_u64::<BigEndian>(*sample_number).unwrap();
        buf.write_u64::<BigEndian>(*stream_offset).unwrap();
        buf.write_u16::<BigEndian>(*frame_samples).unwrap();
    }
    buf
}

pub struct Track<'a> {
    pub offset: u64,
    pub number: u8,
    pub isrc: &'a [u8; 12],
    pub flags: u8,
    pub indices: &'a [(u64, u8)],
}

pub fn cue_sheet(catalog: &str, leadin: u64, is_cd: bool, tracks: &[Track]) -> Vec<u8> {
    cue_sheet_with_count(catalog, leadin, is_cd, tracks.len() as u8, tracks)
}

pub fn cue_sheet_with_count(catalog: &str, leadin: u64, is_cd: bool, count: u8, tracks: &[Track]) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut catalog_bytes = [0u8; 128];
    catalog_bytes[..catalog.len()].copy_from_slice(catalog.as_bytes());
    buf.write_all(&catalog_bytes).unwrap();
    buf.write_u64::<BigEndian>(leadin).unwrap();
    buf.write_u8(if is_cd { 0x80 } else { 0 }).unwrap();
    buf.write_all(&[0; 258]).unwrap();
    buf.write_u8(count).unwrap();
    for track in tracks {
        buf.write_u64::<BigEndian>(track.offset).unwrap();
        buf.write_u8(track.number).unwrap();
        buf.write_all(track.isrc).unwrap();
        buf.write_u8(track.flags).unwrap();
        buf.write_all(&[0; 13]).unwrap();
        buf.write_u8(track.indices.len() as u8).unwrap();
        for (offset, point) in track.indices {
            buf.write_u64::<BigEndian>(*offset).unwrap();
            buf.write_u8(*point).unwrap();
            buf.write_all(&[0; 3]).unwrap();
        }
    }
    buf
}

/// A FLAC file whose only block is a STREAMINFO marked as last.
pub fn minimal_flac() -> Vec<u8> {
    flac(&[block(true, 0, &stream_info(44100, 2, 16, 44100))])
}
