use crate::blocks::{BlockPicture, BlockStreamInfo, BlockVorbisComment};
use crate::frames::Frame;
use crate::prelude::*;
use crate::{BlockType, DecodeOptions, MetadataBlock, MetadataBlockData, MetadataBlockHeader};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use voidh_common::decode::{skip, token};
use voidh_common::CountingReader;

pub const MAGIC_NUMBER: [u8; 4] = [0x66, 0x4c, 0x61, 0x63];

/// https://xiph.org/flac/format.html
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stream {
    pub metadata_blocks: Vec<MetadataBlock>,
    pub frames: Vec<Frame>,
}

impl Stream {
    /// Decode the FLAC file at `path`.
    ///
    /// Failing to open the file is reported as [`DecodeError::OpenFile`]. Read
    /// failures after that surface as truncation like any other byte source.
    pub fn from_file<P: AsRef<Path>>(path: P, options: &DecodeOptions) -> Result<Self> {
        let path = path.as_ref();
        log::trace!("Decoding flac file: {:?}", path);
        let file = File::open(path).map_err(|source| DecodeError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;
        decode_stream(BufReader::new(file), options)
    }

    pub fn blocks_of(&self, block_type: BlockType) -> impl Iterator<Item = &MetadataBlock> {
        self.metadata_blocks
            .iter()
            .filter(move |b| b.block_type() == block_type)
    }

    pub fn stream_info(&self) -> Option<&BlockStreamInfo> {
        self.metadata_blocks.iter().find_map(|b| match &b.data {
            MetadataBlockData::StreamInfo(info) => Some(info),
            _ => None,
        })
    }

    pub fn comments(&self) -> Option<&BlockVorbisComment> {
        self.metadata_blocks.iter().find_map(|b| match &b.data {
            MetadataBlockData::Comment(c) => Some(c),
            _ => None,
        })
    }

    pub fn pictures(&self) -> impl Iterator<Item = &BlockPicture> {
        self.metadata_blocks.iter().filter_map(|b| match &b.data {
            MetadataBlockData::Picture(p) => Some(p),
            _ => None,
        })
    }
}

/// Decode a FLAC stream from `reader`.
///
/// The magic number is checked first, then metadata blocks are read until the one
/// flagged as last. The first block must be STREAMINFO and no other STREAMINFO may follow.
pub fn decode_stream<R: Read>(reader: R, options: &DecodeOptions) -> Result<Stream> {
    let mut reader = CountingReader::new(reader);
    token(&mut reader, &MAGIC_NUMBER, 0)?;

    let mut metadata_blocks = Vec::new();
    let mut index = 0usize;
    loop {
        let header = MetadataBlockHeader::from_reader(&mut reader)?;
        match (index, header.block_type) {
            (0, BlockType::StreamInfo) => {}
            (0, _) => return Err(DecodeError::InvalidFirstBlock),
            (_, BlockType::StreamInfo) => return Err(DecodeError::DuplicateStreamInfo),
            _ => {}
        }

        if options.metadata {
            metadata_blocks.push(MetadataBlock::from_counting_reader(&mut reader, header)?);
        } else {
            log::trace!("skipping {} block, length = {}", header.block_type.as_str(), header.length);
            skip(&mut reader, header.length as u64)?;
        }

        index += 1;
        if header.is_last {
            break;
        }
    }
    log::debug!(
        "metadata chain ends after {} blocks at offset {}",
        index,
        reader.bytes_consumed()
    );

    if options.frames {
        log::warn!("frame decoding is not supported, no frames will be returned");
    }

    Ok(Stream {
        metadata_blocks,
        frames: Vec::new(),
    })
}
