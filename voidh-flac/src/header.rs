use crate::blocks::*;
use crate::prelude::*;
use num_traits::FromPrimitive;
use std::io::Read;
use voidh_common::decode::{skip, u24_be, u8};
use voidh_common::CountingReader;

#[repr(u8)]
#[derive(Copy, Clone, Debug, FromPrimitive, PartialEq, Eq)]
pub enum BlockType {
    StreamInfo = 0,
    Padding = 1,
    Application = 2,
    SeekTable = 3,
    VorbisComment = 4,
    CueSheet = 5,
    Picture = 6,
}

impl BlockType {
    /// 7-126 are reserved and 127 is invalid; all of them are rejected.
    pub fn from_u8(block_type: u8) -> Result<Self> {
        <BlockType as FromPrimitive>::from_u8(block_type).ok_or(DecodeError::InvalidMetadataBlockType(block_type))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::StreamInfo => "STREAMINFO",
            BlockType::Padding => "PADDING",
            BlockType::Application => "APPLICATION",
            BlockType::SeekTable => "SEEKTABLE",
            BlockType::VorbisComment => "VORBIS_COMMENT",
            BlockType::CueSheet => "CUESHEET",
            BlockType::Picture => "PICTURE",
        }
    }
}

/// Header of a metadata block: <1> last-metadata-block flag, <7> block type, <24> length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataBlockHeader {
    pub is_last: bool,
    pub block_type: BlockType,
    pub length: u32,
}

impl Decode for MetadataBlockHeader {
    fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let first_byte = u8(reader)?;
        let block_type = BlockType::from_u8(first_byte & 0b01111111)?;
        let length = u24_be(reader)?;
        Ok(MetadataBlockHeader {
            is_last: first_byte & 0b10000000 > 0,
            block_type,
            length,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataBlock {
    pub is_last: bool,
    pub length: u32,
    pub data: MetadataBlockData,
}

impl MetadataBlock {
    pub fn block_type(&self) -> BlockType {
        self.data.block_type()
    }

    /// Decode the body described by `header`, checking that exactly `header.length` bytes were consumed.
    pub(crate) fn from_counting_reader<R: Read>(
        reader: &mut CountingReader<R>,
        header: MetadataBlockHeader,
    ) -> Result<Self> {
        let start = reader.bytes_consumed();
        let length = header.length as usize;
        let data = match header.block_type {
            BlockType::StreamInfo => MetadataBlockData::StreamInfo(BlockStreamInfo::from_reader(reader)?),
            BlockType::Padding => {
                skip(reader, length as u64)?;
                MetadataBlockData::Padding(length)
            }
            BlockType::Application => {
                MetadataBlockData::Application(BlockApplication::from_reader_sized(reader, length)?)
            }
            BlockType::SeekTable => MetadataBlockData::SeekTable(BlockSeekTable::from_reader_sized(reader, length)?),
            BlockType::VorbisComment => MetadataBlockData::Comment(BlockVorbisComment::from_reader(reader)?),
            BlockType::CueSheet => MetadataBlockData::CueSheet(BlockCueSheet::from_reader(reader)?),
            BlockType::Picture => MetadataBlockData::Picture(BlockPicture::from_reader(reader)?),
        };

        let actual = reader.bytes_consumed() - start;
        if actual != header.length as u64 {
            return Err(DecodeError::LengthMismatch {
                declared: header.length as u64,
                actual,
            });
        }

        log::debug!(
            "decoded {} block, length = {}, is_last = {}",
            header.block_type.as_str(),
            header.length,
            header.is_last
        );
        Ok(MetadataBlock {
            is_last: header.is_last,
            length: header.length,
            data,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataBlockData {
    StreamInfo(BlockStreamInfo),
    Padding(usize),
    Application(BlockApplication),
    SeekTable(BlockSeekTable),
    Comment(BlockVorbisComment),
    CueSheet(BlockCueSheet),
    Picture(BlockPicture),
}

impl MetadataBlockData {
    pub fn block_type(&self) -> BlockType {
        match self {
            MetadataBlockData::StreamInfo(_) => BlockType::StreamInfo,
            MetadataBlockData::Padding(_) => BlockType::Padding,
            MetadataBlockData::Application(_) => BlockType::Application,
            MetadataBlockData::SeekTable(_) => BlockType::SeekTable,
            MetadataBlockData::Comment(_) => BlockType::VorbisComment,
            MetadataBlockData::CueSheet(_) => BlockType::CueSheet,
            MetadataBlockData::Picture(_) => BlockType::Picture,
        }
    }
}
