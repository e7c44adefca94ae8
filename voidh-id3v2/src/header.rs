use crate::extended::ExtendedHeader;
use crate::Result;
use std::io::Read;
use voidh_common::decode::{bit, synchsafe, token, u32_be, u8};
use voidh_common::traits::Decode;
use voidh_common::DecodeError;

pub const MAGIC_NUMBER: [u8; 3] = [0x49, 0x44, 0x33];
pub const MAX_MINOR_VERSION: u8 = 0xFE;
/// Upper bound on the raw big-endian tag size field.
pub const MAX_TAG_SIZE: u32 = 0x7E;
const HEADER_SIZE: u32 = 10;

/// Flags byte of the tag header, `%abcd0000`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderFlags {
    /// a - Unsynchronisation
    pub unsynchronisation: bool,
    /// b - Extended header
    pub extended_header: bool,
    /// c - Experimental indicator
    pub experimental: bool,
    /// d - Footer present
    pub footer: bool,
}

impl HeaderFlags {
    pub fn from_byte(flags: u8) -> Self {
        if flags & 0b0000_1111 != 0 {
            log::warn!("undefined id3v2 header flags set: {:#010b}", flags);
        }
        HeaderFlags {
            unsynchronisation: bit(flags, 7),
            extended_header: bit(flags, 6),
            experimental: bit(flags, 5),
            footer: bit(flags, 4),
        }
    }
}

/// The 10-byte ID3v2 tag header and, when flagged, its extended header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Id3v2Header {
    /// Minor version, e.g. 4 for ID3v2.4.0.
    pub minor_version: u8,
    pub revision: u8,
    pub flags: HeaderFlags,
    /// Raw big-endian size field, at most [`MAX_TAG_SIZE`].
    pub tag_size: u32,
    pub extended_header: Option<ExtendedHeader>,
}

impl Id3v2Header {
    /// Bytes occupied by the whole tag: header, tag body and optional footer.
    pub fn total_size(&self) -> u64 {
        let footer = if self.flags.footer { HEADER_SIZE } else { 0 };
        (HEADER_SIZE + footer) as u64 + self.tag_size as u64
    }

    /// The size field read as a synchsafe integer, if it is one.
    pub fn synchsafe_tag_size(&self) -> Option<u32> {
        synchsafe(self.tag_size)
    }
}

impl Decode for Id3v2Header {
    fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        token(reader, &MAGIC_NUMBER, 0)?;

        let minor_version = u8(reader)?;
        if minor_version > MAX_MINOR_VERSION {
            return Err(DecodeError::InvalidVersion {
                max: MAX_MINOR_VERSION,
                actual: minor_version,
            });
        }
        let revision = u8(reader)?;
        let flags = HeaderFlags::from_byte(u8(reader)?);
        let tag_size = u32_be(reader)?;
        if tag_size > MAX_TAG_SIZE {
            return Err(DecodeError::InvalidTagSize {
                max: MAX_TAG_SIZE,
                raw: tag_size,
            });
        }

        let extended_header = if flags.extended_header {
            Some(ExtendedHeader::from_reader(reader)?)
        } else {
            None
        };

        log::debug!(
            "decoded id3v2.{}.{} header, tag size = {}, flags = {:?}",
            minor_version,
            revision,
            tag_size,
            flags
        );
        Ok(Id3v2Header {
            minor_version,
            revision,
            flags,
            tag_size,
            extended_header,
        })
    }
}

/// Decode an ID3v2 tag header from the start of `reader`.
pub fn decode_header<R: Read>(mut reader: R) -> Result<Id3v2Header> {
    Id3v2Header::from_reader(&mut reader)
}
