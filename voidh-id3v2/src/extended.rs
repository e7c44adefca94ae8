use crate::Result;
use std::io::{Cursor, Read};
use voidh_common::decode::{take, take_array, u32_be, u8};
use voidh_common::traits::Decode;
use voidh_common::DecodeError;

const MIN_EXTENDED_HEADER_SIZE: u32 = 6;

const FLAG_UPDATE: u8 = 0b0100_0000;
const FLAG_CRC: u8 = 0b0010_0000;
const FLAG_RESTRICTIONS: u8 = 0b0001_0000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtendedHeaderFlag {
    /// Tag is an update of a tag found earlier in the file.
    Update,
    /// CRC-32 of the tag data, stored as a 35-bit synchsafe integer.
    Crc([u8; 5]),
    /// Tag restrictions, `%ppqrrstt`.
    Restrictions(u8),
}

impl ExtendedHeaderFlag {
    pub fn raw(&self) -> &[u8] {
        match self {
            ExtendedHeaderFlag::Update => &[],
            ExtendedHeaderFlag::Crc(data) => data,
            ExtendedHeaderFlag::Restrictions(data) => std::slice::from_ref(data),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedHeader {
    pub size: u32,
    pub flags: Vec<ExtendedHeaderFlag>,
}

impl ExtendedHeader {
    pub fn is_update(&self) -> bool {
        self.flags.contains(&ExtendedHeaderFlag::Update)
    }

    pub fn crc(&self) -> Option<[u8; 5]> {
        self.flags.iter().find_map(|f| match f {
            ExtendedHeaderFlag::Crc(data) => Some(*data),
            _ => None,
        })
    }

    pub fn restrictions(&self) -> Option<u8> {
        self.flags.iter().find_map(|f| match f {
            ExtendedHeaderFlag::Restrictions(data) => Some(*data),
            _ => None,
        })
    }
}

/// Walk the flag bytes left to right. Each byte yields at most one record, the
/// first set bit in the order update, CRC, restrictions. Payload bytes of CRC
/// and restrictions records are taken from the bytes that follow and are not
/// themselves scanned for flags.
fn parse_flags(flag_bytes: Vec<u8>) -> Result<Vec<ExtendedHeaderFlag>> {
    let len = flag_bytes.len() as u64;
    let mut cursor = Cursor::new(flag_bytes);
    let mut flags = Vec::new();
    while cursor.position() < len {
        let b = u8(&mut cursor)?;
        if b & FLAG_UPDATE != 0 {
            flags.push(ExtendedHeaderFlag::Update);
        } else if b & FLAG_CRC != 0 {
            flags.push(ExtendedHeaderFlag::Crc(take_array(&mut cursor)?));
        } else if b & FLAG_RESTRICTIONS != 0 {
            flags.push(ExtendedHeaderFlag::Restrictions(u8(&mut cursor)?));
        }
    }
    Ok(flags)
}

impl Decode for ExtendedHeader {
    fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let size = u32_be(reader)?;
        if size < MIN_EXTENDED_HEADER_SIZE {
            return Err(DecodeError::ExtendedHeaderTooSmall { size });
        }

        let flag_bytes_count = u8(reader)?;
        let flag_bytes = take(reader, flag_bytes_count as usize)?;
        let flags = parse_flags(flag_bytes)?;
        log::trace!("extended header flags: {:?}", flags);

        Ok(ExtendedHeader { size, flags })
    }
}
