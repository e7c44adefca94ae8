use crate::prelude::*;
use std::io::Read;
use voidh_common::decode::{take, u32_be};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockApplication {
    /// Registered application ID.
    /// (Visit the [registration page](https://xiph.org/flac/id.html) to register an ID with FLAC.)
    pub application_id: u32,
    /// Application data (n must be a multiple of 8)
    pub data: Vec<u8>,
}

impl DecodeSized for BlockApplication {
    fn from_reader_sized<R: Read>(reader: &mut R, size: usize) -> Result<Self> {
        let application_id = u32_be(reader)?;
        // a block shorter than the id is reported by the length check of the caller
        let data = take(reader, size.saturating_sub(4))?;
        Ok(BlockApplication {
            application_id,
            data,
        })
    }
}
