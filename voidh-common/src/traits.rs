use std::io::Read;

use crate::error::DecodeResult;

pub trait Decode: Sized {
    fn from_reader<R: Read>(reader: &mut R) -> DecodeResult<Self>;
}

/// Decoding of structures whose extent is given by an enclosing length field.
pub trait DecodeSized: Sized {
    fn from_reader_sized<R: Read>(reader: &mut R, size: usize) -> DecodeResult<Self>;
}
