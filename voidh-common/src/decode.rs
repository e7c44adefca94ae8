use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::{self, Read};

pub use crate::error::{DecodeError, DecodeResult};

/// Read exactly `len` bytes.
pub fn take<R: Read>(reader: &mut R, len: usize) -> DecodeResult<Vec<u8>> {
    let mut r = Vec::with_capacity(len.min(64 * 1024));
    let got = io::copy(&mut reader.take(len as u64), &mut r)?;
    if got < len as u64 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(r)
}

#[inline]
pub fn take_array<R: Read, const N: usize>(reader: &mut R) -> DecodeResult<[u8; N]> {
    let mut r = [0u8; N];
    reader.read_exact(&mut r)?;
    Ok(r)
}

#[inline]
pub fn take_string<R: Read>(reader: &mut R, len: usize) -> DecodeResult<String> {
    Ok(String::from_utf8(take(reader, len)?)?)
}

/// Discard exactly `len` bytes.
pub fn skip<R: Read>(reader: &mut R, len: u64) -> DecodeResult<()> {
    let got = io::copy(&mut reader.take(len), &mut io::sink())?;
    if got < len {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(())
}

/// Read `token.len()` bytes and compare them with `token`.
///
/// `offset` is only used for error reporting.
pub fn token<R: Read>(reader: &mut R, token: &[u8], offset: u64) -> DecodeResult<()> {
    let got = take(reader, token.len())?;
    if got[..] == token[..] {
        Ok(())
    } else {
        Err(DecodeError::InvalidTag {
            offset,
            expected: token.to_owned(),
            actual: got,
        })
    }
}

#[inline]
pub fn u8<R: Read>(reader: &mut R) -> DecodeResult<u8> {
    Ok(reader.read_u8()?)
}

#[inline]
pub fn u16_be<R: Read>(reader: &mut R) -> DecodeResult<u16> {
    Ok(reader.read_u16::<BigEndian>()?)
}

#[inline]
pub fn u16_le<R: Read>(reader: &mut R) -> DecodeResult<u16> {
    Ok(reader.read_u16::<LittleEndian>()?)
}

#[inline]
pub fn u24_be<R: Read>(reader: &mut R) -> DecodeResult<u32> {
    Ok(reader.read_u24::<BigEndian>()?)
}

#[inline]
pub fn u24_le<R: Read>(reader: &mut R) -> DecodeResult<u32> {
    Ok(reader.read_u24::<LittleEndian>()?)
}

#[inline]
pub fn u32_be<R: Read>(reader: &mut R) -> DecodeResult<u32> {
    Ok(reader.read_u32::<BigEndian>()?)
}

#[inline]
pub fn u32_le<R: Read>(reader: &mut R) -> DecodeResult<u32> {
    Ok(reader.read_u32::<LittleEndian>()?)
}

#[inline]
pub fn u64_be<R: Read>(reader: &mut R) -> DecodeResult<u64> {
    Ok(reader.read_u64::<BigEndian>()?)
}

#[inline]
pub fn u64_le<R: Read>(reader: &mut R) -> DecodeResult<u64> {
    Ok(reader.read_u64::<LittleEndian>()?)
}

/// Interpret `raw` as a 32-bit synchsafe integer: four bytes carrying 7 bits each.
///
/// Returns `None` if the MSB of any byte is set.
pub fn synchsafe(raw: u32) -> Option<u32> {
    if raw & 0x8080_8080 != 0 {
        return None;
    }
    Some((raw & 0x7f) | ((raw >> 1) & 0x3f80) | ((raw >> 2) & 0x001f_c000) | ((raw >> 3) & 0x0fe0_0000))
}

/// Whether the bit at position `n` (0 = least significant) is set.
#[inline]
pub fn bit(byte: u8, n: u8) -> bool {
    byte & (1 << n) != 0
}
