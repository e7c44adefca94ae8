use crate::prelude::*;
use std::io::Read;
use voidh_common::decode::{take_string, u32_le};

/// Also known as FLAC tags, the contents of a vorbis comment packet as specified here (without the framing bit).
/// Note that the vorbis comment spec allows for on the order of 2 ^ 64 bytes of data where as the FLAC metadata block is limited to 2 ^ 24 bytes.
/// Also note that the 32-bit field lengths are **little-endian** coded according to the vorbis spec, as opposed to the usual big-endian coding of fixed-length integers in the rest of FLAC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockVorbisComment {
    // [vendor_length] = read an unsigned integer of 32 bits
    /// [vendor_string] = read a UTF-8 vector as [vendor_length] octets
    pub vendor_string: String,

    // [user_comment_list_length] = read an unsigned integer of 32 bits
    /// iterate [user_comment_list_length] times
    pub comments: Vec<UserComment>,
}

impl BlockVorbisComment {
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserComment> {
        self.comments.iter()
    }

    /// First comment whose field name matches `key`, ignoring ASCII case.
    pub fn get(&self, key: &str) -> Option<&UserComment> {
        self.comments
            .iter()
            .find(|c| c.key_raw().eq_ignore_ascii_case(key))
    }

    /// Every value stored under `key`, in stream order.
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.comments
            .iter()
            .filter(move |c| c.key_raw().eq_ignore_ascii_case(key))
            .map(|c| c.value())
    }
}

impl Decode for BlockVorbisComment {
    fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let vendor_length = u32_le(reader)?;
        let vendor_string = take_string(reader, vendor_length as usize)?;
        let comment_number = u32_le(reader)?;
        let mut comments = Vec::with_capacity((comment_number as usize).min(1024));

        for _ in 0..comment_number {
            comments.push(UserComment::from_reader(reader)?);
        }

        Ok(BlockVorbisComment {
            vendor_string,
            comments,
        })
    }
}

/// A single `NAME=value` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserComment {
    comment: String,
    value_offset: usize,
}

impl UserComment {
    /// Split `comment` on its first `=`.
    pub fn parse(comment: String) -> Result<Self> {
        match comment.find('=') {
            Some(value_offset) => Ok(Self {
                comment,
                value_offset,
            }),
            None => Err(DecodeError::VorbisCommentStructureError {
                offending_comment: comment,
            }),
        }
    }

    pub fn key(&self) -> String {
        self.key_raw().to_ascii_uppercase()
    }

    pub fn key_raw(&self) -> &str {
        &self.comment[..self.value_offset]
    }

    pub fn is_key_uppercase(&self) -> bool {
        self.key_raw().chars().all(|c| !c.is_ascii_lowercase())
    }

    pub fn value(&self) -> &str {
        &self.comment[self.value_offset + 1..]
    }

    pub fn entry(&self) -> &str {
        &self.comment
    }
}

impl Decode for UserComment {
    fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        // [length] = read an unsigned integer of 32 bits
        let length = u32_le(reader)?;
        let comment = take_string(reader, length as usize)?;
        log::trace!("vorbis comment: {}", comment);
        UserComment::parse(comment)
    }
}
