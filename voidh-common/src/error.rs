use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors raised while decoding FLAC metadata or ID3v2 headers.
///
/// Every variant is terminal for the decode call that produced it.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(
        "unexpected byte sequence at offset {offset:#x}, expected {}, got {}",
        hex::encode(.expected),
        hex::encode(.actual)
    )]
    InvalidTag {
        offset: u64,
        expected: Vec<u8>,
        actual: Vec<u8>,
    },
    #[error("invalid metadata block type {0}")]
    InvalidMetadataBlockType(u8),
    #[error("invalid first block, must be StreamInfo")]
    InvalidFirstBlock,
    #[error("stream contains more than one StreamInfo block")]
    DuplicateStreamInfo,
    #[error("invalid cuesheet track count {num}")]
    InvalidTracksNum { num: u8 },
    #[error("vorbis comment `{offending_comment}` has no `=` separator")]
    VorbisCommentStructureError { offending_comment: String },
    #[error("extended header size {size} is smaller than 6 bytes")]
    ExtendedHeaderTooSmall { size: u32 },
    #[error("invalid id3v2 minor version, expected at most {max:#x}, got {actual:#x}")]
    InvalidVersion { max: u8, actual: u8 },
    #[error("invalid tag size, expected at most {max:#x}, got {raw:#x}")]
    InvalidTagSize { max: u32, raw: u32 },
    #[error("block declared {declared} bytes but {actual} bytes were consumed")]
    LengthMismatch { declared: u64, actual: u64 },
    #[error("cannot unpack {requested} bits after {consumed} of 64 were consumed")]
    BitOverflow { consumed: u8, requested: u8 },
    #[error(transparent)]
    InvalidString(#[from] FromUtf8Error),
    #[error("failed to open {path:?}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unexpected end of input: {0}")]
    UnexpectedEndOfInput(#[source] io::Error),
}

impl From<io::Error> for DecodeError {
    fn from(err: io::Error) -> Self {
        DecodeError::UnexpectedEndOfInput(err)
    }
}

impl DecodeError {
    /// Whether the input ended (or the source failed) before the structure was complete.
    pub fn is_truncated(&self) -> bool {
        matches!(self, DecodeError::UnexpectedEndOfInput(_))
    }
}

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
