use crate::prelude::*;
use std::io::Read;
use std::time::Duration;
use voidh_common::decode::{take_array, u16_be, u24_be, u64_be};
use voidh_common::BitUnpacker;

/// Notes:
/// FLAC specifies a minimum block size of 16 and a maximum block size of 65535,
/// meaning the bit patterns corresponding to the numbers 0-15 in the minimum blocksize and maximum blocksize fields are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStreamInfo {
    /// <16> The minimum block size (in samples) used in the stream.
    pub min_block_size: u16,
    /// <16> The maximum block size (in samples) used in the stream.
    pub max_block_size: u16,
    /// <24> The minimum frame size (in bytes) used in the stream. May be 0 to imply the value is not known.
    pub min_frame_size: u32,
    /// <24> The maximum frame size (in bytes) used in the stream. May be 0 to imply the value is not known.
    pub max_frame_size: u32,
    /// <20> Sample rate in Hz.
    /// Though 20 bits are available, the maximum sample rate is limited by the structure of frame headers to 655350Hz.
    /// Also, a value of 0 is invalid.
    pub sample_rate: u32,
    /// <3> (number of channels)-1, stored here as the real channel count.
    /// FLAC supports from 1 to 8 channels
    pub channels: u8,
    /// <5> (bits per sample)-1, stored here as the real bit depth.
    /// FLAC supports from 4 to 32 bits per sample.
    pub bits_per_sample: u8,
    /// <36> Total samples in stream.
    /// 'Samples' means inter-channel sample, i.e. one second of 44.1Khz audio will have 44100 samples regardless of the number of channels.
    /// A value of zero here means the number of total samples is unknown.
    pub total_samples: u64,
    /// <128> MD5 signature of the unencoded audio data.
    pub md5_signature: [u8; 16],
}

impl BlockStreamInfo {
    /// (Minimum blocksize == maximum blocksize) implies a fixed-blocksize stream.
    pub fn is_fixed_blocksize_stream(&self) -> bool {
        self.min_block_size == self.max_block_size
    }

    /// Playback length, if both the sample rate and the sample count are known.
    pub fn duration(&self) -> Option<Duration> {
        if self.sample_rate == 0 || self.total_samples == 0 {
            return None;
        }
        let secs = self.total_samples / self.sample_rate as u64;
        let rest = self.total_samples % self.sample_rate as u64;
        Some(Duration::from_secs(secs) + Duration::from_nanos(rest * 1_000_000_000 / self.sample_rate as u64))
    }
}

impl Decode for BlockStreamInfo {
    fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let min_block_size = u16_be(reader)?;
        let max_block_size = u16_be(reader)?;
        let min_frame_size = u24_be(reader)?;
        let max_frame_size = u24_be(reader)?;

        // <20> sample rate, <3> channels - 1, <5> bits per sample - 1, <36> total samples
        let mut unpacker = BitUnpacker::new(u64_be(reader)?);
        let sample_rate = unpacker.unpack(20)? as u32;
        let channels = unpacker.unpack(3)? as u8 + 1;
        let bits_per_sample = unpacker.unpack(5)? as u8 + 1;
        let total_samples = unpacker.unpack(36)?;

        let md5_signature = take_array(reader)?;

        Ok(BlockStreamInfo {
            min_block_size,
            max_block_size,
            min_frame_size,
            max_frame_size,
            sample_rate,
            channels,
            bits_per_sample,
            total_samples,
            md5_signature,
        })
    }
}
