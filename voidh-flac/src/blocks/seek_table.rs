use crate::prelude::*;
use std::io::Read;
use voidh_common::decode::{u16_be, u64_be};

const SEEK_POINT_SIZE: usize = 18;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSeekTable {
    pub seek_points: Vec<SeekPoint>,
}

/// Notes:
/// - For placeholder points, the second and third field values are undefined.
/// - Seek points within a table must be sorted in ascending order by sample number.
/// - Seek points within a table must be unique by sample number, with the exception of placeholder points.
/// - The previous two notes imply that there may be any number of placeholder points, but they must all occur at the end of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeekPoint {
    // Sample number of first sample in the target frame, or 0xFFFFFFFFFFFFFFFF for a placeholder point.
    pub sample_number: u64,
    // Offset (in bytes) from the first byte of the first frame header to the first byte of the target frame's header.
    pub stream_offset: u64,
    // Number of samples in the target frame.
    pub frame_samples: u16,
}

impl SeekPoint {
    pub fn is_placeholder(&self) -> bool {
        self.sample_number == 0xFFFFFFFFFFFFFFFF
    }
}

impl DecodeSized for BlockSeekTable {
    /// The number of seek points is implied by the metadata header 'length' field, i.e. equal to length / 18.
    /// Points are read while fewer than `size` bytes have been consumed, so a size
    /// that is not a multiple of 18 over-reads and fails the caller's length check.
    fn from_reader_sized<R: Read>(reader: &mut R, size: usize) -> Result<Self> {
        let mut seek_points = Vec::with_capacity(size / SEEK_POINT_SIZE);
        let mut read = 0;
        while read < size {
            let sample_number = u64_be(reader)?;
            let stream_offset = u64_be(reader)?;
            let frame_samples = u16_be(reader)?;
            log::trace!(
                "seek point: sample_number={}, stream_offset={}, frame_samples={}",
                sample_number,
                stream_offset,
                frame_samples
            );
            seek_points.push(SeekPoint {
                sample_number,
                stream_offset,
                frame_samples,
            });
            read += SEEK_POINT_SIZE;
        }

        Ok(BlockSeekTable { seek_points })
    }
}
