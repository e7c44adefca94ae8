use crate::prelude::*;
use std::io::Read;
use voidh_common::decode::{bit, take, take_array, u64_be, u8};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockCueSheet {
    /// <128*8> Media catalog number, in ASCII printable characters 0x20-0x7e.
    /// In general, the media catalog number may be 0 to 128 bytes long; any unused characters should be right-padded with NUL characters.
    /// For CD-DA, this is a thirteen digit number, followed by 115 NUL bytes.
    pub catalog: [u8; 128],
    /// <64> The number of lead-in samples.
    /// This field has meaning only for CD-DA cuesheets; for other uses it should be 0.
    /// For CD-DA, the lead-in is the TRACK 00 area where the table of contents is stored;
    /// more precisely, it is the number of samples from the first sample of the media to the first sample of the first index point of the first track.
    pub leadin_samples: u64,
    /// <1> 1 if the CUESHEET corresponds to a Compact Disc, else 0.
    pub is_cd: bool,
    // <7+258*8> Reserved. All bits must be set to zero.
    // <8> The number of tracks.
    /// One or more tracks.
    /// A CUESHEET block is required to have a lead-out track; it is always the last track in the CUESHEET.
    /// For CD-DA, the lead-out track number must be 170 as specified by the Red Book, otherwise is must be 255.
    pub tracks: Vec<CueSheetTrack>,
}

impl BlockCueSheet {
    /// Catalog number with the NUL padding stripped.
    pub fn catalog_number(&self) -> String {
        let end = self.catalog.iter().position(|b| *b == 0).unwrap_or(self.catalog.len());
        String::from_utf8_lossy(&self.catalog[..end]).into_owned()
    }
}

fn check_reserved(what: &str, reserved: &[u8]) {
    if reserved.iter().any(|b| *b != 0) {
        log::warn!("non-zero reserved bits in {}", what);
    }
}

impl Decode for BlockCueSheet {
    fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let catalog = take_array(reader)?;
        let leadin_samples = u64_be(reader)?;
        let b = u8(reader)?;
        let is_cd = bit(b, 7);
        check_reserved("cuesheet", &[b & 0b0111_1111]);
        check_reserved("cuesheet", &take(reader, 258)?);

        // Must be at least 1 because of the requisite lead-out track.
        let track_number = u8(reader)?;
        if track_number == 0 {
            return Err(DecodeError::InvalidTracksNum { num: track_number });
        }

        let mut tracks = Vec::with_capacity(track_number as usize);
        for _ in 0..track_number {
            tracks.push(CueSheetTrack::from_reader(reader)?);
        }
        Ok(BlockCueSheet {
            catalog,
            leadin_samples,
            is_cd,
            tracks,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueSheetTrack {
    /// <64> Track offset in samples, relative to the beginning of the FLAC audio stream.
    /// It is the offset to the first index point of the track.
    pub track_offset: u64,
    /// <8> Track number.
    /// A track number of 0 is not allowed to avoid conflicting with the CD-DA spec, which reserves this for the lead-in.
    /// For CD-DA the number must be 1-99, or 170 for the lead-out; for non-CD-DA, the track number must for 255 for the lead-out.
    pub track_number: u8,
    /// <12*8> Track ISRC.
    /// A value of 12 ASCII NUL characters may be used to denote absence of an ISRC.
    pub isrc: [u8; 12],
    /// <1> The track type: 0 for audio, 1 for non-audio.
    pub is_audio: bool,
    /// <1> The pre-emphasis flag: 0 for no pre-emphasis, 1 for pre-emphasis.
    pub is_pre_emphasis: bool,
    // <6+13*8> Reserved. All bits must be set to zero.
    // <8> The number of track index points.
    /// For all tracks except the lead-out track, one or more track index points.
    pub track_index: Vec<CueSheetTrackIndex>,
}

impl CueSheetTrack {
    pub fn isrc(&self) -> Option<String> {
        if self.isrc.iter().all(|b| *b == 0) {
            None
        } else {
            Some(String::from_utf8_lossy(&self.isrc).into_owned())
        }
    }

    pub fn is_lead_out(&self) -> bool {
        self.track_number == 170 || self.track_number == 255
    }
}

impl Decode for CueSheetTrack {
    fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let track_offset = u64_be(reader)?;
        let track_number = u8(reader)?;
        let isrc = take_array(reader)?;

        let b = u8(reader)?;
        let is_audio = bit(b, 7);
        let is_pre_emphasis = bit(b, 6);
        check_reserved("cuesheet track", &[b & 0b0011_1111]);
        check_reserved("cuesheet track", &take(reader, 13)?);

        let index_point_number = u8(reader)?;
        let mut track_index = Vec::with_capacity(index_point_number as usize);
        for _ in 0..index_point_number {
            track_index.push(CueSheetTrackIndex::from_reader(reader)?);
        }

        Ok(CueSheetTrack {
            track_offset,
            track_number,
            isrc,
            is_audio,
            is_pre_emphasis,
            track_index,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueSheetTrackIndex {
    /// <64> Offset in samples, relative to the track offset, of the index point.
    pub sample_offset: u64,
    /// <8> The index point number.
    pub index_point: u8,
    // <3*8> Reserved. All bits must be set to zero.
}

impl Decode for CueSheetTrackIndex {
    fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let sample_offset = u64_be(reader)?;
        let index_point = u8(reader)?;
        let reserved: [u8; 3] = take_array(reader)?;
        check_reserved("cuesheet track index", &reserved);
        Ok(CueSheetTrackIndex {
            sample_offset,
            index_point,
        })
    }
}
