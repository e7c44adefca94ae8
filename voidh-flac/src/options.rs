use serde::Deserialize;

/// Controls which parts of a FLAC stream are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Decode metadata block bodies. When disabled, blocks are skipped by their declared length.
    pub metadata: bool,
    /// Decode audio frames. Not supported yet; enabling it only logs a warning.
    pub frames: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            metadata: true,
            frames: false,
        }
    }
}

impl DecodeOptions {
    pub fn skip_metadata() -> Self {
        DecodeOptions {
            metadata: false,
            ..Self::default()
        }
    }
}
