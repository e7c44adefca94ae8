mod extended;
mod header;

pub use extended::*;
pub use header::*;

pub use voidh_common::DecodeError;

pub type Result<I> = std::result::Result<I, DecodeError>;
