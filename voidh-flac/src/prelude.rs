pub use voidh_common::traits::{Decode, DecodeSized};
pub use voidh_common::DecodeError;

pub type Result<I> = std::result::Result<I, DecodeError>;
