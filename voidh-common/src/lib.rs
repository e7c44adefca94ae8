pub mod bits;
pub mod counter;
pub mod decode;
pub mod error;
pub mod traits;

pub use bits::BitUnpacker;
pub use counter::CountingReader;
pub use error::{DecodeError, DecodeResult};
