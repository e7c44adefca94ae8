#[macro_use]
extern crate num_derive;

mod header;
mod options;
mod stream;

pub use header::*;
pub use options::DecodeOptions;
pub use stream::*;

pub mod blocks;
pub mod frames;
pub mod prelude;

pub use voidh_common::DecodeError;
