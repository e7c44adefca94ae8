/// An audio frame following the metadata chain.
///
/// Frame decoding is not implemented, so a decoded [`Stream`](crate::Stream)
/// never contains any.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Frame {}
