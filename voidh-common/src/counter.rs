use std::io::{self, Read};

use crate::decode::DecodeResult;

/// Sequential reader that keeps track of how many bytes have been handed out.
///
/// Partial reads count too, so after an error the counter still reflects
/// every byte that was actually consumed from the source.
pub struct CountingReader<R> {
    inner: R,
    consumed: u64,
}

impl<R: Read> CountingReader<R> {
    pub fn new(inner: R) -> Self {
        CountingReader { inner, consumed: 0 }
    }

    pub fn read_byte(&mut self) -> DecodeResult<u8> {
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    pub fn read_bytes(&mut self, len: usize) -> DecodeResult<Vec<u8>> {
        crate::decode::take(self, len)
    }

    pub fn bytes_consumed(&self) -> u64 {
        self.consumed
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.consumed += n as u64;
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::CountingReader;
    use std::io::Cursor;

    #[test]
    fn count_empty() {
        let mut reader = CountingReader::new(Cursor::new(Vec::<u8>::new()));
        assert!(reader.read_byte().unwrap_err().is_truncated());
        assert_eq!(reader.bytes_consumed(), 0);
    }

    #[test]
    fn count_bytes() {
        let input = [0xDE, 0xAD, 0xBE, 0xEF];
        let mut reader = CountingReader::new(Cursor::new(input));
        for (i, expected) in input.iter().enumerate() {
            assert_eq!(reader.read_byte().unwrap(), *expected);
            assert_eq!(reader.bytes_consumed(), i as u64 + 1);
        }
    }

    #[test]
    fn partial_read_is_counted() {
        let mut reader = CountingReader::new(Cursor::new([1u8, 2, 3]));
        assert!(reader.read_bytes(5).unwrap_err().is_truncated());
        assert_eq!(reader.bytes_consumed(), 3);
    }
}
