//! Decompression of the variant of RLE (run-length-encoding) used in PCX files.
//!
//! A byte with both top bits set (`0xC0..=0xFF`) is a run header: its low six bits give the run length and the next
//! byte is the value to repeat. Every other byte is a single literal value. A run header which is the last byte of the
//! region has no value to repeat and is therefore decoded as a literal.
use std::io;

use log::trace;

const RUN_MARKER: u8 = 0xC0;
const RUN_LENGTH_MASK: u8 = 0x3F;

/// Decompress RLE from a bounded region of memory.
///
/// Never reads outside of the region it was created with.
#[derive(Clone, Debug)]
pub struct Decompressor<'a> {
    data: &'a [u8],
    position: usize,

    run_count: u8,
    run_value: u8,
}

impl<'a> Decompressor<'a> {
    /// Create new decompressor over the compressed region.
    pub fn new(data: &'a [u8]) -> Self {
        Decompressor {
            data,
            position: 0,
            run_count: 0,
            run_value: 0,
        }
    }

    /// Number of compressed bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Stop decompression process and get the compressed bytes which were not consumed.
    ///
    /// Values left over from a partially emitted run are dropped.
    pub fn finish(self) -> &'a [u8] {
        &self.data[self.position..]
    }
}

impl<'a> Iterator for Decompressor<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        loop {
            if self.run_count > 0 {
                self.run_count -= 1;
                return Some(self.run_value);
            }

            let byte = *self.data.get(self.position)?;
            self.position += 1;

            if (byte & RUN_MARKER) != RUN_MARKER {
                // 1-byte code
                return Some(byte);
            }

            match self.data.get(self.position) {
                Some(&value) => {
                    // 2-byte code. A zero-length run (0xC0) produces nothing, keep going.
                    self.position += 1;
                    self.run_count = byte & RUN_LENGTH_MASK;
                    self.run_value = value;
                }
                None => {
                    trace!("run marker {:#04x} is the last byte of pixel data, decoding it as a literal", byte);
                    return Some(byte);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len() - self.position;
        let run = self.run_count as usize;
        (run, Some(run + remaining * RUN_LENGTH_MASK as usize))
    }
}

impl<'a> io::Read for Decompressor<'a> {
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        let mut written = 0;
        for (slot, byte) in buffer.iter_mut().zip(&mut *self) {
            *slot = byte;
            written += 1;
        }

        Ok(written)
    }
}

/// Decompress the whole region into a flat sequence of palette indices.
pub fn decompress(data: &[u8]) -> Vec<u8> {
    Decompressor::new(data).collect()
}

#[cfg(test)]
mod tests {
    use super::{decompress, Decompressor};
    use byteorder::ReadBytesExt;
    use std::io::Read;

    #[test]
    fn literals() {
        assert_eq!(decompress(&[0x10, 0x20, 0x30]), vec![0x10, 0x20, 0x30]);
        assert_eq!(decompress(&[0x00, 0xBF, 0x3F]), vec![0x00, 0xBF, 0x3F]);
    }

    #[test]
    fn run() {
        assert_eq!(decompress(&[0xC2, 0x07]), vec![0x07, 0x07]);
    }

    #[test]
    fn longest_run() {
        assert_eq!(decompress(&[0xFF, 0xC5]), vec![0xC5; 63]);
    }

    #[test]
    fn zero_length_run() {
        assert_eq!(decompress(&[0x01, 0xC0, 0x09, 0x02]), vec![0x01, 0x02]);
    }

    #[test]
    fn mixed() {
        assert_eq!(
            decompress(&[0x01, 0xC3, 0x05, 0x02, 0xC1, 0xC1, 0x03]),
            vec![0x01, 0x05, 0x05, 0x05, 0x02, 0xC1, 0x03]
        );
    }

    #[test]
    fn trailing_run_marker_is_literal() {
        assert_eq!(decompress(&[0x01, 0x02, 0xC1]), vec![0x01, 0x02, 0xC1]);
        assert_eq!(decompress(&[0xC2, 0x07, 0xC5]), vec![0x07, 0x07, 0xC5]);
        assert_eq!(decompress(&[0xFF]), vec![0xFF]);
    }

    #[test]
    fn trailing_run_marker_stays_within_region() {
        // The byte after the region must not be treated as the run value.
        let file = [0x04, 0xC3, 0x09, 0x09, 0x09];
        let mut decompressor = Decompressor::new(&file[..2]);
        assert_eq!(decompressor.next(), Some(0x04));
        assert_eq!(decompressor.next(), Some(0xC3));
        assert_eq!(decompressor.next(), None);
        assert_eq!(decompressor.position(), 2);
    }

    #[test]
    fn empty() {
        assert!(decompress(&[]).is_empty());
        assert_eq!(Decompressor::new(&[]).next(), None);
    }

    #[test]
    fn finish_returns_unconsumed() {
        let data = [0xC2, 0x07, 0x01, 0x02];
        let mut decompressor = Decompressor::new(&data);
        assert_eq!(decompressor.next(), Some(0x07));
        assert_eq!(decompressor.position(), 2);
        assert_eq!(decompressor.finish(), &[0x01, 0x02]);
    }

    #[test]
    fn read_across_runs() {
        let data = [0xC5, 0x07, 0x01, 0xC3, 0x02];
        let mut decompressor = Decompressor::new(&data);

        let mut buffer = [0; 3];
        assert_eq!(decompressor.read(&mut buffer).unwrap(), 3);
        assert_eq!(buffer, [7, 7, 7]);
        assert_eq!(decompressor.read(&mut buffer).unwrap(), 3);
        assert_eq!(buffer, [7, 7, 1]);
        assert_eq!(decompressor.read(&mut buffer).unwrap(), 3);
        assert_eq!(buffer, [2, 2, 2]);
        assert_eq!(decompressor.read(&mut buffer).unwrap(), 0);
    }

    #[test]
    fn read_one_by_one() {
        let data = [0x00, 0xC4, 0x80, 0x7F, 0xC1];
        let mut decompressor = Decompressor::new(&data);

        let mut result = Vec::new();
        while let Ok(byte) = decompressor.read_u8() {
            result.push(byte);
        }
        assert_eq!(result, vec![0x00, 0x80, 0x80, 0x80, 0x80, 0x7F, 0xC1]);
    }

    #[test]
    fn read_to_end_matches_iterator() {
        let data = [0x10, 0xCA, 0x33, 0xC1, 0x44, 0x20, 0xE0];
        let mut result = Vec::new();
        Decompressor::new(&data).read_to_end(&mut result).unwrap();
        assert_eq!(result, decompress(&data));
        assert_eq!(result.len(), 1 + 10 + 1 + 1 + 1);
    }

    #[test]
    fn size_hint_bounds() {
        let data = [0x10, 0xFF, 0x01];
        let decompressor = Decompressor::new(&data);
        let (lower, upper) = decompressor.size_hint();
        let count = decompressor.count();
        assert!(lower <= count);
        assert!(count <= upper.unwrap());
    }
}
