//! PCX file header.
use byteorder::{ByteOrder, LittleEndian};
use log::debug;

use crate::error::{DecodingError, Stage};
use crate::low_level::{HEADER_LENGTH, MAGIC_BYTE, RLE_ENCODING};

// Only the leading 12 bytes of the 128-byte header are consumed:
//
//   0  u8   manufacturer (always 0x0A)
//   1  u8   version
//   2  u8   encoding (1 = RLE)
//   3  u8   bits per pixel
//   4  u16  x_min
//   6  u16  y_min
//   8  u16  x_max
//  10  u16  y_max
//
// Resolution, the 16-color EGA palette, plane count and lane length that follow are ignored.

/// Parsed header of PCX file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Header {
    /// Version of the file format. Informational only, any value is accepted.
    pub version: u8,

    /// Bits per pixel per plane as stored in the file. Informational only, pixel data is always decoded as 8 bits per pixel.
    pub bit_depth: u8,

    /// Top-left corner of the image bounding box, `(x_min, y_min)`.
    pub start: (u16, u16),

    /// Bottom-right corner of the image bounding box, inclusive, `(x_max, y_max)`.
    pub end: (u16, u16),
}

impl Header {
    /// Parse header from the beginning of `data`. Only the first 128 bytes are looked at.
    pub fn parse(data: &[u8]) -> Result<Self, DecodingError> {
        if data.len() < HEADER_LENGTH {
            return Err(DecodingError::FileTooSmall {
                stage: Stage::Header,
                length: data.len(),
                required: HEADER_LENGTH,
            });
        }

        let magic = data[0];
        if magic != MAGIC_BYTE {
            return Err(DecodingError::InvalidManufacturer(magic));
        }

        let version = data[1];

        let encoding = data[2];
        if encoding != RLE_ENCODING {
            return Err(DecodingError::UnsupportedEncoding(encoding));
        }

        let bit_depth = data[3];

        let x_min = LittleEndian::read_u16(&data[4..6]);
        let y_min = LittleEndian::read_u16(&data[6..8]);
        let x_max = LittleEndian::read_u16(&data[8..10]);
        let y_max = LittleEndian::read_u16(&data[10..12]);

        // Unsigned subtraction must not wrap: reversed bounds mean a non-positive size.
        if x_max < x_min || y_max < y_min {
            return Err(DecodingError::InvalidDimensions {
                x_min,
                y_min,
                x_max,
                y_max,
            });
        }

        let header = Header {
            version,
            bit_depth,
            start: (x_min, y_min),
            end: (x_max, y_max),
        };

        debug!(
            "PCX header: version {}, {} bits per pixel, {}x{} at ({}, {})",
            version,
            bit_depth,
            header.width(),
            header.height(),
            x_min,
            y_min
        );

        Ok(header)
    }

    /// Width of the image, `x_max - x_min + 1`. Never zero.
    #[inline]
    pub fn width(&self) -> u32 {
        u32::from(self.end.0) - u32::from(self.start.0) + 1
    }

    /// Height of the image, `y_max - y_min + 1`. Never zero.
    #[inline]
    pub fn height(&self) -> u32 {
        u32::from(self.end.1) - u32::from(self.start.1) + 1
    }

    /// Width and height of the image.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Number of pixels in the image.
    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
}

#[cfg(test)]
pub(crate) fn raw_header(x_min: u16, y_min: u16, x_max: u16, y_max: u16) -> [u8; HEADER_LENGTH] {
    let mut header = [0; HEADER_LENGTH];
    header[0] = MAGIC_BYTE;
    header[1] = 5;
    header[2] = RLE_ENCODING;
    header[3] = 8;
    LittleEndian::write_u16(&mut header[4..6], x_min);
    LittleEndian::write_u16(&mut header[6..8], y_min);
    LittleEndian::write_u16(&mut header[8..10], x_max);
    LittleEndian::write_u16(&mut header[10..12], y_max);
    header
}
