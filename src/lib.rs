//! Library for decoding 256-color PCX images.
//!
//! A PCX file of this kind is a 128-byte header, an RLE-compressed stream of palette indices (one byte per pixel) and
//! a 256-color palette taking the last 768 bytes of the file. `decode` takes the whole file as a byte buffer and
//! returns RGB pixels:
//!
//! ```no_run
//! let data = std::fs::read("image.pcx").unwrap();
//! let image = pcx_decode::decode(&data).unwrap();
//! println!("{}x{}, top-left pixel {:?}", image.width(), image.height(), image.pixel(0, 0));
//! ```
//!
//! `decode_paletted` stops before mapping indices to colors and gives access to the palette.
//!
//! Decoding is a pure function of the input buffer, reading files is left to the caller.
use log::debug;

pub mod low_level;

mod decoded;
mod error;
mod palette;

pub use crate::decoded::{resolve, DecodedImage, PalettedImage};
pub use crate::error::{DecodingError, Stage};
pub use crate::low_level::Header;
pub use crate::palette::Palette;

use crate::low_level::{rle, HEADER_LENGTH, PALETTE_LENGTH};

/// Color as R, G, B.
pub type Rgb = [u8; 3];

pub type Result<T> = std::result::Result<T, DecodingError>;

/// Decode a complete PCX file into an RGB image.
pub fn decode(data: &[u8]) -> Result<DecodedImage> {
    decode_paletted(data)?.resolve()
}

/// Decode a complete PCX file, keeping pixels as palette indices.
pub fn decode_paletted(data: &[u8]) -> Result<PalettedImage> {
    let header = Header::parse(data)?;
    let palette = Palette::from_file_bytes(data)?;

    // Header and palette must not overlap.
    let required = HEADER_LENGTH + PALETTE_LENGTH;
    if data.len() < required {
        return Err(DecodingError::FileTooSmall {
            stage: Stage::PixelData,
            length: data.len(),
            required,
        });
    }

    let region = &data[HEADER_LENGTH..data.len() - PALETTE_LENGTH];
    let pixel_count = header.pixel_count();

    let mut indices = rle::decompress(region);
    debug!(
        "decompressed {} bytes of pixel data into {} indices, image needs {}",
        region.len(),
        indices.len(),
        pixel_count
    );

    if indices.len() < pixel_count {
        return Err(DecodingError::TruncatedPixelData {
            expected: pixel_count,
            decoded: indices.len(),
        });
    }
    indices.truncate(pixel_count);

    Ok(PalettedImage::new(header, palette, indices))
}

#[cfg(test)]
mod test_samples;
