//! 256-color palette stored at the end of PCX files.
use std::ops::Index;

use log::debug;

use crate::decoded::DecodedImage;
use crate::error::{DecodingError, Stage};
use crate::low_level::PALETTE_LENGTH;
use crate::Rgb;

/// Number of palette entries per row and per column of the swatch grid.
const SWATCH_GRID: u32 = 16;

/// Color palette of a 256-color PCX image.
#[derive(Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; 256],
}

impl Palette {
    /// Side of a single color cell in the swatch produced by `Palette::swatch` when no other size is wanted.
    pub const SWATCH_CELL_SIZE: u32 = 4;

    /// Read the palette from the last 768 bytes of a complete PCX file.
    pub fn from_file_bytes(data: &[u8]) -> Result<Self, DecodingError> {
        if data.len() <= PALETTE_LENGTH {
            return Err(DecodingError::FileTooSmall {
                stage: Stage::Palette,
                length: data.len(),
                required: PALETTE_LENGTH + 1,
            });
        }

        let start = data.len() - PALETTE_LENGTH;
        let mut bytes = [0; PALETTE_LENGTH];
        bytes.copy_from_slice(&data[start..]);

        debug!("PCX palette read from offset {}", start);
        Ok(Self::from_rgb_bytes(&bytes))
    }

    /// Build palette from 256 R, G, B triples laid out one after another.
    pub fn from_rgb_bytes(bytes: &[u8; PALETTE_LENGTH]) -> Self {
        let mut colors = [[0; 3]; 256];
        for (color, rgb) in colors.iter_mut().zip(bytes.chunks_exact(3)) {
            color.copy_from_slice(rgb);
        }

        Palette { colors }
    }

    /// Color for the palette index, `None` if the index is larger than 255.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    /// All 256 colors in index order.
    #[inline]
    pub fn colors(&self) -> &[Rgb; 256] {
        &self.colors
    }

    /// Palette as it is stored in the file: R, G, B, R, G, B, ...
    pub fn to_bytes(&self) -> [u8; PALETTE_LENGTH] {
        let mut bytes = [0; PALETTE_LENGTH];
        for (rgb, color) in bytes.chunks_exact_mut(3).zip(self.colors.iter()) {
            rgb.copy_from_slice(color);
        }
        bytes
    }

    /// Render the palette as a 16x16 grid of square cells, `cell_size` pixels per side.
    ///
    /// Entries fill the grid column by column: entry `k` is at grid column `k / 16` and grid row `k % 16`.
    pub fn swatch(&self, cell_size: u32) -> DecodedImage {
        let side = SWATCH_GRID * cell_size;
        let mut pixels = Vec::with_capacity(side as usize * side as usize);

        for y in 0..side {
            for x in 0..side {
                let k = (x / cell_size) * SWATCH_GRID + y / cell_size;
                pixels.push(self.colors[k as usize]);
            }
        }

        DecodedImage::from_pixels(side, side, pixels)
    }
}

impl Index<u8> for Palette {
    type Output = Rgb;

    #[inline]
    fn index(&self, index: u8) -> &Rgb {
        &self.colors[index as usize]
    }
}

impl std::fmt::Debug for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_list().entries(self.colors.iter()).finish()
    }
}

#[cfg(test)]
pub(crate) fn test_palette_bytes() -> [u8; PALETTE_LENGTH] {
    let mut bytes = [0; PALETTE_LENGTH];
    for i in 0..256 {
        bytes[i * 3] = i as u8;
        bytes[i * 3 + 1] = 255 - i as u8;
        bytes[i * 3 + 2] = (i as u8).wrapping_mul(7);
    }
    bytes
}
