//! Decoded images and mapping of palette indices to colors.
use std::collections::BTreeMap;
use std::slice;

use log::debug;

use crate::error::DecodingError;
use crate::low_level::Header;
use crate::palette::Palette;
use crate::Rgb;

/// Fully decoded RGB image.
///
/// Pixels are stored row by row from top to bottom, left to right inside a row. Pixel `(x, y)` is at index
/// `y * width + x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl DecodedImage {
    pub(crate) fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        DecodedImage { width, height, pixels }
    }

    /// The width of this image.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The height of this image.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get width and height of the image.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Color of the pixel at `(x, y)`, `None` if it lies outside of the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> slice::ChunksExact<Rgb> {
        // `chunks_exact` panics on zero, an image with no columns has no pixels anyway.
        self.pixels.chunks_exact((self.width as usize).max(1))
    }

    /// Interleaved R, G, B, R, G, B, ... bytes, `width * height * 3` in total.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// Take ownership of the pixels.
    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }

    /// Distinct colors of the image with the number of pixels having each, most frequent first.
    ///
    /// Colors used by the same number of pixels are ordered by ascending R, G, B value.
    pub fn color_histogram(&self) -> Vec<(Rgb, usize)> {
        let mut counts = BTreeMap::new();
        for &pixel in &self.pixels {
            *counts.entry(pixel).or_insert(0usize) += 1;
        }

        let mut histogram: Vec<(Rgb, usize)> = counts.into_iter().collect();
        // Stable sort keeps equal counts in ascending color order.
        histogram.sort_by(|a, b| b.1.cmp(&a.1));
        histogram
    }

    /// Convert to an `image::RgbImage`, e.g. to save it in another format.
    #[cfg(feature = "image")]
    pub fn to_rgb_image(&self) -> ::image::RgbImage {
        ::image::RgbImage::from_fn(self.width, self.height, |x, y| {
            ::image::Rgb(self.pixels[y as usize * self.width as usize + x as usize])
        })
    }
}

/// Image with its pixels still as indices into the palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PalettedImage {
    header: Header,
    palette: Palette,
    indices: Vec<u8>,
}

impl PalettedImage {
    pub(crate) fn new(header: Header, palette: Palette, indices: Vec<u8>) -> Self {
        PalettedImage { header, palette, indices }
    }

    /// File header.
    #[inline]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Color palette of the image.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Palette index of every pixel in row-major order, exactly `width * height` of them.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Get width and height of the image.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.header.dimensions()
    }

    /// Palette index of the pixel at `(x, y)`, `None` if it lies outside of the image.
    pub fn index(&self, x: u32, y: u32) -> Option<u8> {
        let (width, height) = self.dimensions();
        if x >= width || y >= height {
            return None;
        }
        self.indices.get(y as usize * width as usize + x as usize).copied()
    }

    /// Map every pixel through the palette.
    pub fn resolve(&self) -> Result<DecodedImage, DecodingError> {
        let (width, height) = self.dimensions();
        resolve(width, height, &self.indices, &self.palette)
    }
}

/// Build an RGB image from palette indices.
///
/// Only the first `width * height` indices are used. Indices are generic so that streams which were widened beyond a
/// byte are checked against the palette size.
pub fn resolve<I: Copy + Into<usize>>(
    width: u32,
    height: u32,
    indices: &[I],
    palette: &Palette,
) -> Result<DecodedImage, DecodingError> {
    let pixel_count = width as usize * height as usize;
    if indices.len() < pixel_count {
        return Err(DecodingError::TruncatedPixelData {
            expected: pixel_count,
            decoded: indices.len(),
        });
    }

    let mut pixels = Vec::with_capacity(pixel_count);
    for (position, &index) in indices[..pixel_count].iter().enumerate() {
        let index = index.into();
        match palette.get(index) {
            Some(color) => pixels.push(color),
            None => return Err(DecodingError::PaletteIndexOutOfRange { index, position }),
        }
    }

    debug!("resolved {} pixels of {}x{} image", pixel_count, width, height);
    Ok(DecodedImage::from_pixels(width, height, pixels))
}
