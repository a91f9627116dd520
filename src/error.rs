use std::fmt;
use std::io;

use thiserror::Error;

/// Pipeline stage of `decode` at which an error was detected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Parsing the fixed 128-byte header.
    Header,
    /// Reading the trailing 256-color palette.
    Palette,
    /// Decompressing the pixel-index stream.
    PixelData,
    /// Mapping palette indices to colors.
    Resolve,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Stage::Header => "header",
            Stage::Palette => "palette",
            Stage::PixelData => "pixel data",
            Stage::Resolve => "pixel resolve",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodingError {
    #[error("not a PCX file: manufacturer byte is {0:#04x}, expected 0x0a")]
    InvalidManufacturer(u8),

    #[error("unsupported PCX encoding {0}, only RLE (1) is supported")]
    UnsupportedEncoding(u8),

    #[error("invalid PCX dimensions: x {x_min}..={x_max}, y {y_min}..={y_max}")]
    InvalidDimensions {
        x_min: u16,
        y_min: u16,
        x_max: u16,
        y_max: u16,
    },

    #[error("file too small while reading {stage}: {length} bytes, need at least {required}")]
    FileTooSmall {
        stage: Stage,
        length: usize,
        required: usize,
    },

    #[error("truncated pixel data: expected {expected} pixels, decoded {decoded}")]
    TruncatedPixelData { expected: usize, decoded: usize },

    #[error("palette index {index} at pixel {position} is out of range")]
    PaletteIndexOutOfRange { index: usize, position: usize },
}

impl DecodingError {
    /// Stage of the pipeline which produced this error.
    pub fn stage(&self) -> Stage {
        match *self {
            DecodingError::InvalidManufacturer(_)
            | DecodingError::UnsupportedEncoding(_)
            | DecodingError::InvalidDimensions { .. } => Stage::Header,
            DecodingError::FileTooSmall { stage, .. } => stage,
            DecodingError::TruncatedPixelData { .. } => Stage::PixelData,
            DecodingError::PaletteIndexOutOfRange { .. } => Stage::Resolve,
        }
    }
}

impl From<DecodingError> for io::Error {
    fn from(err: DecodingError) -> io::Error {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
