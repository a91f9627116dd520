//! Low-level handling of PCX. You generally don't need to use this module, `decode` covers the whole pipeline.
pub mod header;
pub mod rle;

pub use self::header::Header;

/// Magic byte which is used as a first byte in all PCX files.
pub const MAGIC_BYTE: u8 = 0xA;

/// Value of the encoding byte for RLE-compressed files, the only encoding supported.
pub const RLE_ENCODING: u8 = 1;

/// Length of the fixed header. Pixel data starts right after it.
pub const HEADER_LENGTH: usize = 128;

/// Length of the trailing 256-color palette.
pub const PALETTE_LENGTH: usize = 256 * 3;
