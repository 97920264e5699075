//! `.ZEL` animated-image container support for the `zel-rs` project.
//!
//! ## Overview
//!
//! ZEL is a container for palette-indexed animations aimed at
//! memory-constrained targets (microcontrollers driving SD-card-backed
//! displays). It trades file size for decode speed and low peak RAM:
//!
//! - frames are located through an index table of absolute byte offsets;
//! - every frame is split into a fixed row-major grid of *zones* that
//!   decompress independently, so a display can be refreshed tile by tile;
//! - pixels are 8-bit indices into a global or per-frame RGB565 palette.
//!
//! All multi-byte fields are little-endian and structures are byte-packed.
//! Parsers honor the recorded `header_size` fields when walking from one
//! block to the next, never the nominal structure sizes.
//!
//! ## File Structure
//!
//! ```text
//! FileHeader
//! GlobalPaletteBlock        (optional, file flag bit 0)
//! FrameIndexTable           (frame_count x 11 bytes)
//! FrameBlock...             (one per index entry, at its recorded offset)
//! ```
//!
//! ### File Header (34 bytes)
//!
//! | Offset | Size | Field                    | Description                          |
//! |--------|------|--------------------------|--------------------------------------|
//! | 0x00   | 4    | `magic`                  | "ZEL0" (0x5A, 0x45, 0x4C, 0x30)      |
//! | 0x04   | 2    | `version`                | Container version (must be 1)        |
//! | 0x06   | 4    | `header_size`            | Offset of the first block            |
//! | 0x0A   | 2    | `width`                  | Frame width in pixels                |
//! | 0x0C   | 2    | `height`                 | Frame height in pixels               |
//! | 0x0E   | 2    | `zone_width`             | Zone width in pixels                 |
//! | 0x10   | 2    | `zone_height`            | Zone height in pixels                |
//! | 0x12   | 1    | `color_format`           | 0 = 8-bit indexed                    |
//! | 0x13   | 1    | `flags`                  | Capability bits (see below)          |
//! | 0x14   | 2    | `frame_count`            | Number of frames                     |
//! | 0x16   | 2    | `default_frame_duration` | Fallback frame duration in ms        |
//! | 0x18   | 10   | `reserved`               | Preserved, unchecked                 |
//!
//! File flag bits: 0 = global palette present, 1 = frames may carry local
//! palettes, 2 = frame index table present. The decoder refuses files without
//! the index-table capability.
//!
//! ### Palette Block (8-byte header + entries)
//!
//! | Offset | Size | Field            | Description                          |
//! |--------|------|------------------|--------------------------------------|
//! | 0x00   | 1    | `palette_type`   | 0 = global, 1 = local                |
//! | 0x01   | 1    | `header_size`    | Offset of the entry data             |
//! | 0x02   | 2    | `entry_count`    | Number of RGB565 entries             |
//! | 0x04   | 1    | `color_encoding` | 0 = RGB565 LE, 1 = RGB565 BE         |
//! | 0x05   | 3    | `reserved`       | Preserved, unchecked                 |
//!
//! `entry_count x 2` bytes of RGB565 words follow at `header_size`, in the
//! declared byte order.
//!
//! ### Frame Block (14-byte header + optional palette + zone chunks)
//!
//! | Offset | Size | Field                       | Description                       |
//! |--------|------|-----------------------------|-----------------------------------|
//! | 0x00   | 1    | `block_type`                | Written as 1, not validated       |
//! | 0x01   | 1    | `header_size`               | Offset of the first payload byte  |
//! | 0x02   | 1    | `flags`                     | Frame bits (see below)            |
//! | 0x03   | 1    | `compression`               | 0 = none, 1 = LZ4, 2 = RLE (rsvd) |
//! | 0x04   | 2    | `zone_count`                | Must match the layout zone count  |
//! | 0x06   | 2    | `reference_frame_index`     | Parsed, no decode effect          |
//! | 0x08   | 2    | `local_palette_entry_count` | Informational                     |
//! | 0x0A   | 4    | `reserved`                  | Preserved, unchecked              |
//!
//! Frame flag bits: 0 = keyframe, 1 = local palette present, 2 = uses the
//! previous frame as base (parsed, no decode effect). The same bit
//! assignments apply to the flags byte of frame index entries.
//!
//! After the header (and the optional local palette block) follow exactly
//! `zone_count` chunks of `{u32 chunk_size, chunk_size bytes}` in row-major
//! zone order. The cursor after the last chunk must land exactly on the end
//! of the frame block.
//!
//! ### Frame Index Entry (11 bytes)
//!
//! | Offset | Size | Field            | Description                            |
//! |--------|------|------------------|----------------------------------------|
//! | 0x00   | 4    | `frame_offset`   | Absolute offset of the frame block     |
//! | 0x04   | 4    | `frame_size`     | Frame block size in bytes              |
//! | 0x08   | 1    | `flags`          | Same bit assignments as frame headers  |
//! | 0x09   | 2    | `frame_duration` | Duration in ms; 0 inherits the default |
//!
//! ## Usage Examples
//!
//! ### Decoding from a memory buffer
//!
//! ```no_run
//! use zel_types::file::zel::Decoder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("BOOT.ZEL")?;
//! let mut zel = Decoder::from_bytes(&data)?;
//!
//! println!("{}x{}, {} frames", zel.width(), zel.height(), zel.frame_count());
//!
//! let stride = zel.width() as usize;
//! let mut frame = vec![0u16; stride * zel.height() as usize];
//! zel.decode_frame_rgb565(0, &mut frame, stride)?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Zone-by-zone refresh
//!
//! ```no_run
//! use zel_types::file::zel::Decoder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut zel = Decoder::open("BOOT.ZEL")?;
//!
//! let zone_pixels = zel.zone_width() as usize * zel.zone_height() as usize;
//! let mut tile = vec![0u16; zone_pixels];
//! for zone in 0..zel.zone_count() {
//!     zel.decode_frame_rgb565_zone(0, zone, &mut tile)?;
//!     // push `tile` to the display at the zone's position
//! }
//! # Ok(())
//! # }
//! ```

mod decoder;
mod frame;
mod header;
mod palette;
mod source;


use std::fmt::Display;

use crate::file::ZelError;

pub use decoder::{Decoder, FrameInfo, FrameInfoIter};
pub use frame::ZoneLayout;
pub use header::{FileFlags, FileHeader, FrameFlags, FrameHeader, FrameIndexEntry, PaletteHeader};
pub use source::{MemorySource, ReadAt, StreamSource};

/// ZEL file constants.
pub mod constants {
	/// Magic bytes for `.ZEL` files
	pub const MAGIC: [u8; 4] = *b"ZEL0";

	/// Supported container version
	pub const VERSION: u16 = 1;

	/// Nominal size of the file header (34 bytes)
	pub const FILE_HEADER_SIZE: usize = 34;

	/// Nominal size of a palette block header (8 bytes)
	pub const PALETTE_HEADER_SIZE: usize = 8;

	/// Nominal size of a frame block header (14 bytes)
	pub const FRAME_HEADER_SIZE: usize = 14;

	/// Size of each frame index entry (11 bytes)
	pub const FRAME_INDEX_ENTRY_SIZE: usize = 11;

	/// File flag: a global palette block follows the file header
	pub const FILE_FLAG_GLOBAL_PALETTE: u8 = 1 << 0;

	/// File flag: frames may carry local palette blocks
	pub const FILE_FLAG_FRAME_LOCAL_PALETTES: u8 = 1 << 1;

	/// File flag: a frame index table is present (required)
	pub const FILE_FLAG_FRAME_INDEX_TABLE: u8 = 1 << 2;

	/// Frame flag: the frame is a keyframe
	pub const FRAME_FLAG_KEYFRAME: u8 = 1 << 0;

	/// Frame flag: a local palette block follows the frame header
	pub const FRAME_FLAG_LOCAL_PALETTE: u8 = 1 << 1;

	/// Frame flag: the frame builds on the previous frame (no decode effect)
	pub const FRAME_FLAG_PREVIOUS_FRAME_BASE: u8 = 1 << 2;
}

/// Pixel formats used in `.ZEL` files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorFormat {
	/// Each pixel is an 8-bit index into the active palette
	Indexed8 = 0,
}

impl ColorFormat {
	/// Parses a color format selector byte.
	pub(crate) fn from_byte(byte: u8) -> Result<Self, ZelError> {
		match byte {
			0 => Ok(Self::Indexed8),
			_ => Err(ZelError::unsupported(format!("unknown color format {byte}"))),
		}
	}
}

impl Display for ColorFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Indexed8 => write!(f, "Indexed8"),
		}
	}
}

/// Compression types used for zone chunks in `.ZEL` files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Compression {
	/// Zone payloads are stored raw
	None = 0,

	/// Zone payloads are LZ4 block-compressed
	Lz4 = 1,

	/// Reserved enumerator; parses but has no decoder
	Rle = 2,
}

impl Compression {
	/// Parses a compression selector byte.
	pub(crate) fn from_byte(byte: u8) -> Result<Self, ZelError> {
		match byte {
			0 => Ok(Self::None),
			1 => Ok(Self::Lz4),
			2 => Ok(Self::Rle),
			_ => Err(ZelError::UnsupportedCompression {
				compression: byte,
			}),
		}
	}
}

impl Display for Compression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::None => write!(f, "None"),
			Self::Lz4 => write!(f, "LZ4"),
			Self::Rle => write!(f, "RLE"),
		}
	}
}

/// Byte orderings for RGB565 palette entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorEncoding {
	/// Little-endian RGB565 words
	Rgb565Le = 0,

	/// Big-endian RGB565 words
	Rgb565Be = 1,
}

impl ColorEncoding {
	/// Parses a color encoding selector byte.
	pub(crate) fn from_byte(byte: u8) -> Result<Self, ZelError> {
		match byte {
			0 => Ok(Self::Rgb565Le),
			1 => Ok(Self::Rgb565Be),
			_ => Err(ZelError::corrupt(format!("unknown palette color encoding {byte}"))),
		}
	}
}

impl Display for ColorEncoding {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Rgb565Le => write!(f, "RGB565-LE"),
			Self::Rgb565Be => write!(f, "RGB565-BE"),
		}
	}
}

/// Grows a scratch buffer to at least `len` elements.
///
/// Scratch buffers only ever grow; allocation failure surfaces as
/// [`ZelError::OutOfMemory`] instead of aborting.
pub(crate) fn grow_scratch<T: Copy + Default>(
	buf: &mut Vec<T>,
	len: usize,
) -> Result<(), ZelError> {
	if buf.len() < len {
		buf.try_reserve_exact(len - buf.len()).map_err(|_| ZelError::OutOfMemory)?;
		buf.resize(len, T::default());
	}
	Ok(())
}
