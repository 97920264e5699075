//! On-disk header structures for `.ZEL` files.
//!
//! All four fixed structures are little-endian and byte-packed. Each parser
//! accepts the minimum number of bytes for its structure and produces a
//! validated descriptor; flag bytes are expanded into booleans (bits 0-2 are
//! the only defined bits per structure), reserved bytes are preserved but
//! never checked.

use std::fmt::Display;

use crate::file::ZelError;

use super::constants;
use super::{ColorEncoding, ColorFormat, Compression};

/// Capability flags from the file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileFlags {
	/// A global palette block follows the file header
	pub has_global_palette: bool,
	/// Frames may carry local palette blocks
	pub has_frame_local_palettes: bool,
	/// A frame index table is present
	pub has_frame_index_table: bool,
	/// Raw flags byte, including reserved bits
	pub raw: u8,
}

impl FileFlags {
	fn from_byte(raw: u8) -> Self {
		Self {
			has_global_palette: raw & constants::FILE_FLAG_GLOBAL_PALETTE != 0,
			has_frame_local_palettes: raw & constants::FILE_FLAG_FRAME_LOCAL_PALETTES != 0,
			has_frame_index_table: raw & constants::FILE_FLAG_FRAME_INDEX_TABLE != 0,
			raw,
		}
	}
}

/// Per-frame flags, shared between frame headers and index entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameFlags {
	/// The frame is a keyframe
	pub keyframe: bool,
	/// A local palette block follows the frame header
	pub has_local_palette: bool,
	/// The frame builds on the previous frame; parsed, no decode effect
	pub use_previous_frame_as_base: bool,
	/// Raw flags byte, including reserved bits
	pub raw: u8,
}

impl FrameFlags {
	fn from_byte(raw: u8) -> Self {
		Self {
			keyframe: raw & constants::FRAME_FLAG_KEYFRAME != 0,
			has_local_palette: raw & constants::FRAME_FLAG_LOCAL_PALETTE != 0,
			use_previous_frame_as_base: raw & constants::FRAME_FLAG_PREVIOUS_FRAME_BASE != 0,
			raw,
		}
	}
}

/// File header structure for `.ZEL` files (34 bytes nominal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileHeader {
	/// Container version (currently always 1)
	pub version: u16,
	/// Offset of the first block after the header
	pub header_size: u32,
	/// Frame width in pixels
	pub width: u16,
	/// Frame height in pixels
	pub height: u16,
	/// Zone width in pixels; divides `width` evenly
	pub zone_width: u16,
	/// Zone height in pixels; divides `height` evenly
	pub zone_height: u16,
	/// Pixel format of all frames
	pub color_format: ColorFormat,
	/// Capability flags
	pub flags: FileFlags,
	/// Number of frames in the file
	pub frame_count: u16,
	/// Fallback frame duration in milliseconds
	pub default_frame_duration: u16,
	/// Reserved bytes, preserved unchecked
	pub reserved: [u8; 10],
}

impl FileHeader {
	/// Parses a `.ZEL` file header from the given byte slice.
	///
	/// Validates the magic, version, dimensions (non-zero, zone-aligned, zone
	/// grid fitting in 16 bits), color format, and the recorded header size.
	/// The index-table capability bit and the header-size upper bound are
	/// checked by the decoder, which knows the total file size.
	pub fn from_bytes(data: &[u8]) -> Result<Self, ZelError> {
		if data.len() < constants::FILE_HEADER_SIZE {
			return Err(ZelError::InsufficientData {
				expected: constants::FILE_HEADER_SIZE,
				actual: data.len(),
			});
		}

		let magic = [data[0], data[1], data[2], data[3]];
		if magic != constants::MAGIC {
			return Err(ZelError::InvalidMagic {
				expected: constants::MAGIC,
				actual: magic,
			});
		}

		let version = u16::from_le_bytes([data[4], data[5]]);
		if version != constants::VERSION {
			return Err(ZelError::VersionMismatch {
				expected: constants::VERSION,
				actual: version,
			});
		}

		let header_size = u32::from_le_bytes([data[6], data[7], data[8], data[9]]);
		if (header_size as usize) < constants::FILE_HEADER_SIZE {
			return Err(ZelError::corrupt(format!(
				"file header size {header_size} smaller than structure size"
			)));
		}

		let width = u16::from_le_bytes([data[10], data[11]]);
		let height = u16::from_le_bytes([data[12], data[13]]);
		let zone_width = u16::from_le_bytes([data[14], data[15]]);
		let zone_height = u16::from_le_bytes([data[16], data[17]]);

		if width == 0 || height == 0 {
			return Err(ZelError::corrupt(format!("zero frame dimensions {width}x{height}")));
		}
		if zone_width == 0 || zone_height == 0 {
			return Err(ZelError::corrupt(format!(
				"zero zone dimensions {zone_width}x{zone_height}"
			)));
		}
		if width % zone_width != 0 || height % zone_height != 0 {
			return Err(ZelError::corrupt(format!(
				"frame {width}x{height} is not a whole multiple of zone {zone_width}x{zone_height}"
			)));
		}

		let zones = (width / zone_width) as u32 * (height / zone_height) as u32;
		if zones > u32::from(u16::MAX) {
			return Err(ZelError::corrupt(format!("zone count {zones} does not fit in 16 bits")));
		}

		let color_format = ColorFormat::from_byte(data[18])?;
		let flags = FileFlags::from_byte(data[19]);
		let frame_count = u16::from_le_bytes([data[20], data[21]]);
		let default_frame_duration = u16::from_le_bytes([data[22], data[23]]);
		let mut reserved = [0u8; 10];
		reserved.copy_from_slice(&data[24..34]);

		Ok(Self {
			version,
			header_size,
			width,
			height,
			zone_width,
			zone_height,
			color_format,
			flags,
			frame_count,
			default_frame_duration,
			reserved,
		})
	}
}

impl Display for FileHeader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			".ZEL File Header:\n\
			- Version: {}\n\
			- Frame: {}x{} pixels\n\
			- Zone: {}x{} pixels\n\
			- Color Format: {}\n\
			- Frames: {}\n\
			- Default Frame Duration: {} ms\n\
			- Global Palette: {}",
			self.version,
			self.width,
			self.height,
			self.zone_width,
			self.zone_height,
			self.color_format,
			self.frame_count,
			self.default_frame_duration,
			self.flags.has_global_palette,
		)
	}
}

/// Palette block header for `.ZEL` files (8 bytes nominal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteHeader {
	/// Palette scope byte (0 = global, 1 = local); recorded but not validated
	pub palette_type: u8,
	/// Offset of the entry data relative to the block start
	pub header_size: u8,
	/// Number of RGB565 entries; always positive
	pub entry_count: u16,
	/// Byte order of the stored entries
	pub color_encoding: ColorEncoding,
	/// Reserved bytes, preserved unchecked
	pub reserved: [u8; 3],
}

impl PaletteHeader {
	/// Parses a palette block header from the given byte slice.
	pub fn from_bytes(data: &[u8]) -> Result<Self, ZelError> {
		if data.len() < constants::PALETTE_HEADER_SIZE {
			return Err(ZelError::InsufficientData {
				expected: constants::PALETTE_HEADER_SIZE,
				actual: data.len(),
			});
		}

		let palette_type = data[0];
		let header_size = data[1];
		if (header_size as usize) < constants::PALETTE_HEADER_SIZE {
			return Err(ZelError::corrupt(format!(
				"palette header size {header_size} smaller than structure size"
			)));
		}

		let entry_count = u16::from_le_bytes([data[2], data[3]]);
		if entry_count == 0 {
			return Err(ZelError::corrupt("palette with zero entries"));
		}

		let color_encoding = ColorEncoding::from_byte(data[4])?;
		let mut reserved = [0u8; 3];
		reserved.copy_from_slice(&data[5..8]);

		Ok(Self {
			palette_type,
			header_size,
			entry_count,
			color_encoding,
			reserved,
		})
	}
}

/// Frame block header for `.ZEL` files (14 bytes nominal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHeader {
	/// Block type byte; writers emit 1, readers do not validate it
	pub block_type: u8,
	/// Offset of the first payload byte relative to the block start
	pub header_size: u8,
	/// Frame flags
	pub flags: FrameFlags,
	/// Compression applied to every zone chunk of this frame
	pub compression: Compression,
	/// Number of zone chunks; must match the layout derived from the file header
	pub zone_count: u16,
	/// Reference frame for differential coding; parsed, no decode effect
	pub reference_frame_index: u16,
	/// Entry count the writer recorded for the local palette; informational
	pub local_palette_entry_count: u16,
	/// Reserved bytes, preserved unchecked
	pub reserved: [u8; 4],
}

impl FrameHeader {
	/// Parses a frame block header from the given byte slice.
	pub fn from_bytes(data: &[u8]) -> Result<Self, ZelError> {
		if data.len() < constants::FRAME_HEADER_SIZE {
			return Err(ZelError::InsufficientData {
				expected: constants::FRAME_HEADER_SIZE,
				actual: data.len(),
			});
		}

		let block_type = data[0];
		let header_size = data[1];
		if (header_size as usize) < constants::FRAME_HEADER_SIZE {
			return Err(ZelError::corrupt(format!(
				"frame header size {header_size} smaller than structure size"
			)));
		}

		let flags = FrameFlags::from_byte(data[2]);
		let compression = Compression::from_byte(data[3])?;
		let zone_count = u16::from_le_bytes([data[4], data[5]]);
		let reference_frame_index = u16::from_le_bytes([data[6], data[7]]);
		let local_palette_entry_count = u16::from_le_bytes([data[8], data[9]]);
		let mut reserved = [0u8; 4];
		reserved.copy_from_slice(&data[10..14]);

		Ok(Self {
			block_type,
			header_size,
			flags,
			compression,
			zone_count,
			reference_frame_index,
			local_palette_entry_count,
			reserved,
		})
	}
}

impl Display for FrameHeader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Frame: {} zones, compression={}, keyframe={}, local_palette={}",
			self.zone_count,
			self.compression,
			self.flags.keyframe,
			self.flags.has_local_palette,
		)
	}
}

/// Frame index table entry (11 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameIndexEntry {
	/// Absolute byte offset of the frame block
	pub frame_offset: u32,
	/// Frame block size in bytes
	pub frame_size: u32,
	/// Frame flags, mirroring the frame header's bit assignments
	pub flags: FrameFlags,
	/// Frame duration in milliseconds; 0 inherits the file default
	pub frame_duration: u16,
}

impl FrameIndexEntry {
	/// Parses a frame index entry from the given byte slice.
	pub fn from_bytes(data: &[u8]) -> Result<Self, ZelError> {
		if data.len() < constants::FRAME_INDEX_ENTRY_SIZE {
			return Err(ZelError::InsufficientData {
				expected: constants::FRAME_INDEX_ENTRY_SIZE,
				actual: data.len(),
			});
		}

		Ok(Self {
			frame_offset: u32::from_le_bytes([data[0], data[1], data[2], data[3]]),
			frame_size: u32::from_le_bytes([data[4], data[5], data[6], data[7]]),
			flags: FrameFlags::from_byte(data[8]),
			frame_duration: u16::from_le_bytes([data[9], data[10]]),
		})
	}
}

impl Display for FrameIndexEntry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Frame entry: offset=0x{:08X} size={} duration={} ms",
			self.frame_offset, self.frame_size, self.frame_duration
		)
	}
}
