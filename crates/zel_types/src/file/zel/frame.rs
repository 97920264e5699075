//! Zone layout, frame location, and the zone-chunk stream.
//!
//! A located frame is described by ranges only, never by borrowed bytes, so
//! the decoder can materialize the frame block (borrowed from a memory
//! source, or read once into the frame scratch for streams) and then walk
//! its chunks without holding conflicting borrows.

use crate::file::ZelError;

use super::header::{FileHeader, FrameHeader};
use super::{ColorEncoding, Compression, grow_scratch};

/// Zone grid geometry shared by every frame of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneLayout {
	/// Zone width in pixels
	pub zone_width: usize,
	/// Zone height in pixels
	pub zone_height: usize,
	/// Number of zones per frame row
	pub zones_per_row: usize,
	/// Number of zones per frame column
	pub zones_per_col: usize,
	/// Total zones per frame
	pub zone_count: usize,
	/// Decoded size of one zone in bytes (one byte per pixel)
	pub zone_pixel_bytes: usize,
}

impl ZoneLayout {
	/// Derives the zone grid from a validated file header.
	pub fn from_header(header: &FileHeader) -> Self {
		let zone_width = header.zone_width as usize;
		let zone_height = header.zone_height as usize;
		let zones_per_row = header.width as usize / zone_width;
		let zones_per_col = header.height as usize / zone_height;
		Self {
			zone_width,
			zone_height,
			zones_per_row,
			zones_per_col,
			zone_count: zones_per_row * zones_per_col,
			zone_pixel_bytes: zone_width * zone_height,
		}
	}
}

/// Location of a frame-local palette inside its frame block.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LocalPaletteSlot {
	/// Offset of the entry data relative to the frame block start
	pub data_start: usize,
	/// Length of the entry data in bytes
	pub data_len: usize,
	/// Declared byte order of the entries
	pub encoding: ColorEncoding,
}

/// A validated frame block, described by ranges into the byte source.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LocatedFrame {
	/// Parsed frame header
	pub header: FrameHeader,
	/// Absolute offset of the frame block
	pub offset: u64,
	/// Frame block size in bytes
	pub size: usize,
	/// Offset of the zone-data window relative to the block start
	pub zone_start: usize,
	/// Local palette location, when the frame carries one
	pub local_palette: Option<LocalPaletteSlot>,
	/// Whether the block bytes live in the frame scratch (stream sources)
	pub in_scratch: bool,
}

/// Cursor over the `{u32 size, payload}` chunk records of one frame.
///
/// Yields exactly `zone_count` chunk payloads in row-major zone order. After
/// the last chunk, [`ZoneChunks::finish`] verifies the cursor landed exactly
/// on the end of the zone-data window.
#[derive(Debug)]
pub(crate) struct ZoneChunks<'a> {
	window: &'a [u8],
	pos: usize,
	remaining: usize,
}

impl<'a> ZoneChunks<'a> {
	/// Creates a cursor over the zone-data window of a frame.
	pub fn new(window: &'a [u8], zone_count: usize) -> Self {
		Self {
			window,
			pos: 0,
			remaining: zone_count,
		}
	}

	/// Verifies that the chunk records consumed the window exactly.
	pub fn finish(self) -> Result<(), ZelError> {
		if self.pos != self.window.len() {
			return Err(ZelError::corrupt(format!(
				"{} trailing bytes after the last zone chunk",
				self.window.len() - self.pos
			)));
		}
		Ok(())
	}
}

impl<'a> Iterator for ZoneChunks<'a> {
	type Item = Result<&'a [u8], ZelError>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}
		self.remaining -= 1;

		let Some(prefix) = self.window.get(self.pos..self.pos + 4) else {
			return Some(Err(ZelError::corrupt("zone chunk size prefix past frame block end")));
		};
		let chunk_size = u32::from_le_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]) as usize;
		if chunk_size == 0 {
			return Some(Err(ZelError::corrupt("zero-length zone chunk")));
		}

		let payload_start = self.pos + 4;
		let Some(payload) = self.window.get(payload_start..payload_start + chunk_size) else {
			return Some(Err(ZelError::corrupt(format!(
				"zone chunk of {chunk_size} bytes past frame block end"
			))));
		};
		self.pos = payload_start + chunk_size;
		Some(Ok(payload))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, Some(self.remaining))
	}
}

/// LZ4 block decompression primitive.
///
/// The single place the compression dependency is touched; everything else
/// sees `decompress(src, dst) -> written | error`.
fn lz4_decompress(src: &[u8], dst: &mut [u8]) -> Result<usize, ZelError> {
	lz4_flex::block::decompress_into(src, dst)
		.map_err(|e| ZelError::corrupt(format!("LZ4 inflate failed: {e}")))
}

/// Produces the pixel bytes of one zone chunk.
///
/// Uncompressed payloads are returned as-is; LZ4 payloads inflate into
/// `scratch`, which is grown once and reused across all zones of a decode
/// call. Either way the result holds exactly `zone_pixel_bytes` bytes.
pub(crate) fn zone_pixels<'a>(
	chunk: &'a [u8],
	compression: Compression,
	zone_pixel_bytes: usize,
	scratch: &'a mut Vec<u8>,
) -> Result<&'a [u8], ZelError> {
	match compression {
		Compression::None => {
			if chunk.len() != zone_pixel_bytes {
				return Err(ZelError::corrupt(format!(
					"uncompressed zone chunk of {} bytes, expected {zone_pixel_bytes}",
					chunk.len()
				)));
			}
			Ok(chunk)
		}
		Compression::Lz4 => {
			grow_scratch(scratch, zone_pixel_bytes)?;
			let written = lz4_decompress(chunk, &mut scratch[..zone_pixel_bytes])?;
			if written != zone_pixel_bytes {
				return Err(ZelError::corrupt(format!(
					"zone chunk inflated to {written} bytes, expected {zone_pixel_bytes}"
				)));
			}
			Ok(&scratch[..zone_pixel_bytes])
		}
		Compression::Rle => Err(ZelError::UnsupportedCompression {
			compression: Compression::Rle as u8,
		}),
	}
}
