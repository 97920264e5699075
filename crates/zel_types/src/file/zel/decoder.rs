//! The ZEL decoder handle.
//!
//! A [`Decoder`] owns the parsed file metadata, the cached frame index
//! table, the palette cache, and the scratch buffers every decode call
//! reuses. It is generic over its byte source, so the same surface serves
//! in-memory buffers and seekable streams; the handle is single-threaded by
//! construction because every decode mutates scratch state.

use std::fmt::Display;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use crate::file::ZelError;

use super::frame::{LocalPaletteSlot, LocatedFrame, ZoneChunks, ZoneLayout, zone_pixels};
use super::header::{FileHeader, FrameHeader, FrameIndexEntry, PaletteHeader};
use super::palette::PaletteCache;
use super::source::{MemorySource, ReadAt, StreamSource, check_range};
use super::{ColorEncoding, ColorFormat, constants, grow_scratch};

/// Random-access decoder over a `.ZEL` byte region.
///
/// Create one with [`Decoder::from_bytes`] (borrowed memory),
/// [`Decoder::from_reader`] (seekable stream), [`Decoder::open`] (file path),
/// or [`Decoder::from_source`] (custom [`ReadAt`] implementation). All
/// resources are released on drop; a failed constructor leaves nothing
/// behind.
#[derive(Debug)]
pub struct Decoder<S> {
	/// Backing byte region
	source: S,

	/// Parsed and validated file header
	header: FileHeader,

	/// Zone grid shared by every frame
	layout: ZoneLayout,

	/// Cached frame index table
	entries: Vec<FrameIndexEntry>,

	/// Palette cache and output-encoding state
	palette: PaletteCache,

	/// Frame block bytes for stream sources; unused for memory sources
	frame_scratch: Vec<u8>,

	/// Inflated pixels of one zone
	zone_scratch: Vec<u8>,
}

impl<'a> Decoder<MemorySource<'a>> {
	/// Opens a decoder over a borrowed byte slice.
	///
	/// The slice must stay untouched for the decoder's lifetime. Frame data
	/// is decoded straight out of the slice without copying.
	pub fn from_bytes(data: &'a [u8]) -> Result<Self, ZelError> {
		Self::from_source(MemorySource::new(data))
	}
}

impl<R: Read + Seek> Decoder<StreamSource<R>> {
	/// Opens a decoder over any seekable reader.
	///
	/// Frame blocks are fetched with a single read each, so peak memory is
	/// bounded by the largest frame block plus one zone of scratch.
	pub fn from_reader(reader: R) -> Result<Self, ZelError> {
		Self::from_source(StreamSource::new(reader)?)
	}
}

impl Decoder<StreamSource<BufReader<std::fs::File>>> {
	/// Opens a `.ZEL` file from the given path.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, ZelError> {
		let file = std::fs::File::open(path)?;
		Self::from_reader(BufReader::new(file))
	}
}

impl<S: ReadAt> Decoder<S> {
	/// Opens a decoder over any [`ReadAt`] byte source.
	///
	/// Validates the header chain (file header, optional global palette
	/// block) and caches the frame index table.
	pub fn from_source(mut source: S) -> Result<Self, ZelError> {
		let file_size = source.size();

		let mut head = [0u8; constants::FILE_HEADER_SIZE];
		if !check_range(0, constants::FILE_HEADER_SIZE as u64, file_size) {
			return Err(ZelError::InsufficientData {
				expected: constants::FILE_HEADER_SIZE,
				actual: file_size as usize,
			});
		}
		source.read_exact_at(0, &mut head)?;
		let header = FileHeader::from_bytes(&head)?;

		if u64::from(header.header_size) > file_size {
			return Err(ZelError::corrupt(format!(
				"file header size {} larger than the {file_size}-byte file",
				header.header_size
			)));
		}
		if !header.flags.has_frame_index_table {
			return Err(ZelError::unsupported("file without a frame index table"));
		}

		let layout = ZoneLayout::from_header(&header);
		let mut cursor = u64::from(header.header_size);

		let mut global_raw = None;
		if header.flags.has_global_palette {
			let mut pal_head = [0u8; constants::PALETTE_HEADER_SIZE];
			if !check_range(cursor, constants::PALETTE_HEADER_SIZE as u64, file_size) {
				return Err(ZelError::corrupt("global palette header past end of file"));
			}
			source.read_exact_at(cursor, &mut pal_head)?;
			let pal = PaletteHeader::from_bytes(&pal_head)?;

			let data_offset = cursor + u64::from(pal.header_size);
			let data_len = u64::from(pal.entry_count) * 2;
			if !check_range(data_offset, data_len, file_size) {
				return Err(ZelError::corrupt("global palette data past end of file"));
			}
			let mut raw = vec![0u8; data_len as usize];
			source.read_exact_at(data_offset, &mut raw)?;
			global_raw = Some((raw, pal.color_encoding));
			cursor = data_offset + data_len;
		}

		let table_len = u64::from(header.frame_count) * constants::FRAME_INDEX_ENTRY_SIZE as u64;
		if !check_range(cursor, table_len, file_size) {
			return Err(ZelError::corrupt("frame index table past end of file"));
		}
		let mut table = vec![0u8; table_len as usize];
		source.read_exact_at(cursor, &mut table)?;
		let entries = table
			.chunks_exact(constants::FRAME_INDEX_ENTRY_SIZE)
			.map(FrameIndexEntry::from_bytes)
			.collect::<Result<Vec<_>, _>>()?;

		let palette =
			PaletteCache::new(global_raw.as_ref().map(|(raw, encoding)| (raw.as_slice(), *encoding)));

		Ok(Self {
			source,
			header,
			layout,
			entries,
			palette,
			frame_scratch: Vec::new(),
			zone_scratch: Vec::new(),
		})
	}

	/// Returns the frame width in pixels.
	pub fn width(&self) -> u16 {
		self.header.width
	}

	/// Returns the frame height in pixels.
	pub fn height(&self) -> u16 {
		self.header.height
	}

	/// Returns the number of frames in the file.
	pub fn frame_count(&self) -> u16 {
		self.header.frame_count
	}

	/// Returns the fallback frame duration in milliseconds.
	pub fn default_frame_duration_ms(&self) -> u16 {
		self.header.default_frame_duration
	}

	/// Returns the zone width in pixels.
	pub fn zone_width(&self) -> u16 {
		self.header.zone_width
	}

	/// Returns the zone height in pixels.
	pub fn zone_height(&self) -> u16 {
		self.header.zone_height
	}

	/// Returns the number of zones per frame.
	pub fn zone_count(&self) -> u16 {
		self.layout.zone_count as u16
	}

	/// Returns the number of zones per frame row.
	pub fn zones_per_row(&self) -> u16 {
		self.layout.zones_per_row as u16
	}

	/// Returns the number of zones per frame column.
	pub fn zones_per_col(&self) -> u16 {
		self.layout.zones_per_col as u16
	}

	/// Returns the pixel format of all frames.
	pub fn color_format(&self) -> ColorFormat {
		self.header.color_format
	}

	/// Returns the parsed file header.
	pub fn file_header(&self) -> &FileHeader {
		&self.header
	}

	/// Returns the zone grid geometry.
	pub fn zone_layout(&self) -> &ZoneLayout {
		&self.layout
	}

	/// Whether the file carries a global palette.
	pub fn has_global_palette(&self) -> bool {
		self.palette.has_global()
	}

	/// Overrides the byte order in which palettes are handed out.
	///
	/// Affects [`Decoder::global_palette`], [`Decoder::frame_palette`], and
	/// the RGB565 decode entry points. Changing the encoding rebuilds the
	/// converted palette exactly once on the next resolve.
	pub fn set_output_color_encoding(&mut self, encoding: ColorEncoding) {
		self.palette.set_output_encoding(encoding);
	}

	/// Returns the byte order palettes resolve to.
	pub fn output_color_encoding(&self) -> ColorEncoding {
		self.palette.output_encoding()
	}

	/// Resolves the global palette in the current output encoding.
	///
	/// The returned words stay valid until the output encoding changes.
	pub fn global_palette(&mut self) -> Result<&[u16], ZelError> {
		self.palette.resolve_global()
	}

	/// Resolves the palette a frame decodes with: its local palette when it
	/// carries one, the global palette otherwise.
	///
	/// The returned words stay valid until the next palette resolve or
	/// encoding change.
	pub fn frame_palette(&mut self, frame_index: u16) -> Result<&[u16], ZelError> {
		let located = self.load_frame(frame_index)?;
		let Self {
			source,
			frame_scratch,
			palette,
			..
		} = self;
		let block = frame_block(source, frame_scratch, &located)?;
		resolve_frame_palette(palette, block, &located)
	}

	/// Returns the frame index entry for `frame_index`.
	fn entry(&self, frame_index: u16) -> Result<&FrameIndexEntry, ZelError> {
		self.entries.get(usize::from(frame_index)).ok_or(ZelError::FrameOutOfRange {
			index: frame_index,
			count: self.header.frame_count,
		})
	}

	/// Returns the duration of a frame in milliseconds.
	///
	/// A zero duration in the index entry inherits the file default.
	pub fn frame_duration_ms(&self, frame_index: u16) -> Result<u16, ZelError> {
		let entry = self.entry(frame_index)?;
		Ok(if entry.frame_duration != 0 {
			entry.frame_duration
		} else {
			self.header.default_frame_duration
		})
	}

	/// Whether a frame is marked as a keyframe.
	pub fn frame_is_keyframe(&self, frame_index: u16) -> Result<bool, ZelError> {
		Ok(self.entry(frame_index)?.flags.keyframe)
	}

	/// Whether a frame carries its own palette.
	pub fn frame_uses_local_palette(&self, frame_index: u16) -> Result<bool, ZelError> {
		Ok(self.entry(frame_index)?.flags.has_local_palette)
	}

	/// Returns the metadata of one frame.
	pub fn frame_info(&self, frame_index: u16) -> Result<FrameInfo, ZelError> {
		let entry = self.entry(frame_index)?;
		Ok(FrameInfo {
			index: frame_index,
			offset: entry.frame_offset,
			size: entry.frame_size,
			duration_ms: if entry.frame_duration != 0 {
				entry.frame_duration
			} else {
				self.header.default_frame_duration
			},
			keyframe: entry.flags.keyframe,
			has_local_palette: entry.flags.has_local_palette,
		})
	}

	/// Returns an iterator over the metadata of all frames.
	pub fn frames(&self) -> FrameInfoIter<'_, S> {
		FrameInfoIter {
			decoder: self,
			index: 0,
		}
	}

	/// Sums the durations of all frames in milliseconds.
	pub fn total_duration_ms(&self) -> u32 {
		let default = u32::from(self.header.default_frame_duration);
		self.entries.iter().fold(0u32, |total, entry| {
			let duration = if entry.frame_duration != 0 {
				u32::from(entry.frame_duration)
			} else {
				default
			};
			total.saturating_add(duration)
		})
	}

	/// Locates the frame shown at `time_ms` on the looping timeline.
	///
	/// The time is reduced modulo the total duration, then frames are walked
	/// in order until the accumulated duration passes it. Returns the frame
	/// index and the start of its display window.
	pub fn find_frame_by_time_ms(&self, time_ms: u32) -> Result<(u16, u32), ZelError> {
		let total = self.total_duration_ms();
		if total == 0 {
			return Err(ZelError::invalid_argument("time lookup on a zero-duration timeline"));
		}

		let target = time_ms % total;
		let default = u32::from(self.header.default_frame_duration);
		let mut start = 0u32;
		for (index, entry) in self.entries.iter().enumerate() {
			let duration = if entry.frame_duration != 0 {
				u32::from(entry.frame_duration)
			} else {
				default
			};
			if target < start.saturating_add(duration) {
				return Ok((index as u16, start));
			}
			start = start.saturating_add(duration);
		}

		// Durations sum to `total` and `target < total`, so the loop always
		// matches; this fall-through is kept for parity and is not a contract.
		Ok((self.header.frame_count - 1, total - 1))
	}

	/// Validates a zone index against the layout.
	fn check_zone(&self, zone_index: u16) -> Result<(), ZelError> {
		if usize::from(zone_index) >= self.layout.zone_count {
			return Err(ZelError::ZoneOutOfRange {
				index: zone_index,
				count: self.layout.zone_count as u16,
			});
		}
		Ok(())
	}

	/// Locates and validates a frame block, materializing its bytes.
	///
	/// Memory sources lend the block without copying; stream sources fetch
	/// it with a single read into the frame scratch.
	fn load_frame(&mut self, frame_index: u16) -> Result<LocatedFrame, ZelError> {
		let entry = *self.entry(frame_index)?;
		if entry.frame_size == 0 {
			return Err(ZelError::corrupt(format!("frame {frame_index} has zero size")));
		}
		let offset = u64::from(entry.frame_offset);
		let size = entry.frame_size as usize;
		if !check_range(offset, u64::from(entry.frame_size), self.source.size()) {
			return Err(ZelError::corrupt(format!("frame {frame_index} block past end of file")));
		}

		let in_scratch = self.source.slice_at(offset, size).is_none();
		if in_scratch {
			grow_scratch(&mut self.frame_scratch, size)?;
			self.source.read_exact_at(offset, &mut self.frame_scratch[..size])?;
		}
		let block: &[u8] = if in_scratch {
			&self.frame_scratch[..size]
		} else {
			self.source
				.slice_at(offset, size)
				.ok_or_else(|| ZelError::internal("memory source refused to lend frame bytes"))?
		};

		let header = FrameHeader::from_bytes(block)?;
		if usize::from(header.header_size) > size {
			return Err(ZelError::corrupt(format!(
				"frame header size {} larger than the {size}-byte frame block",
				header.header_size
			)));
		}
		if usize::from(header.zone_count) != self.layout.zone_count {
			return Err(ZelError::corrupt(format!(
				"frame records {} zones, layout expects {}",
				header.zone_count, self.layout.zone_count
			)));
		}

		let mut cursor = usize::from(header.header_size);
		let mut local_palette = None;
		if header.flags.has_local_palette {
			let pal_bytes = block
				.get(cursor..cursor + constants::PALETTE_HEADER_SIZE)
				.ok_or_else(|| ZelError::corrupt("local palette header past frame block end"))?;
			let pal = PaletteHeader::from_bytes(pal_bytes)?;

			let data_start = cursor + usize::from(pal.header_size);
			let data_len = usize::from(pal.entry_count) * 2;
			if data_start + data_len > size {
				return Err(ZelError::corrupt("local palette data past frame block end"));
			}
			local_palette = Some(LocalPaletteSlot {
				data_start,
				data_len,
				encoding: pal.color_encoding,
			});
			cursor = data_start + data_len;
		}

		Ok(LocatedFrame {
			header,
			offset,
			size,
			zone_start: cursor,
			local_palette,
			in_scratch,
		})
	}

	/// Decodes a whole frame as palette indices.
	///
	/// Writes `width` bytes per row at `dst_stride_bytes` spacing. The
	/// stride must be at least the frame width and the destination must hold
	/// the last row completely.
	pub fn decode_frame_index8(
		&mut self,
		frame_index: u16,
		dst: &mut [u8],
		dst_stride_bytes: usize,
	) -> Result<(), ZelError> {
		check_frame_destination(dst.len(), dst_stride_bytes, &self.header)?;

		let located = self.load_frame(frame_index)?;
		let Self {
			source,
			frame_scratch,
			zone_scratch,
			layout,
			..
		} = self;
		let block = frame_block(source, frame_scratch, &located)?;
		let window = &block[located.zone_start..];

		let mut chunks = ZoneChunks::new(window, layout.zone_count);
		for zone in 0..layout.zone_count {
			let chunk = next_chunk(&mut chunks)?;
			let pixels =
				zone_pixels(chunk, located.header.compression, layout.zone_pixel_bytes, zone_scratch)?;
			blit_zone_index8(pixels, zone, layout, dst, dst_stride_bytes);
		}
		chunks.finish()
	}

	/// Decodes a whole frame as RGB565 words in the current output encoding.
	///
	/// Resolves the frame's palette (local or global) once, then maps every
	/// pixel through it with a per-pixel bounds check. The stride is counted
	/// in pixels.
	pub fn decode_frame_rgb565(
		&mut self,
		frame_index: u16,
		dst: &mut [u16],
		dst_stride_pixels: usize,
	) -> Result<(), ZelError> {
		check_frame_destination(dst.len(), dst_stride_pixels, &self.header)?;

		let located = self.load_frame(frame_index)?;
		let Self {
			source,
			frame_scratch,
			zone_scratch,
			palette,
			layout,
			..
		} = self;
		let block = frame_block(source, frame_scratch, &located)?;
		let resolved = resolve_frame_palette(palette, block, &located)?;
		let window = &block[located.zone_start..];

		let mut chunks = ZoneChunks::new(window, layout.zone_count);
		for zone in 0..layout.zone_count {
			let chunk = next_chunk(&mut chunks)?;
			let pixels =
				zone_pixels(chunk, located.header.compression, layout.zone_pixel_bytes, zone_scratch)?;
			blit_zone_rgb565(pixels, resolved, zone, layout, dst, dst_stride_pixels)?;
		}
		chunks.finish()
	}

	/// Decodes a single zone as palette indices, tightly packed.
	///
	/// The destination holds the zone tile in its own coordinate system and
	/// must fit `zone_width x zone_height` bytes.
	pub fn decode_frame_index8_zone(
		&mut self,
		frame_index: u16,
		zone_index: u16,
		dst: &mut [u8],
	) -> Result<(), ZelError> {
		self.check_zone(zone_index)?;
		if dst.len() < self.layout.zone_pixel_bytes {
			return Err(ZelError::invalid_argument(format!(
				"destination of {} bytes cannot hold a {} pixel zone",
				dst.len(),
				self.layout.zone_pixel_bytes
			)));
		}

		let located = self.load_frame(frame_index)?;
		let Self {
			source,
			frame_scratch,
			zone_scratch,
			layout,
			..
		} = self;
		let block = frame_block(source, frame_scratch, &located)?;
		let window = &block[located.zone_start..];

		let chunk = nth_chunk(window, layout.zone_count, zone_index)?;
		let pixels =
			zone_pixels(chunk, located.header.compression, layout.zone_pixel_bytes, zone_scratch)?;
		dst[..layout.zone_pixel_bytes].copy_from_slice(pixels);
		Ok(())
	}

	/// Decodes a single zone as RGB565 words, tightly packed.
	pub fn decode_frame_rgb565_zone(
		&mut self,
		frame_index: u16,
		zone_index: u16,
		dst: &mut [u16],
	) -> Result<(), ZelError> {
		self.check_zone(zone_index)?;
		if dst.len() < self.layout.zone_pixel_bytes {
			return Err(ZelError::invalid_argument(format!(
				"destination of {} words cannot hold a {} pixel zone",
				dst.len(),
				self.layout.zone_pixel_bytes
			)));
		}

		let located = self.load_frame(frame_index)?;
		let Self {
			source,
			frame_scratch,
			zone_scratch,
			palette,
			layout,
			..
		} = self;
		let block = frame_block(source, frame_scratch, &located)?;
		let resolved = resolve_frame_palette(palette, block, &located)?;
		let window = &block[located.zone_start..];

		let chunk = nth_chunk(window, layout.zone_count, zone_index)?;
		let pixels =
			zone_pixels(chunk, located.header.compression, layout.zone_pixel_bytes, zone_scratch)?;
		for (word, &index) in dst.iter_mut().zip(pixels) {
			*word = palette_word(resolved, index)?;
		}
		Ok(())
	}
}

impl<S> Display for Decoder<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"ZEL File: {}x{} pixels, {} frames, {}x{} zones",
			self.header.width,
			self.header.height,
			self.header.frame_count,
			self.header.zone_width,
			self.header.zone_height,
		)
	}
}

/// Metadata of one frame, assembled from its index entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameInfo {
	/// Frame index
	pub index: u16,
	/// Absolute byte offset of the frame block
	pub offset: u32,
	/// Frame block size in bytes
	pub size: u32,
	/// Effective duration in milliseconds (file default already applied)
	pub duration_ms: u16,
	/// Whether the frame is a keyframe
	pub keyframe: bool,
	/// Whether the frame carries its own palette
	pub has_local_palette: bool,
}

impl Display for FrameInfo {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Frame #{}: offset=0x{:08X} size={} duration={} ms keyframe={}",
			self.index, self.offset, self.size, self.duration_ms, self.keyframe
		)
	}
}

/// Iterator over frame metadata.
#[derive(Debug, Clone)]
pub struct FrameInfoIter<'a, S> {
	decoder: &'a Decoder<S>,
	index: u16,
}

impl<S: ReadAt> Iterator for FrameInfoIter<'_, S> {
	type Item = FrameInfo;

	fn next(&mut self) -> Option<Self::Item> {
		let info = self.decoder.frame_info(self.index).ok()?;
		self.index += 1;
		Some(info)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = usize::from(self.decoder.header.frame_count - self.index);
		(remaining, Some(remaining))
	}
}

impl<S: ReadAt> ExactSizeIterator for FrameInfoIter<'_, S> {}

/// Validates a whole-frame destination buffer and stride.
fn check_frame_destination(
	dst_len: usize,
	stride: usize,
	header: &FileHeader,
) -> Result<(), ZelError> {
	let width = usize::from(header.width);
	let height = usize::from(header.height);
	if stride < width {
		return Err(ZelError::invalid_argument(format!(
			"destination stride {stride} smaller than frame width {width}"
		)));
	}
	let required = (height - 1) * stride + width;
	if dst_len < required {
		return Err(ZelError::invalid_argument(format!(
			"destination of {dst_len} elements cannot hold a {width}x{height} frame at stride {stride}"
		)));
	}
	Ok(())
}

/// Borrows the bytes of a located frame block.
fn frame_block<'a, S: ReadAt>(
	source: &'a S,
	scratch: &'a [u8],
	located: &LocatedFrame,
) -> Result<&'a [u8], ZelError> {
	if located.in_scratch {
		scratch
			.get(..located.size)
			.ok_or_else(|| ZelError::internal("frame scratch smaller than the located frame"))
	} else {
		source
			.slice_at(located.offset, located.size)
			.ok_or_else(|| ZelError::internal("memory source refused to lend frame bytes"))
	}
}

/// Resolves the palette a located frame decodes with.
fn resolve_frame_palette<'p>(
	palette: &'p mut PaletteCache,
	block: &[u8],
	located: &LocatedFrame,
) -> Result<&'p [u16], ZelError> {
	match located.local_palette {
		Some(slot) => {
			let raw = block
				.get(slot.data_start..slot.data_start + slot.data_len)
				.ok_or_else(|| ZelError::internal("local palette range escaped its frame block"))?;
			palette.resolve_local(raw, slot.encoding)
		}
		None => palette.resolve_global(),
	}
}

/// Steps the chunk cursor, reporting exhaustion as an internal fault.
fn next_chunk<'a>(chunks: &mut ZoneChunks<'a>) -> Result<&'a [u8], ZelError> {
	chunks.next().ok_or_else(|| ZelError::internal("zone chunk cursor ended early"))?
}

/// Walks the chunk stream to the chunk of zone `zone_index`.
fn nth_chunk(window: &[u8], zone_count: usize, zone_index: u16) -> Result<&[u8], ZelError> {
	ZoneChunks::new(window, zone_count)
		.nth(usize::from(zone_index))
		.ok_or_else(|| ZelError::internal("zone chunk cursor ended early"))?
}

/// Looks up a palette word with the mandatory bounds check.
fn palette_word(palette: &[u16], index: u8) -> Result<u16, ZelError> {
	palette.get(usize::from(index)).copied().ok_or_else(|| {
		ZelError::corrupt(format!(
			"palette index {index} out of range ({} entries)",
			palette.len()
		))
	})
}

/// Copies one zone tile into a whole-frame index destination.
fn blit_zone_index8(
	pixels: &[u8],
	zone: usize,
	layout: &ZoneLayout,
	dst: &mut [u8],
	stride: usize,
) {
	let x0 = (zone % layout.zones_per_row) * layout.zone_width;
	let y0 = (zone / layout.zones_per_row) * layout.zone_height;
	for row in 0..layout.zone_height {
		let src = &pixels[row * layout.zone_width..(row + 1) * layout.zone_width];
		let start = (y0 + row) * stride + x0;
		dst[start..start + layout.zone_width].copy_from_slice(src);
	}
}

/// Expands one zone tile into a whole-frame RGB565 destination.
fn blit_zone_rgb565(
	pixels: &[u8],
	palette: &[u16],
	zone: usize,
	layout: &ZoneLayout,
	dst: &mut [u16],
	stride: usize,
) -> Result<(), ZelError> {
	let x0 = (zone % layout.zones_per_row) * layout.zone_width;
	let y0 = (zone / layout.zones_per_row) * layout.zone_height;
	for row in 0..layout.zone_height {
		let start = (y0 + row) * stride + x0;
		for col in 0..layout.zone_width {
			let index = pixels[row * layout.zone_width + col];
			dst[start + col] = palette_word(palette, index)?;
		}
	}
	Ok(())
}
