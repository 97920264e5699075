//! Palette resolution with on-demand endian conversion.
//!
//! Palette entries surface to callers as `u16` RGB565 words: the
//! little-endian reading of the stored 2-byte entries. Display drivers
//! usually expect one specific byte order, so the resolver converts the
//! cached global palette exactly once per requested encoding and hands out
//! the same buffer for every decode until the encoding changes again. Local
//! palettes go through a dedicated scratch buffer and never touch the global
//! conversion cache.

use crate::file::ZelError;

use super::{ColorEncoding, grow_scratch};

/// Decodes raw on-disk palette bytes into RGB565 words in `encoding`.
fn decode_entries(raw: &[u8], swap: bool, out: &mut [u16]) {
	for (word, entry) in out.iter_mut().zip(raw.chunks_exact(2)) {
		let value = u16::from_le_bytes([entry[0], entry[1]]);
		*word = if swap { value.swap_bytes() } else { value };
	}
}

/// Cached global palette entries together with their on-disk byte order.
#[derive(Debug)]
struct GlobalPalette {
	entries: Vec<u16>,
	encoding: ColorEncoding,
}

/// Palette state owned by a decoder handle.
#[derive(Debug)]
pub(crate) struct PaletteCache {
	global: Option<GlobalPalette>,
	converted: Vec<u16>,
	converted_encoding: Option<ColorEncoding>,
	local_scratch: Vec<u16>,
	output_override: Option<ColorEncoding>,
}

impl PaletteCache {
	/// Creates the cache from the raw global palette bytes, if the file has
	/// a global palette block.
	pub fn new(global: Option<(&[u8], ColorEncoding)>) -> Self {
		let global = global.map(|(raw, encoding)| {
			let mut entries = vec![0u16; raw.len() / 2];
			decode_entries(raw, false, &mut entries);
			GlobalPalette {
				entries,
				encoding,
			}
		});

		Self {
			global,
			converted: Vec::new(),
			converted_encoding: None,
			local_scratch: Vec::new(),
			output_override: None,
		}
	}

	/// Whether the file carries a global palette.
	pub fn has_global(&self) -> bool {
		self.global.is_some()
	}

	/// Overrides the byte order in which palettes are handed out.
	///
	/// Unsets the conversion stamp so the next resolve rebuilds the
	/// converted buffer.
	pub fn set_output_encoding(&mut self, encoding: ColorEncoding) {
		self.output_override = Some(encoding);
		self.converted_encoding = None;
	}

	/// The byte order palettes resolve to: the override if one is set, else
	/// the global palette's on-disk order, else little-endian.
	pub fn output_encoding(&self) -> ColorEncoding {
		self.output_override
			.or(self.global.as_ref().map(|g| g.encoding))
			.unwrap_or(ColorEncoding::Rgb565Le)
	}

	/// Resolves the global palette in the current output encoding.
	///
	/// When the output matches the on-disk order this returns the cached
	/// entries without copying. Otherwise the converted buffer is rebuilt at
	/// most once per encoding change by byte-swapping every entry.
	pub fn resolve_global(&mut self) -> Result<&[u16], ZelError> {
		let global = self.global.as_ref().ok_or(ZelError::MissingPalette)?;
		let want = self.output_override.unwrap_or(global.encoding);
		if want == global.encoding {
			return Ok(&global.entries);
		}

		if self.converted_encoding != Some(want) {
			grow_scratch(&mut self.converted, global.entries.len())?;
			for (word, entry) in self.converted.iter_mut().zip(&global.entries) {
				*word = entry.swap_bytes();
			}
			self.converted_encoding = Some(want);
		}
		Ok(&self.converted[..global.entries.len()])
	}

	/// Resolves a frame-local palette in the current output encoding.
	///
	/// `raw` is the entry data inside the frame block, `encoding` its
	/// declared byte order. The result lives in the local scratch buffer and
	/// stays valid until the next local resolve.
	pub fn resolve_local(
		&mut self,
		raw: &[u8],
		encoding: ColorEncoding,
	) -> Result<&[u16], ZelError> {
		let count = raw.len() / 2;
		let want = self.output_encoding();
		grow_scratch(&mut self.local_scratch, count)?;
		decode_entries(raw, want != encoding, &mut self.local_scratch[..count]);
		Ok(&self.local_scratch[..count])
	}
}
