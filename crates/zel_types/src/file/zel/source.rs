//! Byte sources for the ZEL decoder.
//!
//! The decoder reads its input through the [`ReadAt`] trait, a random-access
//! view over an opaque byte region. Two implementations are provided: a
//! zero-copy wrapper over an in-memory slice and an adapter over any
//! `Read + Seek` stream. Custom sources (for example an SD-card block device)
//! only need to implement `ReadAt` themselves.

use std::io::{Read, Seek, SeekFrom};

use crate::file::ZelError;

/// Bounds check that cannot wrap even when `offset` approaches `u64::MAX`.
pub(crate) fn check_range(offset: u64, len: u64, limit: u64) -> bool {
	len <= limit && offset <= limit - len
}

/// Random-access read over an opaque byte region.
///
/// This is the stream contract of the container: `read_exact_at` must fill
/// the destination completely or fail, and a short read is an I/O fault.
/// Releasing whatever backs the source happens on drop.
pub trait ReadAt {
	/// Returns the total size of the byte region.
	fn size(&self) -> u64;

	/// Copies `buf.len()` bytes starting at the absolute `offset` into `buf`.
	fn read_exact_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<(), ZelError>;

	/// Borrows `len` bytes at `offset` without copying, when the backing
	/// store is addressable memory. Sources that cannot lend memory return
	/// `None` and the decoder falls back to `read_exact_at` into a scratch
	/// buffer.
	fn slice_at(&self, offset: u64, len: usize) -> Option<&[u8]> {
		let _ = (offset, len);
		None
	}
}

/// Zero-copy byte source over a borrowed slice.
///
/// The slice must outlive the decoder; frame data decoded from a memory
/// source is never copied into internal buffers.
#[derive(Debug, Clone, Copy)]
pub struct MemorySource<'a> {
	data: &'a [u8],
}

impl<'a> MemorySource<'a> {
	/// Wraps a byte slice.
	pub fn new(data: &'a [u8]) -> Self {
		Self {
			data,
		}
	}
}

impl ReadAt for MemorySource<'_> {
	fn size(&self) -> u64 {
		self.data.len() as u64
	}

	fn read_exact_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<(), ZelError> {
		let src = self.slice_at(offset, buf.len()).ok_or_else(|| {
			ZelError::corrupt(format!(
				"read of {} bytes at offset {} past end of {}-byte buffer",
				buf.len(),
				offset,
				self.data.len()
			))
		})?;
		buf.copy_from_slice(src);
		Ok(())
	}

	fn slice_at(&self, offset: u64, len: usize) -> Option<&[u8]> {
		if !check_range(offset, len as u64, self.data.len() as u64) {
			return None;
		}
		self.data.get(offset as usize..offset as usize + len)
	}
}

/// Byte source over any seekable stream.
///
/// Every read seeks to the absolute offset first, so the adapter works with
/// plain files, buffered readers, and in-memory cursors alike. The region
/// size is discovered once at construction by seeking to the end.
#[derive(Debug)]
pub struct StreamSource<R> {
	reader: R,
	size: u64,
}

impl<R: Read + Seek> StreamSource<R> {
	/// Wraps a seekable reader, measuring the stream size.
	pub fn new(mut reader: R) -> Result<Self, ZelError> {
		let size = reader.seek(SeekFrom::End(0))?;
		Ok(Self {
			reader,
			size,
		})
	}
}

impl<R: Read + Seek> ReadAt for StreamSource<R> {
	fn size(&self) -> u64 {
		self.size
	}

	fn read_exact_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<(), ZelError> {
		if !check_range(offset, buf.len() as u64, self.size) {
			return Err(ZelError::corrupt(format!(
				"read of {} bytes at offset {} past end of {}-byte stream",
				buf.len(),
				offset,
				self.size
			)));
		}
		self.reader.seek(SeekFrom::Start(offset))?;
		// A short read surfaces as UnexpectedEof, reported as an I/O fault.
		self.reader.read_exact(buf)?;
		Ok(())
	}
}
