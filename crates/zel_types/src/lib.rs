//! This crate provides core types and container support for the `zel-rs` project.
//!
//! # File Formats
//!
//! - **ZEL**: Animated-image container for memory-constrained devices. Frames
//!   are located through an absolute-offset index table, partitioned into a
//!   fixed grid of independently compressed zones, and store 8-bit palette
//!   indices resolved against a global or per-frame RGB565 palette.
//!
//! # Examples
//!
//! ```no_run
//! use zel_types::file::ZelDecoder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut zel = ZelDecoder::open("BOOT.ZEL")?;
//!
//! let mut frame = vec![0u8; zel.width() as usize * zel.height() as usize];
//! zel.decode_frame_index8(0, &mut frame, zel.width() as usize)?;
//! # Ok(())
//! # }
//! ```

pub mod file;
pub mod prelude;

// Re-export commonly used file types at crate root for convenience
pub use file::{
	ColorEncoding, ColorFormat, Compression, FrameInfo, MemorySource, ReadAt, StreamSource,
	ZelDecoder, ZelError,
};
