//! Prelude module for `zel_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use zel_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let zel = ZelDecoder::open("BOOT.ZEL")?;
//! println!("{} frames, {} ms", zel.frame_count(), zel.total_duration_ms());
//! # Ok(())
//! # }
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// Enumerators
	ColorEncoding,
	ColorFormat,
	Compression,

	// Frame metadata
	FrameInfo,
	FrameInfoIter,

	// Byte sources
	MemorySource,
	ReadAt,
	StreamSource,

	// Decoder
	ZelDecoder,
	ZelError,
};

// Header types for advanced usage
#[doc(inline)]
pub use crate::file::zel::{FileHeader, FrameHeader, FrameIndexEntry, PaletteHeader, ZoneLayout};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
