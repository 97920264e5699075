//! File type support for the `zel-rs` project.

mod error;

pub mod zel;

// Re-export unified error type
pub use error::ZelError;

// Re-export main file types
pub use zel::{
	ColorEncoding, ColorFormat, Compression, Decoder as ZelDecoder, FrameInfo, FrameInfoIter,
	MemorySource, ReadAt, StreamSource,
};
