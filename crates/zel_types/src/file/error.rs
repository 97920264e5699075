//! Error types for file format parsing and decoding.

use thiserror::Error;

/// Errors that can occur when parsing or decoding ZEL files
#[derive(Debug, Error)]
pub enum ZelError {
	/// Caller-supplied argument rejected (undersized stride or destination,
	/// lookup on a zero-duration timeline)
	#[error("Invalid argument: {message}")]
	InvalidArgument {
		/// What was wrong with the argument
		message: String,
	},

	/// Invalid magic number
	#[error("Invalid magic number: expected {expected:02X?}, got {actual:02X?}")]
	InvalidMagic {
		/// Expected magic bytes
		expected: [u8; 4],
		/// Actual magic bytes found in the file
		actual: [u8; 4],
	},

	/// Container version mismatch
	#[error("Unsupported container version: expected {expected}, got {actual}")]
	VersionMismatch {
		/// Expected version number
		expected: u16,
		/// Actual version number found in the file
		actual: u16,
	},

	/// Capability or enumerator the decoder refuses to handle
	#[error("Unsupported format: {message}")]
	UnsupportedFormat {
		/// Which capability or enumerator was refused
		message: String,
	},

	/// Compression type without a decoder implementation
	#[error("Unsupported compression type: {compression}")]
	UnsupportedCompression {
		/// Raw compression selector byte
		compression: u8,
	},

	/// Structural or bounds invariant violated
	#[error("Corrupt data: {message}")]
	CorruptData {
		/// Which invariant was violated
		message: String,
	},

	/// Not enough data to parse a structure
	#[error("Insufficient data: expected {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// Scratch buffer allocation failure
	#[error("Out of memory growing a decoder scratch buffer")]
	OutOfMemory,

	/// Frame index out of range
	#[error("Frame index {index} out of range (total frames: {count})")]
	FrameOutOfRange {
		/// Frame index that was requested
		index: u16,
		/// Total number of frames available
		count: u16,
	},

	/// Zone index out of range
	#[error("Zone index {index} out of range (total zones: {count})")]
	ZoneOutOfRange {
		/// Zone index that was requested
		index: u16,
		/// Total number of zones per frame
		count: u16,
	},

	/// Palette requested from a file or frame that has none
	#[error("No palette available for this request")]
	MissingPalette,

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),

	/// Should-be-unreachable condition inside the decoder
	#[error("Internal decoder error: {message}")]
	Internal {
		/// Which unreachable condition was hit
		message: String,
	},
}

impl ZelError {
	/// Returns the stable result-code identifier for this error.
	///
	/// The identifiers are fixed diagnostic strings suitable for logs and
	/// serial consoles; the `Display` implementation carries the detail.
	/// `UNSUPPORTED_VERSION` is reserved and currently never produced:
	/// version mismatches report `INVALID_MAGIC` together with magic
	/// mismatches.
	pub fn code(&self) -> &'static str {
		match self {
			Self::InvalidArgument {
				..
			} => "INVALID_ARGUMENT",
			Self::InvalidMagic {
				..
			}
			| Self::VersionMismatch {
				..
			} => "INVALID_MAGIC",
			Self::UnsupportedFormat {
				..
			}
			| Self::UnsupportedCompression {
				..
			} => "UNSUPPORTED_FORMAT",
			Self::CorruptData {
				..
			}
			| Self::InsufficientData {
				..
			} => "CORRUPT_DATA",
			Self::OutOfMemory => "OUT_OF_MEMORY",
			Self::FrameOutOfRange {
				..
			}
			| Self::ZoneOutOfRange {
				..
			}
			| Self::MissingPalette => "OUT_OF_BOUNDS",
			Self::Io(_) => "IO",
			Self::Internal {
				..
			} => "INTERNAL",
		}
	}

	/// Creates a `CorruptData` error with the given message.
	pub(crate) fn corrupt(message: impl Into<String>) -> Self {
		Self::CorruptData {
			message: message.into(),
		}
	}

	/// Creates an `InvalidArgument` error with the given message.
	pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
		Self::InvalidArgument {
			message: message.into(),
		}
	}

	/// Creates an `UnsupportedFormat` error with the given message.
	pub(crate) fn unsupported(message: impl Into<String>) -> Self {
		Self::UnsupportedFormat {
			message: message.into(),
		}
	}

	/// Creates an `Internal` error with the given message.
	pub(crate) fn internal(message: impl Into<String>) -> Self {
		Self::Internal {
			message: message.into(),
		}
	}
}
