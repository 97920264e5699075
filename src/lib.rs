#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `zel-rs` is a decoder toolkit for the ZEL animated-image container, a
//! format built for memory-constrained playback targets such as
//! microcontrollers driving SD-card-backed displays.
//!
//! The heavy lifting lives in the [`zel_types`] crate; this crate re-exports
//! its surface for convenient consumption.
//!
//! ```no_run
//! use zel_rs::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let zel = ZelDecoder::open("BOOT.ZEL")?;
//! println!("{zel}");
//! # Ok(())
//! # }
//! ```

pub use zel_types::*;
