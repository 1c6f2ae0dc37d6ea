//! In-memory zip archive abstraction for litzip bundles.
//!
//! This crate provides the container layer the bundle flows are built on:
//! a mutable, in-memory collection of named entries that serializes to (and
//! loads from) a standard zip archive. Bundling logic never touches the zip
//! crate directly; it goes through the [`Compressor`] trait, so the bundle
//! layouts stay independent of the container format.
//!
//! # Entry Model
//!
//! - Entry keys are path-like strings; slashes denote a virtual hierarchy.
//! - Keys are unique within an archive; adding to an existing key overwrites.
//! - Keys ending in `/` are directory markers and carry no content. Archives
//!   produced by folder-creating zippers contain such markers; they survive a
//!   load so callers can recognize and skip them.
//! - Text entries are re-encoded as UTF-8 on serialization; binary entries
//!   round-trip bit-exact.
//!
//! # Example
//!
//! ```
//! use litzip_archive::{Compressor, ZipCompressor};
//!
//! let mut zipper = ZipCompressor::new();
//! zipper.add_entry("a.txt", "hello".into());
//!
//! let bytes = zipper.to_bytes().unwrap();
//! let reloaded = ZipCompressor::load(&bytes).unwrap();
//! assert_eq!(reloaded.read_text("a.txt").unwrap().as_deref(), Some("hello"));
//! assert_eq!(reloaded.read_text("missing.txt").unwrap(), None);
//! ```

pub mod compressor;
pub mod entry;
pub mod error;
pub mod zip;

pub use compressor::Compressor;
pub use entry::{is_dir_marker, EntryData};
pub use error::{ArchiveError, Result};
pub use zip::ZipCompressor;
