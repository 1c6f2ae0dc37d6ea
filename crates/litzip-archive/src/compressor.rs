//! The archive contract the bundle flows are written against.

use crate::entry::EntryData;
use crate::error::Result;
use std::collections::BTreeMap;

/// Polymorphic interface over an in-memory archive of named entries.
///
/// Any binary container with hierarchical named entries can satisfy this
/// contract; [`crate::ZipCompressor`] is the production implementation.
/// Loading serialized bytes back into an archive is a construction-time
/// concern of the concrete type, not part of the trait.
pub trait Compressor {
    /// Insert or overwrite the entry at `path`.
    ///
    /// Duplicate paths overwrite silently (last write wins); empty content
    /// is allowed. Paths ending in `/` become directory markers and their
    /// content is ignored.
    fn add_entry(&mut self, path: &str, content: EntryData);

    /// Read the entry at `path` as text.
    ///
    /// Returns `Ok(None)` when no entry exists at `path`. Returns an error
    /// when the entry exists but its content is not valid UTF-8; text reads
    /// never silently corrupt binary data.
    fn read_text(&self, path: &str) -> Result<Option<String>>;

    /// Read the entry at `path` as bytes, or `None` when absent.
    fn read_bytes(&self, path: &str) -> Option<Vec<u8>>;

    /// Every entry in the archive as bytes, keyed by path.
    ///
    /// Directory markers are included; callers distinguish them by the
    /// trailing `/` (see [`crate::is_dir_marker`]).
    fn entries(&self) -> BTreeMap<String, Vec<u8>>;

    /// Serialize the archive to container bytes.
    ///
    /// A conforming load reconstructs every entry losslessly: binary content
    /// bit-exact, text re-encoded deterministically as UTF-8. Entry order in
    /// the output is deterministic (sorted by path).
    fn to_bytes(&self) -> Result<Vec<u8>>;
}
