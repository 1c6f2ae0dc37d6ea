//! Zip-backed implementation of the archive contract.
//!
//! Entries are accumulated in memory and written out through the zip codec
//! in one pass; loading parses a serialized archive back into the same
//! in-memory form.

use crate::compressor::Compressor;
use crate::entry::{is_dir_marker, EntryData};
use crate::error::Result;
use std::collections::BTreeMap;
use std::io::{Cursor, Read, Write};
use tracing::{debug, info};
use zip::write::{FileOptions, ZipWriter};
use zip::{CompressionMethod, ZipArchive};

/// In-memory archive backed by a general-purpose zip codec.
///
/// Create one empty with [`ZipCompressor::new`] or from serialized bytes
/// with [`ZipCompressor::load`]. Entries are kept sorted by path, so they
/// serialize in a stable order regardless of insertion order.
#[derive(Debug, Default, Clone)]
pub struct ZipCompressor {
    entries: BTreeMap<String, EntryData>,
}

impl ZipCompressor {
    /// Create an empty archive.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Parse previously serialized archive bytes.
    ///
    /// Fails with [`crate::ArchiveError::Zip`] when the bytes are not a
    /// well-formed zip container. Directory markers present in the input
    /// are preserved as empty entries with a trailing `/`.
    pub fn load(bytes: &[u8]) -> Result<Self> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;

        let mut entries = BTreeMap::new();
        for index in 0..archive.len() {
            let mut file = archive.by_index(index)?;
            let path = file.name().to_string();

            if file.is_dir() {
                entries.insert(path, EntryData::Binary(Vec::new()));
                continue;
            }

            // Size fields in the header are untrusted input.
            let mut data = Vec::new();
            file.read_to_end(&mut data)?;
            entries.insert(path, EntryData::Binary(data));
        }

        info!(entries = entries.len(), bytes = bytes.len(), "Archive loaded");

        Ok(Self { entries })
    }

    /// Number of entries, directory markers included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the archive has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when an entry exists at `path`.
    pub fn has_entry(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }
}

impl Compressor for ZipCompressor {
    fn add_entry(&mut self, path: &str, content: EntryData) {
        // Directory markers carry no content.
        let content = if is_dir_marker(path) {
            EntryData::Binary(Vec::new())
        } else {
            content
        };

        debug!(path = %path, bytes = content.len(), "Added entry");
        self.entries.insert(path.to_string(), content);
    }

    fn read_text(&self, path: &str) -> Result<Option<String>> {
        match self.entries.get(path) {
            None => Ok(None),
            Some(EntryData::Text(s)) => Ok(Some(s.clone())),
            Some(EntryData::Binary(b)) => match String::from_utf8(b.clone()) {
                Ok(s) => Ok(Some(s)),
                Err(_) => Err(crate::ArchiveError::InvalidText {
                    path: path.to_string(),
                }),
            },
        }
    }

    fn read_bytes(&self, path: &str) -> Option<Vec<u8>> {
        self.entries.get(path).map(|e| e.as_bytes().to_vec())
    }

    fn entries(&self) -> BTreeMap<String, Vec<u8>> {
        self.entries
            .iter()
            .map(|(path, content)| (path.clone(), content.as_bytes().to_vec()))
            .collect()
    }

    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut zip = ZipWriter::new(&mut buffer);

            let options: FileOptions<'_, ()> = FileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .unix_permissions(0o644);

            for (path, content) in &self.entries {
                if is_dir_marker(path) {
                    zip.add_directory(path.as_str(), options)?;
                    continue;
                }

                zip.start_file(path.as_str(), options)?;
                zip.write_all(content.as_bytes())?;
            }

            zip.finish()?;
        }

        let bytes = buffer.into_inner();

        info!(
            entries = self.entries.len(),
            bytes = bytes.len(),
            "Archive serialized"
        );

        Ok(bytes)
    }
}
