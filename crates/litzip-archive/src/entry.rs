//! Entry content and path helpers.

/// Content of a single archive entry.
///
/// Text is kept as an owned string until serialization, where it is encoded
/// as UTF-8. Binary content round-trips bit-exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryData {
    /// UTF-8 text content.
    Text(String),
    /// Raw binary content.
    Binary(Vec<u8>),
}

impl EntryData {
    /// View the content as bytes (text as its UTF-8 encoding).
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            EntryData::Text(s) => s.as_bytes(),
            EntryData::Binary(b) => b,
        }
    }

    /// Consume the content into bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            EntryData::Text(s) => s.into_bytes(),
            EntryData::Binary(b) => b,
        }
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// True when the content is empty.
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl From<String> for EntryData {
    fn from(s: String) -> Self {
        EntryData::Text(s)
    }
}

impl From<&str> for EntryData {
    fn from(s: &str) -> Self {
        EntryData::Text(s.to_string())
    }
}

impl From<Vec<u8>> for EntryData {
    fn from(b: Vec<u8>) -> Self {
        EntryData::Binary(b)
    }
}

impl From<&[u8]> for EntryData {
    fn from(b: &[u8]) -> Self {
        EntryData::Binary(b.to_vec())
    }
}

/// True when `path` names a directory marker rather than a file entry.
pub fn is_dir_marker(path: &str) -> bool {
    path.ends_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_data_text_bytes() {
        let entry = EntryData::from("hello");
        assert_eq!(entry.as_bytes(), b"hello");
        assert_eq!(entry.len(), 5);
        assert!(!entry.is_empty());
    }

    #[test]
    fn test_entry_data_binary_bytes() {
        let entry = EntryData::from(vec![0u8, 159, 146, 150]);
        assert_eq!(entry.as_bytes(), &[0u8, 159, 146, 150]);
        assert_eq!(entry.into_bytes(), vec![0u8, 159, 146, 150]);
    }

    #[test]
    fn test_entry_data_empty() {
        assert!(EntryData::from("").is_empty());
        assert!(EntryData::from(Vec::new()).is_empty());
    }

    #[test]
    fn test_is_dir_marker() {
        assert!(is_dir_marker("encryptedAssets/"));
        assert!(is_dir_marker("a/b/"));
        assert!(!is_dir_marker("encryptedAssets/file.bin"));
        assert!(!is_dir_marker("string.txt"));
    }
}
