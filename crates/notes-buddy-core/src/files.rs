//! In-memory registry of uploaded study files.
//!
//! Nothing is read from disk: each file carries a synthetic "extracted" text
//! standing in for real PDF/DOC parsing. Lookups of unknown names are soft
//! misses that return an empty string.

use crate::config::ACCEPTED_EXTENSIONS;

/// A file the user marked as uploaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub size: u64,
    content: String,
}

impl UploadedFile {
    /// Create a file handle with placeholder content derived from its name.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        let content = synthetic_content(&name);
        Self {
            name,
            size,
            content,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Size for display, e.g. `2.0 KB`.
    pub fn display_size(&self) -> String {
        format_size_kb(self.size)
    }
}

/// Uploaded files deduplicated by name, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileRegistry {
    files: Vec<UploadedFile>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, replacing any existing entry with the same name.
    ///
    /// A replaced entry moves to the end of the list.
    pub fn add(&mut self, file: UploadedFile) {
        self.files.retain(|f| f.name != file.name);
        self.files.push(file);
    }

    /// Remove by name. Unknown names are ignored.
    pub fn remove(&mut self, name: &str) {
        self.files.retain(|f| f.name != name);
    }

    /// Extracted content for `name`, or an empty string if absent.
    pub fn get_content(&self, name: &str) -> String {
        self.get(name)
            .map(|f| f.content.clone())
            .unwrap_or_default()
    }

    pub fn get(&self, name: &str) -> Option<&UploadedFile> {
        self.files.iter().find(|f| f.name == name)
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    /// Names in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(|f| f.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Whether the upload filter accepts this file name (by extension only).
pub fn is_accepted(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(stem, ext)| {
            !stem.is_empty() && ACCEPTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
        })
        .unwrap_or(false)
}

/// Format a byte count in kilobytes with one decimal place.
pub fn format_size_kb(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

fn synthetic_content(name: &str) -> String {
    format!(
        "This is extracted content from {}. In a real implementation, this would extract \
         and display the actual text content from PDF, DOC, or TXT files using appropriate \
         libraries.",
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_deduplicates_by_name() {
        let mut registry = FileRegistry::new();
        registry.add(UploadedFile::new("notes.txt", 100));
        registry.add(UploadedFile::new("notes.txt", 250));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("notes.txt").map(|f| f.size), Some(250));
    }

    #[test]
    fn test_replace_moves_to_end() {
        let mut registry = FileRegistry::new();
        registry.add(UploadedFile::new("a.pdf", 1));
        registry.add(UploadedFile::new("b.pdf", 2));
        registry.add(UploadedFile::new("a.pdf", 3));
        assert_eq!(registry.names(), vec!["b.pdf", "a.pdf"]);
    }

    #[test]
    fn test_get_content_soft_miss() {
        let mut registry = FileRegistry::new();
        registry.add(UploadedFile::new("notes.txt", 10));
        let content = registry.get_content("notes.txt");
        assert!(!content.is_empty());
        assert!(content.contains("notes.txt"));
        assert_eq!(registry.get_content("missing.txt"), "");
    }

    #[test]
    fn test_remove() {
        let mut registry = FileRegistry::new();
        registry.add(UploadedFile::new("notes.txt", 10));
        registry.remove("other.txt");
        assert_eq!(registry.len(), 1);
        registry.remove("notes.txt");
        assert!(registry.is_empty());
        assert_eq!(registry.get_content("notes.txt"), "");
    }

    #[test]
    fn test_is_accepted() {
        assert!(is_accepted("lecture.pdf"));
        assert!(is_accepted("essay.DOCX"));
        assert!(is_accepted("draft.doc"));
        assert!(is_accepted("notes.txt"));
        assert!(!is_accepted("photo.png"));
        assert!(!is_accepted("README"));
        assert!(!is_accepted(".txt"));
    }

    #[test]
    fn test_display_size() {
        assert_eq!(UploadedFile::new("bio.pdf", 2048).display_size(), "2.0 KB");
        assert_eq!(format_size_kb(1536), "1.5 KB");
        assert_eq!(format_size_kb(0), "0.0 KB");
    }
}
