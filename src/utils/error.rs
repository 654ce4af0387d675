use std::fmt;

/// Browser API failures.
#[derive(Debug, Clone)]
pub enum BrowserError {
    /// Browser window not available
    NoWindow,
    /// Document or an element in it not available
    NoDocument,
    /// Clipboard API missing or permission denied
    Clipboard(String),
    /// Blob or object URL creation failed
    Download(String),
}

impl fmt::Display for BrowserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::NoDocument => write!(f, "Document not available"),
            Self::Clipboard(msg) => write!(f, "Clipboard write failed: {}", msg),
            Self::Download(msg) => write!(f, "Download failed: {}", msg),
        }
    }
}

impl std::error::Error for BrowserError {}
