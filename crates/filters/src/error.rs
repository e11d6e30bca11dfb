use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

/// Error produced when a phrase file cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum PhraseFileError {
    /// The file could not be read.
    #[error("failed to read filter phrases from '{}': {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The file does not contain UTF-8 text.
    #[error("filter phrase file '{}' is not valid UTF-8: {source}", .path.display())]
    InvalidUtf8 {
        /// File that was being decoded.
        path: PathBuf,
        /// Underlying decoding failure.
        #[source]
        source: FromUtf8Error,
    },
}

impl PhraseFileError {
    /// Returns the file the error refers to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::InvalidUtf8 { path, .. } => path,
        }
    }
}
