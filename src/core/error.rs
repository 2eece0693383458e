//! Error type for logo replacement.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while setting up the menu text.
///
/// Parsing the custom text never fails; these only come from loading the
/// text template and its font.
#[derive(Debug, Error)]
pub enum MenuTextError {
    /// The named template could not be loaded.
    #[error("failed to load text template '{asset}': {reason}")]
    Template {
        /// Name of the template asset.
        asset: String,
        /// Why loading failed.
        reason: String,
    },
    /// Reading or writing a file failed.
    #[error("IO error for '{}': {source}", .path.display())]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl MenuTextError {
    /// Create a template error.
    pub fn template(asset: impl Into<String>, reason: impl ToString) -> Self {
        Self::Template {
            asset: asset.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
