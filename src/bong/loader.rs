//! Source loading utilities
//!
//! `SourceLoader` reads TheBong source from a file or a string and runs transforms on it.
//! It is used by the CLI and by tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use thebong::bong::loader::SourceLoader;
//!
//! let loader = SourceLoader::from_path("hello.bong")?;
//! let python = loader.transpile()?;
//! std::fs::write(loader.output_path().unwrap(), python)?;
//! ```

use crate::bong::transforms::standard::TRANSPILE;
use crate::bong::transforms::{Transform, TransformError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extension of generated Python files
pub const OUTPUT_EXTENSION: &str = "py";

/// Error that can occur when loading or writing sources
#[derive(Debug, Error)]
pub enum LoaderError {
    /// IO error on a specific path
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Transform error
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),
}

impl LoaderError {
    fn io(path: &Path, source: io::Error) -> Self {
        LoaderError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Source loader with transform shortcuts
pub struct SourceLoader {
    source: String,
    path: Option<PathBuf>,
}

impl SourceLoader {
    /// Load from a file path (UTF-8)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| LoaderError::io(path, e))?;
        log::info!("read {} byte(s) from {}", source.len(), path.display());
        Ok(SourceLoader {
            source,
            path: Some(path.to_path_buf()),
        })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        SourceLoader {
            source: source.into(),
            path: None,
        }
    }

    /// Run a custom transform on the source
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.source.clone())?)
    }

    /// Transpile the source with the built-in vocabulary
    ///
    /// This is a shortcut for `.with(&TRANSPILE)`.
    pub fn transpile(&self) -> Result<String, LoaderError> {
        self.with(&*TRANSPILE)
    }

    /// Get the raw source string
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The path this source was read from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The sibling `.py` path
    ///
    /// `None` for sources that were not loaded from a file.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.path.as_deref().map(output_path_for)
    }
}

/// `input` with its last extension replaced by (or extended with) `.py`
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// Write generated code to `path` as UTF-8
pub fn write_output(path: &Path, code: &str) -> Result<(), LoaderError> {
    fs::write(path, code).map_err(|e| LoaderError::io(path, e))?;
    log::info!("wrote {} byte(s) to {}", code.len(), path.display());
    Ok(())
}
