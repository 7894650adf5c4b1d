//! Where the raw export text comes from.
//!
//! The cache only needs the payload as text; downloading it over HTTP is the
//! caller's business and plugs in through [`RecordSource`].

use crate::error::{Result, ScoutError};
use std::fs;
use std::path::{Path, PathBuf};

pub trait RecordSource {
    /// Human-readable name used in logs and errors.
    fn name(&self) -> String;

    /// Fetch the full payload. Failures surface as `SourceUnavailable`.
    fn fetch(&self) -> Result<String>;
}

/// Local copy of the export on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String> {
        let bytes = fs::read(&self.path).map_err(|e| ScoutError::SourceUnavailable {
            name: self.name(),
            reason: e.to_string(),
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// In-memory payload, e.g. text a host application already downloaded.
#[derive(Debug, Clone)]
pub struct TextSource {
    label: String,
    text: String,
}

impl TextSource {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

impl RecordSource for TextSource {
    fn name(&self) -> String {
        self.label.clone()
    }

    fn fetch(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

impl<S: RecordSource + ?Sized> RecordSource for Box<S> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn fetch(&self) -> Result<String> {
        (**self).fetch()
    }
}
