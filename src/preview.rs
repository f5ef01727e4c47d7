//! Preview sources for a rendered presentation.
//!
//! A preview is either a remote URL (direct link or third-party viewer) or a
//! local temporary file holding bytes fetched from the service. Local files
//! belong to a [`PreviewSlot`], which deletes the previous file whenever the
//! source changes and when the slot itself goes away.

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use tempfile::TempPath;

use crate::error::{Error, Result};

/// Strategy for showing a rendered file before download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PreviewMethod {
    /// Link to the file as the service serves it
    Direct,
    /// Fetch the file and keep it in a local temporary file
    Blob,
    /// Third-party document viewer
    #[default]
    Viewer,
}

impl PreviewMethod {
    /// Every method, in presentation order.
    pub const ALL: [PreviewMethod; 3] = [
        PreviewMethod::Direct,
        PreviewMethod::Blob,
        PreviewMethod::Viewer,
    ];

    /// Short name used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            PreviewMethod::Direct => "direct",
            PreviewMethod::Blob => "blob",
            PreviewMethod::Viewer => "viewer",
        }
    }
}

impl fmt::Display for PreviewMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreviewMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(PreviewMethod::Direct),
            "blob" | "local" => Ok(PreviewMethod::Blob),
            "viewer" | "office" => Ok(PreviewMethod::Viewer),
            other => Err(Error::invalid_value("preview method", other)),
        }
    }
}

/// A temporary file holding fetched preview bytes. Deleted on drop.
#[derive(Debug)]
pub struct LocalPreview {
    path: TempPath,
    url: String,
}

impl LocalPreview {
    /// Write `bytes` to a fresh temporary file.
    pub fn create(bytes: &[u8]) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("pptwizard-preview-")
            .suffix(".pptx")
            .tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;

        let path = file.into_temp_path();
        let url = format!("file://{}", path.display());
        Ok(Self { path, url })
    }

    /// Location of the temporary file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `file://` URL of the temporary file.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Delete the file now, reporting failures instead of ignoring them.
    pub fn release(self) -> Result<()> {
        self.path.close()?;
        Ok(())
    }
}

/// What a preview currently shows.
#[derive(Debug)]
pub enum PreviewSource {
    /// A URL hosted elsewhere
    Remote {
        /// How the URL was built
        method: PreviewMethod,
        /// The URL
        url: String,
    },
    /// A local temporary file
    Local(LocalPreview),
}

impl PreviewSource {
    /// URL to open.
    pub fn url(&self) -> &str {
        match self {
            PreviewSource::Remote { url, .. } => url,
            PreviewSource::Local(local) => local.url(),
        }
    }

    /// Method that produced this source.
    pub fn method(&self) -> PreviewMethod {
        match self {
            PreviewSource::Remote { method, .. } => *method,
            PreviewSource::Local(_) => PreviewMethod::Blob,
        }
    }

    /// Whether this source owns a local temporary file.
    pub fn is_local(&self) -> bool {
        matches!(self, PreviewSource::Local(_))
    }
}

/// Holds at most one preview source and owns its temporary file.
#[derive(Debug, Default)]
pub struct PreviewSlot {
    current: Option<PreviewSource>,
    created: usize,
    released: usize,
}

impl PreviewSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current source, releasing the previous one first.
    pub fn set(&mut self, source: PreviewSource) -> &PreviewSource {
        self.release();
        if source.is_local() {
            self.created += 1;
        }
        self.current.insert(source)
    }

    /// Drop the current source, deleting its temporary file if it has one.
    pub fn release(&mut self) {
        match self.current.take() {
            Some(PreviewSource::Local(local)) => {
                self.released += 1;
                let path = local.path().to_path_buf();
                if let Err(e) = local.release() {
                    log::warn!("Could not remove preview file {}: {}", path.display(), e);
                }
            }
            Some(PreviewSource::Remote { .. }) | None => {}
        }
    }

    /// The current source, if any.
    pub fn current(&self) -> Option<&PreviewSource> {
        self.current.as_ref()
    }

    /// Number of local temporary files currently alive.
    pub fn live_local_files(&self) -> usize {
        self.created - self.released
    }
}

impl Drop for PreviewSlot {
    fn drop(&mut self) {
        self.release();
    }
}
