//! # Register Template
//!
//! The INV-01 spreadsheet offered for download next to the form. Its
//! absence is reported as a warning and never blocks a diagnosis.

use std::path::{Path, PathBuf};

use crate::error::LgpdError;

pub const TEMPLATE_FILE_NAME: &str = "INV-01.xlsx";
pub const TEMPLATE_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Result of looking for the template on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateFile {
    Available(PathBuf),
    Missing(PathBuf),
}

impl TemplateFile {
    pub fn locate(path: &Path) -> Self {
        if path.is_file() {
            Self::Available(path.to_path_buf())
        } else {
            tracing::warn!(path = %path.display(), "{TEMPLATE_FILE_NAME} not found");
            Self::Missing(path.to_path_buf())
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Available(p) | Self::Missing(p) => p,
        }
    }

    /// Read the template bytes. `Ok(None)` when the file is missing.
    pub fn read(&self) -> Result<Option<Vec<u8>>, LgpdError> {
        match self {
            Self::Available(p) => Ok(Some(std::fs::read(p)?)),
            Self::Missing(_) => Ok(None),
        }
    }
}
