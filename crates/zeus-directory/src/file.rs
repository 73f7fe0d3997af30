//! Directory exports on disk.
//!
//! Two formats are read, chosen by file extension:
//!
//! - `.json`: an array of publication records in the store's camelCase shape
//! - `.csv`: one row per publication with camelCase headers; empty cells are
//!   absent values
//!
//! The file is re-read on every snapshot so edits show up on the next request.

use std::fs;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use tracing::{debug, info};
use zeus_model::Publication;

use crate::error::DirectoryError;
use crate::source::{PublicationDirectory, ensure_unique_ids};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Csv,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// A publications export file.
#[derive(Debug, Clone)]
pub struct FileDirectory {
    path: PathBuf,
    format: FileFormat,
}

impl FileDirectory {
    /// Open a directory file; the format comes from its extension.
    ///
    /// The file itself is not read until the first snapshot.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DirectoryError> {
        let path = path.into();
        let format = FileFormat::from_path(&path)
            .ok_or_else(|| DirectoryError::UnsupportedFormat { path: path.clone() })?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }
}

impl PublicationDirectory for FileDirectory {
    fn snapshot(&self) -> Result<Vec<Publication>, DirectoryError> {
        let publications = match self.format {
            FileFormat::Json => read_json(&self.path)?,
            FileFormat::Csv => read_csv(&self.path)?,
        };
        ensure_unique_ids(&publications, &self.origin())?;
        info!(
            path = %self.path.display(),
            publications = publications.len(),
            "loaded publication directory"
        );
        Ok(publications)
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}

fn read_json(path: &Path) -> Result<Vec<Publication>, DirectoryError> {
    let text = fs::read_to_string(path).map_err(|source| DirectoryError::io(path, source))?;
    serde_json::from_str(&text).map_err(|source| DirectoryError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn read_csv(path: &Path) -> Result<Vec<Publication>, DirectoryError> {
    let csv_error = |source: csv::Error| DirectoryError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(csv_error)?;
    let mut publications = Vec::new();
    for (row, record) in reader.deserialize::<Publication>().enumerate() {
        let publication = record.map_err(csv_error)?;
        debug!(row = row + 1, id = %publication.id, "read publication row");
        publications.push(publication);
    }
    Ok(publications)
}
