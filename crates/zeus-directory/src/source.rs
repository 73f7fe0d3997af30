//! The directory seam the quoting engine reads publications through.

use std::collections::BTreeSet;

use zeus_model::Publication;

use crate::error::DirectoryError;

/// A store the publications directory can be read from.
///
/// Every call to [`snapshot`](Self::snapshot) is an independent read; callers
/// take one snapshot per request and never write back.
pub trait PublicationDirectory: Send + Sync {
    /// Read every publication currently in the directory.
    fn snapshot(&self) -> Result<Vec<Publication>, DirectoryError>;

    /// Short description of where publications come from, for logs.
    fn origin(&self) -> String;
}

/// A fixed set of publications held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    publications: Vec<Publication>,
}

impl InMemoryDirectory {
    pub fn new(publications: Vec<Publication>) -> Self {
        Self { publications }
    }

    pub fn len(&self) -> usize {
        self.publications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.publications.is_empty()
    }
}

impl FromIterator<Publication> for InMemoryDirectory {
    fn from_iter<I: IntoIterator<Item = Publication>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl PublicationDirectory for InMemoryDirectory {
    fn snapshot(&self) -> Result<Vec<Publication>, DirectoryError> {
        ensure_unique_ids(&self.publications, &self.origin())?;
        Ok(self.publications.clone())
    }

    fn origin(&self) -> String {
        "in-memory directory".to_string()
    }
}

/// Ids key quote results, so a snapshot may not repeat one.
pub(crate) fn ensure_unique_ids(
    publications: &[Publication],
    origin: &str,
) -> Result<(), DirectoryError> {
    let mut seen = BTreeSet::new();
    for publication in publications {
        if !seen.insert(publication.id.as_str()) {
            return Err(DirectoryError::DuplicateId {
                id: publication.id.to_string(),
                origin: origin.to_string(),
            });
        }
    }
    Ok(())
}
