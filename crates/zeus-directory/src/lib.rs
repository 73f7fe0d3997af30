//! Read-only access to the publications directory.
//!
//! The directory is owned by an external store. The quoting engine only ever
//! takes snapshots of it through [`PublicationDirectory`].
#![deny(unsafe_code)]

pub mod error;
pub mod file;
pub mod source;

pub use error::DirectoryError;
pub use file::{FileDirectory, FileFormat};
pub use source::{InMemoryDirectory, PublicationDirectory};
