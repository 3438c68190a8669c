//! Error types for the builder

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuilderError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Import error: {0}")]
    Import(#[from] crate::transfer::ImportError),

    #[error("Export error: {0}")]
    Export(#[from] crate::transfer::ExportError),

    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),

    #[error("Section not found: {0}")]
    SectionNotFound(String),
}
