use std::sync::PoisonError;

use thiserror::Error;

/// Errors returned by `PlaceStore` operations.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// No place is stored under the given id
    #[error("Place not found: {0}")]
    NotFound(String),

    /// The slug already belongs to a different place
    #[error("Slug '{slug}' is already used by place {existing_id}")]
    SlugConflict { slug: String, existing_id: String },

    /// The record breaks a data invariant and was not written
    #[error("Invalid place: {0}")]
    Invalid(String),

    /// The store could not be accessed (e.g. a poisoned lock)
    #[error("Place store unavailable: {0}")]
    Internal(String),
}

impl<T> From<PoisonError<T>> for StoreError {
    fn from(e: PoisonError<T>) -> Self {
        StoreError::Internal(e.to_string())
    }
}

/// Errors raised while loading seed data from disk.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Seed file {0} must contain an array or an object of places")]
    UnexpectedShape(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
