//! Error types for the list and tree collections.
//!
//! This module provides [CollectionError] and [CollectionErrorKind] for
//! representing and reporting failed preconditions of collection operations
//! and invalid iterator use.

use thiserror::Error;

/// Result alias used by all fallible collection operations.
pub type CollectionResult<T> = Result<T, CollectionError>;

// =#========================================================================#=
// COLLECTION ERROR KIND
// =#========================================================================#=
/// Conditions a collection operation can signal to its caller.
#[derive(Error, PartialEq, Eq, Debug, Clone, Copy)]
pub enum CollectionErrorKind {
    /// Operation requires a non-empty structure.
    #[error("is empty")]
    EmptyCollection,
    /// Target value is absent from the structure.
    #[error("does not contain the target element")]
    ElementNotFound,
    /// Backing structure changed after the iterator was created.
    #[error("was modified during iteration")]
    ConcurrentModification,
    /// Iterator advanced past its last element.
    #[error("has no further element")]
    NoSuchElement,
    /// Removal through an iterator was attempted.
    #[error("does not support this operation")]
    UnsupportedOperation,
}

// =#========================================================================#=
// COLLECTION ERROR
// =#========================================================================$=
/// Collection error carrying the name of the offending collection as context.
#[derive(Error, PartialEq, Eq, Debug, Clone)]
#[error("The {collection} {kind}")]
pub struct CollectionError {
    kind: CollectionErrorKind,
    collection: &'static str,
}

impl CollectionError {
    /// Create a CollectionError from an error kind and collection name
    pub fn new(kind: CollectionErrorKind, collection: &'static str) -> Self {
        Self { kind, collection }
    }

    /// Convenience constructor for EmptyCollection
    pub fn empty_collection(collection: &'static str) -> Self {
        Self::new(CollectionErrorKind::EmptyCollection, collection)
    }

    /// Convenience constructor for ElementNotFound
    pub fn element_not_found(collection: &'static str) -> Self {
        Self::new(CollectionErrorKind::ElementNotFound, collection)
    }

    /// Convenience constructor for ConcurrentModification
    pub fn concurrent_modification(collection: &'static str) -> Self {
        Self::new(CollectionErrorKind::ConcurrentModification, collection)
    }

    /// Convenience constructor for NoSuchElement
    pub fn no_such_element(collection: &'static str) -> Self {
        Self::new(CollectionErrorKind::NoSuchElement, collection)
    }

    /// Convenience constructor for UnsupportedOperation
    pub fn unsupported_operation(collection: &'static str) -> Self {
        Self::new(CollectionErrorKind::UnsupportedOperation, collection)
    }

    /// Get the error kind
    pub fn kind(&self) -> CollectionErrorKind {
        self.kind
    }

    /// Get the name of the collection that raised the error
    pub fn collection(&self) -> &'static str {
        self.collection
    }
}
