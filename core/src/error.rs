//! Error types for the items domain.
//!
//! # Design
//! `StoreError` covers lookups that miss. `ValidationFailure` names the field
//! and the first rule it broke; its `Display` text is what clients see.

use thiserror::Error;

use crate::types::ItemId;
use crate::validate::{MAX_NAME_LEN, MIN_NAME_LEN};

/// Errors returned by `ItemStore`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No item with this id is currently stored.
    #[error("Item {0} not found")]
    NotFound(ItemId),
}

/// Which constraint a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailureKind {
    Required,
    TooShort,
    TooLong,
    NotAlphabetic,
}

/// The first constraint violated by a creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} {}", .field, describe(.kind))]
pub struct ValidationFailure {
    pub field: &'static str,
    pub kind: ValidationFailureKind,
}

impl ValidationFailure {
    pub fn new(field: &'static str, kind: ValidationFailureKind) -> Self {
        Self { field, kind }
    }
}

fn describe(kind: &ValidationFailureKind) -> String {
    match kind {
        ValidationFailureKind::Required => "is required".to_string(),
        ValidationFailureKind::TooShort => format!("must be at least {MIN_NAME_LEN} characters"),
        ValidationFailureKind::TooLong => format!("must be at most {MAX_NAME_LEN} characters"),
        ValidationFailureKind::NotAlphabetic => {
            "must contain only alphabetic characters".to_string()
        }
    }
}
