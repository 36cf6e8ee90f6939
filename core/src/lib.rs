//! Domain core for the items service.
//!
//! # Overview
//! Owns the item data model, the creation-input validator and the in-memory
//! resource store. Nothing here touches the network or an async runtime; the
//! server crate decodes requests, calls into this crate and shapes responses.
//!
//! # Design
//! - `ItemStore` is the only owner of mutable state. Every read and write goes
//!   through its lock; callers never see the underlying map.
//! - `validate` turns a `NewItemInput` into a `ValidatedItem`. `ItemStore::create`
//!   only accepts the validated form, so an unchecked name cannot be stored.
//! - Errors are plain `thiserror` enums; the server maps them to status codes.

pub mod error;
pub mod store;
pub mod types;
pub mod validate;

pub use error::{StoreError, ValidationFailure, ValidationFailureKind};
pub use store::ItemStore;
pub use types::{Item, ItemId, NewItemInput};
pub use validate::{validate, ValidatedItem, MAX_NAME_LEN, MIN_NAME_LEN};
