//! Domain DTOs for the items API.
//!
//! # Design
//! These types mirror the store's wire schema but are defined independently
//! of the mock-server crate; the end-to-end tests catch schema drift. The
//! store also serializes `created_at`/`updated_at` on every item — those
//! columns are owned entirely by the store, so the client does not model
//! them and serde drops them on deserialization.

use serde::{Deserialize, Serialize};

/// A single item as returned by the API. Always carries the store-assigned
/// identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub what: String,
    pub when: String,
}

/// An item value without an identifier, the payload for create and update.
///
/// Update is a full replacement: both fields are always sent, and the target
/// identifier travels in the request path, never in the body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemDraft {
    pub what: String,
    pub when: String,
}

impl ItemDraft {
    pub fn new(what: impl Into<String>, when: impl Into<String>) -> Self {
        Self {
            what: what.into(),
            when: when.into(),
        }
    }
}
