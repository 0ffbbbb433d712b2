//! Asynchronous API client for a remote item collection.
//!
//! # Overview
//! Wraps the five CRUD calls of the items REST resource — list, get, create,
//! update, delete — behind typed async methods. Each call is one HTTP round
//! trip; non-success responses and transport failures surface uniformly as
//! [`TransportError`].
//!
//! # Design
//! - `ItemClient` is stateless between calls; its only configuration is the
//!   injected [`ClientConfig`] base address.
//! - Items are immutable values: every operation returns fresh owned data.
//! - Drafts ([`ItemDraft`]) structurally lack an `id`, so create/update
//!   payloads can never carry one; update addresses its target by path.
//! - The store's `created_at`/`updated_at` columns are store-owned and not
//!   modeled here.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::ItemClient;
pub use config::ClientConfig;
pub use error::TransportError;
pub use types::{Item, ItemDraft};
