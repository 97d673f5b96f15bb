//! Foundation types for the shelf item service.
//!
//! This crate provides the domain types shared by the store and server
//! crates. Every other shelf crate depends on `shelf-types`.
//!
//! # Key Types
//!
//! - [`ItemId`] — UUID v7 item identifier, generated by the store at insert
//! - [`Item`] — the sole domain resource (`name`, `price`, timestamps)
//! - [`ItemDraft`] — complete payload for create and full update
//! - [`ItemPatch`] — partial payload for merge-style updates
//! - [`ConstraintViolation`] — domain-constraint failures raised at write time

pub mod error;
pub mod id;
pub mod item;

pub use error::{ConstraintViolation, TypeError};
pub use id::ItemId;
pub use item::{Item, ItemDraft, ItemPatch};
