//! Core types and traits for the Fennel URL shortener.
//!
//! This crate provides the content-addressing scheme (FNV-1a hashing and
//! [`ShortId`]), the record types for both keyspaces, and the traits the
//! services are written against: [`RecordStore`] for the durable key-value
//! mapping and [`ChangeStream`] for the mutation feed that drives
//! enrichment.

pub mod change;
pub mod error;
pub mod hash;
pub mod record;
pub mod short_id;
pub mod store;

pub use change::{BatchId, ChangeBatch, ChangeEvent, ChangeStream};
pub use error::{CoreError, StoreError, StreamError};
pub use hash::fnv1a_64;
pub use record::{PreviewRecord, UrlRecord};
pub use short_id::ShortId;
pub use store::RecordStore;
