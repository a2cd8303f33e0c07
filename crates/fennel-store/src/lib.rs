//! In-memory [`RecordStore`](fennel_core::RecordStore) backend.
//!
//! [`MemoryStore`] keeps both keyspaces in DashMaps and publishes a
//! [`ChangeEvent`](fennel_core::ChangeEvent) for every short-id-keyspace
//! write. [`MemoryChangeStream`] is the matching consumer, with explicit
//! batch acknowledgment and at-least-once redelivery.

pub mod memory;
pub mod stream;

pub use memory::MemoryStore;
pub use stream::MemoryChangeStream;
