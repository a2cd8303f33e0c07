//! Create/resolve service for the Fennel URL shortener.
//!
//! This crate provides the [`Shortener`] trait for the public
//! create/resolve contract and [`ShortenService`], its implementation
//! over an injected [`RecordStore`](fennel_core::RecordStore).

pub mod error;
pub mod service;
pub mod shortener;

pub use error::ShortenError;
pub use service::ShortenService;
pub use shortener::Shortener;
