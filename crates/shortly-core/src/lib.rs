//! Core types and traits for the shortly URL shortener.
//!
//! This crate provides the types shared by the storage backends, the
//! shortener service and the transports that sit in front of it.

pub mod error;
pub mod repository;
pub mod shortcode;
pub mod shortener;

pub use error::{CoreError, ShortenerError, StorageError};
pub use repository::{ReadRepository, Repository, ShortLinkRecord};
pub use shortcode::ShortCode;
pub use shortener::Shortener;
