//! Core domain entities.
//!
//! - [`Link`] - A persisted short key → URL mapping with its visit counter
//! - [`NewLink`] - Input for creating a link

pub mod link;

pub use link::{Link, NewLink};
