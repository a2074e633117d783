//! Infrastructure layer for external integrations.
//!
//! Implements the repository interfaces defined by the domain layer.
//!
//! - [`persistence`] - MySQL repository implementations

pub mod persistence;
