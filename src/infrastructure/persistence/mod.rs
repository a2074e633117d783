//! MySQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! - [`MySqlLinkRepository`] - Link storage, lookup and visit counting

pub mod mysql_link_repository;

pub use mysql_link_repository::MySqlLinkRepository;
