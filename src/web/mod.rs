//! Web layer for browser-facing HTML pages.
//!
//! Uses Askama templates for server-side rendering; every interpolated value
//! is HTML-escaped.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
