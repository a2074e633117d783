//! Utility functions shared across layers.
//!
//! - [`key_generator`] - Short key generation and validation
//! - [`url_validator`] - Input checks for submitted URLs
//! - [`db_error`] - SQL error classification

pub mod db_error;
pub mod key_generator;
pub mod url_validator;
