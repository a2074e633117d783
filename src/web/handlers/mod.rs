//! HTML page handlers.

mod index;
mod shorten;

pub use index::{IndexTemplate, index_handler, index_post_handler};
pub use shorten::{
    ShortenForm, ShortenedTemplate, shorten_handler, shorten_method_not_allowed,
};
