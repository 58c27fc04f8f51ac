#![deny(unsafe_code)]

pub mod error;
pub mod loaders;
pub mod summary;
pub mod validate;

pub use crate::error::ContentError;
pub use crate::loaders::{
    bundled_content_path, load_content_from, load_default_content, parse_content,
};
pub use crate::summary::ContentSummary;
pub use crate::validate::validate;
