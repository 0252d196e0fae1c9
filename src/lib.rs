//! termpad - a multi-line text area for raw-mode terminals

pub mod buffer;
pub mod color;
pub mod constants;
pub mod error;
pub mod history;
pub mod key;
pub mod mode;
pub mod render;
pub mod search;
pub mod syntax;
pub mod term;
pub mod textarea;
pub mod viewport;

#[cfg(test)]
pub mod test_utils;

pub use error::{Result, TermpadError};
pub use textarea::{TextArea, TextAreaConfig};
