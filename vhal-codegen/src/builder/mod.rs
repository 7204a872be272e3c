//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation configuration
//! - [`CommentStyle`] - Line comment syntax of the target language

mod code_builder;
mod comment;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use comment::CommentStyle;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
