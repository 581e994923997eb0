//! mxnan Content Library
//!
//! Loads blog posts from Markdown/MDX files and renders them into the
//! [`Post`](mxnan_core::Post) shape served to the Leptos app.
//!
//! # Modules
//!
//! - [`markdown`] - Markdown rendering with heading anchors and code blocks
//! - [`syntax`] - Syntax highlighting for fenced code
//! - [`library`] - Directory loading and slug lookup

pub mod library;
pub mod markdown;
pub mod syntax;

pub use library::{BlogLibrary, Collected, LibraryError, LoadOptions};
pub use markdown::{MarkdownRenderer, Rendered};
pub use syntax::SyntaxHighlighter;
