//! mxnan Core Library
//!
//! Core types, configuration, and error handling shared by the content
//! loader, the Leptos app and the server binary.

pub mod config;
pub mod error;
pub mod frontmatter;
pub mod html;
pub mod post;
pub mod source;

pub use config::Config;
pub use error::{CoreError, Result};
pub use frontmatter::Frontmatter;
pub use post::{ContentBlock, Post, PostSummary, TocEntry};
pub use source::BlogSource;
