//! Error types for the mxnan core library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or parsing error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Post body could not be turned into a post.
    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Frontmatter parsing error.
    #[error("Frontmatter error in {path}: {message}")]
    Frontmatter { path: PathBuf, message: String },

    /// No post is registered under the requested slug.
    #[error("No post found for slug `{slug}`")]
    NotFound { slug: String },

    /// Two content files resolved to the same slug.
    #[error("Duplicate slug `{slug}` in {first} and {second}")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic configuration crate error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new parse error.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new frontmatter error.
    pub fn frontmatter(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Frontmatter {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a not-found error for a slug.
    pub fn not_found(slug: impl Into<String>) -> Self {
        Self::NotFound { slug: slug.into() }
    }

    /// Whether this error means "no such post" rather than a real failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CoreError::config("missing field");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_frontmatter_error() {
        let err = CoreError::frontmatter("content/blogs/test.mdx", "missing title");
        assert!(err.to_string().contains("Frontmatter error"));
        assert!(err.to_string().contains("content/blogs/test.mdx"));
    }

    #[test]
    fn test_not_found() {
        let err = CoreError::not_found("nope");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "No post found for slug `nope`");
        assert!(!CoreError::config("x").is_not_found());
    }

    #[test]
    fn test_duplicate_slug_mentions_both_files() {
        let err = CoreError::DuplicateSlug {
            slug: "test".to_string(),
            first: PathBuf::from("a/test.md"),
            second: PathBuf::from("b/test.mdx"),
        };
        let msg = err.to_string();
        assert!(msg.contains("a/test.md"));
        assert!(msg.contains("b/test.mdx"));
    }

    #[test]
    fn test_bad_toml_becomes_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mxnan.toml");
        std::fs::write(&path, "[site\ntitle = ").unwrap();

        let err = crate::Config::load(&path).unwrap_err();
        assert!(matches!(err, CoreError::Config { source: Some(_), .. }));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CoreError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }
}
