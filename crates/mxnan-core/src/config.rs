//! Site configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Environment variable prefix for [`Config::load_with_env`].
pub const ENV_PREFIX: &str = "MXNAN";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Blog content settings.
    #[serde(default)]
    pub blog: BlogConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, also used as the navbar brand.
    pub title: String,

    /// Base URL for the site (e.g., "https://mxnan.com").
    pub base_url: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Site author name.
    #[serde(default)]
    pub author: Option<String>,

    /// Header image for posts without their own `image`.
    #[serde(default)]
    pub og_image: Option<String>,
}

/// Blog content configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogConfig {
    /// Directory holding `.md` / `.mdx` posts.
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    /// Whether draft posts are published.
    #[serde(default)]
    pub drafts: bool,

    /// Syntax highlighting theme name.
    #[serde(default = "default_syntax_theme")]
    pub syntax_theme: String,
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content/blogs")
}

fn default_syntax_theme() -> String {
    "base16-ocean.dark".to_string()
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            drafts: false,
            syntax_theme: default_syntax_theme(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration, letting `MXNAN__SECTION__KEY` variables override the file.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Resolve the content directory against the directory holding the config file.
    pub fn content_dir(&self, config_path: &Path) -> PathBuf {
        if self.blog.content_dir.is_absolute() {
            return self.blog.content_dir.clone();
        }
        config_path
            .parent()
            .unwrap_or(Path::new(""))
            .join(&self.blog.content_dir)
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
