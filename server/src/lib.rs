//! Server side of the mxnan site.
//!
//! - [`cmd`] - command implementations (serve, prerender, check, new)
//! - [`load_library`] - configuration and post loading shared by the commands

use std::{path::Path, sync::Arc};

use color_eyre::eyre::{Result, WrapErr};
use mxnan_content::{BlogLibrary, LoadOptions};
use mxnan_core::Config;

pub mod cmd;

/// Initialize tracing with the specified verbosity level.
///
/// * `verbose` - 0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// Load the configuration and every published post it points at.
pub fn load_library(config_path: &Path) -> Result<(Config, BlogLibrary)> {
    let config = Config::load_with_env(config_path)
        .wrap_err_with(|| format!("Failed to load {}", config_path.display()))?;

    let content_dir = config.content_dir(config_path);
    let library = BlogLibrary::load(&content_dir, &LoadOptions::from(&config))
        .wrap_err_with(|| format!("Failed to load posts from {}", content_dir.display()))?;

    Ok((config, library))
}

/// Make `library` available to the server functions.
pub fn install_library(library: BlogLibrary) {
    if !app::ssr::install(Arc::new(library)) {
        tracing::warn!("blog library already installed, keeping the first one");
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use mxnan_core::BlogSource;

    use super::*;

    #[test]
    fn test_load_library_resolves_content_dir_next_to_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("mxnan.toml"),
            "[site]\ntitle = \"t\"\nbase_url = \"https://example.com\"\n",
        )
        .unwrap();
        let posts = dir.path().join("content/blogs");
        fs::create_dir_all(&posts).unwrap();
        fs::write(posts.join("test.mdx"), "---\ntitle: Test\n---\n\nHello\n").unwrap();

        let (config, library) = load_library(&dir.path().join("mxnan.toml")).unwrap();

        assert_eq!(config.site.title, "t");
        assert_eq!(library.slugs(), vec!["test".to_string()]);
    }

    #[test]
    fn test_load_library_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_library(&dir.path().join("mxnan.toml")).is_err());
    }
}
