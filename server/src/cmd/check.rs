//! Check command - validate configuration and posts

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use mxnan_content::{BlogLibrary, LoadOptions};
use mxnan_core::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub checked: usize,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Fail on errors, and on warnings in strict mode.
    pub fn into_result(self, strict: bool) -> Result<()> {
        if self.has_errors() {
            bail!("Validation failed with {} error(s)", self.errors.len());
        }
        if strict && self.has_warnings() {
            bail!(
                "Validation failed with {} warning(s) (strict mode)",
                self.warnings.len()
            );
        }
        Ok(())
    }

    fn print(&self) {
        println!();
        println!("Summary:");
        println!("  Posts:    {}", self.checked);
        println!("  Errors:   {}", self.errors.len());
        println!("  Warnings: {}", self.warnings.len());

        for err in &self.errors {
            println!("  ✗ {err}");
        }
        for warn in &self.warnings {
            println!("  ⚠ {warn}");
        }
    }
}

/// Run the check command.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and posts");

    let result = validate(config_path);
    result.print();
    result.into_result(strict)?;

    println!();
    println!("✓ All checks passed");
    Ok(())
}

/// Collect every problem with the configuration and the posts it points at.
pub fn validate(config_path: &Path) -> ValidationResult {
    let mut result = ValidationResult::default();

    let config = match Config::load_with_env(config_path) {
        Ok(config) => config,
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            return result;
        }
    };

    if config.site.base_url.ends_with('/') {
        result.add_warning("site.base_url should not have a trailing slash");
    }

    let content_dir = config.content_dir(config_path);
    let collected = match BlogLibrary::collect(&content_dir, &LoadOptions::from(&config)) {
        Ok(collected) => collected,
        Err(e) => {
            result.add_error(e.to_string());
            return result;
        }
    };

    for (path, err) in &collected.failures {
        result.add_error(format!("{}: {err}", path.display()));
    }

    for (path, post) in &collected.posts {
        if post.date.is_none() {
            result.add_warning(format!("{}: no `date` in frontmatter", path.display()));
        }
        if post.description.is_empty() {
            result.add_warning(format!("{}: no `description` in frontmatter", path.display()));
        }
    }

    if collected.skipped_drafts > 0 {
        tracing::info!(drafts = collected.skipped_drafts, "Drafts not checked for publishing");
    }

    result.checked = collected.posts.len();
    if let Err(e) = BlogLibrary::from_sources(collected.posts) {
        result.add_error(e.to_string());
    }

    result
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn site(posts: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("mxnan.toml"),
            "[site]\ntitle = \"t\"\nbase_url = \"https://example.com\"\n",
        )
        .unwrap();
        let blogs = dir.path().join("content/blogs");
        fs::create_dir_all(&blogs).unwrap();
        for (name, content) in posts {
            let path = blogs.join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        dir
    }

    const COMPLETE: &str = "---\ntitle: A\ndescription: d\ndate: 2024-01-01\n---\nbody\n";

    #[test]
    fn test_clean_site_passes_strict() {
        let dir = site(&[("a.md", COMPLETE)]);
        let result = validate(&dir.path().join("mxnan.toml"));
        assert_eq!(result.checked, 1);
        assert!(!result.has_errors());
        assert!(!result.has_warnings());
        assert!(result.into_result(true).is_ok());
    }

    #[test]
    fn test_missing_metadata_only_fails_strict() {
        let dir = site(&[("a.md", "---\ntitle: A\n---\nbody\n")]);
        let config = dir.path().join("mxnan.toml");

        let result = validate(&config);
        assert_eq!(result.warnings.len(), 2);
        assert!(result.into_result(false).is_ok());
        assert!(validate(&config).into_result(true).is_err());
    }

    #[test]
    fn test_duplicate_slug_is_an_error() {
        let dir = site(&[("a.md", COMPLETE), ("nested/a.mdx", COMPLETE)]);
        let result = validate(&dir.path().join("mxnan.toml"));
        assert!(result.errors.iter().any(|e| e.contains("Duplicate slug `a`")));
        assert!(result.into_result(false).is_err());
    }

    #[test]
    fn test_unparseable_post_is_an_error() {
        let dir = site(&[("a.md", COMPLETE), ("broken.md", "---\ndate: [\n---\n")]);
        let result = validate(&dir.path().join("mxnan.toml"));
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("broken.md"));
    }

    #[test]
    fn test_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = validate(&dir.path().join("mxnan.toml"));
        assert!(result.errors[0].starts_with("Configuration error"));
    }
}
