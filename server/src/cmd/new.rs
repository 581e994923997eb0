//! New command - scaffold a draft post

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{NaiveDate, Utc};
use color_eyre::eyre::{Result, WrapErr, bail};
use mxnan_core::{Config, config::BlogConfig};

/// Run the new command.
///
/// The post lands in the configured content directory, or in the default one
/// when the configuration cannot be read.
pub fn run(config_path: &Path, slug: &str, title: Option<&str>) -> Result<()> {
    let content_dir = match Config::load(config_path) {
        Ok(config) => config.content_dir(config_path),
        Err(e) => {
            tracing::warn!(error = %e, "Using the default content directory");
            BlogConfig::default().content_dir
        }
    };

    let path = scaffold(&content_dir, slug, title, Utc::now().date_naive())?;
    tracing::info!(?path, "Created new post");
    println!("Created: {}", path.display());
    Ok(())
}

/// Write a draft post named `{slug}.mdx` under `dir`.
pub fn scaffold(dir: &Path, slug: &str, title: Option<&str>, date: NaiveDate) -> Result<PathBuf> {
    let valid = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid {
        bail!("Invalid slug `{slug}`: use lowercase letters, digits and dashes");
    }

    let path = dir.join(format!("{slug}.mdx"));
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    fs::create_dir_all(dir).wrap_err("Failed to create content directory")?;
    let title = title.map_or_else(|| slug.replace('-', " "), str::to_string);
    fs::write(&path, post_template(&title, date)).wrap_err("Failed to write post")?;

    Ok(path)
}

fn post_template(title: &str, date: NaiveDate) -> String {
    let title = title.replace('"', "\\\"");
    format!(
        r#"---
title: "{title}"
description: ""
date: {date}
tags: []
draft: true
---

Write your post here.
"#,
        date = date.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use mxnan_content::{MarkdownRenderer, library::parse_post};

    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    }

    #[test]
    fn test_scaffold_writes_a_loadable_draft() {
        let dir = tempfile::tempdir().unwrap();
        let path = scaffold(dir.path(), "hello-world", None, date()).unwrap();

        assert_eq!(path, dir.path().join("hello-world.mdx"));
        let source = fs::read_to_string(&path).unwrap();
        let (post, draft) = parse_post(&path, &source, &MarkdownRenderer::new()).unwrap();
        assert!(draft);
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.title, "hello world");
        assert_eq!(post.date, Some(date()));
    }

    #[test]
    fn test_scaffold_quotes_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = scaffold(dir.path(), "q", Some(r#"Say "hi""#), date()).unwrap();
        let source = fs::read_to_string(&path).unwrap();
        let (post, _) = parse_post(&path, &source, &MarkdownRenderer::new()).unwrap();
        assert_eq!(post.title, r#"Say "hi""#);
    }

    #[test]
    fn test_scaffold_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        scaffold(dir.path(), "a", None, date()).unwrap();
        assert!(scaffold(dir.path(), "a", None, date()).is_err());
    }

    #[test]
    fn test_scaffold_rejects_bad_slug() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scaffold(dir.path(), "", None, date()).is_err());
        assert!(scaffold(dir.path(), "a/b", None, date()).is_err());
        assert!(scaffold(dir.path(), "Hello", None, date()).is_err());
    }
}
