//! Frontmatter parsing for post files.

use std::{collections::HashMap, path::Path};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Frontmatter metadata for a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Post title (required for publishing).
    #[serde(default)]
    pub title: String,

    /// Short description shown under the title.
    #[serde(default)]
    pub description: String,

    /// Publication date (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Tags rendered as chips.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Explicit slug, overriding the file stem.
    #[serde(default)]
    pub slug: Option<String>,

    /// Header image path.
    #[serde(default)]
    pub image: Option<String>,

    /// Whether this is a draft.
    #[serde(default)]
    pub draft: bool,

    /// Unrecognized keys, kept for MDX-style metadata.
    #[serde(default, flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

/// Delimiter types for frontmatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    /// YAML frontmatter delimited by `---`.
    Yaml,
    /// TOML frontmatter delimited by `+++`.
    Toml,
}

impl FrontmatterFormat {
    /// Get the delimiter string for this format.
    pub fn delimiter(&self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Split content into frontmatter and body.
pub fn split_frontmatter(content: &str) -> Option<(FrontmatterFormat, &str, &str)> {
    let content = content.trim_start();

    let format = if content.starts_with("---") {
        FrontmatterFormat::Yaml
    } else if content.starts_with("+++") {
        FrontmatterFormat::Toml
    } else {
        return None;
    };

    let delimiter = format.delimiter();

    let after_first = &content[delimiter.len()..];
    let closing_pos = after_first.find(&format!("\n{delimiter}"))?;

    let frontmatter = after_first[..closing_pos].trim();
    let body = after_first[closing_pos + 1 + delimiter.len()..].trim_start();

    Some((format, frontmatter, body))
}

/// Parse frontmatter from a string, returning it with the remaining body.
pub fn parse_frontmatter(content: &str, path: &Path) -> Result<(Frontmatter, String)> {
    let Some((format, fm_str, body)) = split_frontmatter(content) else {
        return Ok((Frontmatter::default(), content.to_string()));
    };

    let frontmatter: Frontmatter = match format {
        FrontmatterFormat::Yaml => {
            serde_yaml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
        FrontmatterFormat::Toml => {
            toml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
    };

    Ok((frontmatter, body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_frontmatter() {
        let content = r#"---
title: "emailjs"
description: implement emailjs with hooks
date: 2024-05-01
tags: [react, forms]
---

# Body"#;

        let (fm, body) = parse_frontmatter(content, Path::new("test.mdx")).unwrap();
        assert_eq!(fm.title, "emailjs");
        assert_eq!(fm.description, "implement emailjs with hooks");
        assert_eq!(fm.date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(fm.tags, vec!["react", "forms"]);
        assert!(!fm.draft);
        assert_eq!(body, "# Body");
    }

    #[test]
    fn test_toml_frontmatter() {
        let content = r#"+++
title = "toml post"
slug = "custom"
draft = true
+++
Hello"#;

        let (fm, body) = parse_frontmatter(content, Path::new("x.md")).unwrap();
        assert_eq!(fm.title, "toml post");
        assert_eq!(fm.slug.as_deref(), Some("custom"));
        assert!(fm.draft);
        assert_eq!(body, "Hello");
    }

    #[test]
    fn test_extra_keys_are_kept() {
        let content = "---\ntitle: t\nimage: /og.jpg\ncover_alt: sky\n---\n";
        let (fm, _) = parse_frontmatter(content, Path::new("x.md")).unwrap();
        assert_eq!(fm.image.as_deref(), Some("/og.jpg"));
        assert!(fm.extra.contains_key("cover_alt"));
        assert!(!fm.extra.contains_key("image"));
    }

    #[test]
    fn test_horizontal_rule_in_body_is_not_a_delimiter() {
        let content = "---\ntitle: t\n---\nabove\n\n---\n\nbelow";
        let (fm, body) = parse_frontmatter(content, Path::new("x.md")).unwrap();
        assert_eq!(fm.title, "t");
        assert!(body.contains("above"));
        assert!(body.contains("below"));
    }

    #[test]
    fn test_no_frontmatter() {
        let (fm, body) = parse_frontmatter("just text", Path::new("x.md")).unwrap();
        assert!(fm.title.is_empty());
        assert_eq!(body, "just text");
    }

    #[test]
    fn test_invalid_yaml_reports_path() {
        let content = "---\ntitle: [unclosed\n---\n";
        let err = parse_frontmatter(content, Path::new("broken.md")).unwrap_err();
        assert!(err.to_string().contains("broken.md"));
    }
}
