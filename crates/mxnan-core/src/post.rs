//! Blog post types shared between the server and the browser.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Table of contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,

    /// Heading text.
    pub text: String,

    /// Anchor ID for linking.
    pub id: String,
}

impl TocEntry {
    /// Create a new TOC entry.
    pub fn new(level: u8, text: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            id: id.into(),
        }
    }

    /// Fragment link for this entry.
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// A rendered piece of post content.
///
/// Top-level code blocks are kept apart from the surrounding HTML so the page
/// can attach a copy control to each of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Pre-rendered HTML.
    Html { html: String },
    /// Highlighted code block addressed by a DOM id.
    Code {
        id: String,
        lang: Option<String>,
        html: String,
    },
}

/// A blog post, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Routing key, unique across the site.
    pub slug: String,

    /// Post title.
    pub title: String,

    /// Short description.
    #[serde(default)]
    pub description: String,

    /// Publication date.
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Tags, in frontmatter order.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Header image path.
    #[serde(default)]
    pub image: Option<String>,

    /// Raw markup source (without frontmatter).
    pub content: String,

    /// Rendered content blocks.
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,

    /// Table of contents.
    #[serde(default)]
    pub toc: Vec<TocEntry>,
}

impl Post {
    /// Route path of this post.
    pub fn url(&self) -> String {
        format!("/blogs/{}", self.slug)
    }

    /// Human readable date, empty when undated.
    pub fn date_label(&self) -> String {
        format_date(self.date)
    }

    /// Listing view of this post.
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            slug: self.slug.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            date: self.date,
            tags: self.tags.clone(),
        }
    }
}

/// Post metadata used by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub tags: Vec<String>,
}

impl PostSummary {
    /// Route path of the summarized post.
    pub fn url(&self) -> String {
        format!("/blogs/{}", self.slug)
    }

    /// Human readable date, empty when undated.
    pub fn date_label(&self) -> String {
        format_date(self.date)
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_default()
}
