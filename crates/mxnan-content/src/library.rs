//! Post collection and slug lookup.
//!
//! Walks the blog content directory, parses every post in parallel and keeps
//! the result as an immutable, date-ordered list indexed by slug.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use mxnan_core::{BlogSource, CoreError, Post, frontmatter::parse_frontmatter};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::markdown::{MarkdownRenderer, strip_mdx_esm};

/// File extensions recognised as posts.
pub const POST_EXTENSIONS: &[&str] = &["md", "mdx", "markdown"];

/// Library errors.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The content directory is missing.
    #[error("content directory not found: {0}")]
    MissingDir(PathBuf),

    /// Directory traversal failed.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Post-level failure.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for library operations.
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Loading options.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Publish posts marked `draft: true`.
    pub drafts: bool,
    /// Syntax highlighting theme.
    pub syntax_theme: String,
    /// Header image for posts that do not set one.
    pub default_image: Option<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            drafts: false,
            syntax_theme: "base16-ocean.dark".to_string(),
            default_image: None,
        }
    }
}

impl From<&mxnan_core::config::BlogConfig> for LoadOptions {
    fn from(config: &mxnan_core::config::BlogConfig) -> Self {
        Self {
            drafts: config.drafts,
            syntax_theme: config.syntax_theme.clone(),
            default_image: None,
        }
    }
}

impl From<&mxnan_core::Config> for LoadOptions {
    fn from(config: &mxnan_core::Config) -> Self {
        Self {
            default_image: config.site.og_image.clone(),
            ..Self::from(&config.blog)
        }
    }
}

/// Outcome of a directory scan before slug validation.
#[derive(Debug, Default)]
pub struct Collected {
    /// Successfully parsed posts with their source files.
    pub posts: Vec<(PathBuf, Post)>,
    /// Files that failed to parse.
    pub failures: Vec<(PathBuf, CoreError)>,
    /// Drafts left out of the result.
    pub skipped_drafts: usize,
}

/// Immutable set of published posts.
#[derive(Debug, Default)]
pub struct BlogLibrary {
    posts: Vec<Post>,
    index: HashMap<String, usize>,
    sources: Vec<PathBuf>,
}

impl BlogLibrary {
    /// Load every post under `dir`. Files that fail to parse are logged and skipped.
    pub fn load(dir: &Path, options: &LoadOptions) -> Result<Self> {
        let collected = Self::collect(dir, options)?;
        for (path, err) in &collected.failures {
            warn!(path = %path.display(), error = %err, "failed to parse post");
        }
        let library = Self::from_sources(collected.posts)?;
        info!(posts = library.len(), dir = %dir.display(), "blog library loaded");
        Ok(library)
    }

    /// Parse every post file under `dir` without building the index.
    pub fn collect(dir: &Path, options: &LoadOptions) -> Result<Collected> {
        if !dir.is_dir() {
            return Err(LibraryError::MissingDir(dir.to_path_buf()));
        }

        let files = find_post_files(dir)?;
        debug!(count = files.len(), "found post files");

        let renderer = MarkdownRenderer::with_theme(&options.syntax_theme);
        let results: Vec<_> = files
            .par_iter()
            .map(|path| (path.clone(), load_post(path, &renderer)))
            .collect();

        let mut collected = Collected::default();
        for (path, result) in results {
            match result {
                Ok((post, true)) if !options.drafts => {
                    debug!(slug = %post.slug, "skipping draft");
                    collected.skipped_drafts += 1;
                }
                Ok((mut post, _)) => {
                    if post.image.is_none() {
                        post.image.clone_from(&options.default_image);
                    }
                    collected.posts.push((path, post));
                }
                Err(err) => collected.failures.push((path, err)),
            }
        }

        Ok(collected)
    }

    /// Build a library from already parsed posts, rejecting duplicate slugs.
    pub fn from_sources(sources: Vec<(PathBuf, Post)>) -> Result<Self> {
        let mut sources = sources;
        sources.sort_by(|(_, a), (_, b)| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

        let mut library = Self::default();
        for (path, post) in sources {
            if let Some(&existing) = library.index.get(&post.slug) {
                return Err(CoreError::DuplicateSlug {
                    slug: post.slug,
                    first: library.sources[existing].clone(),
                    second: path,
                }
                .into());
            }
            library.index.insert(post.slug.clone(), library.posts.len());
            library.posts.push(post);
            library.sources.push(path);
        }

        Ok(library)
    }

    /// Number of posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the library holds no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Source file of a post.
    pub fn source_of(&self, slug: &str) -> Option<&Path> {
        self.index.get(slug).map(|&i| self.sources[i].as_path())
    }
}

impl BlogSource for BlogLibrary {
    fn get_all_blogs(&self) -> &[Post] {
        &self.posts
    }

    fn get_blog_by_slug(&self, slug: &str) -> mxnan_core::Result<&Post> {
        self.index
            .get(slug)
            .map(|&i| &self.posts[i])
            .ok_or_else(|| CoreError::not_found(slug))
    }
}

fn find_post_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_post = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| POST_EXTENSIONS.contains(&e.to_lowercase().as_str()));
        if is_post {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Read and render one post, returning it with its draft flag.
fn load_post(path: &Path, renderer: &MarkdownRenderer) -> mxnan_core::Result<(Post, bool)> {
    let source = fs::read_to_string(path)?;
    parse_post(path, &source, renderer)
}

/// Turn a post file's source into a [`Post`], returning it with its draft flag.
pub fn parse_post(
    path: &Path,
    source: &str,
    renderer: &MarkdownRenderer,
) -> mxnan_core::Result<(Post, bool)> {
    let (frontmatter, body) = parse_frontmatter(source, path)?;

    if frontmatter.title.trim().is_empty() {
        return Err(CoreError::parse(path, "missing `title` in frontmatter"));
    }

    let slug = match frontmatter.slug {
        Some(ref slug) => slug.trim_matches('/').to_string(),
        None => path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .ok_or_else(|| CoreError::parse(path, "cannot derive slug from file name"))?,
    };
    if slug.is_empty() || slug.contains('/') {
        return Err(CoreError::parse(path, format!("invalid slug `{slug}`")));
    }

    let is_mdx = path.extension().is_some_and(|e| e == "mdx");
    let markup = if is_mdx { strip_mdx_esm(&body) } else { body.clone() };
    let rendered = renderer.render(&markup);

    let post = Post {
        slug,
        title: frontmatter.title,
        description: frontmatter.description,
        date: frontmatter.date,
        tags: frontmatter.tags,
        image: frontmatter.image,
        content: body,
        blocks: rendered.blocks,
        toc: rendered.toc,
    };

    Ok((post, frontmatter.draft))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "test.mdx",
            "---\ntitle: emailjs\ndescription: forms\ndate: 2024-05-01\ntags: [react]\n---\nimport X from \"x\"\n\n# Setup\n\n```bash\nnpm i @emailjs/browser\n```\n",
        );
        write(
            dir.path(),
            "test2.md",
            "---\ntitle: test\ndate: 2024-06-01\n---\n## One\n",
        );
        write(
            dir.path(),
            "nested/draft.md",
            "---\ntitle: wip\ndraft: true\n---\nsoon\n",
        );
        write(dir.path(), "notes.txt", "not a post");
        dir
    }

    #[test]
    fn test_every_enumerated_slug_resolves() {
        let dir = site();
        let library = BlogLibrary::load(dir.path(), &LoadOptions::default()).unwrap();

        assert_eq!(library.len(), 2);
        for slug in library.slugs() {
            let post = library.get_blog_by_slug(&slug).unwrap();
            assert_eq!(post.slug, slug);
        }
    }

    #[test]
    fn test_posts_are_newest_first() {
        let dir = site();
        let library = BlogLibrary::load(dir.path(), &LoadOptions::default()).unwrap();
        let slugs = library.slugs();
        assert_eq!(slugs, vec!["test2", "test"]);
    }

    #[test]
    fn test_post_fields() {
        let dir = site();
        let library = BlogLibrary::load(dir.path(), &LoadOptions::default()).unwrap();
        let post = library.get_blog_by_slug("test").unwrap();

        assert_eq!(post.title, "emailjs");
        assert_eq!(post.description, "forms");
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(post.tags, vec!["react"]);
        assert_eq!(post.toc[0].id, "setup");
        assert!(post.content.contains("import X"));
        assert!(post.blocks.iter().all(|b| match b {
            mxnan_core::ContentBlock::Html { html } => !html.contains("import X"),
            mxnan_core::ContentBlock::Code { .. } => true,
        }));
        assert_eq!(library.source_of("test"), Some(dir.path().join("test.mdx").as_path()));
    }

    #[test]
    fn test_drafts_are_opt_in() {
        let dir = site();
        let collected = BlogLibrary::collect(dir.path(), &LoadOptions::default()).unwrap();
        assert_eq!(collected.skipped_drafts, 1);

        let options = LoadOptions {
            drafts: true,
            ..LoadOptions::default()
        };
        let library = BlogLibrary::load(dir.path(), &options).unwrap();
        assert!(library.get_blog_by_slug("draft").is_ok());
    }

    #[test]
    fn test_default_image_fills_missing_header_image() {
        let dir = site();
        write(
            dir.path(),
            "pictured.md",
            "---\ntitle: p\nimage: /own.png\n---\n",
        );
        let options = LoadOptions {
            default_image: Some("/og.jpg".to_string()),
            ..LoadOptions::default()
        };
        let library = BlogLibrary::load(dir.path(), &options).unwrap();

        let test = library.get_blog_by_slug("test").unwrap();
        assert_eq!(test.image.as_deref(), Some("/og.jpg"));
        let pictured = library.get_blog_by_slug("pictured").unwrap();
        assert_eq!(pictured.image.as_deref(), Some("/own.png"));
    }

    #[test]
    fn test_unknown_slug() {
        let dir = site();
        let library = BlogLibrary::load(dir.path(), &LoadOptions::default()).unwrap();
        let err = library.get_blog_by_slug("nope").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_duplicate_slug_is_rejected() {
        let dir = site();
        write(dir.path(), "other/test.md", "---\ntitle: clash\n---\n");

        let err = BlogLibrary::load(dir.path(), &LoadOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            LibraryError::Core(CoreError::DuplicateSlug { ref slug, .. }) if slug == "test"
        ));
    }

    #[test]
    fn test_frontmatter_slug_overrides_stem() {
        let renderer = MarkdownRenderer::new();
        let (post, draft) = parse_post(
            Path::new("whatever.md"),
            "---\ntitle: t\nslug: custom\n---\n",
            &renderer,
        )
        .unwrap();
        assert_eq!(post.slug, "custom");
        assert!(!draft);
    }

    #[test]
    fn test_missing_title_is_a_failure() {
        let dir = site();
        write(dir.path(), "untitled.md", "no frontmatter at all");

        let collected = BlogLibrary::collect(dir.path(), &LoadOptions::default()).unwrap();
        assert_eq!(collected.failures.len(), 1);
        assert!(collected.failures[0].1.to_string().contains("missing `title`"));

        let library = BlogLibrary::load(dir.path(), &LoadOptions::default()).unwrap();
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_missing_dir() {
        let err = BlogLibrary::load(Path::new("/nonexistent/blogs"), &LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, LibraryError::MissingDir(_)));
    }
}
