//! Lookup contract for blog content.

use crate::{
    error::{CoreError, Result},
    post::Post,
};

/// Read-only access to the published posts.
pub trait BlogSource: Send + Sync {
    /// All posts, newest first.
    fn get_all_blogs(&self) -> &[Post];

    /// The post registered under `slug`.
    fn get_blog_by_slug(&self, slug: &str) -> Result<&Post> {
        self.get_all_blogs()
            .iter()
            .find(|post| post.slug == slug)
            .ok_or_else(|| CoreError::not_found(slug))
    }

    /// Slugs of all posts, for static route generation.
    fn slugs(&self) -> Vec<String> {
        self.get_all_blogs()
            .iter()
            .map(|post| post.slug.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<Post>);

    impl BlogSource for Fixed {
        fn get_all_blogs(&self) -> &[Post] {
            &self.0
        }
    }

    fn post(slug: &str) -> Post {
        Post {
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            description: String::new(),
            date: None,
            tags: Vec::new(),
            image: None,
            content: String::new(),
            blocks: Vec::new(),
            toc: Vec::new(),
        }
    }

    #[test]
    fn test_every_slug_resolves_to_its_post() {
        let source = Fixed(vec![post("test"), post("test2")]);
        for slug in source.slugs() {
            let found = source.get_blog_by_slug(&slug).expect("known slug");
            assert_eq!(found.slug, slug);
        }
    }

    #[test]
    fn test_unknown_slug_is_not_found() {
        let source = Fixed(vec![post("test")]);
        let err = source.get_blog_by_slug("missing").unwrap_err();
        assert!(err.is_not_found());
    }
}
