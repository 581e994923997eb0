//! Blog post layout: header, back links, content blocks and the TOC panel.

use leptos::{ev, prelude::*};
use leptos_router::components::A;
use mxnan_core::{ContentBlock, Post};

use crate::{
    clipboard::{CopyButton, inline_copy_target, spawn_copy},
    icons::{Icon, IconKind},
    toast::Toaster,
    toc::{DeferredPanel, TableOfContents},
};

/// Target of every back link on a post page.
pub const BLOG_INDEX_PATH: &str = "/blogs";

/// Where a back link is drawn; each placement is visible at different widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackLinkPlacement {
    /// Pinned to the left edge on wide screens.
    Fixed,
    /// Above the header on narrow screens.
    Top,
    /// Below the content on narrow screens.
    Bottom,
}

impl BackLinkPlacement {
    pub const ALL: [BackLinkPlacement; 3] = [Self::Fixed, Self::Top, Self::Bottom];

    pub fn class(self) -> &'static str {
        match self {
            Self::Fixed => {
                "back-link hidden lg:flex fixed left-8 top-32 items-center gap-2 text-sm"
            }
            Self::Top => "back-link flex lg:hidden items-center gap-2 text-sm mb-8",
            Self::Bottom => "back-link flex lg:hidden items-center gap-2 text-sm mt-12",
        }
    }
}

/// Chip text for a tag.
pub fn tag_label(tag: &str) -> String {
    format!("#{tag}")
}

#[component]
pub fn BackLink(placement: BackLinkPlacement) -> impl IntoView {
    view! {
      <A href=BLOG_INDEX_PATH attr:class=placement.class()>
        <Icon kind=IconKind::CircleArrowLeft />
        <span>"Back to blogs"</span>
      </A>
    }
}

#[component]
pub fn PostHeader(
    title: String,
    description: String,
    date: String,
    tags: Vec<String>,
    image: Option<String>,
) -> impl IntoView {
    let has_date = !date.is_empty();

    view! {
      <header class="post-header mb-10">
        {image
          .map(|src| {
            view! {
              <img src=src alt="" class="post-image w-full rounded-lg mb-6 object-cover" />
            }
          })}
        <h1 class="post-title text-4xl font-bold mb-3">{title}</h1>
        <p class="post-description text-lg text-gray-500 mb-4">{description}</p>
        <Show when=move || has_date>
          <time class="post-date text-sm text-gray-400">{date.clone()}</time>
        </Show>
        <ul class="post-tags flex flex-wrap gap-2 mt-4">
          {tags
            .iter()
            .map(|tag| {
              view! {
                <li class="tag-chip rounded-full px-3 py-1 text-xs bg-gray-100 dark:bg-gray-800">
                  {tag_label(tag)}
                </li>
              }
            })
            .collect_view()}
        </ul>
      </header>
    }
}

/// A highlighted code block with a copy button bound to its id.
#[component]
pub fn CodeBlock(
    #[prop(into)] id: String,
    lang: Option<String>,
    #[prop(into)] html: String,
) -> impl IntoView {
    view! {
      <div class="code-block relative my-6">
        {lang.map(|lang| view! { <span class="code-lang absolute top-2 left-3 text-xs">{lang}</span> })}
        <div id=id.clone() class="code-content overflow-x-auto" inner_html=html></div>
        <CopyButton target=id />
      </div>
    }
}

#[component]
pub fn PostBody(blocks: Vec<ContentBlock>) -> impl IntoView {
    let toaster = Toaster::expect();
    let on_click = move |ev: ev::MouseEvent| {
        if let Some(id) = inline_copy_target(&ev) {
            spawn_copy(toaster, id);
        }
    };

    view! {
      <div class="post-body prose dark:prose-invert max-w-none" on:click=on_click>
        {blocks
          .into_iter()
          .map(|block| match block {
            ContentBlock::Html { html } => {
              view! { <div class="prose-block" inner_html=html></div> }.into_any()
            }
            ContentBlock::Code { id, lang, html } => {
              view! { <CodeBlock id=id lang=lang html=html /> }.into_any()
            }
          })
          .collect_view()}
      </div>
    }
}

/// Full post page body.
#[component]
pub fn BlogPost(post: Post, #[prop(default = true)] supports_deferred: bool) -> impl IntoView {
    let date = post.date_label();
    let Post {
        title,
        description,
        tags,
        image,
        blocks,
        toc,
        ..
    } = post;

    view! {
      <div class="blog-post relative">
        <BackLink placement=BackLinkPlacement::Fixed />
        <article class="max-w-3xl mx-auto px-4 py-12">
          <BackLink placement=BackLinkPlacement::Top />
          <PostHeader
            title=title
            description=description
            date=date
            tags=tags
            image=image
          />
          <PostBody blocks=blocks />
          <BackLink placement=BackLinkPlacement::Bottom />
        </article>
        <aside class="toc-panel hidden xl:block fixed right-8 top-32 w-64">
          <DeferredPanel supports_deferred=supports_deferred>
            <TableOfContents entries=toc.clone() />
          </DeferredPanel>
        </aside>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_link_placements_are_distinct() {
        let classes: Vec<_> = BackLinkPlacement::ALL.iter().map(|p| p.class()).collect();
        assert_eq!(classes.len(), 3);
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
        assert!(classes[0].contains("hidden lg:flex"));
        assert!(classes[1].contains("lg:hidden"));
        assert!(classes[2].contains("lg:hidden"));
    }

    #[test]
    fn test_tag_label() {
        assert_eq!(tag_label("rust"), "#rust");
    }
}
