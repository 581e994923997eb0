//! Blog routes and the server functions feeding them.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::{components::A, hooks::use_params_map};
use mxnan_core::{Post, PostSummary};

use crate::article::{BLOG_INDEX_PATH, BlogPost};

/// Post by slug; `None` when no post has that slug.
#[server]
pub async fn get_blog(slug: String) -> Result<Option<Post>, ServerFnError> {
    let library = crate::ssr::library()?;
    match library.get_blog_by_slug(&slug) {
        Ok(post) => Ok(Some(post.clone())),
        Err(err) if err.is_not_found() => {
            tracing::debug!(%slug, "post not found");
            Ok(None)
        }
        Err(err) => Err(ServerFnError::new(err)),
    }
}

/// Summaries of all posts, newest first.
#[server]
pub async fn list_blogs() -> Result<Vec<PostSummary>, ServerFnError> {
    let library = crate::ssr::library()?;
    Ok(library.get_all_blogs().iter().map(Post::summary).collect())
}

/// Every known slug; drives static generation of `/blogs/{slug}`.
#[server]
pub async fn list_blog_slugs() -> Result<Vec<String>, ServerFnError> {
    let library = crate::ssr::library()?;
    Ok(library.slugs())
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();
    let post = Resource::new(slug, get_blog);

    view! {
      <Suspense fallback=|| view! { <p class="loading p-8">"Loading..."</p> }>
        {move || Suspend::new(async move {
          match post.await {
            Ok(Some(post)) => {
              let title = post.title.clone();
              let description = post.description.clone();
              view! {
                <Title text=title />
                <Meta name="description" content=description />
                <BlogPost post=post />
              }
                .into_any()
            }
            Ok(None) => view! { <PostNotFound /> }.into_any(),
            Err(err) => {
              view! { <p class="error p-8">{format!("Failed to load post: {err}")}</p> }.into_any()
            }
          }
        })}
      </Suspense>
    }
}

#[component]
pub fn BlogIndexPage() -> impl IntoView {
    let posts = Resource::new(|| (), |_| list_blogs());

    view! {
      <Title text="Blogs" />
      <section class="blog-index max-w-3xl mx-auto px-4 py-12">
        <h1 class="text-4xl font-bold mb-8">"Blogs"</h1>
        <Suspense fallback=|| view! { <p class="loading">"Loading..."</p> }>
          {move || Suspend::new(async move {
            match posts.await {
              Ok(posts) if posts.is_empty() => {
                view! { <p class="empty">"No posts yet."</p> }.into_any()
              }
              Ok(posts) => {
                view! {
                  <ul class="post-list space-y-8">
                    {posts.into_iter().map(|post| view! { <PostCard post=post /> }).collect_view()}
                  </ul>
                }
                  .into_any()
              }
              Err(err) => {
                view! { <p class="error">{format!("Failed to load posts: {err}")}</p> }.into_any()
              }
            }
          })}
        </Suspense>
      </section>
    }
}

#[component]
fn PostCard(post: PostSummary) -> impl IntoView {
    let url = post.url();
    let date = post.date_label();

    view! {
      <li class="post-card">
        <A href=url attr:class="block group">
          <h2 class="text-2xl font-semibold group-hover:underline">{post.title}</h2>
          <p class="text-gray-500 mt-1">{post.description}</p>
          <time class="text-sm text-gray-400">{date}</time>
        </A>
      </li>
    }
}

/// Shown for an unknown slug; answers 404 during server rendering.
#[component]
pub fn PostNotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
      <Title text="Post not found" />
      <section class="not-found max-w-3xl mx-auto px-4 py-24 text-center">
        <h1 class="text-3xl font-bold mb-4">"Post not found"</h1>
        <A href=BLOG_INDEX_PATH attr:class="underline">
          "Back to blogs"
        </A>
      </section>
    }
}
