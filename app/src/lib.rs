//! Leptos components and routes for the mxnan site.
//!
//! The crate is compiled twice: with `ssr` for the axum server and with
//! `hydrate` for the browser bundle.

pub mod article;
pub mod blog;
pub mod clipboard;
pub mod icons;
pub mod layout;
pub mod menu;
pub mod navbar;
pub mod scroll;
pub mod showcase;
pub mod sidebar;
#[cfg(feature = "ssr")]
pub mod ssr;
pub mod theme;
pub mod toast;
pub mod toc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    SsrMode, StaticSegment,
    components::{A, ParentRoute, Route, Router, Routes},
    path,
    static_routes::StaticRoute,
};

use crate::{
    blog::{BlogIndexPage, BlogPostPage, list_blog_slugs},
    navbar::Navbar,
    showcase::{
        BounceButtonPage, BounceLoaderPage, ComponentsIntroPage, ComponentsLayout, PlaygroundPage,
        ShimmerButtonPage,
    },
    toast::{Toaster, Toasts},
};

/// HTML document wrapping [`App`] during server rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
      <!DOCTYPE html>
      <html lang="en">
        <head>
          <meta charset="utf-8" />
          <meta name="viewport" content="width=device-width, initial-scale=1" />
          <AutoReload options=options.clone() />
          <HydrationScripts options />
          <MetaTags />
        </head>
        <body class="bg-white text-neutral-900 dark:bg-neutral-950 dark:text-neutral-100">
          <App />
        </body>
      </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    Toaster::provide();

    view! {
      <Stylesheet id="leptos" href="/pkg/mxnan.css" />
      <Title text="mxnan" />

      <Router>
        <Navbar />
        <main class="min-h-screen">
          <Routes fallback=|| view! { <NotFound /> }>
            <Route path=StaticSegment("") view=HomePage />
            <Route path=StaticSegment("blogs") view=BlogIndexPage />
            <Route
              path=path!("/blogs/:slug")
              view=BlogPostPage
              ssr=SsrMode::Static(
                StaticRoute::new()
                  .prerender_params(|| async move {
                    [("slug".into(), list_blog_slugs().await.unwrap_or_default())]
                      .into_iter()
                      .collect()
                  }),
              )
            />
            <ParentRoute path=StaticSegment("components") view=ComponentsLayout>
              <Route path=StaticSegment("") view=ComponentsIntroPage />
              <Route path=StaticSegment("playground") view=PlaygroundPage />
              <Route path=path!("buttons/shimmer") view=ShimmerButtonPage />
              <Route path=path!("buttons/bounce") view=BounceButtonPage />
              <Route path=path!("loaders/bounce") view=BounceLoaderPage />
            </ParentRoute>
          </Routes>
        </main>
        <Toasts />
      </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
      <section class="home max-w-3xl mx-auto px-4 pt-32 pb-16">
        <h1 class="text-5xl font-bold mb-6">"mxnan"</h1>
        <p class="text-lg text-gray-500 mb-12">"Notes on building for the web, and a few components."</p>
        <div class="grid gap-6 sm:grid-cols-2">
          <A href="/blogs" attr:class="home-card block rounded-xl border p-6 hover:shadow-lg">
            <h2 class="text-2xl font-semibold mb-2">"Blogs"</h2>
            <p class="text-gray-500">"Articles and write-ups."</p>
          </A>
          <A href="/components" attr:class="home-card block rounded-xl border p-6 hover:shadow-lg">
            <h2 class="text-2xl font-semibold mb-2">"Components"</h2>
            <p class="text-gray-500">"Animated buttons and loaders."</p>
          </A>
        </div>
      </section>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
      <Title text="Not found" />
      <p class="not-found p-24 text-center text-xl">"Page not found."</p>
    }
}
