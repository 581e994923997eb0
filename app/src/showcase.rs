//! Component showcase: the `/components` section and its widgets.

use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::Outlet;
use mxnan_core::html::plain_code_block;

use crate::{article::CodeBlock, sidebar::ComponentSidebar};

const BOUNCE_DURATION: Duration = Duration::from_millis(600);

const SHIMMER_SNIPPET: &str = r#"view! {
  <ShimmerButton>"Get started"</ShimmerButton>
}"#;

const BOUNCE_BUTTON_SNIPPET: &str = r#"view! {
  <BounceButton>"Click me"</BounceButton>
}"#;

const BOUNCE_LOADER_SNIPPET: &str = r#"view! {
  <BounceLoader dots=3 />
}"#;

/// Sidebar plus the selected showcase page.
#[component]
pub fn ComponentsLayout() -> impl IntoView {
    view! {
      <div class="components-layout grid grid-cols-[10rem_1fr] md:grid-cols-[16rem_1fr] min-h-screen pt-20">
        <ComponentSidebar />
        <section class="components-content px-6 py-8">
          <Outlet />
        </section>
      </div>
    }
}

#[component]
fn ShowcasePage(
    title: &'static str,
    description: &'static str,
    code_id: &'static str,
    code: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
      <Title text=title />
      <h1 class="text-3xl font-bold mb-2">{title}</h1>
      <p class="text-gray-500 mb-8">{description}</p>
      <div class="preview flex items-center justify-center rounded-lg border p-12 mb-8">
        {children()}
      </div>
      <h2 class="text-xl font-semibold mb-2">"Usage"</h2>
      <CodeBlock id=code_id lang=Some("rust".to_string()) html=plain_code_block(code, Some("rust")) />
    }
}

#[component]
pub fn ComponentsIntroPage() -> impl IntoView {
    view! {
      <Title text="Components" />
      <h1 class="text-3xl font-bold mb-4">"Introduction"</h1>
      <p class="mb-4">
        "A small collection of animated widgets built with Leptos and Tailwind. "
        "Pick one from the sidebar to see it live along with its usage."
      </p>
      <p>"Every snippet has a copy button; the playground lets you try them together."</p>
    }
}

#[component]
pub fn PlaygroundPage() -> impl IntoView {
    let label = RwSignal::new("Hello".to_string());
    let dots = RwSignal::new(3_usize);

    view! {
      <Title text="Playground" />
      <h1 class="text-3xl font-bold mb-6">"Playground"</h1>
      <div class="controls flex flex-wrap gap-6 mb-8">
        <label class="flex flex-col gap-1 text-sm">
          "Label"
          <input type="text" class="rounded border px-2 py-1" bind:value=label />
        </label>
        <label class="flex flex-col gap-1 text-sm">
          "Loader dots"
          <input
            type="range"
            min="1"
            max="6"
            prop:value=move || dots.get().to_string()
            on:input=move |ev| {
              if let Ok(n) = event_target_value(&ev).parse() {
                dots.set(n);
              }
            }
          />
        </label>
      </div>
      <div class="preview flex flex-wrap items-center justify-center gap-8 rounded-lg border p-12">
        <ShimmerButton>{move || label.get()}</ShimmerButton>
        <BounceButton>{move || label.get()}</BounceButton>
        {move || view! { <BounceLoader dots=dots.get() /> }}
      </div>
    }
}

#[component]
pub fn ShimmerButtonPage() -> impl IntoView {
    view! {
      <ShowcasePage
        title="Shimmer Button"
        description="A button with a light sweep running across it."
        code_id="shimmer-button-code"
        code=SHIMMER_SNIPPET
      >
        <ShimmerButton>"Get started"</ShimmerButton>
      </ShowcasePage>
    }
}

#[component]
pub fn BounceButtonPage() -> impl IntoView {
    view! {
      <ShowcasePage
        title="Bounce Button"
        description="A button that bounces when pressed."
        code_id="bounce-button-code"
        code=BOUNCE_BUTTON_SNIPPET
      >
        <BounceButton>"Click me"</BounceButton>
      </ShowcasePage>
    }
}

#[component]
pub fn BounceLoaderPage() -> impl IntoView {
    view! {
      <ShowcasePage
        title="Bounce Loader"
        description="Dots bouncing one after another."
        code_id="bounce-loader-code"
        code=BOUNCE_LOADER_SNIPPET
      >
        <BounceLoader />
      </ShowcasePage>
    }
}

#[component]
pub fn ShimmerButton(children: Children) -> impl IntoView {
    view! {
      <button
        type="button"
        class="shimmer-button relative overflow-hidden rounded-lg px-6 py-3 font-medium bg-neutral-900 text-white"
      >
        <span class="shimmer absolute inset-0" aria-hidden="true"></span>
        <span class="relative">{children()}</span>
      </button>
    }
}

#[component]
pub fn BounceButton(children: Children) -> impl IntoView {
    let bouncing = RwSignal::new(false);

    let on_click = move |_| {
        bouncing.set(true);
        set_timeout(move || bouncing.set(false), BOUNCE_DURATION);
    };

    view! {
      <button
        type="button"
        class="bounce-button rounded-lg px-6 py-3 font-medium border"
        class:animate-bounce=move || bouncing.get()
        on:click=on_click
      >
        {children()}
      </button>
    }
}

/// Row of dots bouncing with staggered delays.
#[component]
pub fn BounceLoader(#[prop(default = 3)] dots: usize) -> impl IntoView {
    view! {
      <div class="bounce-loader flex gap-2" role="status" aria-label="Loading">
        {(0..dots)
          .map(|i| {
            let style = format!("animation-delay: {}ms", i * 150);
            view! { <span class="dot w-3 h-3 rounded-full bg-current animate-bounce" style=style></span> }
          })
          .collect_view()}
      </div>
    }
}
