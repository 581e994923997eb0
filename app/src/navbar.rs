//! Site navigation bar.
//!
//! The desktop bar hides while the page scrolls down and offers a hover menu;
//! the mobile bar is a disclosure listing the same links.

use leptos::{ev, prelude::*};
use leptos_router::{components::A, hooks::use_location};

use crate::{
    icons::{Icon, IconKind},
    layout::{Layout, use_layout},
    menu::{HoverMenu, LinkStyle, MenuLink, MenuPanel},
    scroll::ScrollTracker,
    theme::ThemeToggle,
};

pub const SITE_NAME: &str = "mxnan";

/// The logo turns into an arrow on the home page.
pub fn shows_home_arrow(pathname: &str) -> bool {
    pathname == "/"
}

#[component]
pub fn Navbar() -> impl IntoView {
    let layout = use_layout();
    let location = use_location();
    let pathname = Signal::derive(move || location.pathname.get());

    move || match layout.get() {
        Layout::Mobile => view! { <MobileNav pathname=pathname /> }.into_any(),
        Layout::Desktop => view! { <DesktopNav pathname=pathname /> }.into_any(),
    }
}

#[component]
fn Logo(pathname: Signal<String>) -> impl IntoView {
    view! {
      <A href="/" attr:class="logo flex items-center font-bold text-lg" attr:aria-label="Home">
        {move || {
          if shows_home_arrow(&pathname.get()) {
            view! { <Icon kind=IconKind::ArrowDown class="w-6 h-6" /> }.into_any()
          } else {
            view! { <span>{SITE_NAME}</span> }.into_any()
          }
        }}
      </A>
    }
}

#[component]
pub fn DesktopNav(pathname: Signal<String>) -> impl IntoView {
    let tracker = RwSignal::new(ScrollTracker::new());
    let menu = RwSignal::new(HoverMenu::default());

    let handle = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        let current = tracker.get_untracked();
        let mut next = current;
        next.on_scroll(offset);
        if next != current {
            tracker.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    let class = move || {
        format!(
            "desktop-nav fixed top-0 inset-x-0 z-50 flex items-center justify-between px-8 py-4 bg-white/80 dark:bg-neutral-950/80 backdrop-blur border-neutral-200 dark:border-neutral-800 {}",
            tracker.get().visibility().border_class()
        )
    };

    view! {
      <header
        class=class
        style=move || tracker.get().visibility().style()
        on:mouseenter=move |_| tracker.update(|t| {
          t.on_hover();
        })
        on:mouseleave=move |_| tracker.update(|t| {
          t.on_unhover();
        })
        on:focusin=move |_| tracker.update(|t| {
          t.on_focus();
        })
        on:focusout=move |_| tracker.update(|t| {
          t.on_blur();
        })
      >
        <Logo pathname=pathname />
        <nav
          class="hover-menu flex items-center gap-6"
          aria-label="Main"
          on:mouseleave=move |_| menu.update(HoverMenu::close)
        >
          {MenuPanel::ALL
            .into_iter()
            .map(|panel| view! { <MenuItem panel=panel menu=menu /> })
            .collect_view()}
        </nav>
        <ThemeToggle />
      </header>
    }
}

#[component]
fn MenuItem(panel: MenuPanel, menu: RwSignal<HoverMenu>) -> impl IntoView {
    let is_open = move || menu.get().is_open(panel);

    view! {
      <div class="menu-item relative" on:mouseenter=move |_| menu.update(|m| m.open(panel))>
        <button
          type="button"
          class="menu-trigger capitalize hover:opacity-80"
          aria-expanded=move || is_open().to_string()
          on:focus=move |_| menu.update(|m| m.open(panel))
        >
          {panel.label()}
        </button>
        <Show when=is_open>
          <div
            class="menu-panel absolute top-full left-1/2 -translate-x-1/2 mt-4 p-4 rounded-xl shadow-xl bg-white dark:bg-neutral-900 min-w-max"
            on:click=move |_| menu.update(HoverMenu::close)
          >
            <PanelLinks panel=panel />
          </div>
        </Show>
      </div>
    }
}

#[component]
fn PanelLinks(panel: MenuPanel) -> impl IntoView {
    let links = panel.links();
    let cards = links.iter().any(|l| matches!(l.style, LinkStyle::Card { .. }));
    let class = if cards { "grid grid-cols-2 gap-4" } else { "flex flex-col gap-2" };

    view! {
      <div class=class>
        {links
          .iter()
          .map(|link| match link.style {
            LinkStyle::Card { image } => view! { <ContentCard link=link image=image /> }.into_any(),
            LinkStyle::Hovered { icon } => view! { <HoveredLink link=link icon=icon /> }.into_any(),
          })
          .collect_view()}
      </div>
    }
}

#[component]
fn ContentCard(link: &'static MenuLink, image: &'static str) -> impl IntoView {
    view! {
      <A href=link.href attr:class="content-card block w-48 group">
        <img src=image alt=link.title class="rounded-md mb-2 w-full h-24 object-cover" />
        <h3 class="font-semibold group-hover:underline">{link.title}</h3>
        {link.description.map(|d| view! { <p class="text-xs text-gray-500 mt-1">{d}</p> })}
      </A>
    }
}

#[component]
fn HoveredLink(link: &'static MenuLink, icon: IconKind) -> impl IntoView {
    view! {
      <A href=link.href attr:class="hovered-link flex items-center justify-between gap-4 hover:translate-x-1 transition-transform">
        <span>{link.title}</span>
        <Icon kind=icon class="w-4 h-4" />
      </A>
    }
}

#[component]
pub fn MobileNav(pathname: Signal<String>) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
      <header class="mobile-nav fixed top-0 inset-x-0 z-50 bg-white dark:bg-neutral-950 border-b">
        <div class="flex items-center justify-between px-4 py-3">
          <Logo pathname=pathname />
          <div class="flex items-center gap-2">
            <ThemeToggle />
            <button
              type="button"
              class="menu-toggle p-2"
              aria-label="Toggle menu"
              aria-expanded=move || open.get().to_string()
              on:click=move |_| open.update(|o| *o = !*o)
            >
              {move || {
                let kind = if open.get() { IconKind::Close } else { IconKind::Menu };
                view! { <Icon kind=kind /> }
              }}
            </button>
          </div>
        </div>
        <Show when=move || open.get()>
          <nav class="mobile-menu px-4 pb-4 space-y-4" aria-label="Main" on:click=move |_| open.set(false)>
            {MenuPanel::ALL
              .into_iter()
              .map(|panel| {
                view! {
                  <div class="mobile-menu-section">
                    <h3 class="text-xs uppercase text-gray-500 mb-2">{panel.label()}</h3>
                    <ul class="space-y-1">
                      {panel
                        .links()
                        .iter()
                        .map(|link| {
                          view! {
                            <li>
                              <A href=link.href attr:class="block py-1">
                                {link.title}
                              </A>
                            </li>
                          }
                        })
                        .collect_view()}
                    </ul>
                  </div>
                }
              })
              .collect_view()}
          </nav>
        </Show>
      </header>
    }
}
