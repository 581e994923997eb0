//! Component showcase sidebar.
//!
//! The category table is constant data. Both layouts render the same entries;
//! an entry is highlighted only when its href equals the current path.

use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

use crate::layout::{Layout, use_layout};

/// A linkable entry of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarItem {
    pub name: &'static str,
    pub href: &'static str,
}

/// A titled group of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarCategory {
    pub category: &'static str,
    pub items: &'static [SidebarItem],
}

/// Entries shown above the categories.
pub const TOP_LINKS: &[SidebarItem] = &[
    SidebarItem {
        name: "Introduction",
        href: "/components",
    },
    SidebarItem {
        name: "Playground",
        href: "/components/playground",
    },
];

pub const SIDEBAR_CATEGORIES: &[SidebarCategory] = &[
    SidebarCategory {
        category: "Buttons",
        items: &[
            SidebarItem {
                name: "Shimmer",
                href: "/components/buttons/shimmer",
            },
            SidebarItem {
                name: "Bounce",
                href: "/components/buttons/bounce",
            },
        ],
    },
    SidebarCategory {
        category: "Loaders",
        items: &[SidebarItem {
            name: "Bounce",
            href: "/components/loaders/bounce",
        }],
    },
];

/// Exact-match highlighting; no prefix matching.
pub fn is_active(href: &str, pathname: &str) -> bool {
    href == pathname
}

/// Every linkable entry, top links first.
pub fn all_items() -> impl Iterator<Item = &'static SidebarItem> {
    TOP_LINKS
        .iter()
        .chain(SIDEBAR_CATEGORIES.iter().flat_map(|c| c.items.iter()))
}

/// Entries highlighted for `pathname`.
pub fn active_items(pathname: &str) -> Vec<&'static SidebarItem> {
    all_items().filter(|i| is_active(i.href, pathname)).collect()
}

fn link_class(base: &'static str, active: bool) -> String {
    if active {
        format!("{base} text-plight dark:text-pdark font-semibold translate-x-2")
    } else {
        format!("{base} text-gray-500")
    }
}

/// Sidebar choosing its layout from the viewport width.
#[component]
pub fn ComponentSidebar() -> impl IntoView {
    let layout = use_layout();
    let location = use_location();
    let pathname = Signal::derive(move || location.pathname.get());

    move || match layout.get() {
        Layout::Mobile => view! { <MobileSidebar pathname=pathname /> }.into_any(),
        Layout::Desktop => view! { <DesktopSidebar pathname=pathname /> }.into_any(),
    }
}

#[component]
pub fn DesktopSidebar(pathname: Signal<String>) -> impl IntoView {
    view! {
      <nav class="sidebar sidebar-desktop h-full relative overflow-x-hidden overflow-y-auto">
        <div class="sticky top-0 p-4">
          <h2 class="text-xl font-bold mb-4">"Components"</h2>
          {TOP_LINKS
            .iter()
            .map(|item| {
              let href = item.href;
              view! {
                <A
                  href=href
                  exact=true
                  attr:class=move || link_class(
                    "sidebar-top-link flex justify-between w-full mb-2",
                    is_active(href, &pathname.get()),
                  )
                >
                  <p class="custom-underline w-min pb-2">{item.name}</p>
                </A>
              }
            })
            .collect_view()}
          <SidebarCategories pathname=pathname item_class="custom-underline w-max pb-2" />
        </div>
      </nav>
    }
}

#[component]
pub fn MobileSidebar(pathname: Signal<String>) -> impl IntoView {
    view! {
      <nav class="sidebar sidebar-mobile h-full overflow-y-auto">
        <div class="sticky top-0 p-2">
          <h2 class="text-base font-bold mb-4">"Components"</h2>
          {TOP_LINKS
            .iter()
            .map(|item| {
              let href = item.href;
              view! {
                <A
                  href=href
                  exact=true
                  attr:class=move || link_class(
                    "sidebar-top-link flex justify-between w-full mb-4",
                    is_active(href, &pathname.get()),
                  )
                >
                  <p class="custom-underline text-sm w-min pb-2">{item.name}</p>
                </A>
              }
            })
            .collect_view()}
          <SidebarCategories pathname=pathname item_class="custom-underline text-sm w-max pb-2" />
        </div>
      </nav>
    }
}

#[component]
fn SidebarCategories(pathname: Signal<String>, item_class: &'static str) -> impl IntoView {
    SIDEBAR_CATEGORIES
        .iter()
        .map(|category| {
            view! {
              <div class="sidebar-category mb-4">
                <h3 class="font-semibold mb-2">{category.category}</h3>
                <ul class="space-y-2">
                  {category
                    .items
                    .iter()
                    .map(|item| {
                      let href = item.href;
                      let active = move || is_active(href, &pathname.get());
                      view! {
                        <li class="sidebar-item mb-1">
                          <A href=href exact=true attr:class=move || link_class(item_class, active())>
                            {item.name}
                          </A>
                        </li>
                      }
                    })
                    .collect_view()}
                </ul>
              </div>
            }
        })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_href_activates_exactly_one_item() {
        for item in all_items() {
            let active = active_items(item.href);
            assert_eq!(active, vec![item], "href {}", item.href);
        }
    }

    #[test]
    fn test_no_prefix_matching() {
        assert!(!is_active("/components", "/components/buttons/shimmer"));
        assert!(active_items("/components/buttons").is_empty());
        assert!(active_items("/components/buttons/shimmer/").is_empty());
    }

    #[test]
    fn test_introduction_is_active_on_root() {
        let active = active_items("/components");
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Introduction");
    }

    #[test]
    fn test_hrefs_are_unique() {
        let mut hrefs: Vec<_> = all_items().map(|i| i.href).collect();
        let total = hrefs.len();
        hrefs.sort_unstable();
        hrefs.dedup();
        assert_eq!(hrefs.len(), total);
    }

    #[test]
    fn test_category_names_are_stable_keys() {
        let names: Vec<_> = SIDEBAR_CATEGORIES.iter().map(|c| c.category).collect();
        assert_eq!(names, vec!["Buttons", "Loaders"]);
    }
}
