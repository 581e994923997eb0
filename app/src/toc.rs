//! Table of contents and the deferred panel hosting it.

use leptos::prelude::*;
use mxnan_core::TocEntry;

/// Render phase of a [`DeferredPanel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    /// First render; the panel is omitted.
    Pending,
    /// Mounted in the browser; the panel is shown.
    Ready,
}

impl PanelPhase {
    /// Phase of the first render.
    pub fn initial(supports_deferred: bool) -> Self {
        if supports_deferred {
            Self::Pending
        } else {
            Self::Ready
        }
    }

    /// Phase after the component mounted.
    pub fn mounted(self) -> Self {
        Self::Ready
    }

    pub fn shows_panel(self) -> bool {
        self == Self::Ready
    }
}

/// Shows `children` only after mount when `supports_deferred` is set.
///
/// Effects never run during server rendering, so server output and the
/// first client render agree on the omitted panel.
#[component]
pub fn DeferredPanel(
    #[prop(default = true)] supports_deferred: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let phase = RwSignal::new(PanelPhase::initial(supports_deferred));

    Effect::new(move |_| {
        let current = phase.get_untracked();
        if !current.shows_panel() {
            phase.set(current.mounted());
        }
    });

    view! { <Show when=move || phase.get().shows_panel()>{children()}</Show> }
}

/// One rendered line of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocRow {
    pub class: String,
    pub href: String,
    pub text: String,
}

impl TocRow {
    /// Indent `entry` relative to the shallowest heading level present.
    pub fn new(entry: TocEntry, min_level: u8) -> Self {
        let depth = entry.level.saturating_sub(min_level);
        Self {
            class: format!("toc-level-{depth} pl-{}", depth * 3),
            href: entry.href(),
            text: entry.text,
        }
    }
}

#[component]
pub fn TableOfContents(entries: Vec<TocEntry>) -> impl IntoView {
    if entries.is_empty() {
        return ().into_any();
    }

    let min_level = entries.iter().map(|e| e.level).min().unwrap_or(1);

    view! {
      <nav class="toc text-sm" aria-label="Table of contents">
        <h2 class="toc-title font-semibold mb-2">"On this page"</h2>
        <ul class="toc-list space-y-1">
          {entries
            .into_iter()
            .map(|entry| {
              let TocRow { class, href, text } = TocRow::new(entry, min_level);
              view! {
                <li class=class>
                  <a href=href class="toc-link hover:underline">
                    {text}
                  </a>
                </li>
              }
            })
            .collect_view()}
        </ul>
      </nav>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deferred_panel_waits_for_mount() {
        let phase = PanelPhase::initial(true);
        assert!(!phase.shows_panel());
        assert!(phase.mounted().shows_panel());
    }

    #[test]
    fn test_toc_row_indents_from_shallowest_level() {
        let row = TocRow::new(TocEntry::new(3, "Install", "install"), 2);
        assert_eq!(row.class, "toc-level-1 pl-3");
        assert_eq!(row.href, "#install");
        assert_eq!(row.text, "Install");

        let top = TocRow::new(TocEntry::new(2, "Intro", "intro"), 2);
        assert_eq!(top.class, "toc-level-0 pl-0");
    }

    #[test]
    fn test_without_deferral_panel_is_immediate() {
        assert!(PanelPhase::initial(false).shows_panel());
        assert_eq!(PanelPhase::Ready.mounted(), PanelPhase::Ready);
    }
}
