//! Light/dark theme toggle persisted in `localStorage`.

use leptos::prelude::*;

use crate::icons::{Icon, IconKind};

pub const THEME_STORAGE_KEY: &str = "theme";
const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Theme saved by a previous visit.
pub fn stored_theme() -> Option<Theme> {
    let value = storage()?.get_item(THEME_STORAGE_KEY).ok()??;
    Theme::parse(&value)
}

/// Set the `dark` class on the document element and remember the choice.
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(err) = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark()) {
            log::warn!("cannot set theme class: {err:?}");
        }
    }

    if let Some(storage) = storage() {
        if let Err(err) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("cannot persist theme: {err:?}");
        }
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = RwSignal::new(Theme::default());

    Effect::new(move |_| {
        if let Some(saved) = stored_theme() {
            theme.set(saved);
            apply_theme(saved);
        }
    });

    let toggle = move |_| {
        let next = theme.get_untracked().toggled();
        theme.set(next);
        apply_theme(next);
    };

    view! {
      <button
        type="button"
        class="theme-toggle p-2 rounded-full"
        aria-label="Toggle theme"
        on:click=toggle
      >
        {move || {
          let kind = if theme.get().is_dark() { IconKind::Sun } else { IconKind::Moon };
          view! { <Icon kind=kind /> }
        }}
      </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_parse_stored_values() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse(" light\n"), Some(Theme::Light));
        assert_eq!(Theme::parse("system"), None);
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    }
}
