//! Responsive layout policy.
//!
//! One breakpoint decides between the mobile and desktop variants of the
//! sidebar and the navbar. The width comes from a [`Viewport`], so the policy
//! can be exercised without a display.

use leptos::{ev, prelude::*};

/// Widths strictly below this are mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Which variant of a responsive component to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    Mobile,
    /// Also used before the first measurement, matching server output.
    #[default]
    Desktop,
}

impl Layout {
    /// Layout for a viewport width in CSS pixels.
    pub fn for_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Layout for the current state of `viewport`.
    pub fn observe(viewport: &impl Viewport) -> Self {
        viewport
            .inner_width()
            .map(Self::for_width)
            .unwrap_or_default()
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

/// Source of the current viewport width.
pub trait Viewport {
    /// Inner width in CSS pixels, if it can be measured.
    fn inner_width(&self) -> Option<f64>;
}

/// The browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn inner_width(&self) -> Option<f64> {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
}

/// A viewport with a fixed width.
#[derive(Debug, Clone, Copy)]
pub struct FixedViewport(pub f64);

impl Viewport for FixedViewport {
    fn inner_width(&self) -> Option<f64> {
        Some(self.0)
    }
}

/// Track the window layout: measured after mount and on every resize.
///
/// The resize listener is detached when the calling component unmounts.
pub fn use_layout() -> Signal<Layout> {
    let layout = RwSignal::new(Layout::default());

    Effect::new(move |_| {
        layout.set(Layout::observe(&WindowViewport));
    });

    let handle = window_event_listener(ev::resize, move |_| {
        let next = Layout::observe(&WindowViewport);
        if layout.get_untracked() != next {
            layout.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    layout.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_edges() {
        assert_eq!(Layout::for_width(767.0), Layout::Mobile);
        assert_eq!(Layout::for_width(767.9), Layout::Mobile);
        assert_eq!(Layout::for_width(768.0), Layout::Desktop);
        assert_eq!(Layout::for_width(1440.0), Layout::Desktop);
    }

    #[test]
    fn test_observe_fixed_viewport() {
        assert!(Layout::observe(&FixedViewport(767.0)).is_mobile());
        assert!(!Layout::observe(&FixedViewport(768.0)).is_mobile());
    }

    #[test]
    fn test_unmeasurable_viewport_defaults_to_desktop() {
        struct Headless;
        impl Viewport for Headless {
            fn inner_width(&self) -> Option<f64> {
                None
            }
        }
        assert_eq!(Layout::observe(&Headless), Layout::Desktop);
    }
}
