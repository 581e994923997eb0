//! Scroll-driven visibility of the desktop navbar.
//!
//! The bar hides after the page scrolls down more than
//! [`SCROLL_THRESHOLD_PX`] from the last anchor and comes back after the same
//! distance upwards. Hovering or focusing the bar always shows it.

/// Distance the page has to travel from the anchor before the bar reacts.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavVisibility {
    #[default]
    Visible,
    Hidden,
}

impl NavVisibility {
    pub fn is_hidden(self) -> bool {
        self == Self::Hidden
    }

    /// Inline style for the bar's transform in this state.
    pub fn style(self) -> &'static str {
        match self {
            Self::Visible => {
                "transform: translateY(0%) scaleX(1); opacity: 1; transition: transform 200ms ease, opacity 200ms ease;"
            }
            Self::Hidden => {
                "transform: translateY(-90%) scaleX(0.95); opacity: 0.5; transition: transform 200ms ease, opacity 200ms ease;"
            }
        }
    }

    /// Bottom border width class.
    pub fn border_class(self) -> &'static str {
        match self {
            Self::Visible => "border-b-[1px]",
            Self::Hidden => "border-b-[5px]",
        }
    }
}

/// Input of one transition step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollInput {
    /// Offset at which the bar last reacted.
    pub anchor: f64,
    /// Current vertical scroll offset.
    pub offset: f64,
    /// Pointer is over the bar.
    pub hovered: bool,
    /// Focus is inside the bar.
    pub focused: bool,
}

/// Result of one transition step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStep {
    pub visibility: NavVisibility,
    pub anchor: f64,
}

/// Pure transition function of the visibility machine.
pub fn transition(current: NavVisibility, input: ScrollInput) -> ScrollStep {
    let delta = input.offset - input.anchor;

    let (mut visibility, anchor) = if delta.abs() > SCROLL_THRESHOLD_PX {
        let next = if delta > 0.0 {
            NavVisibility::Hidden
        } else {
            NavVisibility::Visible
        };
        (next, input.offset)
    } else {
        (current, input.anchor)
    };

    if input.hovered || input.focused {
        visibility = NavVisibility::Visible;
    }

    ScrollStep { visibility, anchor }
}

/// Visibility machine state for one mounted navbar.
///
/// Hover and focus are held as state, so a bar under the pointer stays
/// visible while the page keeps scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollTracker {
    visibility: NavVisibility,
    anchor: f64,
    hovered: bool,
    focused: bool,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> NavVisibility {
        self.visibility
    }

    pub fn anchor(&self) -> f64 {
        self.anchor
    }

    /// Feed a new scroll offset.
    pub fn on_scroll(&mut self, offset: f64) -> NavVisibility {
        self.apply(offset)
    }

    /// Pointer entered the bar.
    pub fn on_hover(&mut self) -> NavVisibility {
        self.hovered = true;
        self.apply(self.anchor)
    }

    /// Pointer left the bar.
    pub fn on_unhover(&mut self) -> NavVisibility {
        self.hovered = false;
        self.apply(self.anchor)
    }

    /// Focus moved into the bar.
    pub fn on_focus(&mut self) -> NavVisibility {
        self.focused = true;
        self.apply(self.anchor)
    }

    /// Focus left the bar.
    pub fn on_blur(&mut self) -> NavVisibility {
        self.focused = false;
        self.apply(self.anchor)
    }

    fn apply(&mut self, offset: f64) -> NavVisibility {
        let step = transition(
            self.visibility,
            ScrollInput {
                anchor: self.anchor,
                offset,
                hovered: self.hovered,
                focused: self.focused,
            },
        );
        self.visibility = step.visibility;
        self.anchor = step.anchor;
        self.visibility
    }
}
