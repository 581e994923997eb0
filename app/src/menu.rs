//! Hover menu of the desktop navbar.
//!
//! At most one panel is open at a time. The link lists are constant data.

use crate::icons::IconKind;

/// A panel of the hover menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuPanel {
    Components,
    Blogs,
    Contact,
}

impl MenuPanel {
    /// Panels in display order.
    pub const ALL: [MenuPanel; 3] = [Self::Components, Self::Blogs, Self::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Self::Components => "Components",
            Self::Blogs => "blogs",
            Self::Contact => "contact",
        }
    }

    pub fn links(self) -> &'static [MenuLink] {
        match self {
            Self::Components => COMPONENT_LINKS,
            Self::Blogs => BLOG_LINKS,
            Self::Contact => CONTACT_LINKS,
        }
    }
}

/// How a link is drawn inside its panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// Card with thumbnail and optional description.
    Card { image: &'static str },
    /// Inline text link with a trailing icon.
    Hovered { icon: IconKind },
}

/// A link inside a menu panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLink {
    pub title: &'static str,
    pub href: &'static str,
    pub description: Option<&'static str>,
    pub style: LinkStyle,
}

pub const COMPONENT_LINKS: &[MenuLink] = &[
    MenuLink {
        title: "Shimmer Button",
        href: "/components/buttons/shimmer",
        description: None,
        style: LinkStyle::Card { image: "/og.jpg" },
    },
    MenuLink {
        title: "Bounce Loader",
        href: "/components/loaders/bounce",
        description: None,
        style: LinkStyle::Card { image: "/og.jpg" },
    },
];

pub const BLOG_LINKS: &[MenuLink] = &[
    MenuLink {
        title: "emailjs",
        href: "/blogs/test",
        description: Some(
            "implement emailjs on your app using hooks and a form component to receive emails",
        ),
        style: LinkStyle::Card { image: "/og.jpg" },
    },
    MenuLink {
        title: "test",
        href: "/blogs/test2",
        description: Some("test test test"),
        style: LinkStyle::Card { image: "/og.jpg" },
    },
];

// These routes do not match their labels; kept until real contact targets exist.
pub const CONTACT_LINKS: &[MenuLink] = &[
    MenuLink {
        title: "email",
        href: "/hobby",
        description: None,
        style: LinkStyle::Hovered {
            icon: IconKind::Mail,
        },
    },
    MenuLink {
        title: "github",
        href: "/individual",
        description: None,
        style: LinkStyle::Hovered {
            icon: IconKind::GitBranch,
        },
    },
    MenuLink {
        title: "twitter",
        href: "/team",
        description: None,
        style: LinkStyle::Hovered {
            icon: IconKind::Twitter,
        },
    },
];

/// Single-active-panel toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverMenu {
    active: Option<MenuPanel>,
}

impl HoverMenu {
    pub fn active(&self) -> Option<MenuPanel> {
        self.active
    }

    pub fn is_open(&self, panel: MenuPanel) -> bool {
        self.active == Some(panel)
    }

    /// Show `panel`, hiding any other.
    pub fn open(&mut self, panel: MenuPanel) {
        self.active = Some(panel);
    }

    /// Hide every panel.
    pub fn close(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let menu = HoverMenu::default();
        assert!(menu.active().is_none());
        assert!(MenuPanel::ALL.iter().all(|p| !menu.is_open(*p)));
    }

    #[test]
    fn test_only_one_panel_open() {
        let mut menu = HoverMenu::default();
        menu.open(MenuPanel::Components);
        menu.open(MenuPanel::Contact);

        let open: Vec<_> = MenuPanel::ALL
            .into_iter()
            .filter(|p| menu.is_open(*p))
            .collect();
        assert_eq!(open, vec![MenuPanel::Contact]);
    }

    #[test]
    fn test_close_hides_all() {
        let mut menu = HoverMenu::default();
        menu.open(MenuPanel::Blogs);
        menu.close();
        assert!(menu.active().is_none());
    }

    #[test]
    fn test_panel_links() {
        assert_eq!(MenuPanel::Components.links().len(), 2);
        assert_eq!(MenuPanel::Blogs.links()[0].href, "/blogs/test");
        assert!(
            MenuPanel::Contact
                .links()
                .iter()
                .all(|l| matches!(l.style, LinkStyle::Hovered { .. }))
        );
    }
}
