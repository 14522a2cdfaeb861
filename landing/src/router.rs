//! Page routing state.
//!
//! The site is a stack of `<section class="page-section">` elements and only
//! one of them is visible. This module tracks which one, decides the entry
//! animation from the page's category, and answers nav highlighting queries.
//! Applying the result to the document lives in [`crate::dom`].

use std::fmt;

use serde::Deserialize;

/// Identifier of a page section. Equal to the section element's `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Anchor form used by nav links, e.g. `#sol-cloud`.
    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What kind of page a section is. Declared per page in `site.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageCategory {
    Solution,
    Product,
    General,
}

impl PageCategory {
    pub fn animation(self) -> Animation {
        match self {
            PageCategory::Solution => Animation::SlideLeft,
            PageCategory::Product => Animation::FadeScale,
            PageCategory::General => Animation::FadeUp,
        }
    }
}

/// Entry animation applied to a section when it becomes active.
/// The animation itself is defined in CSS; we only toggle the class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    FadeUp,
    FadeScale,
    SlideLeft,
}

impl Animation {
    pub const ALL: [Animation; 3] = [Animation::FadeUp, Animation::FadeScale, Animation::SlideLeft];

    pub fn class(self) -> &'static str {
        match self {
            Animation::FadeUp => "anim-fade-up",
            Animation::FadeScale => "anim-fade-scale",
            Animation::SlideLeft => "anim-slide-left",
        }
    }
}

/// A tile inside a section. Clicking a card with a `link` routes there.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Card {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub link: Option<PageId>,
}

/// One page section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub title: String,
    pub category: PageCategory,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub cards: Vec<Card>,
    /// Render the contact form at the bottom of this section.
    #[serde(default)]
    pub contact_form: bool,
}

/// Navigation bar entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: PageId,
    /// Highlight this link for every page of the given category too.
    #[serde(default)]
    pub group: Option<PageCategory>,
}

impl NavLink {
    pub fn href(&self) -> String {
        self.target.href()
    }

    pub fn is_active_for(&self, page: &Page) -> bool {
        self.target == page.id || self.group == Some(page.category)
    }
}

/// Result of a successful [`Router::navigate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: PageId,
    pub to: PageId,
    pub animation: Animation,
}

#[derive(Debug, Clone)]
pub struct Router {
    pages: Vec<Page>,
    current: PageId,
}

impl Router {
    /// `home` must name one of `pages`; config validation guarantees it.
    pub fn new(pages: Vec<Page>, home: PageId) -> Self {
        Self {
            pages,
            current: home,
        }
    }

    pub fn current(&self) -> &PageId {
        &self.current
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.page(self.current.as_str())
    }

    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id.as_str() == id)
    }

    /// Make `id` the current page. Unknown ids are ignored and return `None`.
    ///
    /// Navigating to the page that is already current still yields a
    /// transition so the entry animation replays.
    pub fn navigate(&mut self, id: &str) -> Option<Transition> {
        let page = self.page(id)?;
        let to = page.id.clone();
        let animation = page.category.animation();
        let from = std::mem::replace(&mut self.current, to.clone());
        Some(Transition {
            from,
            to,
            animation,
        })
    }
}
