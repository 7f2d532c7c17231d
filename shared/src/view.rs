use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Top-level layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewState {
    #[default]
    Home,
    Gallery,
}

/// In-page navigation target on the home layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Home,
    About,
    Pets,
    Donate,
}

impl Anchor {
    pub const NAV_ORDER: [Anchor; 4] = [Anchor::Home, Anchor::About, Anchor::Pets, Anchor::Donate];

    /// DOM id of the section
    pub fn id(&self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Pets => "pets",
            Anchor::Donate => "donate",
        }
    }

    /// Fragment used for the link's `href`
    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown anchor: {0:?}")]
pub struct UnknownAnchor(pub String);

impl FromStr for Anchor {
    type Err = UnknownAnchor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim_start_matches('#');
        Anchor::NAV_ORDER
            .into_iter()
            .find(|anchor| anchor.id() == id)
            .ok_or_else(|| UnknownAnchor(s.to_string()))
    }
}

/// How a navigation request will be carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// Already on the home layout; scroll on the next layout pass
    Immediate,
    /// The home layout has to be committed before the anchor exists
    AfterLayout,
}

/// A scroll waiting for the layout-ready signal.
///
/// `seq` distinguishes repeated requests for the same anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingScroll {
    pub anchor: Anchor,
    pub kind: NavigationKind,
    pub seq: u32,
}

/// Absolute scroll position for `anchor`.
///
/// `element_top` is the section's viewport-relative top edge and `page_y` the
/// current scroll offset. `None` means the section is not in the document and
/// the scroll is skipped.
pub fn resolve_scroll_top(anchor: Anchor, element_top: Option<f64>, page_y: f64, header_offset: f64) -> Option<f64> {
    match anchor {
        Anchor::Home => Some(0.0),
        _ => element_top.map(|top| top + page_y - header_offset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_ids_round_trip() {
        for anchor in Anchor::NAV_ORDER {
            assert_eq!(anchor.id().parse::<Anchor>().unwrap(), anchor);
            assert_eq!(anchor.href().parse::<Anchor>().unwrap(), anchor);
        }
        assert_eq!("contact".parse::<Anchor>(), Err(UnknownAnchor("contact".to_string())));
    }

    #[test]
    fn test_home_anchor_scrolls_to_top() {
        assert_eq!(resolve_scroll_top(Anchor::Home, None, 840.0, 100.0), Some(0.0));
        assert_eq!(resolve_scroll_top(Anchor::Home, Some(300.0), 840.0, 100.0), Some(0.0));
    }

    #[test]
    fn test_section_anchor_subtracts_header() {
        // Section 1200px below the viewport top while scrolled 300px down
        assert_eq!(resolve_scroll_top(Anchor::Donate, Some(1200.0), 300.0, 100.0), Some(1400.0));
        // Section already above the viewport
        assert_eq!(resolve_scroll_top(Anchor::About, Some(-50.0), 900.0, 100.0), Some(750.0));
    }

    #[test]
    fn test_missing_section_is_skipped() {
        assert_eq!(resolve_scroll_top(Anchor::Pets, None, 0.0, 100.0), None);
    }
}
