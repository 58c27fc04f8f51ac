//! Section navigation and keyword search.

use std::collections::BTreeMap;

use folio_model::{Rect, SectionId};
use tracing::debug;

use crate::scroll::{ScrollBehavior, ScrollRequest};
use crate::store::ViewState;

/// Keyword groups checked in priority order; the first group with any
/// keyword contained in the query wins.
pub const KEYWORD_GROUPS: [(SectionId, &[&str]); 5] = [
    (SectionId::Projects, &["project", "work", "build"]),
    (SectionId::Experience, &["experience", "job", "career"]),
    (SectionId::Skills, &["skill", "tech", "language"]),
    (SectionId::About, &["about", "bio", "background"]),
    (SectionId::Contact, &["contact", "hire", "reach"]),
];

/// Maps sections to scroll targets.
#[derive(Debug, Default)]
pub struct Navigation {
    anchors: BTreeMap<SectionId, Rect>,
    behavior: ScrollBehavior,
}

impl Navigation {
    pub fn new(behavior: ScrollBehavior) -> Self {
        Self {
            anchors: BTreeMap::new(),
            behavior,
        }
    }

    /// Register (or move) the anchor element for `section`.
    pub fn register_anchor(&mut self, section: SectionId, rect: Rect) {
        self.anchors.insert(section, rect);
    }

    pub fn is_registered(&self, section: SectionId) -> bool {
        self.anchors.contains_key(&section)
    }

    pub fn anchor(&self, section: SectionId) -> Option<&Rect> {
        self.anchors.get(&section)
    }

    /// Scroll the window to the top of `section` and close the mobile menu.
    ///
    /// Unregistered sections are a no-op: no request and no state change.
    pub fn scroll_to_section(
        &self,
        section: SectionId,
        state: &mut ViewState,
    ) -> Option<ScrollRequest> {
        let Some(anchor) = self.anchor(section) else {
            debug!(%section, "navigation to unregistered section ignored");
            return None;
        };
        state.set_mobile_menu_open(false);
        let offset = anchor.y.max(0.0);
        debug!(%section, offset, "navigating to section");
        Some(ScrollRequest::window(offset, self.behavior))
    }

    /// Same as [`Navigation::scroll_to_section`] for an anchor name such as
    /// `"contact"`. Unknown names are a no-op.
    pub fn scroll_to_section_named(
        &self,
        name: &str,
        state: &mut ViewState,
    ) -> Option<ScrollRequest> {
        match name.parse::<SectionId>() {
            Ok(section) => self.scroll_to_section(section, state),
            Err(err) => {
                debug!(%err, "navigation by name ignored");
                None
            }
        }
    }

    /// Record `query` and navigate to the section it resolves to, if any.
    pub fn search(&self, query: &str, state: &mut ViewState) -> Option<ScrollRequest> {
        state.set_search_query(query);
        let section = resolve_search(query)?;
        self.scroll_to_section(section, state)
    }
}

/// Resolve a free-text query to a section using [`KEYWORD_GROUPS`].
pub fn resolve_search(query: &str) -> Option<SectionId> {
    let query = query.to_lowercase();
    let section = KEYWORD_GROUPS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| query.contains(keyword)))
        .map(|(section, _)| *section);
    debug!(query = %query, section = ?section, "search resolved");
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigation() -> Navigation {
        let mut nav = Navigation::new(ScrollBehavior::Smooth);
        for (index, section) in SectionId::ALL.into_iter().enumerate() {
            nav.register_anchor(section, Rect::new(0.0, index as f64 * 900.0, 1200.0, 900.0));
        }
        nav
    }

    #[test]
    fn earlier_group_wins() {
        assert_eq!(
            resolve_search("I want to see your project experience"),
            Some(SectionId::Projects)
        );
        assert_eq!(resolve_search("Career history"), Some(SectionId::Experience));
        assert_eq!(resolve_search("TECH stack"), Some(SectionId::Skills));
        assert_eq!(resolve_search("your background"), Some(SectionId::About));
        assert_eq!(resolve_search("can I hire you"), Some(SectionId::Contact));
        assert_eq!(resolve_search("hello"), None);
        assert_eq!(resolve_search(""), None);
    }

    #[test]
    fn matches_substrings_inside_words() {
        // "networking" contains "work".
        assert_eq!(resolve_search("networking"), Some(SectionId::Projects));
    }

    #[test]
    fn navigating_closes_menu() {
        let nav = navigation();
        let mut state = ViewState::new();
        state.set_mobile_menu_open(true);

        let request = nav
            .scroll_to_section(SectionId::Contact, &mut state)
            .expect("contact is registered");
        assert_eq!(request, ScrollRequest::window(4500.0, ScrollBehavior::Smooth));
        assert!(!state.mobile_menu_open);

        nav.scroll_to_section(SectionId::Contact, &mut state);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn unregistered_section_is_a_no_op() {
        let nav = Navigation::default();
        let mut state = ViewState::new();
        state.set_mobile_menu_open(true);
        assert_eq!(nav.scroll_to_section(SectionId::Skills, &mut state), None);
        assert!(state.mobile_menu_open);
        assert_eq!(nav.scroll_to_section_named("footer", &mut state), None);
    }

    #[test]
    fn search_records_query_even_without_match() {
        let nav = navigation();
        let mut state = ViewState::new();
        assert_eq!(nav.search("weather", &mut state), None);
        assert_eq!(state.search_query, "weather");

        let request = nav.search("Show me the skills", &mut state);
        assert_eq!(request.map(|r| r.offset), Some(3600.0));
        assert_eq!(state.search_query, "Show me the skills");
    }

    #[test]
    fn named_navigation_accepts_anchor_ids() {
        let nav = navigation();
        let mut state = ViewState::new();
        let request = nav.scroll_to_section_named("About", &mut state);
        assert_eq!(request.map(|r| r.offset), Some(900.0));
    }
}
