//! Discrete UI flags owned by the page.

use folio_model::ProjectId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Colour scheme applied by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Flags mutated by clicks and text input.
///
/// Every operation is total and independent of the others. Nothing here is
/// persisted; a fresh page starts from [`ViewState::default`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub dark_mode: bool,
    pub mobile_menu_open: bool,
    /// Project shown in the detail modal.
    pub selected_project: Option<ProjectId>,
    /// Last smart-search input.
    pub search_query: String,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_dark_mode(&mut self) -> Theme {
        self.dark_mode = !self.dark_mode;
        debug!(dark_mode = self.dark_mode, "dark mode toggled");
        self.theme()
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Returns whether the flag changed.
    pub fn set_mobile_menu_open(&mut self, open: bool) -> bool {
        if self.mobile_menu_open == open {
            return false;
        }
        self.mobile_menu_open = open;
        debug!(open, "mobile menu toggled");
        true
    }

    /// `None` dismisses the modal.
    pub fn select_project(&mut self, project: Option<ProjectId>) {
        if self.selected_project != project {
            debug!(project = ?project.map(ProjectId::index), "project selection changed");
        }
        self.selected_project = project;
    }

    pub fn close_project(&mut self) {
        self.select_project(None);
    }

    pub fn is_modal_open(&self) -> bool {
        self.selected_project.is_some()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_light_with_everything_closed() {
        let state = ViewState::new();
        assert_eq!(state.theme(), Theme::Light);
        assert!(!state.mobile_menu_open);
        assert!(!state.is_modal_open());
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn dark_mode_toggles_back_and_forth() {
        let mut state = ViewState::new();
        assert_eq!(state.toggle_dark_mode(), Theme::Dark);
        assert_eq!(state.toggle_dark_mode(), Theme::Light);
    }

    #[test]
    fn modal_follows_selection() {
        let mut state = ViewState::new();
        state.select_project(Some(ProjectId::new(2)));
        assert!(state.is_modal_open());
        assert_eq!(state.selected_project, Some(ProjectId::new(2)));
        state.close_project();
        assert!(!state.is_modal_open());
    }

    #[test]
    fn menu_flag_reports_changes_only() {
        let mut state = ViewState::new();
        assert!(!state.set_mobile_menu_open(false));
        assert!(state.set_mobile_menu_open(true));
        assert!(!state.set_mobile_menu_open(true));
    }
}
