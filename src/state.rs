use serde::{Deserialize, Serialize};

use crate::appearance::Appearance;

/// The page mode currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum View {
    #[default]
    Home,
    AllProjects,
    AllCertifications,
}

impl View {
    /// Resolves a pair of "show all" flags the way the page always has:
    /// the projects flag wins whenever it is set. The renderer matches on
    /// `View` directly; this and the `show_all_*` projections are the
    /// boolean view of the same state for callers that hold flags.
    pub fn from_flags(show_all_projects: bool, show_all_certifications: bool) -> Self {
        if show_all_projects {
            Self::AllProjects
        } else if show_all_certifications {
            Self::AllCertifications
        } else {
            Self::Home
        }
    }

    pub fn show_all_projects(self) -> bool {
        self == Self::AllProjects
    }

    pub fn show_all_certifications(self) -> bool {
        self == Self::AllCertifications
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Portfolio",
            Self::AllProjects => "All Projects",
            Self::AllCertifications => "All Certifications",
        }
    }

    /// Next view for `action`; pairs with no transition leave the view as is.
    pub fn apply(self, action: UiAction) -> Self {
        match (self, action) {
            (Self::Home, UiAction::ViewAllProjects) => Self::AllProjects,
            (Self::Home, UiAction::ViewAllCertifications) => Self::AllCertifications,
            (Self::AllProjects, UiAction::BackFromProjects) => Self::Home,
            (Self::AllCertifications, UiAction::BackFromCertifications) => Self::Home,
            (view, _) => view,
        }
    }
}

/// One user affordance on the page. Each click maps to exactly one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiAction {
    ToggleAppearance,
    ViewAllProjects,
    ViewAllCertifications,
    BackFromProjects,
    BackFromCertifications,
}

#[cfg(test)]
impl UiAction {
    pub const ALL: [UiAction; 5] = [
        UiAction::ToggleAppearance,
        UiAction::ViewAllProjects,
        UiAction::ViewAllCertifications,
        UiAction::BackFromProjects,
        UiAction::BackFromCertifications,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiState {
    pub appearance: Appearance,
    pub view: View,
}

impl UiState {
    pub fn new(appearance: Appearance, view: View) -> Self {
        Self { appearance, view }
    }

    pub fn apply(self, action: UiAction) -> Self {
        match action {
            UiAction::ToggleAppearance => Self {
                appearance: self.appearance.toggled(),
                ..self
            },
            _ => Self {
                view: self.view.apply(action),
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = UiState::default();
        assert_eq!(state.appearance, Appearance::Light);
        assert_eq!(state.view, View::Home);
        assert!(!state.view.show_all_projects());
        assert!(!state.view.show_all_certifications());
    }

    #[test]
    fn test_projects_flag_wins() {
        assert_eq!(View::from_flags(true, false), View::AllProjects);
        assert_eq!(View::from_flags(true, true), View::AllProjects);
        assert_eq!(View::from_flags(false, true), View::AllCertifications);
        assert_eq!(View::from_flags(false, false), View::Home);
    }

    #[test]
    fn test_flags_round_trip_through_view() {
        for view in [View::Home, View::AllProjects, View::AllCertifications] {
            let rebuilt = View::from_flags(view.show_all_projects(), view.show_all_certifications());
            assert_eq!(rebuilt, view);
        }
    }

    #[test]
    fn test_projects_round_trip_returns_home() {
        let initial = UiState::default();
        let state = initial
            .apply(UiAction::ViewAllProjects)
            .apply(UiAction::BackFromProjects);
        assert_eq!(state, initial);
    }

    #[test]
    fn test_no_direct_jump_between_lists() {
        let from_projects = UiState::new(Appearance::Light, View::AllProjects);
        for action in UiAction::ALL {
            assert_ne!(from_projects.apply(action).view, View::AllCertifications);
        }
        let from_certs = UiState::new(Appearance::Light, View::AllCertifications);
        for action in UiAction::ALL {
            assert_ne!(from_certs.apply(action).view, View::AllProjects);
        }
    }

    #[test]
    fn test_toggle_leaves_view_alone() {
        let state = UiState::default().apply(UiAction::ToggleAppearance);
        assert_eq!(state, UiState::new(Appearance::Dark, View::Home));

        let listing = UiState::new(Appearance::Dark, View::AllCertifications);
        let toggled = listing.apply(UiAction::ToggleAppearance);
        assert_eq!(toggled.view, View::AllCertifications);
        assert_eq!(toggled.appearance, Appearance::Light);
    }

    #[test]
    fn test_view_actions_leave_appearance_alone() {
        for appearance in [Appearance::Light, Appearance::Dark] {
            for view in [View::Home, View::AllProjects, View::AllCertifications] {
                for action in UiAction::ALL {
                    if action == UiAction::ToggleAppearance {
                        continue;
                    }
                    let next = UiState::new(appearance, view).apply(action);
                    assert_eq!(next.appearance, appearance);
                }
            }
        }
    }

    #[test]
    fn test_certifications_scenario() {
        let state = UiState::default().apply(UiAction::ViewAllCertifications);
        assert!(state.view.show_all_certifications());
        assert!(!state.view.show_all_projects());
        assert_eq!(state.view, View::AllCertifications);

        let state = state.apply(UiAction::BackFromCertifications);
        assert!(!state.view.show_all_certifications());
        assert!(!state.view.show_all_projects());
        assert_eq!(state.view, View::Home);
    }

    #[test]
    fn test_back_from_wrong_list_is_noop() {
        let state = UiState::new(Appearance::Light, View::AllProjects);
        assert_eq!(state.apply(UiAction::BackFromCertifications), state);
        let state = UiState::new(Appearance::Light, View::AllCertifications);
        assert_eq!(state.apply(UiAction::BackFromProjects), state);
        let home = UiState::default();
        assert_eq!(home.apply(UiAction::BackFromProjects), home);
    }

    #[test]
    fn test_toggle_parity_through_actions() {
        let mut state = UiState::default();
        for n in 1..=6 {
            state = state.apply(UiAction::ToggleAppearance);
            assert_eq!(state.appearance.is_dark(), n % 2 == 1);
        }
        assert_eq!(state, UiState::default());
    }
}
