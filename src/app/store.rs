use leptos::prelude::*;

use crate::{
    appearance::{Appearance, Palette},
    state::{UiAction, UiState, View},
};

/// Appearance and view cells shared with every component through context.
///
/// The two cells are separate signals so that toggling the theme only
/// re-runs styling closures and switching views only re-runs the view
/// selection.
#[derive(Debug, Clone, Copy)]
pub struct UiStore {
    appearance: RwSignal<Appearance>,
    view: RwSignal<View>,
}

impl UiStore {
    pub fn new(initial: UiState) -> Self {
        Self {
            appearance: RwSignal::new(initial.appearance),
            view: RwSignal::new(initial.view),
        }
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance.get()
    }

    pub fn is_dark(&self) -> bool {
        self.appearance().is_dark()
    }

    pub fn palette(&self) -> &'static Palette {
        self.appearance().palette()
    }

    pub fn view(&self) -> View {
        self.view.get()
    }

    pub fn snapshot_untracked(&self) -> UiState {
        UiState::new(self.appearance.get_untracked(), self.view.get_untracked())
    }

    pub fn set_is_dark(&self, is_dark: bool) {
        let current = self.snapshot_untracked();
        self.write(
            current,
            UiState {
                appearance: Appearance::from_is_dark(is_dark),
                ..current
            },
        );
    }

    pub fn dispatch(&self, action: UiAction) {
        let current = self.snapshot_untracked();
        let next = current.apply(action);
        log::debug!("{action:?}: {current:?} -> {next:?}");
        self.write(current, next);
    }

    // only touch cells whose value changed so unrelated subscribers stay quiet
    fn write(&self, current: UiState, next: UiState) {
        if next.appearance != current.appearance {
            self.appearance.set(next.appearance);
        }
        if next.view != current.view {
            self.view.set(next.view);
        }
    }
}

pub fn provide_ui_store(initial: UiState) -> UiStore {
    let store = UiStore::new(initial);
    provide_context(store);
    store
}

pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}
