use leptos::prelude::*;

use super::store::use_ui_store;
use crate::state::UiAction;

/// Floating sun/moon button in the top-right corner.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_ui_store();
    view! {
        <button
            type="button"
            class=move || {
                format!(
                    "fixed top-6 right-6 z-50 p-3 rounded-full text-2xl leading-none transition-all duration-300 shadow-lg hover:shadow-xl {}",
                    store.palette().toggle,
                )
            }
            aria-label=move || store.appearance().toggle_label()
            aria-pressed=move || store.is_dark().to_string()
            on:click=move |_| store.dispatch(UiAction::ToggleAppearance)
        >
            {move || store.appearance().toggle_icon()}
        </button>
    }
}
