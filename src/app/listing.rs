use leptos::prelude::*;

use super::{
    cards::{CertificationCard, EmptyNote, ProjectCard, HEADING, NO_CERTIFICATIONS},
    store::use_ui_store,
};
use crate::{content::Portfolio, state::UiAction};

#[component]
fn ListingPage(title: &'static str, back: UiAction, children: Children) -> impl IntoView {
    let store = use_ui_store();
    view! {
        <section class=move || {
            format!(
                "rounded-xl border p-8 backdrop-blur-sm shadow-lg transition-all duration-300 {}",
                store.palette().card,
            )
        }>
            <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4 mb-8">
                <h1 class=format!("{HEADING} md:text-4xl")>{title}</h1>
                <button
                    type="button"
                    class=move || {
                        format!(
                            "px-4 py-2 rounded-full font-medium transition-all duration-300 {}",
                            store.palette().button,
                        )
                    }
                    on:click=move |_| store.dispatch(back)
                >
                    "← Back to Home"
                </button>
            </div>
            <div class="grid gap-4 md:grid-cols-2">{children()}</div>
        </section>
    }
}

#[component]
pub fn AllProjects(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <ListingPage title="All Projects" back=UiAction::BackFromProjects>
            {portfolio
                .projects
                .iter()
                .map(|project| view! { <ProjectCard project /> })
                .collect_view()}
        </ListingPage>
    }
}

#[component]
pub fn AllCertifications(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <ListingPage title="All Certifications" back=UiAction::BackFromCertifications>
            {portfolio
                .certifications
                .is_empty()
                .then(|| view! { <EmptyNote text=NO_CERTIFICATIONS /> })}
            {portfolio
                .certifications
                .iter()
                .map(|certification| view! { <CertificationCard certification /> })
                .collect_view()}
        </ListingPage>
    }
}
