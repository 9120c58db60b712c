use leptos::{either::Either, prelude::*};

use super::store::{use_ui_store, UiStore};
use crate::{
    content::{Certification, EducationEntry, ExperienceEntry, Project},
    state::UiAction,
};

pub const NO_CERTIFICATIONS: &str = "No certifications yet.";

pub const HEADING: &str =
    "text-2xl font-bold bg-gradient-to-r from-blue-500 to-cyan-500 bg-clip-text text-transparent";

#[component]
pub fn Section(
    title: &'static str,
    #[prop(optional)] view_all: Option<UiAction>,
    children: Children,
) -> impl IntoView {
    let store = use_ui_store();
    view! {
        <section class=move || {
            format!(
                "rounded-xl border p-8 backdrop-blur-sm shadow-lg hover:shadow-xl transition-all duration-300 {}",
                store.palette().card,
            )
        }>
            <div class="flex justify-between items-center mb-6">
                <h2 class=HEADING>{title}</h2>
                {view_all
                    .map(|action| {
                        view! {
                            <button
                                type="button"
                                class=move || format!("text-sm font-medium {}", store.palette().link)
                                aria-label=format!("View all {}", title.to_lowercase())
                                on:click=move |_| store.dispatch(action)
                            >
                                "View All →"
                            </button>
                        }
                    })}
            </div>
            {children()}
        </section>
    }
}

#[component]
pub fn EmptyNote(text: &'static str) -> impl IntoView {
    let store = use_ui_store();
    view! { <p class=move || store.palette().muted>{text}</p> }
}

/// Name as a link when a url is present, plain text otherwise.
#[component]
fn ItemTitle(name: &'static str, url: Option<&'static str>) -> impl IntoView {
    let store = use_ui_store();
    view! {
        <h3 class="font-bold text-lg mb-1">
            {match url {
                Some(url) => {
                    Either::Left(
                        view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class=move || store.palette().link
                            >
                                {name}
                            </a>
                        },
                    )
                }
                None => Either::Right(name),
            }}
        </h3>
    }
}

#[component]
fn ExternalIcon(url: Option<&'static str>) -> impl IntoView {
    let store = use_ui_store();
    let icon = move || {
        view! {
            <span class=move || format!("text-xl leading-none {}", store.palette().icon)>"↗"</span>
        }
    };
    match url {
        Some(url) => {
            Either::Left(
                view! {
                    <a href=url target="_blank" rel="noopener noreferrer" class="ml-3">
                        {icon()}
                    </a>
                },
            )
        }
        None => Either::Right(icon()),
    }
}

fn item_class(store: UiStore) -> String {
    format!(
        "p-4 rounded-lg border transition-all duration-300 hover:translate-x-2 {}",
        store.palette().item,
    )
}

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let store = use_ui_store();
    let url = project.url.as_deref();
    view! {
        <div class=move || item_class(store)>
            <div class="flex justify-between items-start">
                <div>
                    <ItemTitle name=project.name.as_str() url />
                    <p class=move || store.palette().muted>{project.description.as_str()}</p>
                </div>
                <ExternalIcon url />
            </div>
        </div>
    }
}

#[component]
pub fn CertificationCard(certification: &'static Certification) -> impl IntoView {
    let store = use_ui_store();
    let url = certification.url.as_deref();
    view! {
        <div class=move || item_class(store)>
            <div class="flex justify-between items-start">
                <div>
                    <ItemTitle name=certification.name.as_str() url />
                    <p class=move || store.palette().muted>
                        {certification.issuer.as_str()}
                        " · "
                        {certification.date.as_str()}
                    </p>
                </div>
                <ExternalIcon url />
            </div>
        </div>
    }
}

#[component]
pub fn ExperienceList(entries: &'static [ExperienceEntry]) -> impl IntoView {
    let store = use_ui_store();
    view! {
        <ul class="space-y-4">
            {entries
                .iter()
                .map(|entry| {
                    view! {
                        <li class=move || {
                            format!(
                                "flex items-center gap-4 p-3 rounded-xl transition-all duration-300 group {}",
                                store.palette().row,
                            )
                        }>
                            <div class=move || {
                                format!(
                                    "w-5 h-5 rounded flex-shrink-0 transition-all duration-300 {}",
                                    store.palette().marker,
                                )
                            } />
                            <div class="flex-1">
                                <p class="font-bold text-lg">{entry.role.as_str()}</p>
                                <p class=move || format!("text-sm {}", store.palette().muted)>
                                    {entry.organization.as_str()}
                                </p>
                            </div>
                            <p class=move || {
                                format!("text-sm font-medium flex-shrink-0 {}", store.palette().muted)
                            }>{entry.year.as_str()}</p>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn EducationList(entries: &'static [EducationEntry]) -> impl IntoView {
    let store = use_ui_store();
    view! {
        <ul class="space-y-4">
            {entries
                .iter()
                .map(|entry| {
                    view! {
                        <li class=move || {
                            format!(
                                "flex items-center p-3 rounded-xl transition-all duration-300 group {}",
                                store.palette().row,
                            )
                        }>
                            <div class="flex-1">
                                <p class="font-bold text-lg">{entry.degree.as_str()}</p>
                                <p class=move || format!("text-sm {}", store.palette().muted)>
                                    {entry.school.as_str()}
                                </p>
                                {entry
                                    .honors
                                    .as_deref()
                                    .map(|honors| {
                                        view! {
                                            <p class=move || {
                                                format!("text-sm {}", store.palette().muted)
                                            }>{honors}</p>
                                        }
                                    })}
                            </div>
                            <p class=move || {
                                format!("text-sm font-medium flex-shrink-0 {}", store.palette().muted)
                            }>{entry.year.as_str()}</p>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
