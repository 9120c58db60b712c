use leptos::{either::Either, prelude::*};

use super::{
    cards::{
        CertificationCard, EducationList, EmptyNote, ExperienceList, ProjectCard, Section,
        HEADING, NO_CERTIFICATIONS,
    },
    store::use_ui_store,
};
use crate::{
    content::{ContactIcon, Portfolio},
    state::UiAction,
};

#[component]
pub fn HomePage(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <div class="grid gap-8 md:grid-cols-3">
            <div class="md:col-span-2 grid gap-8 auto-rows-max">
                <ProfileHeader portfolio />
                <About portfolio />
                <TechStack portfolio />
                <Section title="Recent Projects" view_all=UiAction::ViewAllProjects>
                    <div class="space-y-4">
                        {portfolio
                            .recent_projects()
                            .iter()
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view()}
                    </div>
                </Section>
                <Section title="Recent Certifications" view_all=UiAction::ViewAllCertifications>
                    <div class="space-y-4">
                        {portfolio
                            .certifications
                            .is_empty()
                            .then(|| view! { <EmptyNote text=NO_CERTIFICATIONS /> })}
                        {portfolio
                            .recent_certifications()
                            .iter()
                            .map(|certification| view! { <CertificationCard certification /> })
                            .collect_view()}
                    </div>
                </Section>
            </div>
            <div class="grid gap-8 auto-rows-max">
                <Connect portfolio />
                <Section title="Experience">
                    <ExperienceList entries=portfolio.experience.as_slice() />
                </Section>
                <Section title="Education">
                    <EducationList entries=portfolio.education.as_slice() />
                </Section>
            </div>
        </div>
    }
}

#[component]
fn ProfileHeader(portfolio: &'static Portfolio) -> impl IntoView {
    let store = use_ui_store();
    let profile = &portfolio.profile;
    view! {
        <div class=move || {
            format!(
                "flex flex-col sm:flex-row items-center sm:items-start gap-8 backdrop-blur-sm p-8 rounded-xl border transition-all duration-300 hover:shadow-xl {}",
                store.palette().panel,
            )
        }>
            <img
                src=move || profile.image_for(store.appearance()).to_string()
                alt="Profile"
                class=move || {
                    format!("w-32 h-32 rounded-2xl object-cover ring-4 {}", store.palette().ring)
                }
            />
            <div class="flex-1 text-center sm:text-left">
                <h1 class="text-4xl md:text-5xl font-bold bg-gradient-to-r from-blue-500 to-cyan-500 bg-clip-text text-transparent mb-2">
                    {profile.name.as_str()}
                </h1>
                <p class=move || format!("text-lg mb-4 {}", store.palette().muted)>
                    {profile.headline.as_str()}
                </p>
                {profile
                    .phone
                    .as_deref()
                    .map(|phone| {
                        view! {
                            <a
                                href=format!("tel:{}", phone.replace(' ', ""))
                                class=move || {
                                    format!(
                                        "inline-block px-4 py-2 rounded-full font-medium transition-all duration-300 {}",
                                        store.palette().button,
                                    )
                                }
                            >
                                "📞 "
                                {phone}
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}

#[component]
fn About(portfolio: &'static Portfolio) -> impl IntoView {
    let store = use_ui_store();
    view! {
        <Section title="About Me">
            <div class=move || format!("space-y-4 leading-relaxed text-lg {}", store.palette().body)>
                {portfolio
                    .profile
                    .about
                    .iter()
                    .map(|paragraph| view! { <p>{paragraph.as_str()}</p> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn TechStack(portfolio: &'static Portfolio) -> impl IntoView {
    let store = use_ui_store();
    view! {
        <Section title="Tech Stack">
            <div class="grid md:grid-cols-3 gap-6">
                {portfolio
                    .stack
                    .iter()
                    .map(|category| {
                        view! {
                            <div class=move || {
                                format!(
                                    "p-4 rounded-lg transition-all duration-300 hover:scale-105 {}",
                                    store.palette().tile,
                                )
                            }>
                                <h3 class="font-bold text-blue-500 mb-2 text-lg">
                                    {category.title.as_str()}
                                </h3>
                                <p class=move || store.palette().body>{category.items_text()}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn Connect(portfolio: &'static Portfolio) -> impl IntoView {
    let store = use_ui_store();
    view! {
        <section class=move || {
            format!(
                "rounded-xl border p-8 backdrop-blur-sm shadow-lg hover:shadow-xl transition-all duration-300 {}",
                store.palette().contact_card,
            )
        }>
            <h2 class=format!("{HEADING} mb-6")>"Let's Connect"</h2>
            <div class="flex flex-col gap-3">
                {portfolio
                    .contacts
                    .iter()
                    .map(|contact| {
                        view! {
                            <a
                                href=contact.url.as_str()
                                target=contact.target()
                                rel=contact.rel()
                                class=move || {
                                    format!(
                                        "flex items-center justify-center w-full px-4 py-2 rounded-full border font-medium transition-all duration-300 hover:translate-x-1 {}",
                                        store.palette().contact_button,
                                    )
                                }
                            >
                                {match contact.kind.icon() {
                                    ContactIcon::Devicon(class) => {
                                        Either::Left(view! { <i class=format!("{class} mr-2") /> })
                                    }
                                    ContactIcon::Glyph(glyph) => {
                                        Either::Right(view! { <span class="mr-2">{glyph}</span> })
                                    }
                                }}
                                {contact.kind.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
