mod cards;
mod homepage;
mod listing;
mod store;
mod theme_toggle;

pub use store::{provide_ui_store, use_ui_store, UiStore};

use chrono::DateTime;
use homepage::HomePage;
use leptos::{
    either::{Either, EitherOf3},
    prelude::*,
};
use leptos_meta::*;
use leptos_router::{components::*, path};
use listing::{AllCertifications, AllProjects};
use theme_toggle::ThemeToggle;

use crate::{
    content::{ContentError, Portfolio},
    state::{UiState, View},
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let store = provide_ui_store(UiState::default());
    let site_name = Portfolio::embedded()
        .map(|p| p.profile.name.as_str())
        .unwrap_or("Portfolio");

    view! {
        <Title formatter=move |title| format!("{site_name} - {title}") />
        <Meta name="color-scheme" content=move || store.appearance().as_str() />

        <Router>
            <div
                data-theme=move || store.appearance().as_str()
                class=move || {
                    format!(
                        "min-h-screen flex flex-col transition-colors duration-300 {}",
                        store.palette().page,
                    )
                }
            >
                <ThemeToggle />
                <main class="flex-grow w-full max-w-7xl mx-auto px-6 md:px-12 py-12">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=PortfolioPage />
                    </Routes>
                </main>
                <Footer site_name />
            </div>
        </Router>
    }
}

/// Picks the body for the current view. The view is a single enum, so
/// exactly one body is ever rendered.
#[component]
fn PortfolioPage() -> impl IntoView {
    match Portfolio::embedded() {
        Ok(portfolio) => Either::Left(view! { <ViewSelector portfolio /> }),
        Err(err) => {
            log::error!("portfolio content failed to load: {err}");
            Either::Right(view! { <ContentErrorPanel err /> })
        }
    }
}

#[component]
fn ViewSelector(portfolio: &'static Portfolio) -> impl IntoView {
    let store = use_ui_store();
    view! {
        <Title text=move || store.view().title() />
        {move || match store.view() {
            View::AllProjects => EitherOf3::A(view! { <AllProjects portfolio /> }),
            View::AllCertifications => EitherOf3::B(view! { <AllCertifications portfolio /> }),
            View::Home => EitherOf3::C(view! { <HomePage portfolio /> }),
        }}
    }
}

#[component]
fn ContentErrorPanel(err: ContentError) -> impl IntoView {
    view! {
        <Title text="Unavailable" />
        <div class="max-w-2xl mx-auto p-6 rounded-md border border-red-500/40 bg-red-500/10">
            <h1 class="font-bold text-2xl mb-4">"This page couldn't be rendered"</h1>
            <pre class="whitespace-pre-wrap text-sm">{err.to_string()}</pre>
        </div>
    }
}

#[component]
fn Footer(site_name: &'static str) -> impl IntoView {
    let store = use_ui_store();
    let built = DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.format("%b %e, %Y").to_string());
    view! {
        <footer class=move || format!("py-6 text-center text-sm {}", store.palette().muted)>
            {site_name}
            {built.map(|date| format!(" · Built {date}"))}
        </footer>
    }
}
