mod carousel;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod light_flow;
mod navbar;
mod projects;
mod services;
mod skills;
mod theme;

use std::sync::Arc;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{site_content, Locale, SiteContent};

use contact::ContactSection;
use education::EducationSection;
use experience::ExperienceSection;
use footer::Footer;
use hero::HeroSection;
use navbar::Navbar;
use projects::ProjectsSection;
use services::ServicesSection;
use skills::SkillsSection;
use theme::Theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(RwSignal::new(Theme::default()));

    // Locales are static segments so other single-segment paths reach the file handler
    view! {
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=|| view! { <Page locale=Locale::En /> } />
                <Route path=path!("/ja") view=|| view! { <Page locale=Locale::Ja /> } />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }
    "Page not found."
}

/// Loads the content for `locale` and renders every section of the page.
#[component]
fn Page(locale: Locale) -> impl IntoView {
    match site_content(locale) {
        Ok(content) => Either::Left(view! { <Sections content /> }),
        Err(e) => {
            log::error!("couldn't load site content: {e}");
            Either::Right(
                view! {
                    <Title text="Error" />
                    <main class="min-h-screen flex items-center justify-center p-8">
                        <pre class="whitespace-pre-wrap text-red-500">{e.to_string()}</pre>
                    </main>
                },
            )
        }
    }
}

#[component]
fn Sections(content: Arc<SiteContent>) -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let lang = content.locale.code();

    view! {
        <Html {..} lang=lang class=move || theme.get().class() />
        <Title text=content.meta.title.clone() />
        <Meta name="description" content=content.meta.description.clone() />
        <main class="min-h-screen">
            <Navbar nav=content.nav.clone() locale=content.locale />
            <HeroSection hero=content.hero.clone() />
            <ServicesSection services=content.services.clone() />
            <ProjectsSection copy=content.projects.clone() categories=content.categories.clone() />
            <ExperienceSection experience=content.experience.clone() />
            <SkillsSection skills=content.skills.clone() />
            <EducationSection education=content.education.clone() />
            <ContactSection contact=content.contact.clone() />
            <Footer footer=content.footer.clone() />
        </main>
    }
}
