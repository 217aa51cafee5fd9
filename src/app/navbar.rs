use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::{Link, Locale, NavCopy};

use super::theme::ThemeToggle;

static RESUME_HREF: &str = "/resume.pdf";
static RESUME_FILENAME: &str = "Satoshi_Naru_Resume.pdf";

#[component]
fn LocaleSwitcher(current: Locale, label: String) -> impl IntoView {
    view! {
        <div class="flex items-center gap-1 text-xs font-semibold" role="group" aria-label=label>
            {Locale::ALL
                .into_iter()
                .map(|locale| {
                    let is_current = locale == current;
                    view! {
                        <A
                            href=locale.home_path()
                            attr:hreflang=locale.code()
                            attr:title=locale.native_name()
                            attr:aria-current=is_current.then_some("page")
                            attr:class=if is_current {
                                "px-2 py-1 rounded-md bg-accent/10 text-accent"
                            } else {
                                "px-2 py-1 rounded-md text-muted-foreground hover:text-foreground"
                            }
                        >
                            {locale.code().to_uppercase()}
                        </A>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn nav_links(links: &[Link], class: &'static str, on_click: impl Fn() + Clone + Send + 'static) -> impl IntoView {
    links
        .iter()
        .map(|link| {
            let on_click = on_click.clone();
            view! {
                <a href=link.href.clone() class=class on:click=move |_| on_click()>
                    {link.label.clone()}
                </a>
            }
        })
        .collect_view()
}

#[component]
pub fn Navbar(nav: NavCopy, locale: Locale) -> impl IntoView {
    let (mobile_open, set_mobile_open) = signal(false);
    let NavCopy {
        brand,
        links,
        resume,
        download_resume,
        open_menu,
        close_menu,
        toggle_theme,
        language,
    } = nav;

    let desktop_links = nav_links(
        &links,
        "text-sm text-muted-foreground hover:text-accent transition-colors",
        || {},
    );
    let mobile_links = StoredValue::new(links);
    let mobile_toggle_label = toggle_theme.clone();

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-[var(--nav)] backdrop-blur-sm border-b border-[var(--nav-border)]">
            <div class="mx-auto w-full max-w-7xl px-6 lg:px-10">
                <div class="flex items-center justify-between h-16">
                    <a href="#" class="text-foreground font-bold text-xl tracking-tight">
                        {brand}
                        <span class="text-accent">"."</span>
                    </a>

                    <div class="hidden md:flex items-center gap-8">
                        {desktop_links}
                        <LocaleSwitcher current=locale label=language.clone() />
                        <ThemeToggle label=toggle_theme />
                        <a
                            href=RESUME_HREF
                            download=RESUME_FILENAME
                            class="inline-flex items-center px-4 py-2 rounded-md bg-accent hover:bg-accent-hover text-accent-foreground font-semibold text-sm"
                        >
                            "⤓ "
                            {resume}
                        </a>
                    </div>

                    <div class="flex items-center gap-2 md:hidden">
                        <ThemeToggle label=mobile_toggle_label />
                        <button
                            type="button"
                            class="text-muted-foreground hover:text-foreground p-1.5"
                            aria-label=move || {
                                if mobile_open.get() { close_menu.clone() } else { open_menu.clone() }
                            }
                            on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                        >
                            {move || if mobile_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            {move || {
                mobile_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="md:hidden bg-card border-t border-border">
                                <div class="px-6 py-4 flex flex-col gap-3">
                                    {mobile_links
                                        .with_value(|links| {
                                            nav_links(
                                                links,
                                                "text-muted-foreground hover:text-accent transition-colors py-1.5 text-sm",
                                                move || set_mobile_open.set(false),
                                            )
                                        })}
                                    <LocaleSwitcher current=locale label=language.clone() />
                                    <a
                                        href=RESUME_HREF
                                        download=RESUME_FILENAME
                                        class="inline-flex items-center justify-center w-full mt-2 px-4 py-2 rounded-md bg-accent hover:bg-accent-hover text-accent-foreground font-semibold text-sm"
                                    >
                                        "⤓ "
                                        {download_resume.clone()}
                                    </a>
                                </div>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}
