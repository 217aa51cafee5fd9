use leptos::prelude::*;

use crate::content::HeroCopy;

#[component]
pub fn HeroSection(hero: HeroCopy) -> impl IntoView {
    let HeroCopy {
        available,
        title_lead,
        title_accent,
        title_tail,
        summary,
        location,
        photo_alt,
        view_services,
        download_resume,
        stats,
    } = hero;

    view! {
        <section class="relative flex items-center bg-surface pt-14">
            <div class="mx-auto w-full max-w-7xl px-6 lg:px-10 py-16 lg:py-24">
                <div class="flex flex-col lg:flex-row lg:items-start gap-10 lg:gap-16">
                    <div class="flex-shrink-0 flex flex-col items-center gap-5">
                        <div class="w-56 h-56 lg:w-72 lg:h-72 rounded-2xl border-2 border-border overflow-hidden">
                            <img
                                src="/professional-ai-engineer-headshot.jpg"
                                alt=photo_alt
                                class="w-full h-full object-cover"
                            />
                        </div>
                        <div class="flex flex-col gap-2.5 w-full">
                            <a
                                href="#services"
                                class="inline-flex items-center justify-center rounded-md bg-accent hover:bg-accent-hover text-accent-foreground font-semibold text-base px-6 py-2.5 w-full"
                            >
                                {view_services}
                                " →"
                            </a>
                            <a
                                href="/resume.pdf"
                                download="Satoshi_Naru_Resume.pdf"
                                class="inline-flex items-center justify-center rounded-md border border-border text-muted-foreground hover:border-accent hover:text-accent text-base px-6 py-2.5 w-full"
                            >
                                "⤓ "
                                {download_resume}
                            </a>
                        </div>
                    </div>

                    <div class="flex-1">
                        <div class="inline-flex items-center gap-2 px-3 py-1.5 bg-accent/10 border border-accent/20 rounded-full mb-5">
                            <div class="w-2 h-2 bg-accent rounded-full"></div>
                            <span class="text-accent text-sm font-medium">{available}</span>
                        </div>
                        <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold text-foreground mb-5 leading-[1.1] text-balance">
                            {title_lead}
                            <br />
                            <span class="text-accent">{title_accent}</span>
                            <br />
                            {title_tail}
                        </h1>
                        <p class="text-lg text-muted-foreground mb-4 leading-relaxed max-w-2xl text-pretty">
                            {summary}
                        </p>
                        <div class="flex items-center gap-2 text-muted-foreground text-sm">
                            <span aria-hidden="true">"📍"</span>
                            <span>{location}</span>
                        </div>
                    </div>
                </div>

                <div class="grid grid-cols-2 sm:grid-cols-4 gap-8 mt-14 pt-10 border-t border-border">
                    {stats
                        .into_iter()
                        .map(|stat| {
                            view! {
                                <div>
                                    <p class="text-3xl font-bold text-foreground">{stat.value}</p>
                                    <p class="text-sm text-muted-foreground mt-1">{stat.label}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
