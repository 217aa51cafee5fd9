use leptos::prelude::*;

use crate::content::ExperienceCopy;

#[component]
pub fn ExperienceSection(experience: ExperienceCopy) -> impl IntoView {
    let ExperienceCopy {
        eyebrow,
        title,
        intro,
        items,
    } = experience;

    view! {
        <section id="experience" class="py-20 bg-background">
            <div class="mx-auto w-full max-w-7xl px-6 lg:px-10">
                <div class="mb-10">
                    <p class="text-sm font-semibold text-accent uppercase tracking-wider mb-2">
                        {eyebrow}
                    </p>
                    <h2 class="text-3xl sm:text-4xl font-bold text-foreground mb-3 text-balance">
                        {title}
                    </h2>
                    <p class="text-base text-muted-foreground max-w-2xl text-pretty">{intro}</p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-5">
                    {items
                        .into_iter()
                        .map(|exp| {
                            view! {
                                <div class="p-6 border border-border rounded-xl hover:border-accent/40 transition-colors bg-card">
                                    <div class="flex flex-col sm:flex-row sm:items-start sm:justify-between gap-1 mb-1">
                                        <h3 class="text-lg font-bold text-foreground">{exp.role}</h3>
                                        <span class="text-sm text-muted-foreground font-mono whitespace-nowrap">
                                            {exp.period}
                                        </span>
                                    </div>
                                    <p class="text-accent font-medium text-[15px] mb-3">
                                        {exp.company}
                                        <span class="text-muted-foreground font-normal text-sm ml-2">
                                            {exp.location}
                                        </span>
                                    </p>
                                    <ul class="space-y-1.5">
                                        {exp
                                            .highlights
                                            .into_iter()
                                            .map(|highlight| {
                                                view! {
                                                    <li class="text-[15px] text-muted-foreground leading-relaxed flex">
                                                        <span class="text-accent mr-2.5 flex-shrink-0 mt-0.5">
                                                            "-"
                                                        </span>
                                                        <span>{highlight}</span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
