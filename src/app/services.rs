use leptos::prelude::*;

use crate::content::ServicesCopy;
use crate::gallery::category_href;

use super::light_flow::LightFlowCard;

static SERVICE_ICONS: [&str; 6] = ["🚀", "💳", "🧠", "🔀", "📱", "🖥"];

#[component]
pub fn ServicesSection(services: ServicesCopy) -> impl IntoView {
    let ServicesCopy {
        what_i_do,
        title,
        intro,
        view_projects,
        items,
    } = services;

    view! {
        <section id="services" class="py-20 bg-background">
            <div class="mx-auto w-full max-w-7xl px-6 lg:px-10">
                <div class="mb-10">
                    <p class="text-sm font-semibold text-accent uppercase tracking-wider mb-2">
                        {what_i_do}
                    </p>
                    <h2 class="text-3xl sm:text-4xl font-bold text-foreground mb-3 text-balance">
                        {title}
                    </h2>
                    <p class="text-base text-muted-foreground max-w-2xl text-pretty">{intro}</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-5">
                    {items
                        .into_iter()
                        .enumerate()
                        .map(|(i, service)| {
                            let icon = SERVICE_ICONS.get(i).copied().unwrap_or(SERVICE_ICONS[0]);
                            let href = category_href(&service.project_anchor);
                            let view_projects = view_projects.clone();
                            view! {
                                <LightFlowCard
                                    class="group rounded-xl flex flex-col"
                                    inner_class="p-6 flex flex-col flex-1"
                                >
                                    <div class="flex items-start gap-4 mb-4">
                                        <div class="w-11 h-11 rounded-xl bg-accent/10 flex items-center justify-center flex-shrink-0 text-xl">
                                            {icon}
                                        </div>
                                        <div>
                                            <h3 class="text-lg font-bold text-foreground leading-snug">
                                                {service.title}
                                            </h3>
                                            <p class="text-sm text-accent font-medium mt-0.5">
                                                {service.subtitle}
                                            </p>
                                        </div>
                                    </div>
                                    <p class="text-[15px] text-muted-foreground leading-relaxed mb-4 flex-1">
                                        {service.description}
                                    </p>
                                    <div class="flex flex-wrap gap-1.5 mb-4">
                                        {service
                                            .skills
                                            .into_iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="px-2.5 py-1 text-xs bg-[var(--skill-bg)] text-[var(--skill-text)] border border-[var(--skill-border)] rounded-md font-mono leading-none">
                                                        {skill}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <a
                                        href=href
                                        class="inline-flex items-center text-xs font-semibold text-foreground hover:text-accent transition-colors mt-auto"
                                    >
                                        {view_projects}
                                        " →"
                                    </a>
                                </LightFlowCard>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
