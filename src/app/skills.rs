use leptos::prelude::*;

use crate::content::SkillsCopy;

use super::light_flow::LightFlowCard;

static SKILL_ICONS: [&str; 3] = ["🧠", "</>", "☁"];

#[component]
pub fn SkillsSection(skills: SkillsCopy) -> impl IntoView {
    let SkillsCopy {
        expertise,
        title,
        intro,
        certifications_title,
        groups,
        certifications,
    } = skills;

    let groups = groups
        .into_iter()
        .enumerate()
        .map(|(i, group)| {
            let icon = SKILL_ICONS.get(i).copied().unwrap_or(SKILL_ICONS[0]);
            view! {
                <LightFlowCard class="p-0 rounded-xl h-full flex flex-col" inner_class="p-6 flex-1 min-h-0 flex flex-col">
                    <div class="flex items-center gap-3 mb-5">
                        <div class="w-10 h-10 rounded-lg bg-accent/10 flex items-center justify-center flex-shrink-0 text-accent text-sm font-mono">
                            {icon}
                        </div>
                        <h3 class="font-semibold text-foreground text-base">{group.title}</h3>
                    </div>
                    <ul class="flex flex-wrap gap-2">
                        {group
                            .skills
                            .into_iter()
                            .map(|skill| {
                                view! {
                                    <li>
                                        <span class="inline-block px-2.5 py-1 text-xs font-medium text-muted-foreground bg-muted/60 border border-border rounded-md">
                                            {skill}
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </LightFlowCard>
            }
        })
        .collect_view();

    let certifications = certifications
        .into_iter()
        .map(|cert| {
            view! {
                <div class="p-4 rounded-lg border border-border bg-muted/30">
                    <p class="text-[15px] font-semibold text-foreground mb-0.5">{cert.name}</p>
                    <p class="text-sm text-muted-foreground">{cert.issuer}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="skills" class="py-20 bg-surface">
            <div class="mx-auto w-full max-w-7xl px-6 lg:px-10">
                <div class="mb-10">
                    <p class="text-sm font-semibold text-accent uppercase tracking-wider mb-2">
                        {expertise}
                    </p>
                    <h2 class="text-3xl sm:text-4xl font-bold text-foreground mb-3 text-balance">
                        {title}
                    </h2>
                    <p class="text-base text-muted-foreground max-w-2xl text-pretty">{intro}</p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6 mb-8">{groups}</div>

                <LightFlowCard class="rounded-xl" inner_class="p-6">
                    <div class="flex items-center gap-3 mb-5">
                        <div class="w-10 h-10 rounded-lg bg-accent/10 flex items-center justify-center flex-shrink-0">
                            "🏅"
                        </div>
                        <h3 class="font-semibold text-foreground text-base">{certifications_title}</h3>
                    </div>
                    <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">{certifications}</div>
                </LightFlowCard>
            </div>
        </section>
    }
}
