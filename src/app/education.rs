use leptos::prelude::*;

use crate::content::EducationCopy;

use super::light_flow::LightFlowCard;

#[component]
pub fn EducationSection(education: EducationCopy) -> impl IntoView {
    let EducationCopy {
        background,
        title,
        items,
    } = education;

    view! {
        <section class="py-20 bg-background">
            <div class="mx-auto w-full max-w-7xl px-6 lg:px-10">
                <div class="mb-10">
                    <p class="text-sm font-semibold text-accent uppercase tracking-wider mb-2">
                        {background}
                    </p>
                    <h2 class="text-3xl sm:text-4xl font-bold text-foreground mb-3 text-balance">
                        {title}
                    </h2>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-5">
                    {items
                        .into_iter()
                        .map(|edu| {
                            view! {
                                <LightFlowCard class="rounded-xl" inner_class="p-6">
                                    <div class="flex items-start gap-4">
                                        <div class="w-10 h-10 rounded-xl bg-accent/10 flex items-center justify-center flex-shrink-0 mt-0.5">
                                            "🎓"
                                        </div>
                                        <div>
                                            <h3 class="font-bold text-foreground text-base mb-1">
                                                {edu.degree}
                                            </h3>
                                            <p class="text-[15px] text-muted-foreground">{edu.university}</p>
                                            <p class="text-sm text-muted-foreground font-mono mt-1">
                                                {edu.period}
                                            </p>
                                        </div>
                                    </div>
                                </LightFlowCard>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
