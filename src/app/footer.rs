use leptos::prelude::*;

use crate::content::FooterCopy;

static BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer(footer: FooterCopy) -> impl IntoView {
    let FooterCopy {
        owner,
        rights,
        links,
    } = footer;

    view! {
        <footer class="py-8 bg-background border-t border-border">
            <div class="mx-auto w-full max-w-7xl px-6 lg:px-10">
                <div class="flex flex-col sm:flex-row justify-between items-center gap-4">
                    <p class="text-muted-foreground text-sm">
                        {format!("© {BUILD_YEAR} {owner}. {rights}")}
                    </p>
                    <div class="flex gap-6">
                        {links
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target=link.external.then_some("_blank")
                                        rel=link.external.then_some("noopener noreferrer")
                                        class="text-muted-foreground hover:text-accent transition-colors text-sm"
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
