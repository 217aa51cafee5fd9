use std::sync::Arc;

use leptos::{either::Either, ev, ev::KeyboardEvent, prelude::*};
use leptos_router::hooks::use_location;
use leptos_use::{use_event_listener, use_window};

use crate::content::ProjectsCopy;
use crate::gallery::{
    fragment_for_category, resolve_gallery_images, resolve_preview_image, Category, GalleryState,
    Project,
};

use super::carousel::Carousel;

fn tech_chips(tech: Vec<String>) -> impl IntoView {
    tech.into_iter()
        .map(|t| {
            view! {
                <span class="px-2.5 py-1 text-xs font-medium text-muted-foreground bg-muted/80 border border-border rounded-md">
                    {t}
                </span>
            }
        })
        .collect_view()
}

#[component]
pub fn ProjectsSection(copy: ProjectsCopy, categories: Arc<Vec<Category>>) -> impl IntoView {
    let gallery = RwSignal::new(GalleryState::new(categories.clone(), None));
    let copy = StoredValue::new(copy);

    // Router navigation to an in-page link never fires hashchange, so follow the location
    let hash = use_location().hash;
    Effect::new(move |_| {
        let hash = hash.get();
        gallery.update(|g| {
            g.on_hash_change(&hash);
        });
    });
    let _ = use_event_listener(use_window(), ev::keydown, move |event| {
        if event.key() == "Escape" && gallery.with_untracked(|g| g.is_open()) {
            gallery.update(|g| g.close_project());
        }
    });

    let active_id = Memo::new(move |_| gallery.with(|g| g.active_category_id().to_string()));
    let displayed = Memo::new(move |_| gallery.with(|g| g.displayed_projects().to_vec()));
    let selected = Memo::new(move |_| gallery.with(|g| g.selected_project().cloned()));

    let tabs = categories
        .iter()
        .map(|category| {
            let id = category.id.clone();
            let tab_id = fragment_for_category(&id);
            let is_active = {
                let id = id.clone();
                Memo::new(move |_| active_id.with(|active| *active == id))
            };
            view! {
                <button
                    id=tab_id
                    type="button"
                    role="tab"
                    aria-selected=move || is_active.get().to_string()
                    aria-controls="projects-panel"
                    on:click=move |_| {
                        gallery
                            .update(|g| {
                                g.select_category(&id);
                            });
                    }
                    class=move || {
                        if is_active.get() {
                            "relative px-5 py-3 text-sm border-b-2 transition-colors whitespace-nowrap border-accent text-foreground font-semibold"
                        } else {
                            "relative px-5 py-3 text-sm font-medium border-b-2 transition-colors whitespace-nowrap border-transparent text-muted-foreground hover:text-foreground"
                        }
                    }
                >
                    {category.label.clone()}
                </button>
            }
        })
        .collect_view();

    view! {
        <section id="projects" class="py-20 bg-surface">
            <div class="mx-auto w-full max-w-7xl px-6 lg:px-10">
                <div class="mb-10">
                    <p class="text-sm font-semibold text-accent uppercase tracking-wider mb-2">
                        {copy.with_value(|c| c.eyebrow.clone())}
                    </p>
                    <h2 class="text-3xl sm:text-4xl font-bold text-foreground mb-3 text-balance">
                        {copy.with_value(|c| c.title.clone())}
                    </h2>
                    <p class="text-base text-muted-foreground max-w-2xl text-pretty">
                        {copy.with_value(|c| c.intro.clone())}
                    </p>
                </div>

                <div class="border-b border-border mb-8">
                    <div
                        class="flex flex-wrap gap-0 -mb-px"
                        role="tablist"
                        aria-label=copy.with_value(|c| c.tablist_label.clone())
                    >
                        {tabs}
                    </div>
                </div>

                <div
                    id="projects-panel"
                    role="tabpanel"
                    aria-labelledby=move || fragment_for_category(&active_id.get())
                    class="grid grid-cols-1 md:grid-cols-2 gap-5"
                >
                    {move || {
                        displayed
                            .get()
                            .into_iter()
                            .map(|project| view! { <ProjectCard project gallery copy /> })
                            .collect_view()
                    }}
                </div>

                {move || {
                    selected
                        .get()
                        .map(|project| view! { <ProjectModal project gallery copy /> })
                }}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    project: Project,
    gallery: RwSignal<GalleryState>,
    copy: StoredValue<ProjectsCopy>,
) -> impl IntoView {
    let open = {
        let project = project.clone();
        move || gallery.update(|g| g.open_project(project.clone()))
    };
    let open_on_enter = open.clone();

    let image = match resolve_gallery_images(&project) {
        Some(images) => Either::Left(view! {
            <Carousel
                images=images.to_vec()
                alt=format!("{} {}", project.title, copy.with_value(|c| c.screenshot.clone()))
                previous_label=copy.with_value(|c| c.previous.clone())
                next_label=copy.with_value(|c| c.next.clone())
                img_class="w-full h-full object-cover"
                button_class="size-7 bg-background/80 hover:bg-background"
            />
        }),
        None => Either::Right(view! {
            <img
                src=resolve_preview_image(&project).to_string()
                alt=project.title.clone()
                class="w-full h-full object-cover"
            />
        }),
    };

    let Project {
        title,
        description,
        tech,
        ..
    } = project;

    view! {
        <div
            role="button"
            tabindex="0"
            on:click=move |_| open()
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Enter" {
                    open_on_enter();
                }
            }
            class="border border-border rounded-xl overflow-hidden flex flex-col bg-card hover:border-accent/40 transition-colors cursor-pointer focus:outline-none focus-visible:ring-2 focus-visible:ring-accent/50"
        >
            <div class="h-48 overflow-hidden bg-secondary relative flex-shrink-0">{image}</div>
            <div class="p-5 flex flex-col flex-1 min-w-0">
                <h4 class="text-lg font-bold text-foreground mb-2">{title}</h4>
                <p class="text-[15px] text-muted-foreground leading-relaxed mb-3 line-clamp-3">
                    {description}
                </p>
                <div class="flex flex-wrap gap-2 mt-auto">{tech_chips(tech)}</div>
            </div>
        </div>
    }
}

/// Detail view of the selected project. Closed by the close button, a click on the
/// overlay, or Escape.
#[component]
fn ProjectModal(
    project: Project,
    gallery: RwSignal<GalleryState>,
    copy: StoredValue<ProjectsCopy>,
) -> impl IntoView {
    let close = move || gallery.update(|g| g.close_project());
    let images = resolve_gallery_images(&project).map(<[String]>::to_vec);
    let preview = resolve_preview_image(&project).to_string();
    let Project {
        title,
        description,
        features,
        tech,
        link,
        ..
    } = project;

    let media = match images {
        Some(images) => Either::Left(view! {
            <Carousel
                images
                alt=format!("{title} {}", copy.with_value(|c| c.screenshot.clone()))
                previous_label=copy.with_value(|c| c.previous.clone())
                next_label=copy.with_value(|c| c.next.clone())
                img_class="w-full h-full object-contain bg-secondary"
                button_class="size-8 bg-background/90 hover:bg-background"
            />
        }),
        None => Either::Right(view! {
            <img src=preview alt=title.clone() class="w-full h-full object-contain bg-secondary" />
        }),
    };

    let features = (!features.is_empty()).then(|| {
        view! {
            <div>
                <p class="text-xs font-semibold text-foreground uppercase tracking-wider mb-2">
                    {copy.with_value(|c| c.features_label.clone())}
                </p>
                <ul class="space-y-1.5 text-sm text-muted-foreground">
                    {features
                        .into_iter()
                        .map(|feature| {
                            view! {
                                <li class="flex gap-2">
                                    <span class="text-accent mt-0.5">"•"</span>
                                    <span>{feature}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        }
    });

    let link = link.map(|href| {
        view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class="inline-flex items-center text-sm font-semibold text-accent hover:underline"
            >
                {copy.with_value(|c| c.visit_site.clone())}
                " ↗"
            </a>
        }
    });

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <div class="fixed inset-0 bg-black/80" aria-hidden="true" on:click=move |_| close()></div>
            <div
                role="dialog"
                aria-modal="true"
                aria-labelledby="project-dialog-title"
                class="relative z-50 w-full sm:max-w-4xl max-h-[90vh] overflow-y-auto p-6 sm:p-8 bg-background border border-border rounded-xl shadow-lg"
            >
                <button
                    type="button"
                    aria-label=copy.with_value(|c| c.close.clone())
                    class="absolute right-4 top-4 text-muted-foreground hover:text-foreground"
                    on:click=move |_| close()
                >
                    "✕"
                </button>
                <h3 id="project-dialog-title" class="text-xl sm:text-2xl font-semibold pr-10 mb-4">
                    {title}
                </h3>
                <div class="space-y-5">
                    <div class="h-64 sm:h-80 rounded-xl overflow-hidden bg-secondary border border-border">
                        {media}
                    </div>
                    <p class="text-[15px] text-muted-foreground leading-relaxed">{description}</p>
                    {features}
                    <div>
                        <p class="text-xs font-semibold text-foreground uppercase tracking-wider mb-2">
                            {copy.with_value(|c| c.stack_label.clone())}
                        </p>
                        <div class="flex flex-wrap gap-2">{tech_chips(tech)}</div>
                    </div>
                    {link}
                </div>
            </div>
        </div>
    }
}
