use leptos::prelude::*;

use crate::gallery::CarouselCursor;

/// Looping image slider. Controls are only shown when there is more than one image.
#[component]
pub fn Carousel(
    images: Vec<String>,
    /// Alt text prefix, the slide number is appended.
    alt: String,
    previous_label: String,
    next_label: String,
    #[prop(optional, into)] img_class: String,
    #[prop(optional, into)] button_class: String,
) -> impl IntoView {
    let cursor = RwSignal::new(CarouselCursor::new(images.len()));
    let has_controls = cursor.with_untracked(|c| c.has_controls());

    let slides = images
        .into_iter()
        .enumerate()
        .map(|(i, src)| {
            view! {
                <div
                    class="min-w-0 shrink-0 grow-0 basis-full h-full"
                    aria-hidden=move || (cursor.get().index() != i).to_string()
                >
                    <img src=src alt=format!("{alt} {}", i + 1) class=img_class.clone() />
                </div>
            }
        })
        .collect_view();

    let controls = has_controls.then(|| {
        let button_class = format!(
            "absolute top-1/2 -translate-y-1/2 inline-flex items-center justify-center rounded-full border border-border {button_class}",
        );
        view! {
            <button
                type="button"
                aria-label=previous_label
                class=format!("{button_class} left-2")
                on:click=move |ev| {
                    // cards open the detail view on click
                    ev.stop_propagation();
                    cursor.update(|c| c.prev());
                }
            >
                "‹"
            </button>
            <button
                type="button"
                aria-label=next_label
                class=format!("{button_class} right-2")
                on:click=move |ev| {
                    ev.stop_propagation();
                    cursor.update(|c| c.next());
                }
            >
                "›"
            </button>
        }
    });

    view! {
        <div class="relative h-full w-full overflow-hidden" role="region" aria-roledescription="carousel">
            <div
                class="flex h-full transition-transform duration-300"
                style=move || format!("transform: translateX(-{}%)", cursor.get().index() * 100)
            >
                {slides}
            </div>
            {controls}
        </div>
    }
}
