use leptos::prelude::*;

static LIGHT_FLOW_ACTIVE: &str = "is-light-flow-active";

/// Card with the animated border highlight while hovered.
#[component]
pub fn LightFlowCard(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] inner_class: String,
    children: Children,
) -> impl IntoView {
    let (active, set_active) = signal(false);
    view! {
        <div
            class=move || {
                if active.get() {
                    format!("card-light-flow {class} {LIGHT_FLOW_ACTIVE}")
                } else {
                    format!("card-light-flow {class}")
                }
            }
            // mouseleave doesn't fire when moving onto a child, so nested content keeps the glow
            on:mouseenter=move |_| set_active.set(true)
            on:mouseleave=move |_| set_active.set(false)
        >
            <div class=format!(
                "card-light-flow-inner border border-border rounded-[11px] bg-card {inner_class}",
            )>{children()}</div>
        </div>
    }
}
