use leptos::{either::Either, ev::SubmitEvent, html, prelude::*};

use crate::contact::ContactMessage;
use crate::content::{ContactChannel, ContactCopy};

static INPUT_CLASS: &str = "w-full rounded-md bg-secondary border border-border px-3 text-foreground placeholder:text-muted-foreground focus:border-accent focus:outline-none";

fn channel_card(channel: ContactChannel) -> impl IntoView {
    let ContactChannel {
        label,
        value,
        href,
        external,
    } = channel;
    let value = match href {
        Some(href) => Either::Left(view! {
            <a
                href=href
                target=external.then_some("_blank")
                rel=external.then_some("noopener noreferrer")
                class="text-[15px] text-foreground hover:text-accent transition-colors"
            >
                {value}
            </a>
        }),
        None => Either::Right(view! { <p class="text-[15px] text-foreground">{value}</p> }),
    };
    view! {
        <div class="p-5 bg-card border border-border rounded-xl hover:border-accent/40 transition-colors">
            <p class="text-sm font-medium text-muted-foreground">{label}</p>
            {value}
        </div>
    }
}

#[component]
pub fn ContactSection(contact: ContactCopy) -> impl IntoView {
    let ContactCopy {
        eyebrow,
        title,
        intro,
        name_label,
        name_placeholder,
        email_label,
        email_placeholder,
        message_label,
        message_placeholder,
        submit,
        channels,
    } = contact;

    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let name = name_ref.get_untracked().map(|el| el.value()).unwrap_or_default();
        let email = email_ref.get_untracked().map(|el| el.value()).unwrap_or_default();
        let message = message_ref
            .get_untracked()
            .map(|el| el.value())
            .unwrap_or_default();
        let msg = ContactMessage::new(&name, &email, &message);
        set_error.set(msg.submit().err().map(|e| e.to_string()));
    };

    view! {
        <section id="contact" class="py-20 bg-surface">
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

                <div class="grid md:grid-cols-5 gap-6">
                    <div class="md:col-span-3 p-6 bg-card border border-border rounded-xl">
                        <form on:submit=on_submit class="space-y-5">
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-5">
                                <div>
                                    <label for="name" class="block text-sm font-medium text-foreground mb-1.5">
                                        {name_label}
                                    </label>
                                    <input
                                        id="name"
                                        type="text"
                                        placeholder=name_placeholder
                                        required
                                        node_ref=name_ref
                                        class=format!("{INPUT_CLASS} h-11")
                                    />
                                </div>
                                <div>
                                    <label for="email" class="block text-sm font-medium text-foreground mb-1.5">
                                        {email_label}
                                    </label>
                                    <input
                                        id="email"
                                        type="email"
                                        placeholder=email_placeholder
                                        required
                                        node_ref=email_ref
                                        class=format!("{INPUT_CLASS} h-11")
                                    />
                                </div>
                            </div>
                            <div>
                                <label for="message" class="block text-sm font-medium text-foreground mb-1.5">
                                    {message_label}
                                </label>
                                <textarea
                                    id="message"
                                    placeholder=message_placeholder
                                    required
                                    node_ref=message_ref
                                    class=format!("{INPUT_CLASS} py-2 min-h-[140px]")
                                ></textarea>
                            </div>
                            {move || {
                                error
                                    .get()
                                    .map(|e| {
                                        view! {
                                            <p role="alert" class="text-sm text-red-500">
                                                {e}
                                            </p>
                                        }
                                    })
                            }}
                            <button
                                type="submit"
                                class="w-full h-11 rounded-md bg-accent hover:bg-accent-hover text-accent-foreground font-semibold text-base transition-colors"
                            >
                                {submit}
                            </button>
                        </form>
                    </div>

                    <div class="md:col-span-2 space-y-4">
                        {channels.into_iter().map(channel_card).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
