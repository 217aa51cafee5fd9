use leptos::prelude::*;

/// Color scheme of the page, applied as the class of the `<html>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon of the theme a click switches to.
    fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }
}

#[component]
pub fn ThemeToggle(label: String) -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    view! {
        <button
            type="button"
            aria-label=label
            class="w-9 h-9 inline-flex items-center justify-center rounded-md text-muted-foreground hover:text-foreground hover:bg-muted/60 transition-colors"
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            {move || theme.get().icon()}
        </button>
    }
}
