use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
use crate::theme::Theme;

#[derive(Clone, Copy)]
struct ThemeContext {
    theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

/// Makes the theme available to [`ThemeToggle`]s; the browser remembers the
/// choice across visits.
pub fn provide_theme() -> Signal<Theme> {
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);

    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    provide_context(ThemeContext { theme, set_theme });
    theme
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ThemeContext { theme, set_theme } = expect_context::<ThemeContext>();
    view! {
        <button
            type="button"
            class="h-9 w-9 inline-flex items-center justify-center rounded-md border border-border hover:bg-muted transition-colors"
            aria-label=move || theme.get().toggle_label()
            on:click=move |_| set_theme.update(|t| *t = t.toggled())
        >
            {move || match theme.get() {
                Theme::Dark => "☀️",
                Theme::Light => "🌙",
            }}
        </button>
    }
}
