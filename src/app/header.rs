use leptos::{either::Either, prelude::*};
use leptos_use::use_window_scroll;

use super::theme::ThemeToggle;
use crate::nav::{MenuState, Section};
use crate::scroll::{HeaderStyle, ScrollTracker};

#[component]
pub fn Header() -> impl IntoView {
    let tracker = StoredValue::new(ScrollTracker::default());
    let (style, set_style) = signal(HeaderStyle::Transparent);
    let (menu, set_menu) = signal(MenuState::default());
    let (_, scroll_y) = use_window_scroll();

    tracker.update_value(|t| t.attach());
    Effect::new(move |_| {
        let y = scroll_y.get();
        let next = tracker.try_update_value(|t| t.record(y)).flatten();
        if let Some(next) = next {
            if style.get_untracked() != next {
                set_style.set(next);
            }
        }
    });
    on_cleanup(move || {
        tracker.try_update_value(|t| t.detach());
    });

    let is_open = move || menu.get().is_open();

    view! {
        <header class=move || {
            format!("fixed w-full z-50 transition-all duration-300 {}", style.get().class())
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-4">
                    <a href="/" class="text-xl font-bold">
                        <span class="text-primary">"Broti"</span>
                        <span>"Dev"</span>
                    </a>

                    <nav class="hidden md:flex items-center space-x-8">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <a
                                        href=section.href()
                                        class="text-sm font-medium hover:text-primary transition-colors"
                                    >
                                        {section.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle />
                    </nav>

                    <div class="flex items-center md:hidden space-x-4">
                        <ThemeToggle />
                        <button
                            type="button"
                            class="h-10 w-10 inline-flex items-center justify-center rounded-md text-foreground hover:bg-muted"
                            aria-label="Toggle navigation menu"
                            aria-expanded=move || is_open().to_string()
                            on:click=move |_| set_menu.update(|m| m.toggle())
                        >
                            {move || {
                                if is_open() {
                                    Either::Left(view! { <span class="text-2xl">"✕"</span> })
                                } else {
                                    Either::Right(view! { <span class="text-2xl">"☰"</span> })
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=is_open>
                <div class="md:hidden absolute top-full left-0 right-0 bg-background border-b border-border">
                    <nav class="flex flex-col px-4 py-4">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <a
                                        href=section.href()
                                        class="py-3 text-sm font-medium hover:text-primary"
                                        on:click=move |_| {
                                            set_menu
                                                .update(|m| {
                                                    let href = m.navigate(section);
                                                    log::debug!("menu closed by navigation to {href}");
                                                })
                                        }
                                    >
                                        {section.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </Show>
        </header>
    }
}
