use leptos::prelude::*;

use crate::content::{OWNER, SOCIAL_LINKS, TAGLINE};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-muted/40 border-t">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="flex flex-col md:flex-row items-center justify-between">
                    <div class="mb-4 md:mb-0">
                        <a href="/" class="text-xl font-bold">
                            <span class="text-primary">"Broti"</span>
                            <span>"Dev"</span>
                        </a>
                        <p class="mt-2 text-sm text-muted-foreground">{TAGLINE}</p>
                    </div>
                    <div class="flex flex-col items-center md:items-end">
                        <div class="flex space-x-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-muted-foreground hover:text-primary transition-colors"
                                        >
                                            <i class=link.icon />
                                            <span class="sr-only">{link.label}</span>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <p class="mt-4 text-sm text-muted-foreground">
                            {format!("© {BUILD_YEAR} {OWNER}. All rights reserved.")}
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_year_is_a_year() {
        let year: i32 = BUILD_YEAR.parse().unwrap();
        assert!(year >= 2024, "{BUILD_YEAR}");
    }
}
