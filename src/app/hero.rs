use leptos::prelude::*;

use super::reveal::{Backdrop, RevealItem, RevealSection};
use crate::motion::HERO_ITEM;
use crate::nav::Section;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <RevealSection
            section=Section::Home
            on_mount=true
            item=HERO_ITEM
            container=None
            class="relative min-h-screen flex items-center justify-center pt-16"
            inner_class="container px-4 sm:px-6 lg:px-8 mx-auto"
        >
            <Backdrop slot>
                <div class="absolute inset-0 -z-10 hero-grid"></div>
                <div class="absolute bottom-10 left-1/2 -translate-x-1/2 animate-bounce">
                    <a
                        href=Section::About.href()
                        class="flex items-center justify-center rounded-full p-2 bg-background/80 shadow-md"
                        aria-label="Scroll to about"
                    >
                        "↓"
                    </a>
                </div>
            </Backdrop>
            <div class="flex flex-col items-center justify-center text-center">
                <RevealItem>
                    <h1 class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold tracking-tight mb-6">
                        "Crafting " <span class="text-primary">"Interactive"</span>
                        " Web Experiences"
                    </h1>
                </RevealItem>
                <RevealItem>
                    <p class="text-xl md:text-2xl text-muted-foreground mb-10 max-w-3xl">
                        "I build dynamic, interactive interfaces using Next.js, SvelteKit, and Tailwind CSS."
                    </p>
                </RevealItem>
                <RevealItem class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a
                        href=Section::Projects.href()
                        class="px-8 py-3 rounded-md bg-primary text-primary-foreground font-medium hover:bg-primary/90 transition-colors"
                    >
                        "View My Work"
                    </a>
                    <a
                        href=Section::Contact.href()
                        class="px-8 py-3 rounded-md border border-border font-medium hover:bg-muted transition-colors"
                    >
                        "Let's Connect"
                    </a>
                </RevealItem>
            </div>
        </RevealSection>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn div_depth(html: &str, at: usize) -> usize {
        let tag_start = html[..at].rfind('<').unwrap_or(0);
        let before = &html[..tag_start];
        before.matches("<div").count() - before.matches("</div>").count()
    }

    fn opening_tag(html: &str, at: usize) -> &str {
        let start = html[..at].rfind('<').unwrap_or(0);
        let end = html[at..].find('>').map_or(html.len(), |e| at + e);
        &html[start..end]
    }

    #[test]
    fn test_decoration_is_positioned_by_the_section() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Hero /> }.to_html());

        let container = html.find("class=\"container").unwrap_or_else(|| panic!("{html}"));
        let grid = html.find("hero-grid").unwrap_or_else(|| panic!("{html}"));
        let arrow = html.find("animate-bounce").unwrap_or_else(|| panic!("{html}"));

        // siblings of the content container, directly inside <section>
        assert_eq!(div_depth(&html, container), 0, "{html}");
        assert_eq!(div_depth(&html, grid), 0, "{html}");
        assert_eq!(div_depth(&html, arrow), 0, "{html}");

        // only the items move; a transform here would become the containing block
        assert!(!opening_tag(&html, container).contains("transform"), "{html}");
        assert!(html.contains("translateY(20px)"), "{html}");
    }
}
