use leptos::prelude::*;

use super::reveal::{RevealItem, RevealSection};
use crate::content::{ABOUT_TRAITS, OWNER, PORTRAIT};
use crate::nav::Section;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <RevealSection
            section=Section::About
            class="section-container"
            inner_class="grid md:grid-cols-2 gap-10 items-center"
        >
            <RevealItem class="relative">
                <div class="relative h-80 md:h-96 w-full rounded-lg overflow-hidden border-4 border-background shadow-lg">
                    <img
                        src=PORTRAIT
                        alt="Developer Avatar"
                        class="absolute inset-0 h-full w-full object-cover"
                    />
                </div>
                <div class="absolute -bottom-6 -right-6 h-40 w-40 bg-primary/10 rounded-full -z-10"></div>
                <div class="absolute -top-6 -left-6 h-24 w-24 bg-secondary/10 rounded-full -z-10"></div>
            </RevealItem>

            <RevealItem class="space-y-6">
                <h2 class="text-3xl font-bold">
                    "Hi, I'm " <span class="text-primary">{OWNER}</span>
                </h2>
                <p class="text-muted-foreground">
                    "I'm a passionate frontend developer focused on creating engaging digital experiences that combine aesthetics with functionality. My journey in web development started with a curiosity about how websites work, which led me to dive deep into modern frontend technologies."
                </p>
                <p class="text-muted-foreground">
                    "With a strong foundation in JavaScript and a love for clean UI/UX, I specialize in building responsive, accessible, and performant web applications using the latest tools and frameworks."
                </p>
                <div class="grid grid-cols-2 gap-2">
                    {ABOUT_TRAITS
                        .iter()
                        .map(|t| {
                            view! {
                                <div class="flex items-center gap-2">
                                    <span class="text-secondary flex-shrink-0">"✓"</span>
                                    <span class="text-sm">{*t}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </RevealItem>
        </RevealSection>
    }
}
