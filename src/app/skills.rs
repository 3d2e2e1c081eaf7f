use leptos::prelude::*;

use super::reveal::{use_reveal_state, RevealGroup, RevealItem, RevealSection};
use crate::content::{SkillCategory, SKILL_CATEGORIES};
use crate::motion::{skill_bar_style, SKILLS_STAGGER};
use crate::nav::Section;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <RevealSection
            section=Section::Skills
            stagger=SKILLS_STAGGER
            class="section-container bg-muted/30"
            inner_class="space-y-10"
        >
            <div class="text-center space-y-4">
                <RevealItem>
                    <h2 class="section-title">"My Skills & Expertise"</h2>
                </RevealItem>
                <RevealItem>
                    <p class="section-subtitle max-w-2xl mx-auto">
                        "A curated collection of technologies I've mastered on my journey as a developer"
                    </p>
                </RevealItem>
            </div>
            <RevealGroup class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {SKILL_CATEGORIES
                    .iter()
                    .enumerate()
                    .map(|(idx, category)| view! { <SkillCard category=*category index=idx /> })
                    .collect_view()}
            </RevealGroup>
        </RevealSection>
    }
}

#[component]
fn SkillCard(category: SkillCategory, index: usize) -> impl IntoView {
    let state = use_reveal_state();
    let accent = category.accent;
    view! {
        <RevealItem class="bg-background rounded-lg p-6 border hover-lift shadow-sm">
            <div class=format!("flex items-center gap-3 mb-4 {}", accent.text_class())>
                <span class="text-2xl">{category.icon}</span>
                <h3 class="text-xl font-bold">{category.name}</h3>
            </div>
            <div class="space-y-4">
                {category
                    .skills
                    .iter()
                    .map(|skill| {
                        let level = skill.level;
                        view! {
                            <div class="space-y-2">
                                <div class="flex justify-between text-sm">
                                    <span>{skill.name}</span>
                                    <span class="text-muted-foreground">{format!("{level}%")}</span>
                                </div>
                                <div class="h-2 w-full bg-muted rounded-full overflow-hidden">
                                    <div
                                        class=format!("h-full rounded-full {}", accent.bar_class())
                                        style=move || skill_bar_style(level, index, state.get().variant())
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </RevealItem>
    }
}
