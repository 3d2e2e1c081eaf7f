use leptos::prelude::*;

use super::reveal::{RevealGroup, RevealItem, RevealSection};
use crate::content::{Education, Job, EDUCATION, WORK_EXPERIENCE};
use crate::nav::Section;

#[component]
pub fn Resume() -> impl IntoView {
    view! {
        <RevealSection section=Section::Resume class="section-container" inner_class="space-y-10">
            <div class="text-center space-y-4">
                <RevealItem>
                    <h2 class="section-title">"Resume & Experience"</h2>
                </RevealItem>
                <RevealItem>
                    <p class="section-subtitle max-w-2xl mx-auto">
                        "My professional journey and educational background"
                    </p>
                </RevealItem>
                <RevealItem class="pt-4">
                    <a
                        href="#"
                        class="inline-flex items-center gap-2 px-4 py-2 rounded-md bg-primary text-primary-foreground font-medium"
                    >
                        "⬇" <span>"Download Resume"</span>
                    </a>
                </RevealItem>
            </div>

            <div class="grid md:grid-cols-2 gap-10">
                <RevealGroup class="space-y-6">
                    <RevealItem class="flex items-center gap-2">
                        <span class="text-primary">"💼"</span>
                        <h3 class="text-2xl font-bold">"Work Experience"</h3>
                    </RevealItem>
                    <div class="relative pl-6 border-l-2 border-muted space-y-10">
                        {WORK_EXPERIENCE
                            .iter()
                            .map(|job| view! { <JobEntry job=*job /> })
                            .collect_view()}
                    </div>
                </RevealGroup>

                <RevealGroup class="space-y-6">
                    <RevealItem class="flex items-center gap-2">
                        <span class="text-secondary">"🎓"</span>
                        <h3 class="text-2xl font-bold">"Education"</h3>
                    </RevealItem>
                    <div class="relative pl-6 border-l-2 border-muted space-y-10">
                        {EDUCATION
                            .iter()
                            .map(|edu| view! { <EducationEntry edu=*edu /> })
                            .collect_view()}
                    </div>
                </RevealGroup>
            </div>
        </RevealSection>
    }
}

#[component]
fn JobEntry(job: Job) -> impl IntoView {
    view! {
        <RevealItem class="relative">
            <div class="absolute -left-[25px] h-4 w-4 rounded-full bg-primary"></div>
            <div class="space-y-3">
                <TimelineHeading title=job.title period=job.period />
                <div class="text-sm text-muted-foreground">
                    {format!("{} | {}", job.company, job.location)}
                </div>
                <p class="text-muted-foreground">{job.description}</p>
                <div class="flex flex-wrap gap-2">
                    {job
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <span class="text-xs px-2 py-1 rounded-full bg-muted font-medium">
                                    {*skill}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealItem>
    }
}

#[component]
fn EducationEntry(edu: Education) -> impl IntoView {
    view! {
        <RevealItem class="relative">
            <div class="absolute -left-[25px] h-4 w-4 rounded-full bg-secondary"></div>
            <div class="space-y-3">
                <TimelineHeading title=edu.degree period=edu.period />
                <div class="text-sm text-muted-foreground">
                    {format!("{} | {}", edu.institution, edu.location)}
                </div>
                <p class="text-muted-foreground">{edu.description}</p>
            </div>
        </RevealItem>
    }
}

#[component]
fn TimelineHeading(title: &'static str, period: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between">
            <h4 class="text-lg font-bold">{title}</h4>
            <div class="flex items-center text-sm text-muted-foreground">
                <span class="mr-1">"📅"</span>
                <span>{period}</span>
            </div>
        </div>
    }
}
