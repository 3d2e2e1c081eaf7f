use leptos::prelude::*;

use super::reveal::{RevealGroup, RevealItem, RevealSection};
use crate::content::{featured_projects, other_projects, Project};
use crate::nav::Section;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <RevealSection
            section=Section::Projects
            class="section-container"
            inner_class="space-y-12"
        >
            <div class="text-center space-y-4">
                <RevealItem>
                    <h2 class="section-title">"My Projects"</h2>
                </RevealItem>
                <RevealItem>
                    <p class="section-subtitle max-w-2xl mx-auto">
                        "A showcase of my work, experiments, and personal projects"
                    </p>
                </RevealItem>
            </div>

            <RevealGroup class="space-y-20">
                {featured_projects()
                    .enumerate()
                    .map(|(index, project)| view! { <FeaturedProject project=*project index /> })
                    .collect_view()}
            </RevealGroup>

            <RevealGroup>
                <h3 class="text-xl font-bold mb-6">"Other Projects"</h3>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {other_projects()
                        .map(|project| view! { <ProjectCard project=*project /> })
                        .collect_view()}
                </div>
            </RevealGroup>
        </RevealSection>
    }
}

#[component]
fn FeaturedProject(project: Project, index: usize) -> impl IntoView {
    let even = index % 2 == 0;
    let row = if even { "lg:flex-row" } else { "lg:flex-row-reverse" };
    let shadow = if even {
        "-bottom-3 -right-3"
    } else {
        "-bottom-3 -left-3"
    };
    view! {
        <RevealItem class=format!("flex flex-col {row} gap-8 items-center")>
            <div class="w-full lg:w-1/2 relative">
                <div class="relative h-64 sm:h-80 w-full rounded-lg overflow-hidden hover-lift shadow-md">
                    <img
                        src=project.image
                        alt=project.title
                        class="absolute inset-0 h-full w-full object-cover"
                    />
                </div>
                <div class=format!(
                    "absolute -z-10 w-full h-full rounded-lg {shadow} bg-gradient-to-br from-primary/20 to-secondary/20",
                )></div>
            </div>

            <div class="w-full lg:w-1/2 space-y-4">
                <h3 class="text-2xl font-bold">{project.title}</h3>
                <p class="text-muted-foreground">{project.description}</p>
                <div class="flex flex-wrap gap-2 my-4">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="text-xs px-3 py-1 rounded-full bg-muted font-medium">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4 pt-2">
                    <a
                        href=project.demo_url
                        class="flex items-center gap-1 px-3 py-2 text-sm rounded-md bg-primary text-primary-foreground"
                    >
                        <span>"Live Demo"</span>
                        "↗"
                    </a>
                    <a
                        href=project.repo_url
                        class="flex items-center gap-1 px-3 py-2 text-sm rounded-md border border-border"
                    >
                        <i class="devicon-github-plain" />
                        <span>"Source Code"</span>
                    </a>
                </div>
            </div>
        </RevealItem>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let (tags, hidden) = project.card_tags();
    view! {
        <RevealItem class="bg-background border rounded-lg overflow-hidden hover-lift shadow-sm">
            <div class="relative h-48 w-full">
                <img
                    src=project.image
                    alt=project.title
                    class="absolute inset-0 h-full w-full object-cover"
                />
            </div>
            <div class="p-5 space-y-3">
                <h4 class="text-lg font-bold">{project.title}</h4>
                <p class="text-sm text-muted-foreground line-clamp-2">{project.description}</p>
                <div class="flex flex-wrap gap-2 my-3">
                    {tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="text-xs px-2 py-0.5 rounded-full bg-muted font-medium">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                    {(hidden > 0)
                        .then(|| {
                            view! {
                                <span class="text-xs px-2 py-0.5 rounded-full bg-muted font-medium">
                                    {format!("+{hidden}")}
                                </span>
                            }
                        })}
                </div>
                <div class="flex gap-3 pt-2 text-sm">
                    <a href=project.demo_url class="flex items-center gap-1 hover:text-primary">
                        <span>"Demo"</span>
                        "↗"
                    </a>
                    <a href=project.repo_url class="flex items-center gap-1 hover:text-primary">
                        <i class="devicon-github-plain" />
                        <span>"Code"</span>
                    </a>
                </div>
            </div>
        </RevealItem>
    }
}
