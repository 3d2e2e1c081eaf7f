use leptos::prelude::*;

use super::reveal::{RevealGroup, RevealItem, RevealSection};
use crate::content::{blog_categories, posts_in, BlogPost, ALL_CATEGORIES};
use crate::nav::Section;

#[component]
pub fn Blog() -> impl IntoView {
    let (active, set_active) = signal(ALL_CATEGORIES);

    view! {
        <RevealSection
            section=Section::Blog
            class="section-container bg-muted/30"
            inner_class="space-y-10"
        >
            <div class="text-center space-y-4">
                <RevealItem>
                    <h2 class="section-title">"Blog & Insights"</h2>
                </RevealItem>
                <RevealItem>
                    <p class="section-subtitle max-w-2xl mx-auto">
                        "Thoughts, tutorials, and insights about frontend development"
                    </p>
                </RevealItem>
            </div>

            <RevealItem class="flex flex-wrap justify-center gap-2 mb-8">
                {blog_categories()
                    .into_iter()
                    .map(|category| {
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if active.get() == category {
                                        "rounded-full px-3 py-1 text-sm bg-primary text-primary-foreground"
                                    } else {
                                        "rounded-full px-3 py-1 text-sm border border-border hover:bg-muted"
                                    }
                                }
                                on:click=move |_| set_active.set(category)
                            >
                                {category}
                            </button>
                        }
                    })
                    .collect_view()}
            </RevealItem>

            <RevealGroup class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {move || {
                    posts_in(active.get())
                        .into_iter()
                        .enumerate()
                        .map(|(index, post)| view! { <PostCard post=*post index=index /> })
                        .collect_view()
                }}
            </RevealGroup>
        </RevealSection>
    }
}

#[component]
fn PostCard(post: BlogPost, index: usize) -> impl IntoView {
    view! {
        <RevealItem
            index=index
            class="bg-background border rounded-lg overflow-hidden hover-lift shadow-sm"
        >
            <article>
                <a href=post.url class="block">
                    <div class="relative h-48 w-full">
                        <img
                            src=post.image
                            alt=post.title
                            class="absolute inset-0 h-full w-full object-cover"
                        />
                        <div class="absolute top-3 right-3 bg-background/80 backdrop-blur-sm text-xs font-medium px-2.5 py-1 rounded-full">
                            {post.category}
                        </div>
                    </div>
                </a>
                <div class="p-5 space-y-3">
                    <div class="flex items-center text-xs text-muted-foreground">
                        <span class="mr-1">"📅"</span>
                        <time datetime=post.date>{post.display_date()}</time>
                    </div>
                    <a href=post.url class="block">
                        <h3 class="text-lg font-bold hover:text-primary transition-colors">
                            {post.title}
                        </h3>
                    </a>
                    <p class="text-sm text-muted-foreground line-clamp-2">{post.excerpt}</p>
                    <a href=post.url class="flex items-center gap-1 text-sm hover:text-primary">
                        <span>"Read More"</span>
                        "↗"
                    </a>
                </div>
            </article>
        </RevealItem>
    }
}
