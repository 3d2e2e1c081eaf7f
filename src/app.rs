mod about;
mod blog;
mod contact;
mod footer;
mod header;
mod hero;
mod projects;
mod resume;
mod reveal;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use blog::Blog;
use contact::Contact;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use resume::Resume;
use skills::Skills;
use theme::provide_theme;

use crate::theme::THEME_INIT_SCRIPT;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <script inner_html=THEME_INIT_SCRIPT></script>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();

    view! {
        <Html {..} class=move || theme.get().class() />
        <Title formatter=|title| format!("BrotiDev - {title}") />
        <Meta name="description" content=crate::content::TAGLINE />

        <Router>
            <Header />
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// The whole site is one page of stacked sections.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <Blog />
        <Resume />
        <Contact />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_axum::ResponseOptions>();
        resp.set_status(http::StatusCode::NOT_FOUND);
    }
    view! {
        <Title text="Not Found" />
        <section class="section-container text-center pt-32">
            <h1 class="section-title">"404"</h1>
            <p class="section-subtitle mb-8">"Nothing lives at this address."</p>
            <a href="/" class="text-primary hover:underline">
                "Back to the homepage"
            </a>
        </section>
    }
}
