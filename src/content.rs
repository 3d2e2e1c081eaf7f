//! Static page content.

use chrono::NaiveDate;

pub const OWNER: &str = "Broti Sunder Bachi";
pub const TAGLINE: &str = "Crafting interactive web experiences";
pub const PORTRAIT: &str = "/placeholder.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Secondary,
    Accent,
}

impl Accent {
    // spelled out so tailwind's scanner keeps the classes
    pub fn text_class(&self) -> &'static str {
        match self {
            Accent::Primary => "text-primary",
            Accent::Secondary => "text-secondary",
            Accent::Accent => "text-accent",
        }
    }

    pub fn bar_class(&self) -> &'static str {
        match self {
            Accent::Primary => "bg-primary",
            Accent::Secondary => "bg-secondary",
            Accent::Accent => "bg-accent",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub name: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend Frameworks",
        icon: "🧩",
        accent: Accent::Primary,
        skills: &[
            Skill { name: "Next.js", level: 90 },
            Skill { name: "SvelteKit", level: 85 },
            Skill { name: "React", level: 90 },
            Skill { name: "Angular", level: 70 },
        ],
    },
    SkillCategory {
        name: "Core Languages",
        icon: "⌨️",
        accent: Accent::Secondary,
        skills: &[
            Skill { name: "JavaScript", level: 95 },
            Skill { name: "TypeScript", level: 85 },
            Skill { name: "HTML5", level: 90 },
            Skill { name: "CSS3", level: 90 },
        ],
    },
    SkillCategory {
        name: "Backend Basics",
        icon: "🖥️",
        accent: Accent::Accent,
        skills: &[
            Skill { name: "Node.js", level: 80 },
            Skill { name: "Express", level: 75 },
            Skill { name: "REST APIs", level: 85 },
            Skill { name: "GraphQL", level: 70 },
        ],
    },
    SkillCategory {
        name: "Development Tools",
        icon: "🔀",
        accent: Accent::Primary,
        skills: &[
            Skill { name: "Git", level: 90 },
            Skill { name: "VS Code", level: 95 },
            Skill { name: "Figma", level: 80 },
            Skill { name: "Docker", level: 65 },
        ],
    },
    SkillCategory {
        name: "CSS Frameworks",
        icon: "⚡",
        accent: Accent::Secondary,
        skills: &[
            Skill { name: "Tailwind CSS", level: 95 },
            Skill { name: "SASS/SCSS", level: 85 },
            Skill { name: "styled-components", level: 80 },
            Skill { name: "CSS Modules", level: 75 },
        ],
    },
    SkillCategory {
        name: "Responsive Design",
        icon: "📱",
        accent: Accent::Accent,
        skills: &[
            Skill { name: "Mobile First", level: 90 },
            Skill { name: "Flexbox/Grid", level: 95 },
            Skill { name: "Media Queries", level: 90 },
            Skill { name: "Accessibility", level: 85 },
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub demo_url: &'static str,
    pub repo_url: &'static str,
    pub featured: bool,
}

/// Cards show at most this many tags, then a `+N` badge.
pub const CARD_TAG_LIMIT: usize = 3;

impl Project {
    /// Tags to render on a card and how many were left out.
    pub fn card_tags(&self) -> (&'static [&'static str], usize) {
        let shown = self.tags.len().min(CARD_TAG_LIMIT);
        (&self.tags[..shown], self.tags.len() - shown)
    }
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Dashboard",
        description: "A responsive admin dashboard for an e-commerce platform with real-time analytics, inventory management, and order processing capabilities.",
        image: "/placeholder.svg",
        tags: &["Next.js", "Tailwind CSS", "Chart.js", "Redux"],
        demo_url: "#",
        repo_url: "#",
        featured: true,
    },
    Project {
        title: "Social Media App",
        description: "A modern social networking application with real-time chat, post sharing, and user authentication.",
        image: "/placeholder.svg",
        tags: &["React", "Firebase", "Tailwind CSS", "Socket.io"],
        demo_url: "#",
        repo_url: "#",
        featured: true,
    },
    Project {
        title: "Personal Finance Tracker",
        description: "A tool for tracking personal expenses, income, and budgeting with interactive visualizations and reports.",
        image: "/placeholder.svg",
        tags: &["SvelteKit", "TypeScript", "D3.js", "Supabase"],
        demo_url: "#",
        repo_url: "#",
        featured: true,
    },
    Project {
        title: "Weather App",
        description: "A weather application that provides current conditions and forecasts with beautiful visualizations.",
        image: "/placeholder.svg",
        tags: &["React", "OpenWeather API", "Styled Components"],
        demo_url: "#",
        repo_url: "#",
        featured: false,
    },
    Project {
        title: "Task Management Tool",
        description: "A Kanban-style task management application with drag-and-drop functionality and team collaboration features.",
        image: "/placeholder.svg",
        tags: &["Vue.js", "Vuex", "Tailwind CSS", "Firebase"],
        demo_url: "#",
        repo_url: "#",
        featured: false,
    },
    Project {
        title: "Recipe Finder App",
        description: "An application that helps users discover recipes based on available ingredients and dietary preferences.",
        image: "/placeholder.svg",
        tags: &["React", "Node.js", "MongoDB", "Express"],
        demo_url: "#",
        repo_url: "#",
        featured: false,
    },
];

pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}

pub fn other_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| !p.featured)
}

#[derive(Debug, Clone, Copy)]
pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub image: &'static str,
    pub url: &'static str,
    pub category: &'static str,
}

/// Filter entry matching every post.
pub const ALL_CATEGORIES: &str = "All";

impl BlogPost {
    pub fn published(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    /// e.g. "December 15, 2023"; falls back to the raw date string.
    pub fn display_date(&self) -> String {
        self.published()
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| self.date.to_string())
    }
}

pub static BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Building Performant Animations with Framer Motion",
        excerpt: "Learn how to create smooth, performant animations in React applications using Framer Motion.",
        date: "2023-12-15",
        image: "/placeholder.svg",
        url: "#",
        category: "Animation",
    },
    BlogPost {
        title: "Mastering Server Components in Next.js",
        excerpt: "A deep dive into React Server Components and how they improve performance in Next.js applications.",
        date: "2023-11-20",
        image: "/placeholder.svg",
        url: "#",
        category: "Next.js",
    },
    BlogPost {
        title: "The Power of Tailwind CSS: From Skeptic to Advocate",
        excerpt: "My journey with Tailwind CSS and why I now prefer it for most of my projects.",
        date: "2023-10-05",
        image: "/placeholder.svg",
        url: "#",
        category: "CSS",
    },
    BlogPost {
        title: "Getting Started with SvelteKit: A Practical Guide",
        excerpt: "A beginner-friendly introduction to SvelteKit and how to build your first application.",
        date: "2023-09-10",
        image: "/placeholder.svg",
        url: "#",
        category: "Svelte",
    },
    BlogPost {
        title: "Optimizing Images in Modern Web Applications",
        excerpt: "Best practices for handling images in web applications for better performance and user experience.",
        date: "2023-08-18",
        image: "/placeholder.svg",
        url: "#",
        category: "Performance",
    },
    BlogPost {
        title: "Creating Custom Hooks in React",
        excerpt: "How to build reusable custom hooks to improve code organization and reusability in React.",
        date: "2023-07-22",
        image: "/placeholder.svg",
        url: "#",
        category: "React",
    },
];

/// `All` followed by each post category in order of first appearance.
pub fn blog_categories() -> Vec<&'static str> {
    let mut categories = vec![ALL_CATEGORIES];
    for post in BLOG_POSTS {
        if !categories.contains(&post.category) {
            categories.push(post.category);
        }
    }
    categories
}

pub fn posts_in(category: &str) -> Vec<&'static BlogPost> {
    BLOG_POSTS
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

pub static WORK_EXPERIENCE: &[Job] = &[
    Job {
        title: "Frontend Developer",
        company: "Atcuts Ltd.",
        location: "Ahmedabad, India",
        period: "2024 - 2025",
        description: "Developed and maintained multiple client websites with React. Created reusable component libraries and implemented responsive designs.",
        skills: &["SvelteKit", "JavaScript", "Tailwind CSS"],
    },
    Job {
        title: "Junior Web Developer",
        company: "Signimus Technology",
        location: "Indore, India",
        period: "2023 - 2024",
        description: "Converted design mockups into fully functional responsive websites. Collaborated with designers to implement UI improvements.",
        skills: &["HTML", "CSS", "JavaScript", "Nextjs", "Tailwind"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub static EDUCATION: &[Education] = &[
    Education {
        degree: "Master of Computer Science [AIML]",
        institution: "Chandigarh University",
        location: "Chandigarh, India",
        period: "2022 - 2024",
        description: "Specialized in Human-Computer Interaction and Web Technologies, with a thesis comparing the performance of modern frontend frameworks.",
    },
    Education {
        degree: "Bachelor of Computer Science",
        institution: "Mats University",
        location: "Raipur, India",
        period: "2012 - 2016",
        description: "Graduated with honors while taking part in hackathons and web development competitions to sharpen practical skills.",
    },
];

pub static ABOUT_TRAITS: &[&str] = &[
    "Creative Thinker",
    "Problem Solver",
    "UI Enthusiast",
    "Continuous Learner",
];

#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub static CONTACT_CHANNELS: &[Link] = &[
    Link {
        label: "brotisunder9@gmail.com",
        icon: "✉️",
        href: "mailto:brotisunder9@gmail.com",
    },
    Link {
        label: "+91 7646870428",
        icon: "📞",
        href: "tel:+917646870428",
    },
    Link {
        label: "Ahmedabad, India",
        icon: "📍",
        href: "https://maps.app.goo.gl/83QwWpaZSame2eqz6",
    },
];

pub static SOCIAL_LINKS: &[Link] = &[
    Link {
        label: "GitHub",
        icon: "devicon-github-plain",
        href: "https://github.com/bsbagchi",
    },
    Link {
        label: "LinkedIn",
        icon: "devicon-linkedin-plain",
        href: "https://www.linkedin.com/in/broti-sunder-bagchi-aa46b623a/",
    },
    Link {
        label: "Twitter",
        icon: "devicon-twitter-original",
        href: "https://x.com/BrotiSunder",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_images_are_served_from_public() {
        let public = Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let images = PROJECTS
            .iter()
            .map(|p| p.image)
            .chain(BLOG_POSTS.iter().map(|p| p.image))
            .chain([PORTRAIT]);
        for image in images {
            let file = image.strip_prefix('/').unwrap_or(image);
            assert!(public.join(file).is_file(), "missing asset {image}");
        }
    }

    #[test]
    fn test_blog_categories_unique_in_order() {
        let cats = blog_categories();
        assert_eq!(cats[0], ALL_CATEGORIES);
        assert_eq!(
            cats,
            vec!["All", "Animation", "Next.js", "CSS", "Svelte", "Performance", "React"]
        );
    }

    #[test]
    fn test_posts_filter() {
        assert_eq!(posts_in(ALL_CATEGORIES).len(), BLOG_POSTS.len());
        let css = posts_in("CSS");
        assert_eq!(css.len(), 1);
        assert_eq!(css[0].date, "2023-10-05");
        assert!(posts_in("Rust").is_empty());
    }

    #[test]
    fn test_display_date() {
        assert_eq!(BLOG_POSTS[0].display_date(), "December 15, 2023");
        assert_eq!(BLOG_POSTS[2].display_date(), "October 5, 2023");
        let broken = BlogPost {
            date: "someday",
            ..BLOG_POSTS[0]
        };
        assert_eq!(broken.display_date(), "someday");
    }

    #[test]
    fn test_project_partition() {
        assert_eq!(featured_projects().count(), 3);
        assert_eq!(other_projects().count(), 3);
        assert!(featured_projects().all(|p| p.featured));
    }

    #[test]
    fn test_card_tags_overflow() {
        let task = other_projects()
            .find(|p| p.title == "Task Management Tool")
            .unwrap();
        let (shown, rest) = task.card_tags();
        assert_eq!(shown, &["Vue.js", "Vuex", "Tailwind CSS"]);
        assert_eq!(rest, 1);

        let weather = other_projects().next().unwrap();
        assert_eq!(weather.card_tags(), (weather.tags, 0));
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert_eq!(SKILL_CATEGORIES.len(), 6);
        for cat in SKILL_CATEGORIES {
            assert_eq!(cat.skills.len(), 4);
            assert!(cat.skills.iter().all(|s| s.level <= 100));
        }
    }
}
