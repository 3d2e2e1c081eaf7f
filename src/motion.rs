//! Declarative motion configuration.
//!
//! Every animated element on the page moves between two named variants,
//! `hidden` and `visible`. The browser's CSS transitions do the actual
//! interpolation; this module only turns variant and timing data into
//! inline style strings.

use std::fmt::Write;
use std::time::Duration;

/// Named animation states understood by [`Variants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantName {
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub opacity: f64,
    /// Vertical offset in px.
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variants {
    pub hidden: Variant,
    pub visible: Variant,
}

impl Variants {
    pub const fn get(&self, name: VariantName) -> Variant {
        match name {
            VariantName::Hidden => self.hidden,
            VariantName::Visible => self.visible,
        }
    }
}

/// CSS timing function shared by every reveal transition.
pub const EASE_OUT: &str = "ease-out";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    /// CSS timing function.
    pub easing: &'static str,
}

impl Transition {
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing: EASE_OUT,
        }
    }

    pub const fn with_delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    /// CSS `transition` value for the given properties.
    pub fn css(&self, properties: &[&str]) -> String {
        let mut out = String::new();
        for (i, prop) in properties.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            // writing into a String can't fail
            let _ = write!(
                out,
                "{} {}s {} {}s",
                prop,
                secs(self.duration),
                self.easing,
                secs(self.delay)
            );
        }
        out
    }
}

/// Child scheduling for a container: child `i` starts at
/// `delay_children + i * interval` after the container starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub delay_children: Duration,
    pub interval: Duration,
}

impl Stagger {
    pub const fn new(interval: Duration) -> Self {
        Self {
            delay_children: Duration::ZERO,
            interval,
        }
    }

    /// Same interval, shifted so children start after `base`.
    pub fn offset_by(self, base: Duration) -> Self {
        Self {
            delay_children: self.delay_children + base,
            ..self
        }
    }

    pub fn offset(&self, index: usize) -> Duration {
        self.delay_children + self.interval * index as u32
    }
}

/// Full motion description for one kind of element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub variants: Variants,
    pub transition: Transition,
}

impl Motion {
    /// Inline style for `state`, starting `delay` after the trigger.
    pub fn style(&self, state: VariantName, delay: Duration) -> String {
        let v = self.variants.get(state);
        let transition = self.transition.with_delay(self.transition.delay + delay);
        format!(
            "opacity: {}; transform: translateY({}px); transition: {};",
            fmt_num(v.opacity),
            fmt_num(v.y),
            transition.css(&["opacity", "transform"])
        )
    }
}

pub const SECTION_DURATION: Duration = Duration::from_millis(600);
pub const HERO_DURATION: Duration = Duration::from_millis(500);
pub const SKILL_BAR_DURATION: Duration = Duration::from_millis(1000);

/// Interval used by most sections.
pub const DEFAULT_STAGGER: Duration = Duration::from_millis(200);
/// The skills grid has many more cards, so it staggers faster.
pub const SKILLS_STAGGER: Duration = Duration::from_millis(100);
pub const SKILL_BAR_STEP: Duration = Duration::from_millis(200);

/// Section root: fades in while sliding up 20px.
pub const CONTAINER: Motion = Motion {
    variants: Variants {
        hidden: Variant { opacity: 0.0, y: 20.0 },
        visible: Variant { opacity: 1.0, y: 0.0 },
    },
    transition: Transition::new(SECTION_DURATION),
};

/// Nested container inside a section: fades in place.
pub const GROUP: Motion = Motion {
    variants: Variants {
        hidden: Variant { opacity: 0.0, y: 0.0 },
        visible: Variant { opacity: 1.0, y: 0.0 },
    },
    ..CONTAINER
};

/// Reveal unit: fades in while sliding up 20px.
pub const ITEM: Motion = Motion {
    variants: Variants {
        hidden: Variant { opacity: 0.0, y: 20.0 },
        visible: Variant { opacity: 1.0, y: 0.0 },
    },
    transition: Transition::new(SECTION_DURATION),
};

pub const HERO_ITEM: Motion = Motion {
    transition: Transition::new(HERO_DURATION),
    ..ITEM
};

/// Inline style for a skill level bar; width grows from 0 to `level`%.
pub fn skill_bar_style(level: u8, category_index: usize, state: VariantName) -> String {
    let width = match state {
        VariantName::Hidden => 0,
        VariantName::Visible => level.min(100),
    };
    let transition = Transition::new(SKILL_BAR_DURATION)
        .with_delay(SKILL_BAR_STEP * category_index as u32);
    format!("width: {}%; transition: {};", width, transition.css(&["width"]))
}

fn secs(d: Duration) -> String {
    fmt_num(d.as_secs_f64())
}

fn fmt_num(n: f64) -> String {
    let rounded = (n * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        // avoid "-0"
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_offsets() {
        let s = Stagger::new(DEFAULT_STAGGER);
        assert_eq!(s.offset(0), Duration::ZERO);
        assert_eq!(s.offset(1), Duration::from_millis(200));
        assert_eq!(s.offset(4), Duration::from_millis(800));

        let nested = s.offset_by(s.offset(2));
        assert_eq!(nested.offset(0), Duration::from_millis(400));
        assert_eq!(nested.offset(3), Duration::from_millis(1000));
    }

    #[test]
    fn test_item_style_hidden_and_visible() {
        let hidden = ITEM.style(VariantName::Hidden, Duration::ZERO);
        assert_eq!(
            hidden,
            "opacity: 0; transform: translateY(20px); transition: opacity 0.6s ease-out 0s, transform 0.6s ease-out 0s;"
        );
        let visible = ITEM.style(VariantName::Visible, Duration::from_millis(400));
        assert!(visible.starts_with("opacity: 1; transform: translateY(0px);"));
        assert!(visible.contains("opacity 0.6s ease-out 0.4s"));
        assert!(visible.contains("transform 0.6s ease-out 0.4s"));
    }

    #[test]
    fn test_hero_uses_shorter_duration() {
        let style = HERO_ITEM.style(VariantName::Visible, Duration::from_millis(200));
        assert!(style.contains("opacity 0.5s ease-out 0.2s"));
    }

    #[test]
    fn test_container_slides_group_fades() {
        let section = CONTAINER.style(VariantName::Hidden, Duration::ZERO);
        assert!(section.starts_with("opacity: 0; transform: translateY(20px);"));
        let group = GROUP.style(VariantName::Hidden, Duration::ZERO);
        assert!(group.starts_with("opacity: 0; transform: translateY(0px);"));
        assert_eq!(GROUP.transition, CONTAINER.transition);
    }

    #[test]
    fn test_skill_bar_style() {
        assert_eq!(
            skill_bar_style(90, 0, VariantName::Hidden),
            "width: 0%; transition: width 1s ease-out 0s;"
        );
        assert_eq!(
            skill_bar_style(85, 3, VariantName::Visible),
            "width: 85%; transition: width 1s ease-out 0.6s;"
        );
        // levels are percentages
        assert!(skill_bar_style(250, 0, VariantName::Visible).starts_with("width: 100%;"));
    }
}
