use std::time::Duration;

use leptos::{context::Provider, html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::motion::{Motion, Stagger, VariantName, CONTAINER, DEFAULT_STAGGER, GROUP, ITEM};
use crate::nav::Section;
use crate::observer::{ObserveOptions, VisibilityLatch};
use crate::reveal::{RevealController, RevealState, StaggerSlots};

/// Stagger bookkeeping shared by the reveal units of one container.
#[derive(Clone, Copy)]
struct RevealScope {
    state: ReadSignal<RevealState>,
    motion: Motion,
    slots: StoredValue<StaggerSlots>,
}

impl RevealScope {
    fn new(state: ReadSignal<RevealState>, motion: Motion, slots: StaggerSlots) -> Self {
        Self {
            state,
            motion,
            slots: StoredValue::new(slots),
        }
    }

    fn claim(&self) -> Duration {
        self.slots
            .try_update_value(|s| s.claim())
            .unwrap_or_default()
    }

    fn slot(&self, index: usize) -> Duration {
        self.slots
            .try_with_value(|s| s.slot(index))
            .unwrap_or_default()
    }

    fn nested(&self) -> (Duration, StaggerSlots) {
        self.slots
            .try_update_value(|s| s.nested())
            .unwrap_or_else(|| (Duration::ZERO, StaggerSlots::new(Stagger::new(DEFAULT_STAGGER))))
    }
}

fn now() -> Duration {
    let millis = chrono::Utc::now().timestamp_millis();
    Duration::from_millis(u64::try_from(millis).unwrap_or_default())
}

/// Reveal state of the enclosing section.
pub fn use_reveal_state() -> ReadSignal<RevealState> {
    expect_context::<RevealScope>().state
}

/// Rendered directly inside the `<section>`, outside the animated
/// container. Absolutely positioned decoration goes here.
#[slot]
pub struct Backdrop {
    children: Children,
}

/// Page section whose [`RevealItem`]s fade in once it scrolls into view.
///
/// With `on_mount` the section reveals as soon as it is hydrated instead of
/// waiting for the intersection observer. `container: None` leaves the
/// inner container unstyled so only the items move.
#[component]
pub fn RevealSection(
    section: Section,
    #[prop(default = DEFAULT_STAGGER)] stagger: Duration,
    #[prop(default = ITEM)] item: Motion,
    #[prop(default = Some(CONTAINER))] container: Option<Motion>,
    #[prop(optional)] on_mount: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] inner_class: String,
    #[prop(optional)] backdrop: Option<Backdrop>,
    children: Children,
) -> impl IntoView {
    let root = NodeRef::<html::Div>::new();
    let (state, set_state) = signal(RevealState::Hidden);
    let controller = StoredValue::new(RevealController::default());
    let options = ObserveOptions::default();
    let latch = StoredValue::new(VisibilityLatch::new(options));

    let reveal = move || {
        let revealed = controller
            .try_update_value(|c| c.trigger(now()))
            .unwrap_or(false);
        if revealed {
            let at = controller.try_with_value(|c| c.revealed_at()).flatten();
            log::debug!("section {section} revealed at {at:?}");
            set_state.set(RevealState::Visible);
        }
    };

    if on_mount {
        Effect::new(move |_| reveal());
    } else {
        let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
            root,
            move |entries, _| {
                let seen = entries.iter().fold(false, |seen, entry| {
                    latch
                        .try_update_value(|l| {
                            l.observe(entry.is_intersecting(), entry.intersection_ratio())
                        })
                        .unwrap_or(false)
                        || seen
                });
                if seen {
                    reveal();
                }
            },
            UseIntersectionObserverOptions::default().thresholds(vec![options.threshold()]),
        );
        Effect::new(move |_| {
            let done = state.get().is_visible()
                && !latch.try_with_value(|l| l.wants_reports()).unwrap_or(false);
            if done {
                stop();
            }
        });
    }

    on_cleanup(move || {
        latch.try_update_value(|l| l.release());
        controller.try_update_value(|c| c.unmount());
    });

    let scope = RevealScope::new(state, item, StaggerSlots::new(Stagger::new(stagger)));

    view! {
        <section id=section.anchor() class=class>
            {backdrop.map(|b| (b.children)())}
            <div
                node_ref=root
                class=inner_class
                style=move || container.map(|m| m.style(state.get().variant(), Duration::ZERO))
            >
                <Provider value=scope>{children()}</Provider>
            </div>
        </section>
    }
}

/// One staggered child of the enclosing section or group.
///
/// Units normally take the next slot in declaration order. Lists that are
/// rebuilt after the first render pass their position as `index` instead,
/// and a unit mounted into an already visible section still fades in.
#[component]
pub fn RevealItem(
    #[prop(optional, into)] class: String,
    #[prop(optional)] index: Option<usize>,
    children: Children,
) -> impl IntoView {
    let scope = expect_context::<RevealScope>();
    let delay = match index {
        Some(index) => scope.slot(index),
        None => scope.claim(),
    };

    // the browser needs one frame in the hidden style before it can transition
    let (painted, set_painted) = signal(false);
    Effect::new(move |_| {
        request_animation_frame(move || {
            set_painted.try_set(true);
        });
    });

    let variant = move || {
        if painted.get() && scope.state.get().is_visible() {
            VariantName::Visible
        } else {
            VariantName::Hidden
        }
    };

    view! {
        <div class=class style=move || scope.motion.style(variant(), delay)>
            {children()}
        </div>
    }
}

/// Nested container: takes one slot in its parent and staggers its own
/// children from there.
#[component]
pub fn RevealGroup(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let parent = expect_context::<RevealScope>();
    let (start, slots) = parent.nested();
    let scope = RevealScope::new(parent.state, parent.motion, slots);
    view! {
        <div class=class style=move || GROUP.style(parent.state.get().variant(), start)>
            <Provider value=scope>{children()}</Provider>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    /// Transition delays of every element styled with the section motion,
    /// in document order.
    fn delays(html: &str) -> Vec<String> {
        let marker = "opacity 0.6s ease-out ";
        html.match_indices(marker)
            .map(|(at, _)| {
                let rest = &html[at + marker.len()..];
                rest[..rest.find('s').unwrap_or(rest.len())].to_string()
            })
            .collect()
    }

    #[test]
    fn test_rendered_delays_follow_declaration_order() {
        let owner = Owner::new();
        let html = owner.with(|| {
            view! {
                <RevealSection section=Section::About>
                    <RevealItem>"a"</RevealItem>
                    <RevealItem>"b"</RevealItem>
                    <RevealGroup>
                        <RevealItem>"c"</RevealItem>
                        <RevealItem>"d"</RevealItem>
                    </RevealGroup>
                    <RevealItem>"e"</RevealItem>
                </RevealSection>
            }
            .to_html()
        });

        // section, a, b, group, c, d, e
        assert_eq!(
            delays(&html),
            vec!["0", "0", "0.2", "0.4", "0.4", "0.6", "0.6"],
            "{html}"
        );
    }

    #[test]
    fn test_indexed_items_reuse_slots() {
        let owner = Owner::new();
        let html = owner.with(|| {
            view! {
                <RevealSection section=Section::Blog container=None>
                    {(0..3)
                        .map(|i| view! { <RevealItem index=i>{i}</RevealItem> })
                        .collect_view()}
                    {(0..2)
                        .map(|i| view! { <RevealItem index=i>{i}</RevealItem> })
                        .collect_view()}
                </RevealSection>
            }
            .to_html()
        });

        assert_eq!(delays(&html), vec!["0", "0.2", "0.4", "0", "0.2"], "{html}");
    }

    #[test]
    fn test_backdrop_sits_outside_the_container() {
        let owner = Owner::new();
        let html = owner.with(|| {
            view! {
                <RevealSection section=Section::Home inner_class="inner">
                    <Backdrop slot>
                        <div class="decor"></div>
                    </Backdrop>
                    <RevealItem>"x"</RevealItem>
                </RevealSection>
            }
            .to_html()
        });

        let decor = html.find("class=\"decor\"").unwrap_or_else(|| panic!("{html}"));
        let inner = html.find("class=\"inner\"").unwrap_or_else(|| panic!("{html}"));
        assert!(decor < inner, "{html}");
        assert_eq!(div_depth(&html, decor), div_depth(&html, inner), "{html}");
    }

    /// Number of `<div>`s open at byte offset `at`.
    fn div_depth(html: &str, at: usize) -> usize {
        let before = &html[..at];
        let tag_start = before.rfind('<').unwrap_or(0);
        let before = &html[..tag_start];
        before.matches("<div").count() - before.matches("</div>").count()
    }
}
