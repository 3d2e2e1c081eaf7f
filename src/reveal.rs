//! One-shot reveal state machine shared by every page section.

use std::time::Duration;

use crate::motion::{Stagger, VariantName};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    pub fn is_visible(&self) -> bool {
        matches!(self, RevealState::Visible)
    }

    pub fn variant(&self) -> VariantName {
        match self {
            RevealState::Hidden => VariantName::Hidden,
            RevealState::Visible => VariantName::Visible,
        }
    }
}

/// Drives `Hidden -> Visible` for one mounted section.
///
/// The transition happens at most once per mount. Child start times are
/// offsets from the reveal time, so no child can start before its section.
#[derive(Debug, Clone)]
pub struct RevealController {
    state: RevealState,
    revealed_at: Option<Duration>,
    mounted: bool,
}

impl Default for RevealController {
    fn default() -> Self {
        Self {
            state: RevealState::Hidden,
            revealed_at: None,
            mounted: true,
        }
    }
}

impl RevealController {
    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn revealed_at(&self) -> Option<Duration> {
        self.revealed_at
    }

    /// Reveals the section at `now`. Returns true only for the call that
    /// performed the transition.
    pub fn trigger(&mut self, now: Duration) -> bool {
        if !self.mounted {
            log::debug!("reveal trigger after unmount ignored");
            return false;
        }
        if self.state.is_visible() {
            return false;
        }
        self.state = RevealState::Visible;
        self.revealed_at = Some(now);
        true
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}

/// Hands out stagger offsets to the reveal units of one container, in
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerSlots {
    stagger: Stagger,
    next: usize,
}

impl StaggerSlots {
    pub fn new(stagger: Stagger) -> Self {
        Self { stagger, next: 0 }
    }

    /// Offset of the next unit.
    pub fn claim(&mut self) -> Duration {
        let offset = self.slot(self.next);
        self.next += 1;
        offset
    }

    /// Offset of unit `index`, without claiming it. Lists that are rebuilt
    /// use this so their offsets don't keep growing.
    pub fn slot(&self, index: usize) -> Duration {
        self.stagger.offset(index)
    }

    /// Claims one slot for a nested container and returns its start offset
    /// along with the slots for its own children.
    pub fn nested(&mut self) -> (Duration, StaggerSlots) {
        let start = self.claim();
        (start, StaggerSlots::new(self.stagger.offset_by(start)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{DEFAULT_STAGGER, SKILLS_STAGGER};
    use crate::observer::{ObserveOptions, VisibilityLatch};

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn test_reveals_once_and_never_reverts() {
        let mut latch = VisibilityLatch::new(ObserveOptions::default());
        let mut ctl = RevealController::default();
        let reports = [
            (false, 0.0),
            (true, 0.3),
            (false, 0.0),
            (true, 0.9),
            (false, 0.0),
        ];
        let mut transitions = 0;
        for (t, (intersecting, ratio)) in reports.into_iter().enumerate() {
            if latch.observe(intersecting, ratio) && ctl.trigger(ms(t as u64 * 100)) {
                transitions += 1;
            }
            if t >= 1 {
                assert_eq!(ctl.state(), RevealState::Visible);
            }
        }
        assert_eq!(transitions, 1);
        assert_eq!(ctl.revealed_at(), Some(ms(100)));
    }

    #[test]
    fn test_trigger_is_idempotent() {
        let mut ctl = RevealController::default();
        assert!(ctl.trigger(ms(1000)));
        assert!(!ctl.trigger(ms(5000)));
        assert_eq!(ctl.revealed_at(), Some(ms(1000)));
    }

    #[test]
    fn test_unit_start_times_follow_stagger() {
        for interval in [DEFAULT_STAGGER, SKILLS_STAGGER] {
            let mut ctl = RevealController::default();
            let mut slots = StaggerSlots::new(Stagger::new(interval));
            let reveal = ms(2500);
            assert!(ctl.trigger(reveal));
            for i in 0..6u32 {
                let start = reveal + slots.claim();
                assert_eq!(start, reveal + interval * i);
                assert!(start >= reveal);
            }
        }
    }

    #[test]
    fn test_nested_container_offsets() {
        let mut slots = StaggerSlots::new(Stagger::new(DEFAULT_STAGGER));
        assert_eq!(slots.claim(), ms(0));
        assert_eq!(slots.claim(), ms(200));

        let (start, mut inner) = slots.nested();
        assert_eq!(start, ms(400));
        assert_eq!(inner.claim(), ms(400));
        assert_eq!(inner.claim(), ms(600));
        assert_eq!(inner.claim(), ms(800));

        // the group used exactly one parent slot
        assert_eq!(slots.claim(), ms(600));
    }

    #[test]
    fn test_indexed_slots_do_not_advance() {
        let mut slots = StaggerSlots::new(Stagger::new(DEFAULT_STAGGER));
        for _ in 0..3 {
            // a list rebuilt three times keeps the same offsets
            let offsets: Vec<_> = (0..4).map(|i| slots.slot(i)).collect();
            assert_eq!(offsets, vec![ms(0), ms(200), ms(400), ms(600)]);
        }
        assert_eq!(slots.claim(), ms(0));
    }

    #[test]
    fn test_unmount_before_reveal_is_inert() {
        let mut latch = VisibilityLatch::new(ObserveOptions::default());
        let mut ctl = RevealController::default();
        latch.release();
        ctl.unmount();

        // the browser delivers a late entry for the stale element
        let seen = latch.observe(true, 1.0);
        assert!(!seen);
        assert!(!ctl.trigger(ms(10)));
        assert_eq!(ctl.state(), RevealState::Hidden);
        assert_eq!(ctl.revealed_at(), None);
    }

    #[test]
    fn test_variant_mapping() {
        assert_eq!(RevealState::Hidden.variant(), VariantName::Hidden);
        assert_eq!(RevealState::Visible.variant(), VariantName::Visible);
        assert_eq!(RevealState::default(), RevealState::Hidden);
    }
}
