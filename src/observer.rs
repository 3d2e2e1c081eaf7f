/// Minimum visible fraction of a section before it counts as seen.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserveOptions {
    threshold: f64,
    pub trigger_once: bool,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            trigger_once: true,
        }
    }
}

impl ObserveOptions {
    /// `threshold` is a fraction of the element's area and is clamped to `[0, 1]`.
    pub fn new(threshold: f64, trigger_once: bool) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            trigger_once,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// Per-element visibility signal fed by intersection entries.
///
/// With `trigger_once` the signal latches: after the first positive report
/// it stays `true` no matter what later entries say. Once released (the
/// element unmounted) every report is ignored.
#[derive(Debug, Clone)]
pub struct VisibilityLatch {
    options: ObserveOptions,
    visible: bool,
    released: bool,
}

impl VisibilityLatch {
    pub fn new(options: ObserveOptions) -> Self {
        Self {
            options,
            visible: false,
            released: false,
        }
    }

    pub fn options(&self) -> ObserveOptions {
        self.options
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Feeds one intersection entry and returns the current signal.
    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> bool {
        if self.released {
            log::debug!("ignoring intersection report for released element");
            return self.visible;
        }
        if self.visible && self.options.trigger_once {
            return true;
        }
        self.visible = intersecting && ratio >= self.options.threshold;
        self.visible
    }

    /// Stops listening; later reports have no effect.
    pub fn release(&mut self) {
        self.released = true;
    }

    /// True while the observer still has something to report, i.e. the
    /// underlying browser observer should stay connected.
    pub fn wants_reports(&self) -> bool {
        !self.released && !(self.visible && self.options.trigger_once)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_gate() {
        let mut latch = VisibilityLatch::new(ObserveOptions::default());
        assert!(!latch.observe(true, 0.05));
        assert!(!latch.observe(false, 0.0));
        assert!(latch.observe(true, 0.1));
    }

    #[test]
    fn test_trigger_once_latches() {
        let mut latch = VisibilityLatch::new(ObserveOptions::default());
        assert!(latch.observe(true, 0.5));
        assert!(!latch.wants_reports());
        for _ in 0..5 {
            assert!(latch.observe(false, 0.0));
            assert!(latch.observe(true, 0.02));
        }
        assert!(latch.is_visible());
    }

    #[test]
    fn test_without_trigger_once_follows_entries() {
        let mut latch = VisibilityLatch::new(ObserveOptions::new(0.5, false));
        assert!(latch.observe(true, 0.75));
        assert!(!latch.observe(true, 0.25));
        assert!(latch.wants_reports());
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(ObserveOptions::new(-1.0, true).threshold(), 0.0);
        assert_eq!(ObserveOptions::new(3.0, true).threshold(), 1.0);
        assert_eq!(ObserveOptions::new(f64::NAN, true).threshold(), DEFAULT_THRESHOLD);

        // zero threshold: any intersection counts
        let mut latch = VisibilityLatch::new(ObserveOptions::new(0.0, true));
        assert!(latch.observe(true, 0.0));
    }

    #[test]
    fn test_released_before_visible_ignores_reports() {
        let mut latch = VisibilityLatch::new(ObserveOptions::default());
        latch.release();
        assert!(!latch.observe(true, 1.0));
        assert!(!latch.is_visible());
        assert!(!latch.wants_reports());
    }
}
