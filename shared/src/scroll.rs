/// Tracks whether the page has been scrolled past the nav bar threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    threshold: f64,
    scrolled: bool,
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, scrolled: false }
    }

    /// Record a new vertical offset. Returns true when the flag flipped.
    pub fn observe(&mut self, offset: f64) -> bool {
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let mut tracker = ScrollTracker::new(50.0);
        assert!(!tracker.is_scrolled());

        assert!(!tracker.observe(50.0));
        assert!(!tracker.is_scrolled());

        assert!(tracker.observe(50.5));
        assert!(tracker.is_scrolled());
    }

    #[test]
    fn test_reports_only_flips() {
        let mut tracker = ScrollTracker::new(50.0);
        assert!(tracker.observe(200.0));
        assert!(!tracker.observe(400.0));
        assert!(tracker.observe(10.0));
        assert!(!tracker.observe(0.0));
    }
}
