use thiserror::Error;

/// Vertical scroll distance in pixels after which the navbar drops its
/// transparent style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Minimum intersection ratio a section must exceed to claim the active slot.
pub const ACTIVE_SECTION_RATIO: f64 = 0.5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error("cannot attach with an empty section list")]
    EmptySectionList,
}

/// Derived navigation state, recomputed on every qualifying viewport event.
#[derive(Debug, Clone, PartialEq)]
pub struct NavViewState {
    pub is_scrolled: bool,
    pub active_section: String,
    pub menu_open: bool,
    pub scroll_progress: f64,
}

impl Default for NavViewState {
    fn default() -> Self {
        Self {
            is_scrolled: false,
            active_section: String::new(),
            menu_open: false,
            scroll_progress: 0.0,
        }
    }
}

/// Folds scroll and section-visibility events into a [`NavViewState`].
///
/// The tracker is host-agnostic: it never touches `window` or `document`.
/// Events are pushed in by whoever owns the subscriptions (see
/// [`super::surface::SurfaceHandle`]), which keeps this testable without a
/// rendering environment. While detached, every mutating operation is a
/// silent no-op.
pub struct ViewportTracker {
    sections: Vec<String>,
    state: NavViewState,
    attached: bool,
}

impl ViewportTracker {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            state: NavViewState::default(),
            attached: false,
        }
    }

    /// Registers the ordered set of observable section ids and resets the
    /// state to its defaults, with the first section active.
    pub fn attach<I, S>(&mut self, sections: I) -> Result<(), TrackerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections: Vec<String> = sections.into_iter().map(Into::into).collect();
        if sections.is_empty() {
            return Err(TrackerError::EmptySectionList);
        }
        self.state = NavViewState {
            active_section: sections[0].clone(),
            ..NavViewState::default()
        };
        self.sections = sections;
        self.attached = true;
        Ok(())
    }

    /// Stops folding events. Idempotent; the last state is kept so the UI
    /// does not flicker during teardown.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn state(&self) -> &NavViewState {
        &self.state
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Folds a scroll sample. `max_offset <= 0` (content shorter than the
    /// viewport) reports zero progress rather than dividing by zero.
    pub fn on_scroll(&mut self, offset: f64, max_offset: f64) {
        if !self.attached {
            return;
        }
        self.state.is_scrolled = offset > SCROLL_THRESHOLD_PX;
        self.state.scroll_progress = if max_offset <= 0.0 {
            0.0
        } else {
            (offset / max_offset).clamp(0.0, 1.0)
        };
    }

    /// Folds one visibility report. Within a batch the last qualifying
    /// report wins; reports for ids that were never registered are ignored.
    pub fn on_visibility_change(&mut self, section_id: &str, visible: bool, ratio: f64) {
        if !self.attached || !visible || ratio <= ACTIVE_SECTION_RATIO {
            return;
        }
        if self.sections.iter().any(|s| s == section_id) {
            self.state.active_section = section_id.to_string();
        }
    }

    pub fn toggle_menu(&mut self) {
        if !self.attached {
            return;
        }
        self.state.menu_open = !self.state.menu_open;
    }

    pub fn close_menu(&mut self) {
        if !self.attached {
            return;
        }
        self.state.menu_open = false;
    }
}

impl Default for ViewportTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attached() -> ViewportTracker {
        let mut tracker = ViewportTracker::new();
        tracker
            .attach(["home", "services", "about"])
            .expect("non-empty section list");
        tracker
    }

    #[test]
    fn attach_rejects_empty_section_list() {
        let mut tracker = ViewportTracker::new();
        let err = tracker.attach(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, TrackerError::EmptySectionList);
        assert!(!tracker.is_attached());
    }

    #[test]
    fn attach_defaults_to_first_section() {
        let tracker = attached();
        let state = tracker.state();
        assert!(!state.is_scrolled);
        assert_eq!(state.active_section, "home");
        assert!(!state.menu_open);
        assert_eq!(state.scroll_progress, 0.0);
    }

    #[test]
    fn scroll_below_threshold_is_not_scrolled() {
        let mut tracker = attached();
        tracker.on_scroll(0.0, 1000.0);
        assert!(!tracker.state().is_scrolled);
        assert_eq!(tracker.state().scroll_progress, 0.0);
    }

    #[test]
    fn scroll_past_threshold_sets_flag_and_progress() {
        let mut tracker = attached();
        tracker.on_scroll(51.0, 1000.0);
        assert!(tracker.state().is_scrolled);
        assert!((tracker.state().scroll_progress - 0.051).abs() < 1e-12);
    }

    #[test]
    fn zero_scroll_range_reports_zero_progress() {
        let mut tracker = attached();
        tracker.on_scroll(1000.0, 0.0);
        assert_eq!(tracker.state().scroll_progress, 0.0);
        tracker.on_scroll(1000.0, -5.0);
        assert_eq!(tracker.state().scroll_progress, 0.0);
    }

    #[test]
    fn progress_is_clamped_to_unit_interval() {
        let mut tracker = attached();
        for offset in [0.0, 1.0, 499.5, 500.0, 2000.0] {
            tracker.on_scroll(offset, 500.0);
            let progress = tracker.state().scroll_progress;
            assert!((0.0..=1.0).contains(&progress), "offset {offset} -> {progress}");
        }
    }

    #[test]
    fn last_visibility_report_in_batch_wins() {
        let mut tracker = attached();
        tracker.on_visibility_change("services", true, 0.6);
        tracker.on_visibility_change("about", true, 0.55);
        assert_eq!(tracker.state().active_section, "about");
    }

    #[test]
    fn visibility_below_ratio_threshold_is_ignored() {
        let mut tracker = attached();
        tracker.on_visibility_change("services", true, 0.5);
        assert_eq!(tracker.state().active_section, "home");
        tracker.on_visibility_change("services", true, 0.2);
        assert_eq!(tracker.state().active_section, "home");
    }

    #[test]
    fn invisible_report_is_ignored() {
        let mut tracker = attached();
        tracker.on_visibility_change("services", false, 0.9);
        assert_eq!(tracker.state().active_section, "home");
    }

    #[test]
    fn unregistered_section_is_ignored() {
        let mut tracker = attached();
        tracker.on_visibility_change("pricing", true, 0.9);
        assert_eq!(tracker.state().active_section, "home");
    }

    #[test]
    fn menu_toggle_round_trips_and_close_is_idempotent() {
        let mut tracker = attached();
        tracker.toggle_menu();
        assert!(tracker.state().menu_open);
        tracker.toggle_menu();
        assert!(!tracker.state().menu_open);

        tracker.toggle_menu();
        tracker.close_menu();
        tracker.close_menu();
        assert!(!tracker.state().menu_open);
    }

    #[test]
    fn scroll_never_touches_menu_state() {
        let mut tracker = attached();
        tracker.toggle_menu();
        tracker.on_scroll(500.0, 1000.0);
        assert!(tracker.state().menu_open);
    }

    #[test]
    fn operations_before_attach_are_no_ops() {
        let mut tracker = ViewportTracker::new();
        tracker.on_scroll(500.0, 1000.0);
        tracker.on_visibility_change("home", true, 0.9);
        tracker.toggle_menu();
        assert_eq!(tracker.state(), &NavViewState::default());
    }

    #[test]
    fn events_after_detach_leave_state_unchanged() {
        let mut tracker = attached();
        tracker.on_scroll(200.0, 1000.0);
        let before = tracker.state().clone();

        tracker.detach();
        tracker.detach(); // idempotent
        tracker.on_scroll(900.0, 1000.0);
        tracker.on_visibility_change("about", true, 0.9);
        tracker.toggle_menu();
        assert_eq!(tracker.state(), &before);
    }

    #[test]
    fn reattach_resets_to_defaults() {
        let mut tracker = attached();
        tracker.on_scroll(500.0, 1000.0);
        tracker.detach();
        tracker.attach(["intro", "contact"]).unwrap();
        assert_eq!(tracker.state().active_section, "intro");
        assert!(!tracker.state().is_scrolled);
        assert_eq!(tracker.state().scroll_progress, 0.0);
    }
}
