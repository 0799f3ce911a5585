//! Interaction state machine for the carousel
//!
//! The controller is the sole writer of the track position. It arbitrates
//! between the three driving inputs (drag, auto-advance, click) so that no
//! two of them act at once, and performs the silent boundary correction when
//! a committed move lands on a cloned slide.

use super::track;

/// Interaction phase. `Dragging` and `Transitioning` are mutually exclusive
/// and both suppress auto-advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    Transitioning,
}

/// Threshold and layout constants for one controller instance.
#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    /// Number of boundary slides duplicated at each end of the track.
    pub clone_count: usize,
    /// Minimum drag distance (px) that commits a one-slide move.
    pub commit_threshold: f32,
    /// Drag distance (px) beyond which a release no longer counts as a click.
    pub click_threshold: f32,
    /// Slide width used until the first live measurement arrives.
    pub fallback_slide_width: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            clone_count: 3,
            commit_threshold: 40.0,
            click_threshold: 5.0,
            fallback_slide_width: 300.0,
        }
    }
}

/// Outcome of a pointer release, reported to the caller so it can open the
/// activated landing page or start the snap-back animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// No drag session was active.
    Ignored,
    /// The drag crossed the commit threshold; the position moved by one
    /// slide in the given direction.
    Commit(i32),
    /// The drag fell short; the track snaps back to the pre-drag offset.
    /// `click` is true when the pointer never moved past the click
    /// threshold, i.e. the release counts as a tap on the current slide.
    SnapBack { click: bool },
}

#[derive(Debug, Clone, Copy)]
struct DragSession {
    start_x: f32,
    start_offset: f32,
    moved: bool,
}

/// Owns all mutable interaction state of one carousel instance.
#[derive(Debug)]
pub struct Controller {
    len: usize,
    clone_count: usize,
    tuning: Tuning,
    slide_width: f32,
    position: usize,
    offset: f32,
    last_offset: f32,
    animated: bool,
    phase: Phase,
    drag: Option<DragSession>,
    hovered: bool,
}

impl Controller {
    /// Create a controller for a source list of `len` items.
    ///
    /// The effective clone count is clamped to `len`, so short lists degrade
    /// to fewer (or zero) boundary clones instead of wrapping unexpectedly.
    pub fn new(len: usize, tuning: Tuning) -> Self {
        let clone_count = tuning.clone_count.min(len);
        let slide_width = tuning.fallback_slide_width;
        let position = clone_count;
        let offset = track::index_to_offset(position, slide_width);

        Self {
            len,
            clone_count,
            tuning,
            slide_width,
            position,
            offset,
            last_offset: offset,
            animated: false,
            phase: Phase::Idle,
            drag: None,
            hovered: false,
        }
    }

    /// Advance one slide from the auto-play timer. Ignored outside `Idle`.
    pub fn auto_advance(&mut self) -> bool {
        if self.phase != Phase::Idle || self.len == 0 {
            return false;
        }
        self.begin_move(self.position + 1);
        true
    }

    /// Advance or retreat one slide from the navigation arrows.
    /// Ignored outside `Idle`, like any other input during a transition.
    pub fn navigate(&mut self, delta: i32) -> bool {
        if self.phase != Phase::Idle || self.len == 0 || delta == 0 {
            return false;
        }
        let next = if delta > 0 {
            self.position + 1
        } else {
            self.position.saturating_sub(1)
        };
        self.begin_move(next);
        true
    }

    /// Start a drag session at pointer x-coordinate `x`.
    ///
    /// Rejected while a transition is still running (fast-drag guard) or
    /// while another session is active.
    pub fn pointer_pressed(&mut self, x: f32) -> bool {
        if self.phase != Phase::Idle || self.len == 0 {
            return false;
        }
        self.drag = Some(DragSession {
            start_x: x,
            start_offset: self.offset,
            moved: false,
        });
        // The track must follow the pointer 1:1 while dragging.
        self.animated = false;
        self.phase = Phase::Dragging;
        true
    }

    /// Track a pointer move during a drag session.
    pub fn pointer_moved(&mut self, x: f32) {
        let Some(drag) = &mut self.drag else {
            return;
        };
        let delta = x - drag.start_x;
        if delta.abs() > self.tuning.click_threshold {
            // Sticky for the rest of the session: a drag is never a tap.
            drag.moved = true;
        }
        self.offset = drag.start_offset + delta;
    }

    /// End the drag session and decide between commit, snap-back and click.
    pub fn pointer_released(&mut self) -> Release {
        let Some(drag) = self.drag.take() else {
            return Release::Ignored;
        };

        let delta = self.offset - drag.start_offset;
        self.animated = true;

        if delta.abs() >= self.tuning.commit_threshold {
            // Dragging right reveals the previous slide.
            let direction = if delta > 0.0 { -1 } else { 1 };
            let next = if direction < 0 {
                self.position.saturating_sub(1)
            } else {
                self.position + 1
            };
            self.begin_move(next);
            Release::Commit(direction)
        } else {
            self.last_offset = self.offset;
            self.offset = drag.start_offset;
            self.phase = Phase::Idle;
            Release::SnapBack { click: !drag.moved }
        }
    }

    /// Called when the rendering layer reports the transition animation as
    /// finished. Applies the boundary correction when the committed position
    /// landed on a clone; the corrected jump renders without animation for
    /// exactly one frame, so it is invisible. Returns whether a correction
    /// happened.
    pub fn transition_done(&mut self) -> bool {
        if self.phase != Phase::Transitioning {
            return false;
        }
        self.phase = Phase::Idle;

        match track::correct_boundary(self.position, self.len, self.clone_count) {
            Some(real) => {
                self.position = real;
                self.offset = track::index_to_offset(real, self.slide_width);
                self.last_offset = self.offset;
                self.animated = false;
                true
            }
            None => false,
        }
    }

    /// Hovering pauses auto-play; leaving resumes it with a fresh interval.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Record a live slide-width measurement (viewport resize).
    ///
    /// Zero or negative widths keep the last known value so a degenerate
    /// layout degrades to a stale render instead of an error. Outside of a
    /// drag the offset is re-derived and repositioned without animation.
    pub fn set_slide_width(&mut self, width: f32) {
        if width <= 0.0 {
            return;
        }
        self.slide_width = width;
        if self.phase != Phase::Dragging {
            self.offset = track::index_to_offset(self.position, width);
            self.last_offset = self.offset;
            self.animated = false;
        }
    }

    /// Whether the auto-advance timer should currently exist.
    pub fn autoplay_eligible(&self) -> bool {
        self.len > 0 && !self.hovered && self.phase != Phase::Dragging
    }

    /// Current padded-track position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Index into the source list that the current position shows, with
    /// clones mapped to their real counterpart (for the indicator dots).
    pub fn real_index(&self) -> usize {
        let corrected = track::correct_boundary(self.position, self.len, self.clone_count)
            .unwrap_or(self.position);
        corrected - self.clone_count
    }

    /// Target pixel offset of the track.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Offset the current animated move started from.
    pub fn last_offset(&self) -> f32 {
        self.last_offset
    }

    /// Whether the current offset change should animate.
    pub fn animated(&self) -> bool {
        self.animated
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    pub fn slide_width(&self) -> f32 {
        self.slide_width
    }

    pub fn clone_count(&self) -> usize {
        self.clone_count
    }

    fn begin_move(&mut self, next: usize) {
        self.last_offset = self.offset;
        self.position = next;
        self.offset = track::index_to_offset(next, self.slide_width);
        self.animated = true;
        self.phase = Phase::Transitioning;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 300.0;

    fn controller(len: usize) -> Controller {
        Controller::new(len, Tuning::default())
    }

    /// Drive one full drag: press at `start`, move to `end`, release.
    fn drag(c: &mut Controller, start: f32, end: f32) -> Release {
        assert!(c.pointer_pressed(start), "press must be accepted while idle");
        c.pointer_moved(end);
        c.pointer_released()
    }

    mod property_initial_state {
        use super::*;

        #[test]
        fn starts_on_first_real_slide() {
            let c = controller(6);
            assert_eq!(c.position(), 3, "starting position is K");
            assert_eq!(c.real_index(), 0);
            assert_eq!(c.offset(), -3.0 * WIDTH);
            assert_eq!(c.phase(), Phase::Idle);
        }

        #[test]
        fn clone_count_is_clamped_to_short_lists() {
            let c = controller(2);
            assert_eq!(c.clone_count(), 2);
            assert_eq!(c.position(), 2);

            let empty = controller(0);
            assert_eq!(empty.clone_count(), 0);
            assert!(!empty.autoplay_eligible(), "empty list never auto-plays");
        }
    }

    mod property_auto_advance {
        use super::*;

        #[test]
        fn one_tick_moves_one_slide() {
            let mut c = controller(6);
            assert!(c.auto_advance());
            assert_eq!(c.position(), 4, "position is K+1 after one tick");
            assert_eq!(c.offset(), -4.0 * WIDTH);
            assert!(c.animated());
            assert!(c.is_transitioning());
        }

        #[test]
        fn ticks_are_ignored_until_the_transition_finishes() {
            let mut c = controller(6);
            assert!(c.auto_advance());
            assert!(!c.auto_advance(), "second tick mid-transition is dropped");
            assert_eq!(c.position(), 4);

            c.transition_done();
            assert!(c.auto_advance());
            assert_eq!(c.position(), 5);
        }

        #[test]
        fn full_cycle_returns_to_start_with_one_correction() {
            // N = 6, K = 3: six ticks wrap the loop exactly once.
            let mut c = controller(6);
            let mut corrections = 0;

            for _ in 0..6 {
                assert!(c.auto_advance());
                if c.transition_done() {
                    corrections += 1;
                }
            }

            assert_eq!(c.position(), 3, "six ticks over six slides loop back to K");
            assert_eq!(c.real_index(), 0);
            assert_eq!(
                corrections, 1,
                "crossing the tail boundary corrects exactly once"
            );
        }

        #[test]
        fn correction_lands_on_the_equivalent_real_slide() {
            let mut c = controller(6);
            // Walk to the last real slide, then one past it.
            for _ in 0..6 {
                c.auto_advance();
                c.transition_done();
            }
            // Position 9 (first tail clone) was silently rewritten to 3.
            assert_eq!(c.position(), 3);
            assert_eq!(c.offset(), -3.0 * WIDTH);
            assert!(
                !c.animated(),
                "the corrective jump must render without animation"
            );
        }
    }

    mod property_drag_thresholds {
        use super::*;

        #[test]
        fn release_at_commit_threshold_commits() {
            let mut c = controller(6);
            let release = drag(&mut c, 100.0, 140.0);
            assert_eq!(release, Release::Commit(-1), "exactly 40px commits");
            assert_eq!(c.position(), 2, "dragging right retreats one slide");
            assert!(c.is_transitioning());
        }

        #[test]
        fn release_below_commit_threshold_snaps_back() {
            let mut c = controller(6);
            let before = c.offset();
            let release = drag(&mut c, 100.0, 139.0);
            assert_eq!(release, Release::SnapBack { click: false });
            assert_eq!(c.position(), 3, "39px is not enough to move");
            assert_eq!(c.offset(), before, "offset snaps back to pre-drag value");
            assert_eq!(c.phase(), Phase::Idle);
            assert!(c.animated(), "the snap-back itself animates");
        }

        #[test]
        fn drag_left_advances_one_slide() {
            let mut c = controller(6);
            let release = drag(&mut c, 200.0, 155.0);
            assert_eq!(release, Release::Commit(1));
            assert_eq!(c.position(), 4);
        }

        #[test]
        fn drag_right_past_threshold_retreats_and_suppresses_click() {
            let mut c = controller(6);
            let release = drag(&mut c, 100.0, 145.0);
            assert_eq!(release, Release::Commit(-1));
            assert_eq!(c.position(), 2);
            c.transition_done();
            assert_eq!(c.position(), 8, "landing on a head clone corrects to 8");
        }

        #[test]
        fn offset_follows_the_pointer_during_the_drag() {
            let mut c = controller(6);
            let start_offset = c.offset();
            c.pointer_pressed(100.0);
            assert!(!c.animated(), "dragging disables animation");

            c.pointer_moved(130.0);
            assert_eq!(c.offset(), start_offset + 30.0);
            c.pointer_moved(80.0);
            assert_eq!(c.offset(), start_offset - 20.0);
            c.pointer_released();
        }
    }

    mod property_click_suppression {
        use super::*;

        #[test]
        fn small_jitter_still_counts_as_a_click() {
            // Deltas up to the 5px threshold keep the moved flag unset.
            let mut c = controller(6);
            c.pointer_pressed(100.0);
            for x in [102.0, 97.0, 105.0, 100.0] {
                c.pointer_moved(x);
            }
            assert_eq!(c.pointer_released(), Release::SnapBack { click: true });
        }

        #[test]
        fn moved_flag_is_sticky_within_a_session() {
            // Crossing the threshold once suppresses the click even if the
            // pointer returns to its starting point.
            let mut c = controller(6);
            c.pointer_pressed(100.0);
            c.pointer_moved(110.0);
            c.pointer_moved(100.0);
            assert_eq!(c.pointer_released(), Release::SnapBack { click: false });
        }

        #[test]
        fn stationary_release_is_a_click() {
            let mut c = controller(6);
            c.pointer_pressed(100.0);
            assert_eq!(c.pointer_released(), Release::SnapBack { click: true });
        }
    }

    mod property_input_exclusion {
        use super::*;

        #[test]
        fn press_is_rejected_while_transitioning() {
            let mut c = controller(6);
            c.auto_advance();
            assert!(
                !c.pointer_pressed(100.0),
                "fast-drag guard: no new drag until the transition completes"
            );
            c.transition_done();
            assert!(c.pointer_pressed(100.0));
        }

        #[test]
        fn navigation_is_rejected_outside_idle() {
            let mut c = controller(6);
            c.auto_advance();
            assert!(!c.navigate(1));

            c.transition_done();
            c.pointer_pressed(100.0);
            assert!(!c.navigate(-1), "arrows are inert during a drag");
        }

        #[test]
        fn release_without_a_session_is_ignored() {
            let mut c = controller(6);
            assert_eq!(c.pointer_released(), Release::Ignored);
        }

        #[test]
        fn moves_without_a_session_are_ignored() {
            let mut c = controller(6);
            let offset = c.offset();
            c.pointer_moved(500.0);
            assert_eq!(c.offset(), offset);
        }
    }

    mod property_autoplay_gating {
        use super::*;

        #[test]
        fn hover_pauses_and_unhover_resumes() {
            let mut c = controller(6);
            assert!(c.autoplay_eligible());

            c.set_hovered(true);
            assert!(!c.autoplay_eligible(), "hover tears the timer down");

            c.set_hovered(false);
            assert!(c.autoplay_eligible(), "leaving restores it");
        }

        #[test]
        fn dragging_pauses_autoplay() {
            let mut c = controller(6);
            c.pointer_pressed(100.0);
            assert!(!c.autoplay_eligible());

            c.pointer_moved(150.0);
            c.pointer_released();
            assert!(c.autoplay_eligible(), "release re-arms the timer");
        }

        #[test]
        fn transitioning_keeps_the_timer_but_drops_its_ticks() {
            let mut c = controller(6);
            c.auto_advance();
            assert!(c.autoplay_eligible());
            assert!(!c.auto_advance(), "ticks are still ignored mid-transition");
        }
    }

    mod property_measurement {
        use super::*;

        #[test]
        fn resize_rederives_the_offset() {
            let mut c = controller(6);
            c.set_slide_width(500.0);
            assert_eq!(c.slide_width(), 500.0);
            assert_eq!(c.offset(), -3.0 * 500.0);
            assert!(!c.animated(), "a resize repositions without animation");
        }

        #[test]
        fn zero_or_negative_measurements_keep_the_last_width() {
            let mut c = controller(6);
            c.set_slide_width(480.0);
            c.set_slide_width(0.0);
            assert_eq!(c.slide_width(), 480.0);
            c.set_slide_width(-10.0);
            assert_eq!(c.slide_width(), 480.0);
        }

        #[test]
        fn fallback_width_applies_before_any_measurement() {
            let c = controller(6);
            assert_eq!(c.slide_width(), Tuning::default().fallback_slide_width);
        }

        #[test]
        fn resize_during_a_drag_leaves_the_dragged_offset_alone() {
            let mut c = controller(6);
            c.pointer_pressed(100.0);
            c.pointer_moved(120.0);
            let dragged = c.offset();

            c.set_slide_width(500.0);
            assert_eq!(c.offset(), dragged, "live drag offset is not rewritten");
            c.pointer_released();
        }
    }
}
