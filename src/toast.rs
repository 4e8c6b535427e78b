//! Toast notification lifecycle.
//!
//! A single transient message that confirms an action (e.g. an item added
//! to the cart), auto-dismisses after a fixed display duration, and can be
//! dismissed early by dragging it downward. Only one notification exists at
//! a time; a new `notify` replaces the current one in place.
//!
//! State transitions live here, rendering lives in `widgets::toast`. The
//! controller never touches the terminal, which keeps the state machine
//! testable with a plain `Instant`.

use std::time::{Duration, Instant};

/// Lifecycle phase of the notification slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No notification; nothing scheduled.
    #[default]
    Idle,
    /// Message is on screen, auto-hide countdown running.
    Visible,
    /// User is dragging the toast; all timers suspended.
    Dragging,
    /// Fading out, waiting for the cleanup deadline.
    Hiding,
}

/// A cancellable deadline for a scheduled transition.
///
/// Pause/resume is expressed by reading `remaining` before `cancel` and
/// re-scheduling with that remainder later, so a resumed countdown picks up
/// where it left off instead of restarting.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// Schedule the deadline at the given instant, replacing any prior one.
    pub fn schedule(&mut self, at: Instant) {
        self.at = Some(at);
    }

    /// Cancel the deadline. Cancelled deadlines are never due.
    pub fn cancel(&mut self) {
        self.at = None;
    }

    /// Whether the deadline is scheduled and has been reached.
    pub fn is_due(&self, now: Instant) -> bool {
        self.at.is_some_and(|at| now >= at)
    }

    /// Time left until the deadline, saturating at zero. `None` if cancelled.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.at.map(|at| at.saturating_duration_since(now))
    }

    /// The scheduled instant, if any.
    pub fn at(&self) -> Option<Instant> {
        self.at
    }

    pub fn is_scheduled(&self) -> bool {
        self.at.is_some()
    }
}

/// Timing and gesture parameters for the toast lifecycle.
#[derive(Debug, Clone, Copy)]
pub struct ToastTimings {
    /// How long the toast stays fully visible before it starts hiding.
    pub display: Duration,
    /// How long the hiding phase lasts before the slot resets to idle.
    pub linger: Duration,
    /// Cleanup delay after a drag commits to dismissal.
    pub fast_dismiss: Duration,
    /// Downward drag distance (in gesture points) beyond which a release
    /// dismisses instead of snapping back.
    pub dismiss_threshold: f32,
    /// Drag distance at which the projected opacity reaches zero.
    pub fade_distance: f32,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            display: Duration::from_millis(4000),
            linger: Duration::from_millis(2000),
            fast_dismiss: Duration::from_millis(300),
            dismiss_threshold: 55.0,
            fade_distance: 180.0,
        }
    }
}

/// Gesture bookkeeping while a drag is in progress.
///
/// The remaining durations are captured when the drag starts so a
/// below-threshold release resumes the countdown rather than restarting it.
#[derive(Debug, Clone, Copy)]
struct DragState {
    start_y: f32,
    offset: f32,
    remaining_hide: Duration,
    remaining_cleanup: Duration,
}

/// Outcome of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragRelease {
    /// Offset crossed the threshold; the toast is dismissing fast.
    Dismissed,
    /// Offset stayed below the threshold; the countdown resumed.
    Resumed,
    /// There was no drag in progress.
    NotDragging,
}

/// Owns the single notification slot and its two scheduled transitions.
///
/// All transition methods take an explicit `now` so tests can drive the
/// clock; the app-facing `notify` wrapper uses `Instant::now()`.
#[derive(Debug)]
pub struct ToastController {
    timings: ToastTimings,
    phase: Phase,
    message: String,
    hide_at: Deadline,
    cleanup_at: Deadline,
    drag: Option<DragState>,
}

impl ToastController {
    pub fn new(timings: ToastTimings) -> Self {
        Self {
            timings,
            phase: Phase::Idle,
            message: String::new(),
            hide_at: Deadline::default(),
            cleanup_at: Deadline::default(),
            drag: None,
        }
    }

    /// Show `message`, replacing any in-flight notification.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notify_at(Instant::now(), message);
    }

    /// Show `message` as of `now`.
    ///
    /// Cancels both pending deadlines before scheduling the new pair, so a
    /// stale timer from an earlier notification can never fire against the
    /// new one. Any in-progress drag is abandoned.
    pub fn notify_at(&mut self, now: Instant, message: impl Into<String>) {
        self.hide_at.cancel();
        self.cleanup_at.cancel();
        self.drag = None;

        self.message = message.into();
        self.phase = Phase::Visible;
        self.hide_at.schedule(now + self.timings.display);
        self.cleanup_at
            .schedule(now + self.timings.display + self.timings.linger);
    }

    /// Fire any due transitions. Call once per event-loop iteration.
    ///
    /// The hide deadline is always scheduled before the cleanup deadline,
    /// but both may be due within the same tick (a countdown resumed with
    /// zero remaining display time), so hide is checked first.
    pub fn tick(&mut self, now: Instant) {
        if self.phase == Phase::Visible && self.hide_at.is_due(now) {
            self.hide_at.cancel();
            self.phase = Phase::Hiding;
        }
        if self.phase == Phase::Hiding && self.cleanup_at.is_due(now) {
            self.reset();
        }
    }

    /// Start a drag at vertical position `y` (gesture points).
    ///
    /// Accepted while visible or already hiding; both deadlines are
    /// suspended with their remainders captured for a possible resume.
    /// Returns false (no-op) in any other phase.
    pub fn drag_begin(&mut self, now: Instant, y: f32) -> bool {
        if !matches!(self.phase, Phase::Visible | Phase::Hiding) {
            return false;
        }

        // A toast that is already hiding has no hide deadline left.
        let remaining_hide = self.hide_at.remaining(now).unwrap_or(Duration::ZERO);
        let remaining_cleanup = self.cleanup_at.remaining(now).unwrap_or(Duration::ZERO);
        self.hide_at.cancel();
        self.cleanup_at.cancel();

        self.drag = Some(DragState {
            start_y: y,
            offset: 0.0,
            remaining_hide,
            remaining_cleanup,
        });
        self.phase = Phase::Dragging;
        true
    }

    /// Track pointer movement during a drag. Upward motion is ignored; only
    /// a downward swipe dismisses. No-op unless a drag is in progress.
    pub fn drag_update(&mut self, y: f32) {
        if self.phase != Phase::Dragging {
            return;
        }
        if let Some(drag) = self.drag.as_mut() {
            drag.offset = (y - drag.start_y).max(0.0);
        }
    }

    /// Release (or cancel) the drag.
    ///
    /// Past the threshold the toast commits to dismissal with an
    /// accelerated cleanup; otherwise it snaps back and the suspended
    /// countdown resumes from where it was paused.
    pub fn drag_end(&mut self, now: Instant) -> DragRelease {
        if self.phase != Phase::Dragging {
            return DragRelease::NotDragging;
        }
        let Some(drag) = self.drag.take() else {
            // Phase says dragging but no gesture recorded; recover to idle.
            self.reset();
            return DragRelease::NotDragging;
        };

        if drag.offset > self.timings.dismiss_threshold {
            self.phase = Phase::Hiding;
            self.cleanup_at.schedule(now + self.timings.fast_dismiss);
            DragRelease::Dismissed
        } else {
            self.phase = Phase::Visible;
            self.hide_at.schedule(now + drag.remaining_hide);
            self.cleanup_at.schedule(now + drag.remaining_cleanup);
            DragRelease::Resumed
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current display text. Empty while idle.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether there is anything to render.
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Current downward drag distance in gesture points. Zero outside a drag.
    pub fn drag_offset(&self) -> f32 {
        self.drag.map_or(0.0, |d| d.offset)
    }

    /// Projected opacity in `0.0..=1.0`, a pure function of the drag offset.
    pub fn opacity(&self) -> f32 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::Dragging => (1.0 - self.drag_offset() / self.timings.fade_distance).max(0.0),
            Phase::Visible | Phase::Hiding => 1.0,
        }
    }

    /// Earliest scheduled transition, if any. Lets the event loop shorten
    /// its poll timeout while a toast is live instead of polling blindly.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.hide_at.at(), self.cleanup_at.at()) {
            (Some(h), Some(c)) => Some(h.min(c)),
            (Some(h), None) => Some(h),
            (None, Some(c)) => Some(c),
            (None, None) => None,
        }
    }

    /// Return the slot to idle: no message, no deadlines, no gesture.
    fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.message.clear();
        self.hide_at.cancel();
        self.cleanup_at.cancel();
        self.drag = None;
    }
}

impl Default for ToastController {
    fn default() -> Self {
        Self::new(ToastTimings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn controller() -> (ToastController, Instant) {
        (ToastController::default(), Instant::now())
    }

    #[test]
    fn starts_idle_with_no_deadlines() {
        let (toast, _) = controller();
        assert_eq!(toast.phase(), Phase::Idle);
        assert_eq!(toast.message(), "");
        assert_eq!(toast.drag_offset(), 0.0);
        assert!(toast.next_deadline().is_none());
    }

    #[test]
    fn full_lifecycle_without_interaction() {
        let (mut toast, t0) = controller();
        toast.notify_at(t0, "Margarita added to the cart");

        assert_eq!(toast.phase(), Phase::Visible);
        assert_eq!(toast.message(), "Margarita added to the cart");

        toast.tick(t0 + ms(3999));
        assert_eq!(toast.phase(), Phase::Visible);

        toast.tick(t0 + ms(4000));
        assert_eq!(toast.phase(), Phase::Hiding);

        toast.tick(t0 + ms(5999));
        assert_eq!(toast.phase(), Phase::Hiding);

        toast.tick(t0 + ms(6000));
        assert_eq!(toast.phase(), Phase::Idle);
        assert_eq!(toast.message(), "");
        assert!(toast.next_deadline().is_none());
    }

    #[test]
    fn second_notify_supersedes_first() {
        let (mut toast, t0) = controller();
        toast.notify_at(t0, "A");
        toast.notify_at(t0 + ms(100), "B");

        assert_eq!(toast.message(), "B");

        // A's original hide deadline must not cause a transition.
        toast.tick(t0 + ms(4000));
        assert_eq!(toast.phase(), Phase::Visible);
        assert_eq!(toast.message(), "B");

        // B's schedule runs measured from the second call.
        toast.tick(t0 + ms(4100));
        assert_eq!(toast.phase(), Phase::Hiding);
        toast.tick(t0 + ms(6100));
        assert_eq!(toast.phase(), Phase::Idle);
    }

    #[test]
    fn repeat_notify_restarts_the_schedule() {
        let (mut toast, t0) = controller();
        toast.notify_at(t0, "same");
        toast.notify_at(t0 + ms(1000), "same");

        toast.tick(t0 + ms(4999));
        assert_eq!(toast.phase(), Phase::Visible);
        toast.tick(t0 + ms(5000));
        assert_eq!(toast.phase(), Phase::Hiding);
        toast.tick(t0 + ms(7000));
        assert_eq!(toast.phase(), Phase::Idle);
    }

    #[test]
    fn drag_suspends_both_deadlines() {
        let (mut toast, t0) = controller();
        toast.notify_at(t0, "X");

        assert!(toast.drag_begin(t0 + ms(1000), 5.0));
        assert_eq!(toast.phase(), Phase::Dragging);
        assert!(toast.next_deadline().is_none());

        // Nothing fires while the finger is down, no matter how long.
        toast.tick(t0 + ms(60_000));
        assert_eq!(toast.phase(), Phase::Dragging);
    }

    #[test]
    fn release_below_threshold_resumes_countdown() {
        let (mut toast, t0) = controller();
        toast.notify_at(t0, "X");

        // Drag starts at t=3000 with 1000ms of display time left.
        assert!(toast.drag_begin(t0 + ms(3000), 10.0));
        toast.drag_update(40.0); // offset 30, below threshold
        assert_eq!(toast.drag_end(t0 + ms(3500)), DragRelease::Resumed);
        assert_eq!(toast.phase(), Phase::Visible);
        assert_eq!(toast.drag_offset(), 0.0);

        // Hide fires 1000ms after release, not 4000ms.
        toast.tick(t0 + ms(4499));
        assert_eq!(toast.phase(), Phase::Visible);
        toast.tick(t0 + ms(4500));
        assert_eq!(toast.phase(), Phase::Hiding);

        // Cleanup likewise resumes: 3000ms remained at drag start.
        toast.tick(t0 + ms(6499));
        assert_eq!(toast.phase(), Phase::Hiding);
        toast.tick(t0 + ms(6500));
        assert_eq!(toast.phase(), Phase::Idle);
    }

    #[test]
    fn release_past_threshold_dismisses_fast() {
        let (mut toast, t0) = controller();
        toast.notify_at(t0, "X");

        assert!(toast.drag_begin(t0 + ms(500), 0.0));
        toast.drag_update(60.0);
        assert_eq!(toast.drag_end(t0 + ms(600)), DragRelease::Dismissed);
        assert_eq!(toast.phase(), Phase::Hiding);

        toast.tick(t0 + ms(899));
        assert_eq!(toast.phase(), Phase::Hiding);
        toast.tick(t0 + ms(900));
        assert_eq!(toast.phase(), Phase::Idle);
        assert_eq!(toast.message(), "");
    }

    #[test]
    fn threshold_is_exclusive() {
        let (mut toast, t0) = controller();
        toast.notify_at(t0, "X");

        toast.drag_begin(t0 + ms(100), 0.0);
        toast.drag_update(55.0); // exactly at the threshold: snap back
        assert_eq!(toast.drag_end(t0 + ms(200)), DragRelease::Resumed);
        assert_eq!(toast.phase(), Phase::Visible);
    }

    #[test]
    fn upward_motion_is_ignored() {
        let (mut toast, t0) = controller();
        toast.notify_at(t0, "X");

        toast.drag_begin(t0 + ms(100), 50.0);
        toast.drag_update(10.0);
        assert_eq!(toast.drag_offset(), 0.0);
        assert_eq!(toast.opacity(), 1.0);
    }

    #[test]
    fn hiding_toast_is_still_draggable() {
        let (mut toast, t0) = controller();
        toast.notify_at(t0, "X");
        toast.tick(t0 + ms(4000));
        assert_eq!(toast.phase(), Phase::Hiding);

        assert!(toast.drag_begin(t0 + ms(4100), 0.0));
        toast.drag_update(100.0);
        assert_eq!(toast.drag_end(t0 + ms(4200)), DragRelease::Dismissed);

        toast.tick(t0 + ms(4500));
        assert_eq!(toast.phase(), Phase::Idle);
    }

    #[test]
    fn snap_back_from_hiding_resumes_with_no_display_time() {
        let (mut toast, t0) = controller();
        toast.notify_at(t0, "X");
        toast.tick(t0 + ms(4500));
        assert_eq!(toast.phase(), Phase::Hiding);

        // 1500ms of the hiding phase remain when the drag starts.
        assert!(toast.drag_begin(t0 + ms(4500), 0.0));
        toast.drag_update(20.0);
        assert_eq!(toast.drag_end(t0 + ms(4700)), DragRelease::Resumed);

        // Hide remainder was zero, so the very next tick goes back to
        // hiding; cleanup resumes its captured remainder.
        toast.tick(t0 + ms(4700));
        assert_eq!(toast.phase(), Phase::Hiding);
        toast.tick(t0 + ms(6199));
        assert_eq!(toast.phase(), Phase::Hiding);
        toast.tick(t0 + ms(6200));
        assert_eq!(toast.phase(), Phase::Idle);
    }

    #[test]
    fn gesture_events_outside_a_toast_are_no_ops() {
        let (mut toast, t0) = controller();

        assert!(!toast.drag_begin(t0, 0.0));
        toast.drag_update(100.0);
        assert_eq!(toast.drag_end(t0), DragRelease::NotDragging);
        assert_eq!(toast.phase(), Phase::Idle);
        assert_eq!(toast.drag_offset(), 0.0);
    }

    #[test]
    fn drag_update_outside_a_drag_is_a_no_op() {
        let (mut toast, t0) = controller();
        toast.notify_at(t0, "X");
        toast.drag_update(500.0);
        assert_eq!(toast.drag_offset(), 0.0);
        assert_eq!(toast.phase(), Phase::Visible);
    }

    #[test]
    fn notify_during_drag_abandons_the_gesture() {
        let (mut toast, t0) = controller();
        toast.notify_at(t0, "A");
        toast.drag_begin(t0 + ms(1000), 0.0);
        toast.drag_update(40.0);

        toast.notify_at(t0 + ms(1500), "B");
        assert_eq!(toast.phase(), Phase::Visible);
        assert_eq!(toast.message(), "B");
        assert_eq!(toast.drag_offset(), 0.0);

        // Fresh schedule measured from the new call.
        toast.tick(t0 + ms(5500));
        assert_eq!(toast.phase(), Phase::Hiding);
    }

    #[test]
    fn opacity_fades_linearly_with_drag_distance() {
        let (mut toast, t0) = controller();
        toast.notify_at(t0, "X");
        assert_eq!(toast.opacity(), 1.0);

        toast.drag_begin(t0 + ms(100), 0.0);
        toast.drag_update(90.0);
        assert!((toast.opacity() - 0.5).abs() < f32::EPSILON);

        toast.drag_update(180.0);
        assert_eq!(toast.opacity(), 0.0);

        toast.drag_update(400.0); // floored at zero, never negative
        assert_eq!(toast.opacity(), 0.0);
    }

    #[test]
    fn hide_is_never_scheduled_after_cleanup() {
        let (mut toast, t0) = controller();
        toast.notify_at(t0, "X");

        let hide = toast.hide_at.at().unwrap();
        let cleanup = toast.cleanup_at.at().unwrap();
        assert!(hide < cleanup);

        // The ordering survives a pause and resume.
        toast.drag_begin(t0 + ms(1200), 0.0);
        toast.drag_end(t0 + ms(2000));
        let hide = toast.hide_at.at().unwrap();
        let cleanup = toast.cleanup_at.at().unwrap();
        assert!(hide <= cleanup);
    }

    #[test]
    fn next_deadline_reports_the_earliest_transition() {
        let (mut toast, t0) = controller();
        assert!(toast.next_deadline().is_none());

        toast.notify_at(t0, "X");
        assert_eq!(toast.next_deadline(), Some(t0 + ms(4000)));

        toast.tick(t0 + ms(4000));
        assert_eq!(toast.next_deadline(), Some(t0 + ms(6000)));
    }

    #[test]
    fn deadline_remaining_saturates_at_zero() {
        let t0 = Instant::now();
        let mut d = Deadline::default();
        assert!(d.remaining(t0).is_none());
        assert!(!d.is_due(t0));

        d.schedule(t0 + ms(100));
        assert_eq!(d.remaining(t0), Some(ms(100)));
        assert_eq!(d.remaining(t0 + ms(500)), Some(Duration::ZERO));
        assert!(d.is_due(t0 + ms(100)));

        d.cancel();
        assert!(!d.is_due(t0 + ms(500)));
        assert!(!d.is_scheduled());
    }

    #[test]
    fn custom_timings_are_respected() {
        let timings = ToastTimings {
            display: ms(1000),
            linger: ms(500),
            fast_dismiss: ms(50),
            dismiss_threshold: 10.0,
            fade_distance: 40.0,
        };
        let mut toast = ToastController::new(timings);
        let t0 = Instant::now();

        toast.notify_at(t0, "X");
        toast.tick(t0 + ms(1000));
        assert_eq!(toast.phase(), Phase::Hiding);
        toast.tick(t0 + ms(1500));
        assert_eq!(toast.phase(), Phase::Idle);

        toast.notify_at(t0 + ms(2000), "Y");
        toast.drag_begin(t0 + ms(2100), 0.0);
        toast.drag_update(11.0);
        assert_eq!(toast.drag_end(t0 + ms(2200)), DragRelease::Dismissed);
        toast.tick(t0 + ms(2250));
        assert_eq!(toast.phase(), Phase::Idle);
    }
}
