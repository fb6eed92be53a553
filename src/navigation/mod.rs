// SPDX-License-Identifier: MPL-2.0
//! In-page navigation with smooth scrolling.
//!
//! [`ScrollNavigator::navigate_to`] resolves a section identifier against the
//! [`PageLayout`] and starts an animation that brings the section's top edge
//! to the top of the viewport. Unknown identifiers are a silent no-op, which
//! also covers navigation requested before the page has been laid out.
//!
//! The navigator never touches the scrollable itself: the app polls
//! [`ScrollNavigator::tick`] once per frame and applies the returned offset.
//! Scroll reports that match none of the recently applied offsets come from
//! the user, and [`ScrollNavigator::reconcile`] stops the animation there.

pub mod easing;

use crate::page::PageLayout;
use easing::ease_in_out_cubic;
use std::time::{Duration, Instant};

/// Distance in pixels within which a scroll report is taken as the echo of
/// an offset the animation applied.
pub const ECHO_TOLERANCE: f32 = 1.0;

/// An in-flight scroll animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(from: f32, to: f32, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        now.saturating_duration_since(self.started).as_secs_f32() / self.duration.as_secs_f32()
    }

    /// Scroll offset at `now`; exactly the target once finished.
    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_in_out_cubic(t)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Maps section identifiers to scroll animations.
#[derive(Debug, Clone)]
pub struct ScrollNavigator {
    smooth: bool,
    duration: Duration,
    animation: Option<SmoothScroll>,
    /// Last two offsets handed out by `tick`, newest first. A report may
    /// lag one frame behind.
    applied: [Option<f32>; 2],
}

impl Default for ScrollNavigator {
    fn default() -> Self {
        Self::new(
            true,
            Duration::from_millis(u64::from(crate::config::DEFAULT_SCROLL_DURATION_MS)),
        )
    }
}

impl ScrollNavigator {
    /// `smooth = false` turns every navigation into a one-frame jump.
    #[must_use]
    pub fn new(smooth: bool, duration: Duration) -> Self {
        Self {
            smooth,
            duration,
            animation: None,
            applied: [None; 2],
        }
    }

    /// Starts scrolling towards `section`.
    ///
    /// `current_offset` is the last known vertical scroll offset; an
    /// in-flight animation takes precedence so that retargeting is seamless.
    /// Returns the clamped target offset, or `None` (and leaves any running
    /// animation untouched) when `layout` has no such section.
    pub fn navigate_to(
        &mut self,
        layout: &PageLayout,
        section: &str,
        current_offset: f32,
        now: Instant,
    ) -> Option<f32> {
        let Some(region) = layout.region(section) else {
            tracing::debug!(section, "navigation target not rendered, ignoring");
            return None;
        };

        let target = region.bounds.y.clamp(0.0, layout.max_scroll());
        let from = self
            .animation
            .map_or(current_offset, |animation| animation.offset_at(now));
        let duration = if self.smooth {
            self.duration
        } else {
            Duration::ZERO
        };

        tracing::debug!(section, from, target, "navigating");
        self.animation = Some(SmoothScroll::new(from, target, now, duration));
        Some(target)
    }

    /// Offset to apply for the frame at `now`, or `None` when idle.
    ///
    /// The final frame returns the exact target and ends the animation.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let animation = self.animation?;
        let offset = animation.offset_at(now);
        if animation.is_finished(now) {
            self.cancel();
        } else {
            self.applied = [Some(offset), self.applied[0]];
        }
        Some(offset)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[must_use]
    pub fn animation(&self) -> Option<&SmoothScroll> {
        self.animation.as_ref()
    }

    /// Abandons any running animation where it is.
    pub fn cancel(&mut self) {
        self.animation = None;
        self.applied = [None; 2];
    }

    /// Checks a scroll report against the running animation.
    ///
    /// An `offset` away from every recently applied offset means the user
    /// scrolled; the animation is cancelled and `true` returned. Reports
    /// before the first frame are never treated as user input.
    pub fn reconcile(&mut self, offset: f32) -> bool {
        if self.animation.is_none() || self.applied[0].is_none() {
            return false;
        }
        let echoed = self
            .applied
            .iter()
            .flatten()
            .any(|applied| (applied - offset).abs() <= ECHO_TOLERANCE);
        if echoed {
            return false;
        }
        tracing::debug!(offset, "user scroll interrupted navigation");
        self.cancel();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{self, PageLayout};
    use crate::test_utils::assert_abs_diff_eq;
    use iced::Size;

    fn layout() -> PageLayout {
        PageLayout::compute(Size::new(1280.0, 800.0))
    }

    fn run_to_end(navigator: &mut ScrollNavigator, start: Instant) -> Vec<f32> {
        let mut offsets = Vec::new();
        let mut frame = 0;
        while let Some(offset) = navigator.tick(start + Duration::from_millis(frame * 16)) {
            offsets.push(offset);
            frame += 1;
            assert!(frame < 10_000, "animation never finished");
        }
        offsets
    }

    #[test]
    fn navigate_to_about_ends_at_section_top() {
        let layout = layout();
        let mut navigator = ScrollNavigator::default();
        let now = Instant::now();

        let target = navigator.navigate_to(&layout, page::ABOUT, 0.0, now);
        let about_top = layout.region(page::ABOUT).expect("about").bounds.y;
        assert_eq!(target, Some(about_top));

        let offsets = run_to_end(&mut navigator, now);
        assert!(offsets.len() > 2, "smooth scroll should span several frames");
        assert_abs_diff_eq!(*offsets.last().expect("frames"), about_top);
        assert!(!navigator.is_animating());
    }

    #[test]
    fn smooth_scroll_moves_monotonically() {
        let layout = layout();
        let mut navigator = ScrollNavigator::default();
        let now = Instant::now();
        navigator.navigate_to(&layout, page::TECHNOLOGIES, 0.0, now);

        let offsets = run_to_end(&mut navigator, now);
        assert!(offsets.windows(2).all(|pair| pair[1] >= pair[0]));
    }

    #[test]
    fn echoed_offsets_keep_animation_running() {
        let layout = layout();
        let mut navigator = ScrollNavigator::default();
        let start = Instant::now();
        navigator.navigate_to(&layout, page::TECHNOLOGIES, 0.0, start);

        let first = navigator.tick(start + Duration::from_millis(100)).expect("frame");
        let second = navigator.tick(start + Duration::from_millis(116)).expect("frame");

        // The scrollable may report the previous frame after the next one ran.
        assert!(!navigator.reconcile(second));
        assert!(!navigator.reconcile(first + 0.5));
        assert!(navigator.is_animating());
    }

    #[test]
    fn user_scroll_cancels_animation() {
        let layout = layout();
        let mut navigator = ScrollNavigator::default();
        let start = Instant::now();
        navigator.navigate_to(&layout, page::TECHNOLOGIES, 0.0, start);
        let applied = navigator.tick(start + Duration::from_millis(100)).expect("frame");

        assert!(navigator.reconcile(applied + 60.0));
        assert!(!navigator.is_animating());
        assert_eq!(navigator.tick(start + Duration::from_millis(116)), None);
    }

    #[test]
    fn reports_before_first_frame_or_when_idle_are_ignored() {
        let layout = layout();
        let mut navigator = ScrollNavigator::default();
        assert!(!navigator.reconcile(300.0));

        navigator.navigate_to(&layout, page::ABOUT, 0.0, Instant::now());
        assert!(!navigator.reconcile(300.0));
        assert!(navigator.is_animating());
    }

    #[test]
    fn missing_section_is_a_noop() {
        let layout = layout();
        let mut navigator = ScrollNavigator::default();
        let now = Instant::now();

        assert_eq!(navigator.navigate_to(&layout, "missing", 120.0, now), None);
        assert!(!navigator.is_animating());
        assert_eq!(navigator.tick(now), None);
    }

    #[test]
    fn missing_section_keeps_running_animation() {
        let layout = layout();
        let mut navigator = ScrollNavigator::default();
        let now = Instant::now();
        navigator.navigate_to(&layout, page::ABOUT, 0.0, now);
        let before = navigator.animation().copied();

        navigator.navigate_to(&layout, "missing", 0.0, now);
        assert_eq!(navigator.animation().copied(), before);
    }

    #[test]
    fn target_is_clamped_to_scrollable_range() {
        let layout = layout();
        let mut navigator = ScrollNavigator::default();
        let footer_top = layout.region(page::FOOTER).expect("footer").bounds.y;
        assert!(footer_top > layout.max_scroll());

        let target = navigator.navigate_to(&layout, page::FOOTER, 0.0, Instant::now());
        assert_eq!(target, Some(layout.max_scroll()));
    }

    #[test]
    fn instant_mode_jumps_in_one_frame() {
        let layout = layout();
        let mut navigator = ScrollNavigator::new(false, Duration::from_millis(600));
        let now = Instant::now();
        let target = navigator
            .navigate_to(&layout, page::CONTACT, 0.0, now)
            .expect("contact exists");

        assert_eq!(navigator.tick(now), Some(target));
        assert_eq!(navigator.tick(now), None);
    }

    #[test]
    fn retarget_starts_from_current_animated_offset() {
        let layout = layout();
        let mut navigator = ScrollNavigator::default();
        let start = Instant::now();
        navigator.navigate_to(&layout, page::CONTACT, 0.0, start);

        let midway = start + Duration::from_millis(300);
        let expected_from = navigator.animation().expect("animating").offset_at(midway);
        navigator.navigate_to(&layout, page::ABOUT, 9_999.0, midway);

        let retargeted = navigator.animation().expect("animating");
        assert_abs_diff_eq!(retargeted.offset_at(midway), expected_from);
    }

    #[test]
    fn hero_scrolls_back_to_top() {
        let layout = layout();
        let mut navigator = ScrollNavigator::default();
        let target = navigator.navigate_to(&layout, page::HERO, 1_500.0, Instant::now());
        assert_eq!(target, Some(0.0));
    }

    #[test]
    fn cancel_stops_animation() {
        let layout = layout();
        let mut navigator = ScrollNavigator::default();
        let now = Instant::now();
        navigator.navigate_to(&layout, page::ABOUT, 0.0, now);
        navigator.cancel();
        assert_eq!(navigator.tick(now), None);
    }
}
