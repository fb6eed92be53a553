// SPDX-License-Identifier: MPL-2.0
//! One-shot, scroll-triggered reveal of content blocks.
//!
//! [`RevealObserver`] is a single watcher shared by every revealable block.
//! Each block has two states, unrevealed and revealed, with one irreversible
//! edge between them: the first time at least `threshold` of the block's
//! area is inside the viewport it is marked revealed and stops being
//! watched. Blocks that never scroll into view simply stay unrevealed.
//!
//! The watcher is acquired with [`RevealObserver::activate`] and released
//! with [`RevealObserver::dispose`] (also run on drop), regardless of how
//! many blocks have been revealed.

pub mod intersection;

pub use intersection::intersection_ratio;

use crate::content::ElementId;
use crate::page::PageLayout;
use iced::Rectangle;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Visibility state of a single block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Unrevealed,
    Revealed { at: Instant },
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    state: RevealState,
    watched: bool,
}

/// Watches revealable blocks against the viewport.
#[derive(Debug)]
pub struct RevealObserver {
    threshold: f32,
    entries: HashMap<ElementId, Entry>,
    active: bool,
}

impl RevealObserver {
    /// Creates an inactive observer. `threshold` is clamped to `(0, 1]`.
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(f32::EPSILON, 1.0)
        } else {
            crate::config::DEFAULT_REVEAL_THRESHOLD
        };
        Self {
            threshold,
            entries: HashMap::new(),
            active: false,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Starts the watcher and registers `elements`.
    ///
    /// Blocks revealed during an earlier activation stay revealed and are
    /// not watched again.
    pub fn activate(&mut self, elements: impl IntoIterator<Item = ElementId>) {
        self.active = true;
        for id in elements {
            self.observe(id);
        }
        tracing::debug!(watched = self.watched_count(), "reveal observer activated");
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Registers one block. Ignored while disposed or once the block has
    /// been revealed.
    pub fn observe(&mut self, id: ElementId) {
        if !self.active {
            return;
        }
        let entry = self.entries.entry(id).or_insert(Entry {
            state: RevealState::Unrevealed,
            watched: false,
        });
        entry.watched = matches!(entry.state, RevealState::Unrevealed);
    }

    /// Stops watching one block without revealing it.
    pub fn unobserve(&mut self, id: ElementId) {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.watched = false;
        }
    }

    #[must_use]
    pub fn is_watching(&self, id: ElementId) -> bool {
        self.active && self.entries.get(&id).is_some_and(|entry| entry.watched)
    }

    #[must_use]
    pub fn state(&self, id: ElementId) -> RevealState {
        self.entries
            .get(&id)
            .map_or(RevealState::Unrevealed, |entry| entry.state)
    }

    #[must_use]
    pub fn is_revealed(&self, id: ElementId) -> bool {
        matches!(self.state(id), RevealState::Revealed { .. })
    }

    #[must_use]
    pub fn revealed_at(&self, id: ElementId) -> Option<Instant> {
        match self.state(id) {
            RevealState::Revealed { at } => Some(at),
            RevealState::Unrevealed => None,
        }
    }

    #[must_use]
    pub fn watched_count(&self) -> usize {
        self.entries.values().filter(|entry| entry.watched).count()
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.entries
            .values()
            .filter(|entry| matches!(entry.state, RevealState::Revealed { .. }))
            .count()
    }

    /// Delivers one intersection report for `id`.
    ///
    /// Returns `true` only when this report moved the block from unrevealed
    /// to revealed. Reports for unknown, unwatched or already revealed
    /// blocks, or after disposal, have no effect.
    pub fn report(&mut self, id: ElementId, ratio: f32, now: Instant) -> bool {
        if !self.active || ratio < self.threshold {
            return false;
        }
        let Some(entry) = self.entries.get_mut(&id) else {
            return false;
        };
        if !entry.watched {
            return false;
        }

        entry.state = RevealState::Revealed { at: now };
        entry.watched = false;
        tracing::debug!(element = %id, ratio, "revealed");
        true
    }

    /// Checks every watched block against `viewport` (page coordinates) and
    /// returns the ones revealed by this pass.
    ///
    /// Blocks missing from `layout` are skipped and stay watched.
    pub fn process(
        &mut self,
        layout: &PageLayout,
        viewport: Rectangle,
        now: Instant,
    ) -> Vec<ElementId> {
        if !self.active {
            return Vec::new();
        }

        let mut pending: Vec<ElementId> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.watched)
            .map(|(id, _)| *id)
            .collect();
        pending.sort_unstable();

        pending
            .into_iter()
            .filter(|id| {
                layout
                    .target(*id)
                    .is_some_and(|bounds| self.report(*id, intersection_ratio(bounds, viewport), now))
            })
            .collect()
    }

    /// Fade-in progress of `id` in `[0, 1]`, eased.
    ///
    /// Unrevealed blocks are at `0.0`; a zero `fade` jumps straight to `1.0`.
    #[must_use]
    pub fn progress(&self, id: ElementId, now: Instant, fade: Duration) -> f32 {
        match self.state(id) {
            RevealState::Unrevealed => 0.0,
            RevealState::Revealed { at } => fade_progress(at, now, fade),
        }
    }

    /// Whether any revealed block is still fading in at `now`.
    #[must_use]
    pub fn is_fading(&self, now: Instant, fade: Duration) -> bool {
        self.entries.values().any(|entry| match entry.state {
            RevealState::Revealed { at } => now.saturating_duration_since(at) < fade,
            RevealState::Unrevealed => false,
        })
    }

    /// Releases the watcher and drops every pending registration.
    ///
    /// Revealed flags stay readable; later reports are ignored.
    pub fn dispose(&mut self) {
        if !self.active {
            return;
        }
        let pending = self.watched_count();
        for entry in self.entries.values_mut() {
            entry.watched = false;
        }
        self.active = false;
        tracing::debug!(
            revealed = self.revealed_count(),
            never_revealed = pending,
            "reveal observer disposed"
        );
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn fade_progress(at: Instant, now: Instant, fade: Duration) -> f32 {
    if fade.is_zero() {
        return 1.0;
    }
    let t = (now.saturating_duration_since(at).as_secs_f32() / fade.as_secs_f32()).clamp(0.0, 1.0);
    // Ease-out cubic.
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::{Point, Size};

    fn active_observer() -> RevealObserver {
        let mut observer = RevealObserver::new(0.5);
        observer.activate(content::revealable_elements());
        observer
    }

    fn viewport_at(y: f32, layout: &PageLayout) -> Rectangle {
        Rectangle::new(Point::new(0.0, y), layout.viewport())
    }

    #[test]
    fn activate_watches_every_element() {
        let observer = active_observer();
        assert!(observer.is_active());
        assert_eq!(observer.watched_count(), content::revealable_elements().len());
        assert_eq!(observer.revealed_count(), 0);
    }

    #[test]
    fn report_below_threshold_keeps_watching() {
        let mut observer = active_observer();
        let now = Instant::now();
        assert!(!observer.report(content::ABOUT_BODY, 0.49, now));
        assert!(!observer.is_revealed(content::ABOUT_BODY));
        assert!(observer.is_watching(content::ABOUT_BODY));
    }

    #[test]
    fn report_at_threshold_reveals_and_unobserves() {
        let mut observer = active_observer();
        let now = Instant::now();
        assert!(observer.report(content::ABOUT_BODY, 0.5, now));
        assert_eq!(observer.revealed_at(content::ABOUT_BODY), Some(now));
        assert!(!observer.is_watching(content::ABOUT_BODY));
    }

    #[test]
    fn second_report_after_reveal_has_no_effect() {
        let mut observer = active_observer();
        let first = Instant::now();
        assert!(observer.report(content::ABOUT_BODY, 1.0, first));

        let later = first + Duration::from_secs(5);
        assert!(!observer.report(content::ABOUT_BODY, 1.0, later));
        assert!(!observer.report(content::ABOUT_BODY, 0.0, later));
        assert_eq!(observer.revealed_at(content::ABOUT_BODY), Some(first));
    }

    #[test]
    fn observe_after_reveal_does_not_rewatch() {
        let mut observer = active_observer();
        observer.report(content::ABOUT_BODY, 1.0, Instant::now());
        observer.observe(content::ABOUT_BODY);
        assert!(!observer.is_watching(content::ABOUT_BODY));
        assert!(observer.is_revealed(content::ABOUT_BODY));
    }

    #[test]
    fn unobserved_element_ignores_reports() {
        let mut observer = active_observer();
        observer.unobserve(content::CONTACT_LINKS);
        assert!(!observer.report(content::CONTACT_LINKS, 1.0, Instant::now()));
        assert!(!observer.is_revealed(content::CONTACT_LINKS));
    }

    #[test]
    fn unknown_element_ignores_reports() {
        let mut observer = active_observer();
        let stranger = ElementId::new("about", "stranger");
        assert!(!observer.report(stranger, 1.0, Instant::now()));
        assert!(!observer.is_revealed(stranger));
    }

    #[test]
    fn process_at_top_of_page_reveals_nothing() {
        let layout = PageLayout::compute(Size::new(1280.0, 800.0));
        let mut observer = active_observer();
        let revealed = observer.process(&layout, viewport_at(0.0, &layout), Instant::now());
        assert!(revealed.is_empty());
        assert_eq!(observer.revealed_count(), 0);
    }

    #[test]
    fn process_reveals_blocks_in_view_exactly_once() {
        let layout = PageLayout::compute(Size::new(1280.0, 800.0));
        let mut observer = active_observer();
        let about_top = layout.region(crate::page::ABOUT).expect("about").bounds.y;
        let viewport = viewport_at(about_top, &layout);
        let now = Instant::now();

        let revealed = observer.process(&layout, viewport, now);
        assert!(revealed.contains(&content::ABOUT_HEADING));
        assert!(revealed.contains(&content::ABOUT_BODY));

        let again = observer.process(&layout, viewport, now + Duration::from_millis(16));
        assert!(again.is_empty());
    }

    #[test]
    fn element_that_never_enters_viewport_stays_unrevealed() {
        let layout = PageLayout::compute(Size::new(1280.0, 800.0));
        let mut observer = active_observer();
        let start = Instant::now();
        for step in 0..100 {
            let now = start + Duration::from_millis(step * 16);
            observer.process(&layout, viewport_at(0.0, &layout), now);
        }
        assert!(!observer.is_revealed(content::CONTACT_LINKS));
        assert!(observer.is_watching(content::CONTACT_LINKS));
    }

    #[test]
    fn dispose_drops_registrations_and_ignores_reports() {
        let mut observer = active_observer();
        observer.report(content::ABOUT_HEADING, 1.0, Instant::now());
        observer.dispose();

        assert!(!observer.is_active());
        assert_eq!(observer.watched_count(), 0);
        assert!(observer.is_revealed(content::ABOUT_HEADING));
        assert!(!observer.report(content::ABOUT_BODY, 1.0, Instant::now()));

        let layout = PageLayout::compute(Size::new(1280.0, 800.0));
        let revealed = observer.process(&layout, viewport_at(800.0, &layout), Instant::now());
        assert!(revealed.is_empty());
    }

    #[test]
    fn dispose_twice_is_harmless() {
        let mut observer = active_observer();
        observer.dispose();
        observer.dispose();
        assert!(!observer.is_active());
    }

    #[test]
    fn reactivation_keeps_revealed_blocks_revealed() {
        let mut observer = active_observer();
        let now = Instant::now();
        observer.report(content::ABOUT_HEADING, 1.0, now);
        observer.dispose();
        observer.activate(content::revealable_elements());

        assert!(observer.is_revealed(content::ABOUT_HEADING));
        assert!(!observer.is_watching(content::ABOUT_HEADING));
        assert!(observer.is_watching(content::ABOUT_BODY));
    }

    #[test]
    fn threshold_is_clamped() {
        assert_abs_diff_eq!(RevealObserver::new(2.0).threshold(), 1.0);
        assert!(RevealObserver::new(-1.0).threshold() > 0.0);
        assert_abs_diff_eq!(RevealObserver::new(f32::NAN).threshold(), 0.5);
    }

    #[test]
    fn progress_eases_from_zero_to_one() {
        let mut observer = active_observer();
        let fade = Duration::from_millis(700);
        let at = Instant::now();
        assert_abs_diff_eq!(observer.progress(content::ABOUT_BODY, at, fade), 0.0);

        observer.report(content::ABOUT_BODY, 1.0, at);
        assert_abs_diff_eq!(observer.progress(content::ABOUT_BODY, at, fade), 0.0);
        let mid = observer.progress(content::ABOUT_BODY, at + fade / 2, fade);
        assert!(mid > 0.5 && mid < 1.0);
        assert_abs_diff_eq!(observer.progress(content::ABOUT_BODY, at + fade, fade), 1.0);
        assert!(observer.is_fading(at + fade / 2, fade));
        assert!(!observer.is_fading(at + fade, fade));
    }

    #[test]
    fn zero_fade_is_instant() {
        let mut observer = active_observer();
        let at = Instant::now();
        observer.report(content::ABOUT_BODY, 1.0, at);
        assert_abs_diff_eq!(observer.progress(content::ABOUT_BODY, at, Duration::ZERO), 1.0);
        assert!(!observer.is_fading(at, Duration::ZERO));
    }
}
