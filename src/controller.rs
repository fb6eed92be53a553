// SPDX-License-Identifier: MPL-2.0
//! Single owner of the page's UI state.
//!
//! [`PageController`] ties together the locale store, the scroll navigator
//! and the reveal observer around one [`PageLayout`] and the current
//! viewport. The Iced application holds exactly one controller, hands it to
//! the view by reference and funnels every interaction through it, so there
//! is no module-level mutable state anywhere in the crate.

use crate::config::Motion;
use crate::content::{self, ElementId};
use crate::locale::{Locale, LocaleStore, StringBundle, TextKey};
use crate::navigation::ScrollNavigator;
use crate::page::PageLayout;
use crate::reveal::RevealObserver;
use iced::{Point, Rectangle, Size};
use std::time::Instant;

#[derive(Debug)]
pub struct PageController {
    locale: LocaleStore,
    navigator: ScrollNavigator,
    observer: RevealObserver,
    layout: PageLayout,
    /// Visible part of the page, in page coordinates.
    viewport: Rectangle,
    motion: Motion,
}

impl PageController {
    /// Builds the controller for a viewport of `viewport` size and activates
    /// the reveal observer on every revealable block.
    #[must_use]
    pub fn new(locale: Locale, motion: Motion, viewport: Size) -> Self {
        let layout = PageLayout::compute(viewport);
        let mut observer = RevealObserver::new(motion.reveal_threshold);
        observer.activate(content::revealable_elements());

        Self {
            locale: LocaleStore::new(locale),
            navigator: ScrollNavigator::new(motion.smooth_scroll, motion.scroll_duration),
            observer,
            viewport: Rectangle::new(Point::ORIGIN, layout.viewport()),
            layout,
            motion,
        }
    }

    // ------------------------------------------------------------------
    // Locale
    // ------------------------------------------------------------------

    #[must_use]
    pub fn current_locale(&self) -> Locale {
        self.locale.current_locale()
    }

    /// Switches the display language. Scroll position and reveal state are
    /// untouched. Returns whether the locale changed.
    pub fn set_locale(&mut self, locale: Locale) -> bool {
        self.locale.set_locale(locale)
    }

    #[must_use]
    pub fn bundle(&self) -> &'static StringBundle {
        self.locale.bundle()
    }

    #[must_use]
    pub fn text(&self, key: TextKey) -> &'static str {
        self.locale.text(key)
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Starts a smooth scroll to `section`. Returns `false` (and changes
    /// nothing) when no such section is rendered.
    pub fn navigate_to(&mut self, section: &str, now: Instant) -> bool {
        self.navigator
            .navigate_to(&self.layout, section, self.viewport.y, now)
            .is_some()
    }

    /// Advances the scroll animation. Returns the offset the scrollable
    /// should be moved to for this frame, if any.
    ///
    /// The viewport is moved eagerly so reveal checks do not lag behind the
    /// animation.
    pub fn on_frame(&mut self, now: Instant) -> Option<f32> {
        let offset = self.navigator.tick(now)?;
        self.viewport.y = offset;
        self.observer.process(&self.layout, self.viewport, now);
        Some(offset)
    }

    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.navigator.is_animating()
    }

    // ------------------------------------------------------------------
    // Viewport & reveal
    // ------------------------------------------------------------------

    /// Handles a scroll report from the page scrollable. `size` is the
    /// scrollable's visible size, `offset_y` its vertical scroll offset.
    ///
    /// A report that does not echo the running scroll animation is user
    /// input and stops the animation.
    ///
    /// Returns the blocks revealed by this report.
    pub fn on_viewport_changed(&mut self, size: Size, offset_y: f32, now: Instant) -> Vec<ElementId> {
        self.navigator.reconcile(offset_y);
        self.resize(size);
        self.viewport.y = offset_y.max(0.0);
        self.observer.process(&self.layout, self.viewport, now)
    }

    /// Handles a window resize. The scrollable fills the window, so the
    /// window size is the viewport size.
    pub fn on_window_resized(&mut self, size: Size, now: Instant) -> Vec<ElementId> {
        self.resize(size);
        self.viewport.y = self.viewport.y.min(self.layout.max_scroll());
        self.observer.process(&self.layout, self.viewport, now)
    }

    fn resize(&mut self, size: Size) {
        if size != self.layout.viewport() {
            self.layout = PageLayout::compute(size);
            self.viewport.width = self.layout.viewport().width;
            self.viewport.height = self.layout.viewport().height;
        }
    }

    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Current visible rectangle in page coordinates.
    #[must_use]
    pub fn viewport(&self) -> Rectangle {
        self.viewport
    }

    #[must_use]
    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.observer.is_revealed(id)
    }

    #[must_use]
    pub fn observer(&self) -> &RevealObserver {
        &self.observer
    }

    /// Fade-in progress of `id` at `now`, in `[0, 1]`.
    #[must_use]
    pub fn reveal_progress(&self, id: ElementId, now: Instant) -> f32 {
        self.observer.progress(id, now, self.motion.reveal_fade)
    }

    /// Whether the app needs per-frame updates (scroll animation or fades).
    #[must_use]
    pub fn needs_frames(&self, now: Instant) -> bool {
        self.navigator.is_animating() || self.observer.is_fading(now, self.motion.reveal_fade)
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Tears the page down: releases the reveal watcher and stops any scroll
    /// animation. Safe to call more than once.
    pub fn deactivate(&mut self) {
        self.navigator.cancel();
        self.observer.dispose();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.observer.is_active()
    }
}
