// SPDX-License-Identifier: MPL-2.0
//! Timer-driven media rotation with a two-phase cross-fade.
//!
//! The rotator owns the validated collage list and a monotone tick counter.
//! Each tick runs in two phases:
//!
//! 1. [`Rotator::advance`] bumps the counter and enters the fade-out phase;
//!    the displayed item keeps pointing at the outgoing image.
//! 2. After the configured fade delay, [`Rotator::commit`] swaps the
//!    displayed item to the new index and fades back in.
//!
//! The phases are wall-clock timed by the app shell (a periodic
//! subscription plus a one-shot delayed task); the rotator itself is pure
//! state transition with no I/O. Index arithmetic is modulo the current
//! list length, so a shrunken list can never index out of bounds.

use crate::domain::media::MediaItem;

/// Cross-fade phase of the collage frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FadePhase {
    /// The displayed item is fully opaque.
    Visible,
    /// The outgoing item is fading to transparent; the swap is pending.
    FadingOut,
}

/// Rotation state machine over a fixed, ordered item list.
#[derive(Debug, Clone)]
pub struct Rotator {
    items: Vec<MediaItem>,
    /// Monotonically increasing tick counter. Indexes wrap modulo the list
    /// length; the counter itself never wraps.
    tick: u64,
    phase: FadePhase,
}

impl Rotator {
    /// Creates a rotator over an already-validated item list.
    ///
    /// An empty list is accepted: the rotator then renders nothing and
    /// [`Rotator::should_rotate`] is `false`, so no timer is ever started.
    #[must_use]
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self {
            items,
            tick: 0,
            phase: FadePhase::Visible,
        }
    }

    /// Returns `true` when there is nothing to display.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` when a rotation timer should run. Lists shorter than
    /// two items are shown statically.
    #[must_use]
    pub fn should_rotate(&self) -> bool {
        self.items.len() >= 2
    }

    /// Number of completed ticks.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Index the counter currently points at.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index_of(self.tick)
    }

    /// Index of the item on screen. During a fade-out this lags
    /// [`Rotator::current_index`] by one step.
    #[must_use]
    pub fn displayed_index(&self) -> usize {
        self.index_of(self.displayed_tick())
    }

    /// The item currently on screen, if any.
    #[must_use]
    pub fn displayed_item(&self) -> Option<&MediaItem> {
        self.items.get(self.displayed_index())
    }

    /// The on-screen item for a collage frame rotated `offset` positions
    /// ahead. Offset 0 is the primary frame.
    #[must_use]
    pub fn frame_item(&self, offset: u64) -> Option<&MediaItem> {
        if self.items.is_empty() {
            return None;
        }
        self.items.get(self.index_of(self.displayed_tick() + offset))
    }

    /// Returns `true` when the displayed item is fully opaque.
    #[must_use]
    pub fn is_faded_in(&self) -> bool {
        self.phase == FadePhase::Visible
    }

    /// First phase of a tick: advance the counter and start fading out.
    ///
    /// Returns `true` when a swap is now pending and the caller should
    /// schedule [`Rotator::commit`] after the fade delay. No-op on lists
    /// that do not rotate.
    pub fn advance(&mut self) -> bool {
        if !self.should_rotate() {
            return false;
        }
        self.tick += 1;
        self.phase = FadePhase::FadingOut;
        true
    }

    /// Second phase of a tick: swap the displayed item and fade in.
    /// Idempotent; a stale commit after teardown-and-rebuild is harmless.
    pub fn commit(&mut self) {
        self.phase = FadePhase::Visible;
    }

    fn displayed_tick(&self) -> u64 {
        match self.phase {
            FadePhase::Visible => self.tick,
            // advance() is the only way into FadingOut, so tick >= 1 here.
            FadePhase::FadingOut => self.tick.saturating_sub(1),
        }
    }

    fn index_of(&self, tick: u64) -> usize {
        let len = self.items.len().max(1) as u64;
        (tick % len) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(sources: &[&str]) -> Vec<MediaItem> {
        sources
            .iter()
            .map(|s| MediaItem::validated(s, "Jazz").unwrap())
            .collect()
    }

    fn tick(rotator: &mut Rotator) {
        if rotator.advance() {
            rotator.commit();
        }
    }

    #[test]
    fn empty_list_renders_nothing_and_never_rotates() {
        let mut rotator = Rotator::new(Vec::new());

        assert!(rotator.is_empty());
        assert!(!rotator.should_rotate());
        assert!(rotator.displayed_item().is_none());
        assert!(rotator.frame_item(2).is_none());

        // Spurious ticks must be no-ops.
        assert!(!rotator.advance());
        assert_eq!(rotator.tick_count(), 0);
    }

    #[test]
    fn single_item_is_shown_permanently() {
        let mut rotator = Rotator::new(items(&["/a.jpg"]));

        assert!(!rotator.should_rotate());
        for _ in 0..10 {
            tick(&mut rotator);
        }

        assert_eq!(rotator.tick_count(), 0);
        assert_eq!(rotator.displayed_item().unwrap().source(), "/a.jpg");
        assert!(rotator.is_faded_in());
    }

    #[test]
    fn current_index_is_tick_mod_len() {
        let mut rotator = Rotator::new(items(&["/a.jpg", "/b.jpg", "/c.jpg"]));

        for k in 1..=12u64 {
            tick(&mut rotator);
            assert_eq!(rotator.current_index() as u64, k % 3);
        }
    }

    #[test]
    fn displayed_item_lags_during_fade() {
        let mut rotator = Rotator::new(items(&["/a.jpg", "/b.jpg", "/c.jpg"]));

        // t=0: shows /a.jpg, fully visible.
        assert_eq!(rotator.displayed_item().unwrap().source(), "/a.jpg");
        assert!(rotator.is_faded_in());

        // Tick fires: counter moves to /b.jpg but the screen still shows
        // /a.jpg while it fades out.
        assert!(rotator.advance());
        assert_eq!(rotator.current_index(), 1);
        assert_eq!(rotator.displayed_item().unwrap().source(), "/a.jpg");
        assert!(!rotator.is_faded_in());

        // Fade delay elapses: swap and fade in.
        rotator.commit();
        assert_eq!(rotator.displayed_item().unwrap().source(), "/b.jpg");
        assert!(rotator.is_faded_in());
    }

    #[test]
    fn rotation_wraps_after_last_item() {
        let mut rotator = Rotator::new(items(&["/a.jpg", "/b.jpg", "/c.jpg"]));

        // Scenario from the timing table: 3600ms ticks, swap at +160ms.
        tick(&mut rotator); // t=3600+160 → /b.jpg
        assert_eq!(rotator.displayed_item().unwrap().source(), "/b.jpg");
        tick(&mut rotator); // t=7200+160 → /c.jpg
        assert_eq!(rotator.displayed_item().unwrap().source(), "/c.jpg");
        tick(&mut rotator); // t=10800+160 → wraps to /a.jpg
        assert_eq!(rotator.displayed_item().unwrap().source(), "/a.jpg");
    }

    #[test]
    fn frame_offsets_show_distinct_items() {
        let rotator = Rotator::new(items(&["/a.jpg", "/b.jpg", "/c.jpg", "/d.jpg", "/e.jpg"]));

        assert_eq!(rotator.frame_item(0).unwrap().source(), "/a.jpg");
        assert_eq!(rotator.frame_item(2).unwrap().source(), "/c.jpg");
        assert_eq!(rotator.frame_item(4).unwrap().source(), "/e.jpg");
    }

    #[test]
    fn frame_offsets_wrap_with_the_counter() {
        let mut rotator = Rotator::new(items(&["/a.jpg", "/b.jpg", "/c.jpg"]));

        tick(&mut rotator);
        tick(&mut rotator); // displayed tick = 2

        assert_eq!(rotator.frame_item(0).unwrap().source(), "/c.jpg");
        assert_eq!(rotator.frame_item(2).unwrap().source(), "/b.jpg");
        assert_eq!(rotator.frame_item(4).unwrap().source(), "/a.jpg");
    }

    #[test]
    fn commit_is_idempotent() {
        let mut rotator = Rotator::new(items(&["/a.jpg", "/b.jpg"]));

        rotator.advance();
        rotator.commit();
        let shown = rotator.displayed_index();

        // A stale commit must not move the displayed item again.
        rotator.commit();
        assert_eq!(rotator.displayed_index(), shown);
        assert!(rotator.is_faded_in());
    }

    #[test]
    fn counter_is_monotone_across_many_ticks() {
        let mut rotator = Rotator::new(items(&["/a.jpg", "/b.jpg"]));
        for _ in 0..1000 {
            tick(&mut rotator);
        }
        assert_eq!(rotator.tick_count(), 1000);
        assert_eq!(rotator.current_index(), 0);
    }
}
