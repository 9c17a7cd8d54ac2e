//! Carousel scroll controller
//!
//! Owns the `ScrollOffsetWriter`: every position change (drag, snap frame,
//! jump) is published from here and nowhere else.

use std::time::{Duration, Instant};

use reelview_core::ScrollOffsetWriter;

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_aligned, is_complete, lerp, progress};

/// Scroll limits for the current list and viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBounds {
    /// Largest offset (no overscroll past the last item)
    pub max: f64,
    /// Snap interval (ITEM_SIZE)
    pub step: f64,
}

impl ScrollBounds {
    pub fn new(max: f64, step: f64) -> Self {
        Self {
            max: max.max(0.0),
            step: step.max(0.0),
        }
    }

    #[inline]
    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max)
    }

    /// Nearest snap point inside the bounds
    fn snap(&self, offset: f64) -> f64 {
        if self.step <= 0.0 {
            return self.clamp(offset);
        }
        self.clamp((offset / self.step).round() * self.step)
    }
}

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Snap-aligned, non-bouncing horizontal scroll
///
/// Drags (`scroll_by`) move the offset directly. Once input has been idle
/// for `snap_delay_ms`, an unaligned offset eases to the nearest item.
/// `scroll_to` eases straight to a target. Call `update()` every frame.
#[derive(Debug)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    current: f64,
    /// Drag distance not yet applied
    pending_delta: f64,
    /// Time of the last applied drag; cleared once snapped
    last_drag: Option<Instant>,
    writer: ScrollOffsetWriter,
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig, writer: ScrollOffsetWriter) -> Self {
        let current = writer.current();
        Self {
            animation: None,
            config,
            current,
            pending_delta: 0.0,
            last_drag: None,
            writer,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the next frames will move the offset (use a fast tick rate)
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0.0 || self.last_drag.is_some()
    }

    /// Current offset
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Where the offset is heading
    pub fn target(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current + self.pending_delta)
    }

    /// Ease to `target` (clamped); jumps when smooth scrolling is off
    pub fn scroll_to(&mut self, target: f64, bounds: ScrollBounds) {
        let target = bounds.clamp(target);
        self.pending_delta = 0.0;
        self.last_drag = None;

        if !self.config.is_smooth() {
            self.animation = None;
            self.set_current(target);
            return;
        }

        if (self.current - target).abs() < f64::EPSILON {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: Instant::now(),
            from: self.current,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Move to `target` (clamped) without animating
    pub fn jump_to(&mut self, target: f64, bounds: ScrollBounds) {
        self.animation = None;
        self.pending_delta = 0.0;
        self.last_drag = None;
        self.set_current(bounds.clamp(target));
    }

    /// Drag by `delta` columns; batched until the next `update`
    pub fn scroll_by(&mut self, delta: f64) {
        self.animation = None;
        self.pending_delta += delta;
    }

    /// Advance one frame and return the current offset
    pub fn update(&mut self, bounds: ScrollBounds) -> f64 {
        if self.pending_delta != 0.0 {
            let next = bounds.clamp(self.current + self.pending_delta);
            self.pending_delta = 0.0;
            self.last_drag = Some(Instant::now());
            self.set_current(next);
            return self.current;
        }

        if let Some(anim) = self.animation.clone() {
            if is_complete(anim.start, anim.duration) {
                self.animation = None;
                self.set_current(bounds.clamp(anim.to));
            } else {
                let t = anim.easing.apply(progress(anim.start, anim.duration));
                self.set_current(bounds.clamp(lerp(anim.from, anim.to, t)));
            }
        } else if let Some(dragged_at) = self.last_drag {
            if dragged_at.elapsed() >= self.config.snap_delay() {
                self.last_drag = None;
                if !is_aligned(self.current, bounds.step) || self.current > bounds.max {
                    self.scroll_to(bounds.snap(self.current), bounds);
                } else {
                    self.set_current(bounds.snap(self.current));
                }
            }
        } else if self.current > bounds.max {
            // List or viewport shrank
            self.set_current(bounds.max);
        }

        self.current
    }

    /// Stop at the current position
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0.0;
    }

    fn set_current(&mut self, offset: f64) {
        self.current = offset;
        self.writer.publish(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelview_core::scroll_offset;

    fn bounds() -> ScrollBounds {
        ScrollBounds::new(288.0, 72.0)
    }

    fn instant_config() -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: false,
            snap_delay_ms: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let (writer, reader) = scroll_offset();
        let mut animator = ScrollAnimator::new(instant_config(), writer);

        animator.scroll_to(144.0, bounds());
        assert_eq!(animator.current(), 144.0);
        assert_eq!(reader.get(), 144.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_starts() {
        let (writer, reader) = scroll_offset();
        let config = ScrollConfig {
            animation_duration_ms: 10_000,
            ..Default::default()
        };
        let mut animator = ScrollAnimator::new(config, writer);

        animator.scroll_to(72.0, bounds());
        assert!(animator.is_animating());
        assert_eq!(animator.target(), 72.0);
        assert_eq!(reader.get(), 0.0);
    }

    #[test]
    fn test_drags_are_batched() {
        let (writer, reader) = scroll_offset();
        let config = ScrollConfig {
            snap_delay_ms: 60_000,
            ..Default::default()
        };
        let mut animator = ScrollAnimator::new(config, writer);

        animator.scroll_by(4.0);
        animator.scroll_by(4.0);
        animator.scroll_by(4.0);
        assert_eq!(animator.target(), 12.0);

        animator.update(bounds());
        assert_eq!(animator.current(), 12.0);
        assert_eq!(reader.get(), 12.0);
        assert!(animator.needs_update());
    }

    #[test]
    fn test_no_overscroll() {
        let (writer, _reader) = scroll_offset();
        let mut animator = ScrollAnimator::new(instant_config(), writer);

        animator.scroll_by(-50.0);
        animator.update(bounds());
        assert_eq!(animator.current(), 0.0);

        animator.scroll_to(10_000.0, bounds());
        assert_eq!(animator.current(), 288.0);
    }

    #[test]
    fn test_idle_drag_snaps_to_nearest_item() {
        let (writer, reader) = scroll_offset();
        let mut animator = ScrollAnimator::new(instant_config(), writer);

        animator.scroll_by(100.0);
        animator.update(bounds());
        assert_eq!(animator.current(), 100.0);

        // Idle past the (zero) snap delay
        animator.update(bounds());
        assert_eq!(animator.current(), 72.0);
        assert_eq!(reader.get(), 72.0);
        assert!(!animator.needs_update());
    }

    #[test]
    fn test_shrinking_bounds_pulls_offset_back() {
        let (writer, _reader) = scroll_offset();
        let mut animator = ScrollAnimator::new(instant_config(), writer);
        animator.scroll_to(288.0, bounds());

        animator.update(ScrollBounds::new(144.0, 72.0));
        assert_eq!(animator.current(), 144.0);
    }

    #[test]
    fn test_cancel_clears_pending() {
        let (writer, _reader) = scroll_offset();
        let mut animator = ScrollAnimator::new(ScrollConfig::default(), writer);
        animator.scroll_by(30.0);
        animator.cancel();
        animator.update(bounds());
        assert_eq!(animator.current(), 0.0);
    }
}
