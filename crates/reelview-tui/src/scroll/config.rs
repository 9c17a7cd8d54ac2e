//! Typed views over the plain `ScrollConfig` numbers

use std::time::Duration;

pub use reelview_core::{EasingType, ScrollConfig};

/// Fallback frame interval when `animation_fps` is 0
const DEFAULT_FRAME: Duration = Duration::from_millis(16);

pub trait ScrollConfigExt {
    fn animation_duration(&self) -> Duration;

    /// Poll interval while the carousel is moving
    fn animation_tick_duration(&self) -> Duration;

    /// Idle time after a drag before snapping
    fn snap_delay(&self) -> Duration;

    /// Columns dragged by `notches` wheel steps (negative moves left)
    fn wheel_delta(&self, notches: i32) -> f64;

    /// Snaps animate only with the flag set and a non-zero duration
    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    fn animation_tick_duration(&self) -> Duration {
        match self.animation_fps {
            0 => DEFAULT_FRAME,
            fps => Duration::from_millis((1000 / fps as u64).max(1)),
        }
    }

    fn snap_delay(&self) -> Duration {
        Duration::from_millis(self.snap_delay_ms)
    }

    fn wheel_delta(&self, notches: i32) -> f64 {
        notches as f64 * self.wheel_columns.max(1) as f64
    }

    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScrollConfig::default();
        assert_eq!(config.animation_duration(), Duration::from_millis(180));
        assert_eq!(config.snap_delay(), Duration::from_millis(260));
        assert_eq!(config.easing, EasingType::Cubic);
        assert!(config.is_smooth());
    }

    #[test]
    fn test_tick_duration() {
        let mut config = ScrollConfig::default();
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
        config.animation_fps = 50;
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(20));
        config.animation_fps = 0;
        assert_eq!(config.animation_tick_duration(), DEFAULT_FRAME);
        config.animation_fps = 5000;
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(1));
    }

    #[test]
    fn test_wheel_delta() {
        let mut config = ScrollConfig::default();
        assert_eq!(config.wheel_delta(-2), -8.0);
        config.wheel_columns = 0;
        assert_eq!(config.wheel_delta(3), 3.0);
    }

    #[test]
    fn test_smooth_needs_duration() {
        let config = ScrollConfig {
            animation_duration_ms: 0,
            ..Default::default()
        };
        assert!(!config.is_smooth());

        let config = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        assert!(!config.is_smooth());
    }
}
