//! Snap scrolling for the carousel
//!
//! ## Atoms
//! - `easing` - easing curves mapping [0, 1] to [0, 1]
//! - `timing` - progress and interpolation helpers
//! - `config` - configuration helpers (types live in reelview-core)
//!
//! ## Controller
//! - `animation` - `ScrollAnimator`, the sole writer of the shared offset
//!
//! # Usage
//!
//! ```ignore
//! use reelview_core::scroll_offset;
//! use reelview_tui::scroll::{ScrollAnimator, ScrollBounds};
//!
//! let (writer, reader) = scroll_offset();
//! let mut animator = ScrollAnimator::new(config.ui.scroll.clone(), writer);
//!
//! animator.scroll_to(bounds.step * 2.0, bounds);
//! // once per frame
//! let offset = animator.update(bounds);
//! ```

pub mod animation;
pub mod config;
pub mod easing;
pub mod timing;

pub use animation::{ScrollAnimator, ScrollBounds};
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
