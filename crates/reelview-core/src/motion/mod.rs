//! Scroll-driven carousel motion
//!
//! - `interpolate` - piecewise-linear range mapping with extrapolation modes
//! - `metrics` - item and backdrop sizes derived from the viewport
//! - `mapper` - offset-to-transform functions (card arc, backdrop reveal)
//! - `frame` - per-offset derivation of every transform the renderer needs
//! - `offset` - single-writer observable scroll offset

pub mod frame;
pub mod interpolate;
pub mod mapper;
pub mod metrics;
pub mod offset;

pub use frame::{BackdropReveal, CarouselFrame, ItemTransform};
pub use interpolate::{Extrapolate, Interpolation};
pub use mapper::{arc_lift, arc_translate_y, backdrop_reveal_width, ARC_CENTER, ARC_REST};
pub use metrics::CarouselMetrics;
pub use offset::{scroll_offset, ScrollOffsetReader, ScrollOffsetWriter};
