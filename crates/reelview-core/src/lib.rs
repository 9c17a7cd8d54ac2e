pub mod config;
pub mod error;
pub mod motion;
pub mod movie;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
pub use motion::{scroll_offset, CarouselFrame, CarouselMetrics, ScrollOffsetReader, ScrollOffsetWriter};
pub use movie::{DisplayEntry, DisplayList, MovieProvider, MovieRecord};
