//! Embedder-facing snapshot of the crate surface.
//! Prefer importing from this module instead of individual tree nodes when
//! wiring carousels into a view layer.

pub use super::controller::VirtualCarousel;
pub use super::engine::SliderEngine;
pub use super::error::CarouselError;
pub use super::events::{ActiveStateChange, ListenerId};
pub use super::focus::CarouselFocus;
pub use super::registry::CarouselRegistry;
pub use super::types::{CarouselConfig, SlidesPerView, WrapMode};
