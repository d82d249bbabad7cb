//! Virtual active-index navigation for windowed carousels.
//!
//! A carousel showing `slides_per_view` slides at once can only scroll to
//! `slide_count - slides_per_view` distinct physical positions, while
//! pagination bullets, highlights, and ARIA state expect every slide to be
//! addressable. [`VirtualCarousel`] reconciles the two index spaces: it
//! drives a [`SliderEngine`] for physical motion, keeps a virtual active
//! index that can legitimately run ahead of the track near the end, resyncs
//! from drag and swipe reports, and notifies listeners after every change.
//!
//! ```
//! use gyre_core::prelude::*;
//! use gyre_core::testing::ScriptedEngine;
//!
//! let engine = ScriptedEngine::finite(5, 3);
//! let mut carousel = VirtualCarousel::new(5, 3, WrapMode::Finite, engine)?;
//!
//! carousel.go_next();
//! carousel.go_next();
//! carousel.go_next();
//!
//! // The track stops two positions in; the highlight keeps walking.
//! assert_eq!(carousel.active_index(), 3);
//! assert_eq!(carousel.engine().position(), 2);
//! assert!(carousel.can_go_next());
//! # Ok::<(), gyre_core::CarouselError>(())
//! ```

pub mod constants;
pub mod controller;
pub mod engine;
pub mod error;
pub mod events;
pub mod focus;
pub mod prelude;
pub mod registry;
pub mod testing;
pub mod types;

// Intentionally curated re-exports for downstream consumers.
pub use controller::VirtualCarousel;
pub use engine::SliderEngine;
pub use error::{CarouselError, Result as CarouselResult};
pub use events::{ActiveStateChange, ChangeListener, ListenerId};
pub use focus::CarouselFocus;
pub use registry::CarouselRegistry;
pub use types::{CarouselConfig, SlidesPerView, WrapMode};
