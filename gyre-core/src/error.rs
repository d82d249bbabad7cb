//! Error types for carousel construction and navigation.

use thiserror::Error;

/// Failures surfaced by carousel constructors and index-addressed commands.
///
/// Every variant is a programmer error at the call site. Boundary navigation
/// (stepping past either end, engine reports at the current position) is a
/// valid steady state and never errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselError {
    /// A carousel must hold at least one slide.
    #[error("slide count must be at least 1")]
    ZeroSlideCount,

    /// At least one slide must be visible per view.
    #[error("slides per view must be at least 1")]
    ZeroSlidesPerView,

    /// A jump target addressed a slide the carousel does not have.
    #[error("slide index {index} out of range for {slide_count} slides")]
    IndexOutOfBounds {
        /// The rejected target index.
        index: usize,
        /// Total slides in the carousel; valid targets are `0..slide_count`.
        slide_count: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CarouselError>;
