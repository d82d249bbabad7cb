//! Shared configuration types for carousel instances.

use crate::constants::{breakpoints, defaults};

/// Carousel paging and boundary behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WrapMode {
    /// Finite (clamped) carousel. Navigation disables at the ends and the
    /// virtual index may run ahead of the physical track near the last slide.
    Finite,
    /// Infinite wrap-around carousel. The engine handles wrapping; the
    /// virtual index mirrors the engine's reported real slide.
    Infinite,
}

/// Slides visible at once, per responsive tier.
///
/// Carousels are re-created when the embedder detects a tier change; nothing
/// here reacts to live resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlidesPerView {
    /// Count at or above [`breakpoints::DESKTOP_MIN_WIDTH`].
    pub desktop: usize,
    /// Count at or above [`breakpoints::TABLET_MIN_WIDTH`].
    pub tablet: usize,
    /// Count below the tablet threshold.
    pub mobile: usize,
}

impl SlidesPerView {
    /// The same count on every tier.
    pub const fn uniform(count: usize) -> Self {
        Self {
            desktop: count,
            tablet: count,
            mobile: count,
        }
    }

    /// Pick the count for a viewport width using the shared breakpoints.
    pub const fn resolve(&self, viewport_width: f32) -> usize {
        if viewport_width >= breakpoints::DESKTOP_MIN_WIDTH {
            self.desktop
        } else if viewport_width >= breakpoints::TABLET_MIN_WIDTH {
            self.tablet
        } else {
            self.mobile
        }
    }
}

/// Static configuration for a carousel instance. These can be derived from
/// presets (card, gallery, hero) or provided ad-hoc by callsites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselConfig {
    /// Per-tier visible slide counts.
    pub slides_per_view: SlidesPerView,
    /// Boundary behavior at the ends of the track.
    pub wrap_mode: WrapMode,
}

impl CarouselConfig {
    /// Basic sane defaults for standard content-card carousels.
    pub const fn card_defaults() -> Self {
        Self {
            slides_per_view: SlidesPerView {
                desktop: defaults::DESKTOP_SLIDES,
                tablet: defaults::TABLET_SLIDES,
                mobile: defaults::MOBILE_SLIDES,
            },
            wrap_mode: WrapMode::Finite,
        }
    }

    /// Defaults for dense image-gallery rows.
    pub const fn gallery_defaults() -> Self {
        Self {
            // Narrow thumbnails pack tighter than cards
            slides_per_view: SlidesPerView {
                desktop: 4,
                tablet: 3,
                mobile: 2,
            },
            wrap_mode: WrapMode::Finite,
        }
    }

    /// Defaults for full-width hero banners that cycle endlessly.
    pub const fn hero_defaults() -> Self {
        Self {
            slides_per_view: SlidesPerView::uniform(1),
            wrap_mode: WrapMode::Infinite,
        }
    }
}
