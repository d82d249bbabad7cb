//! Tuning constants for carousel breakpoints and default tier sizes.
//!
//! Centralized so embedders and presets agree on the same thresholds.

/// Viewport width thresholds separating the responsive tiers.
pub mod breakpoints {
    /// Minimum viewport width (logical pixels) for the tablet tier.
    /// Anything narrower resolves to the mobile tier.
    pub const TABLET_MIN_WIDTH: f32 = 768.0;

    /// Minimum viewport width (logical pixels) for the desktop tier.
    pub const DESKTOP_MIN_WIDTH: f32 = 1024.0;
}

/// Default slides-per-view counts for standard content-card carousels.
pub mod defaults {
    /// Slides visible at once on desktop-width viewports.
    pub const DESKTOP_SLIDES: usize = 3;

    /// Slides visible at once on tablet-width viewports.
    pub const TABLET_SLIDES: usize = 2;

    /// Slides visible at once on mobile-width viewports.
    pub const MOBILE_SLIDES: usize = 1;
}
