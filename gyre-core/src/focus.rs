//! Carousel focus routing.
//!
//! Tracks which carousel should receive shared navigation input (keyboard
//! arrows, remote buttons) based on hover state and explicit pinning.

/// Focus router for the carousels of one page.
///
/// Resolution order for the navigation target:
/// 1. `hovered` - the carousel under the pointer takes priority
/// 2. `pinned` - explicit focus from chevron presses or programmatic focus
/// 3. Fallback to a view-specific default (handled by the caller)
///
/// Purely positional: debouncing pointer noise and focus timing heuristics
/// belong to the embedder's input layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselFocus<K> {
    /// The carousel currently hovered by the pointer.
    pub hovered: Option<K>,

    /// The carousel that should receive navigation input when nothing is
    /// hovered. Set by chevron presses or explicit focus commands.
    pub pinned: Option<K>,
}

impl<K> CarouselFocus<K> {
    /// Create a router with no target.
    pub fn new() -> Self {
        Self {
            hovered: None,
            pinned: None,
        }
    }

    /// Set or clear the hovered carousel (pointer enter/leave).
    pub fn set_hovered(&mut self, key: Option<K>) {
        self.hovered = key;
    }

    /// Set or clear the pinned carousel.
    pub fn set_pinned(&mut self, key: Option<K>) {
        self.pinned = key;
    }

    /// The carousel navigation input should go to, if any.
    pub fn target(&self) -> Option<&K> {
        self.hovered.as_ref().or(self.pinned.as_ref())
    }

    /// Clear hover state (typically on pointer leaving the page).
    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// Clear all focus state.
    pub fn clear_all(&mut self) {
        self.hovered = None;
        self.pinned = None;
    }
}

impl<K: PartialEq> CarouselFocus<K> {
    /// Whether a specific carousel is the current target.
    pub fn is_target(&self, key: &K) -> bool {
        self.target() == Some(key)
    }
}

impl<K> Default for CarouselFocus<K> {
    fn default() -> Self {
        Self::new()
    }
}
