//! Outbound notifications from the controller to presentation layers.

/// Snapshot of navigation state, emitted after every operation settles.
///
/// Carries everything the presentation layer needs to repaint: which
/// slide/bullet is active and whether each chevron is enabled. Listeners
/// receive it by value; the controller is not re-entrant from a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveStateChange {
    /// The virtual active slide index.
    pub active_index: usize,
    /// Whether backward navigation is currently possible.
    pub can_go_previous: bool,
    /// Whether forward navigation is currently possible.
    pub can_go_next: bool,
}

/// Handle identifying a registered listener, returned by
/// [`subscribe`](crate::VirtualCarousel::subscribe) and consumed by
/// [`unsubscribe`](crate::VirtualCarousel::unsubscribe).
///
/// Ids are unique per controller for its whole lifetime; an id is never
/// reused after its listener is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// Boxed callback receiving state snapshots.
pub type ChangeListener = Box<dyn FnMut(ActiveStateChange)>;
