//! Virtual active-index controller.
//!
//! Reconciles the two index spaces of a windowed carousel: the physical
//! track position the slider engine can actually scroll to, and the virtual
//! active index the pagination UI highlights. With `slides_per_view` slides
//! visible the engine stops at `slide_count - slides_per_view`, but bullets
//! and ARIA state address every slide, so near the end of a finite track
//! the virtual index keeps walking while the physical one stays put.

use std::fmt;

use tracing::debug;

use crate::engine::SliderEngine;
use crate::error::{CarouselError, Result};
use crate::events::{ActiveStateChange, ChangeListener, ListenerId};
use crate::types::{CarouselConfig, WrapMode};

/// Navigation state for one carousel instance.
///
/// Owns the physical engine handle, tracks the virtual active index, and
/// notifies subscribed listeners after every command and inbound engine
/// report. One controller per carousel widget; create it when the engine is
/// ready, drop it (or [`CarouselRegistry`](crate::CarouselRegistry) it) at
/// teardown.
///
/// Invariants in [`WrapMode::Finite`]:
/// - the active index stays within `0..slide_count`
/// - the active index never falls behind the engine's physical position
/// - the active slide stays inside the visible window, at most
///   `slides_per_view - 1` ahead of the physical position
pub struct VirtualCarousel<E> {
    engine: E,
    slide_count: usize,
    slides_per_view: usize,
    max_physical_index: usize,
    wrap_mode: WrapMode,
    active_index: usize,
    listeners: Vec<(ListenerId, ChangeListener)>,
    next_listener_id: u64,
}

impl<E: SliderEngine> VirtualCarousel<E> {
    /// Create a controller over an initialized engine.
    ///
    /// The initial active index adopts the engine's current position, so
    /// re-creating the controller on a breakpoint change keeps the user
    /// where they were.
    ///
    /// # Errors
    ///
    /// [`CarouselError::ZeroSlideCount`] or
    /// [`CarouselError::ZeroSlidesPerView`] when either count is zero.
    /// Counts are never clamped into validity.
    pub fn new(
        slide_count: usize,
        slides_per_view: usize,
        wrap_mode: WrapMode,
        engine: E,
    ) -> Result<Self> {
        if slide_count == 0 {
            return Err(CarouselError::ZeroSlideCount);
        }
        if slides_per_view == 0 {
            return Err(CarouselError::ZeroSlidesPerView);
        }

        let active_index = match wrap_mode {
            WrapMode::Infinite => engine.real_index(),
            WrapMode::Finite => engine.current_index(),
        };

        Ok(Self {
            engine,
            slide_count,
            slides_per_view,
            max_physical_index: slide_count.saturating_sub(slides_per_view),
            wrap_mode,
            active_index,
            listeners: Vec::new(),
            next_listener_id: 0,
        })
    }

    /// Create a controller with the slides-per-view tier resolved from the
    /// viewport width.
    ///
    /// # Errors
    ///
    /// Same conditions as [`new`](Self::new).
    pub fn from_config(
        slide_count: usize,
        viewport_width: f32,
        config: &CarouselConfig,
        engine: E,
    ) -> Result<Self> {
        let slides_per_view = config.slides_per_view.resolve(viewport_width);
        Self::new(slide_count, slides_per_view, config.wrap_mode, engine)
    }

    /// Advance to the next slide.
    ///
    /// While the track can still scroll and the virtual index is locked to
    /// it, the engine moves and the virtual index follows. Once the track is
    /// physically maxed out the trailing slides are already visible inside
    /// the window, so only the virtual index advances. When a backward drag
    /// has parked the track short of its limit with the highlight ahead, a
    /// step that would leave the visible window scrolls the engine along
    /// with it. At the last slide this is a no-op on the index; a snapshot
    /// is still emitted.
    pub fn go_next(&mut self) {
        match self.wrap_mode {
            WrapMode::Infinite => {
                self.engine.slide_next();
                self.active_index = self.engine.real_index();
            }
            WrapMode::Finite => {
                let physical = self.engine.current_index();
                if physical < self.max_physical_index
                    && self.active_index <= physical
                {
                    self.engine.slide_next();
                    self.active_index = self.engine.current_index();
                } else if self.active_index + 1 < self.slide_count {
                    self.active_index += 1;
                    // Past the window's edge with track room left: only
                    // reachable after an in-window backward drag. The
                    // engine moves so the active slide stays visible.
                    if physical < self.max_physical_index
                        && self.active_index
                            > physical + self.slides_per_view - 1
                    {
                        self.engine.slide_next();
                    }
                }
            }
        }
        debug!(
            "next: active={} physical={}",
            self.active_index,
            self.engine.current_index()
        );
        self.emit();
    }

    /// Go back one slide.
    ///
    /// Mirror of [`go_next`](Self::go_next): the virtual index walks back
    /// through the visible window first, and the engine only scrolls once
    /// virtual and physical positions meet. At the first slide this is a
    /// no-op on the index; a snapshot is still emitted.
    pub fn go_previous(&mut self) {
        match self.wrap_mode {
            WrapMode::Infinite => {
                self.engine.slide_prev();
                self.active_index = self.engine.real_index();
            }
            WrapMode::Finite => {
                let physical = self.engine.current_index();
                if self.active_index > physical {
                    self.active_index -= 1;
                } else if physical > 0 {
                    self.engine.slide_prev();
                    self.active_index = self.engine.current_index();
                }
            }
        }
        debug!(
            "previous: active={} physical={}",
            self.active_index,
            self.engine.current_index()
        );
        self.emit();
    }

    /// Jump straight to a slide, as a pagination bullet click does.
    ///
    /// The physical target is clamped to what the track can reach; the
    /// virtual index takes the requested value, which may legitimately run
    /// ahead of the clamped physical position.
    ///
    /// # Errors
    ///
    /// [`CarouselError::IndexOutOfBounds`] when `target` is not a real
    /// slide. Nothing moves and no snapshot is emitted.
    pub fn go_to(&mut self, target: usize) -> Result<()> {
        if target >= self.slide_count {
            return Err(CarouselError::IndexOutOfBounds {
                index: target,
                slide_count: self.slide_count,
            });
        }

        match self.wrap_mode {
            WrapMode::Infinite => {
                self.engine.slide_to_real(target);
            }
            WrapMode::Finite => {
                self.engine.slide_to(target.min(self.max_physical_index));
            }
        }
        self.active_index = target;
        debug!(
            "jump to {}: physical={}",
            target,
            self.engine.current_index()
        );
        self.emit();
        Ok(())
    }

    /// Inbound report that the engine's position changed outside this
    /// controller, typically from a drag or swipe. Wire the engine's native
    /// change event here.
    ///
    /// Forward motion always drags the virtual index along. Backward motion
    /// only resyncs when the active slide has left the visible window;
    /// otherwise the highlight stays where it is. Reporting the current
    /// position never alters the index, so controller-driven moves that
    /// echo back through the engine's event are harmless.
    pub fn update_physical_index(&mut self, new_physical: usize) {
        match self.wrap_mode {
            WrapMode::Infinite => {
                // Raw positions on a looping track include clone slides;
                // the engine's real index is the meaningful coordinate.
                self.active_index = self.engine.real_index();
            }
            WrapMode::Finite => {
                if self.active_index < new_physical {
                    self.active_index = new_physical;
                } else if new_physical < self.active_index {
                    let last_visible =
                        new_physical + self.slides_per_view - 1;
                    if self.active_index > last_visible {
                        self.active_index = new_physical;
                    }
                }
            }
        }
        debug!(
            "engine reported physical={}: active={}",
            new_physical, self.active_index
        );
        self.emit();
    }

    /// Whether backward navigation is currently possible.
    pub fn can_go_previous(&self) -> bool {
        match self.wrap_mode {
            WrapMode::Infinite => true,
            WrapMode::Finite => self.active_index > 0,
        }
    }

    /// Whether forward navigation is currently possible.
    pub fn can_go_next(&self) -> bool {
        match self.wrap_mode {
            WrapMode::Infinite => true,
            WrapMode::Finite => self.active_index + 1 < self.slide_count,
        }
    }

    /// The virtual active slide index.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Total real slides, loop clones excluded.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Slides visible at once at the breakpoint this controller was built
    /// for.
    pub fn slides_per_view(&self) -> usize {
        self.slides_per_view
    }

    /// Highest physical position the track can scroll to.
    pub fn max_physical_index(&self) -> usize {
        self.max_physical_index
    }

    /// Boundary behavior this controller was built with.
    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap_mode
    }

    /// The state snapshot listeners receive.
    pub fn snapshot(&self) -> ActiveStateChange {
        ActiveStateChange {
            active_index: self.active_index,
            can_go_previous: self.can_go_previous(),
            can_go_next: self.can_go_next(),
        }
    }

    /// Shared access to the engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Exclusive access to the engine. Position changes made directly on
    /// the engine must be reported back through
    /// [`update_physical_index`](Self::update_physical_index).
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Tear the controller down and recover the engine, e.g. to rebuild at
    /// a new breakpoint.
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Register a listener for [`ActiveStateChange`] snapshots.
    ///
    /// Listeners fire in subscription order after every command and inbound
    /// report, including boundary no-ops. Detach with
    /// [`unsubscribe`](Self::unsubscribe); dropping the controller drops
    /// all listeners.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(ActiveStateChange) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` when the id was already gone.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn emit(&mut self) {
        let snapshot = self.snapshot();
        for (_, listener) in &mut self.listeners {
            listener(snapshot);
        }
    }
}

impl<E> fmt::Debug for VirtualCarousel<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualCarousel")
            .field("active_index", &self.active_index)
            .field("slide_count", &self.slide_count)
            .field("slides_per_view", &self.slides_per_view)
            .field("max_physical_index", &self.max_physical_index)
            .field("wrap_mode", &self.wrap_mode)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
