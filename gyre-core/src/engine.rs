//! Seam between the navigation controller and the physical slider track.

/// Driver-side interface of a physical slider engine.
///
/// The engine owns track geometry, animation, and input handling; the
/// controller only issues position commands and reads positions back.
/// Implementations report indices within their own track bounds. The
/// controller trusts reports as-is rather than re-clamping them, so a
/// report outside the track is a wiring bug in the engine binding and
/// will surface instead of being papered over.
pub trait SliderEngine {
    /// Advance one physical position. The engine clamps or wraps according
    /// to its own configuration.
    fn slide_next(&mut self);

    /// Retreat one physical position.
    fn slide_prev(&mut self);

    /// Jump to a physical track position.
    fn slide_to(&mut self, index: usize);

    /// Jump addressed by real slide index, for engines whose track carries
    /// loop clones. Finite engines address both spaces identically, which
    /// is what the default does.
    fn slide_to_real(&mut self, index: usize) {
        self.slide_to(index);
    }

    /// Current physical track position.
    fn current_index(&self) -> usize;

    /// Current real slide index with loop clones factored out. Coincides
    /// with [`current_index`](Self::current_index) for finite tracks.
    fn real_index(&self) -> usize {
        self.current_index()
    }
}

impl<E: SliderEngine + ?Sized> SliderEngine for &mut E {
    fn slide_next(&mut self) {
        (**self).slide_next();
    }

    fn slide_prev(&mut self) {
        (**self).slide_prev();
    }

    fn slide_to(&mut self, index: usize) {
        (**self).slide_to(index);
    }

    fn slide_to_real(&mut self, index: usize) {
        (**self).slide_to_real(index);
    }

    fn current_index(&self) -> usize {
        (**self).current_index()
    }

    fn real_index(&self) -> usize {
        (**self).real_index()
    }
}

impl<E: SliderEngine + ?Sized> SliderEngine for Box<E> {
    fn slide_next(&mut self) {
        (**self).slide_next();
    }

    fn slide_prev(&mut self) {
        (**self).slide_prev();
    }

    fn slide_to(&mut self, index: usize) {
        (**self).slide_to(index);
    }

    fn slide_to_real(&mut self, index: usize) {
        (**self).slide_to_real(index);
    }

    fn current_index(&self) -> usize {
        (**self).current_index()
    }

    fn real_index(&self) -> usize {
        (**self).real_index()
    }
}
