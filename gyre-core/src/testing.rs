//! Deterministic engine stubs for exercising navigation logic.
//!
//! Ships in the crate (not behind `cfg(test)`) so embedders can drive their
//! own wiring tests against a scripted track instead of a real engine.

use crate::engine::SliderEngine;

/// Commands a [`ScriptedEngine`] observed, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackCommand {
    /// `slide_next` was called.
    Next,
    /// `slide_prev` was called.
    Prev,
    /// `slide_to` was called with this physical target.
    To(usize),
    /// `slide_to_real` was called with this real slide target.
    ToReal(usize),
}

/// In-memory slider engine with a recorded command log.
///
/// Positions behave like a well-configured track: clamped to the physical
/// range in finite mode, wrapped modulo the slide count in loop mode. The
/// command log lets tests assert exactly what the controller delegated
/// without a mocking framework.
#[derive(Debug, Clone)]
pub struct ScriptedEngine {
    position: usize,
    max_position: usize,
    slide_count: usize,
    wrap: bool,
    commands: Vec<TrackCommand>,
}

impl ScriptedEngine {
    /// A finite track for `slide_count` slides showing `slides_per_view`
    /// at once, starting at position 0.
    pub fn finite(slide_count: usize, slides_per_view: usize) -> Self {
        Self {
            position: 0,
            max_position: slide_count.saturating_sub(slides_per_view),
            slide_count,
            wrap: false,
            commands: Vec::new(),
        }
    }

    /// A looping track over `slide_count` real slides, starting at slide 0.
    /// Clone slides are not modeled; positions are real indices throughout.
    ///
    /// # Panics
    ///
    /// Panics when `slide_count` is zero; a looping track needs at least
    /// one slide to wrap over.
    pub fn looping(slide_count: usize) -> Self {
        assert!(slide_count > 0, "looping track needs at least one slide");
        Self {
            position: 0,
            max_position: slide_count - 1,
            slide_count,
            wrap: true,
            commands: Vec::new(),
        }
    }

    /// Start the track at a specific position instead of 0.
    pub fn at(mut self, position: usize) -> Self {
        self.position = position.min(self.max_position);
        self
    }

    /// Current track position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Everything the controller asked the engine to do, in order.
    pub fn commands(&self) -> &[TrackCommand] {
        &self.commands
    }
}

impl SliderEngine for ScriptedEngine {
    fn slide_next(&mut self) {
        self.commands.push(TrackCommand::Next);
        if self.wrap {
            self.position = (self.position + 1) % self.slide_count;
        } else if self.position < self.max_position {
            self.position += 1;
        }
    }

    fn slide_prev(&mut self) {
        self.commands.push(TrackCommand::Prev);
        if self.wrap {
            self.position =
                (self.position + self.slide_count - 1) % self.slide_count;
        } else {
            self.position = self.position.saturating_sub(1);
        }
    }

    fn slide_to(&mut self, index: usize) {
        self.commands.push(TrackCommand::To(index));
        self.position = index.min(self.max_position);
    }

    fn slide_to_real(&mut self, index: usize) {
        self.commands.push(TrackCommand::ToReal(index));
        self.position = index.min(self.max_position);
    }

    fn current_index(&self) -> usize {
        self.position
    }

    fn real_index(&self) -> usize {
        self.position
    }
}
