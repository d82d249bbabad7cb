//! Registry for managing multiple carousels keyed by an embedder-chosen id.
//!
//! Pages routinely host several carousels; whoever owns their lifecycles
//! owns one of these. It is a plain container, deliberately not a global:
//! each embedder scope keeps its own registry and tears it down with the
//! page.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::controller::VirtualCarousel;

/// Owned map of carousels, keyed by whatever identifies them in the
/// embedder (a typed enum, an element id newtype, ...).
///
/// Breakpoint changes are handled by building a fresh controller and
/// [`insert`](Self::insert)ing it under the same key; the displaced
/// controller comes back to the caller, which can recover its engine via
/// [`VirtualCarousel::into_engine`].
pub struct CarouselRegistry<K, E> {
    carousels: HashMap<K, VirtualCarousel<E>>,
}

impl<K: Eq + Hash, E> CarouselRegistry<K, E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            carousels: HashMap::new(),
        }
    }

    /// Get a mutable reference, creating the carousel with the provided
    /// factory when absent.
    pub fn get_or_insert_with<F>(
        &mut self,
        key: K,
        init: F,
    ) -> &mut VirtualCarousel<E>
    where
        F: FnOnce() -> VirtualCarousel<E>,
    {
        self.carousels.entry(key).or_insert_with(init)
    }

    /// Look up a carousel.
    pub fn get(&self, key: &K) -> Option<&VirtualCarousel<E>> {
        self.carousels.get(key)
    }

    /// Look up a carousel for navigation.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut VirtualCarousel<E>> {
        self.carousels.get_mut(key)
    }

    /// Store a carousel under a key, returning the one it displaced.
    pub fn insert(
        &mut self,
        key: K,
        carousel: VirtualCarousel<E>,
    ) -> Option<VirtualCarousel<E>> {
        self.carousels.insert(key, carousel)
    }

    /// Remove a carousel at teardown.
    pub fn remove(&mut self, key: &K) -> Option<VirtualCarousel<E>> {
        self.carousels.remove(key)
    }

    /// Whether a carousel is registered under this key.
    pub fn contains(&self, key: &K) -> bool {
        self.carousels.contains_key(key)
    }

    /// Keys currently in the registry, in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.carousels.keys()
    }

    /// Number of registered carousels.
    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }
}

impl<K, E> Default for CarouselRegistry<K, E> {
    fn default() -> Self {
        Self {
            carousels: HashMap::new(),
        }
    }
}

impl<K: fmt::Debug, E> fmt::Debug for CarouselRegistry<K, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.carousels.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedEngine;
    use crate::types::WrapMode;

    fn carousel(slides_per_view: usize) -> VirtualCarousel<ScriptedEngine> {
        VirtualCarousel::new(
            6,
            slides_per_view,
            WrapMode::Finite,
            ScriptedEngine::finite(6, slides_per_view),
        )
        .unwrap()
    }

    #[test]
    fn get_or_insert_with_creates_once() {
        let mut registry: CarouselRegistry<&str, ScriptedEngine> =
            CarouselRegistry::new();

        registry.get_or_insert_with("related", || carousel(3)).go_next();
        registry.get_or_insert_with("related", || carousel(3)).go_next();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&"related").unwrap().active_index(), 2);
    }

    #[test]
    fn insert_displaces_previous_instance() {
        let mut registry = CarouselRegistry::new();
        registry.insert("related", carousel(3));

        // Tier change: same key, narrower window.
        let displaced = registry.insert("related", carousel(2));

        assert_eq!(displaced.unwrap().slides_per_view(), 3);
        assert_eq!(registry.get(&"related").unwrap().slides_per_view(), 2);
    }

    #[test]
    fn remove_tears_down() {
        let mut registry = CarouselRegistry::new();
        registry.insert("related", carousel(3));

        assert!(registry.remove(&"related").is_some());
        assert!(registry.is_empty());
        assert!(!registry.contains(&"related"));
    }
}
