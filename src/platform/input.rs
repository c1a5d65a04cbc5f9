//! Keyboard fire requests
//!
//! Key-down events arrive between frames; the queue remembers which arenas
//! asked to fire and hands the requests to the next tick. Repeats inside a
//! frame collapse into one request, and the arena's cooldown drops the rest.

use crate::consts::ARENA_COUNT;
use crate::sim::TickInput;

/// One fire key per arena, matched against `KeyboardEvent.key`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    keys: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new(["a", "l"])
    }
}

impl KeyBindings {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Arena fired by `key`; letters match either case
    pub fn arena_for(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k.eq_ignore_ascii_case(key))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct FireQueue {
    bindings: KeyBindings,
    pending: Vec<bool>,
}

impl Default for FireQueue {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

impl FireQueue {
    pub fn new(bindings: KeyBindings) -> Self {
        let arenas = bindings.len().max(ARENA_COUNT);
        Self {
            bindings,
            pending: vec![false; arenas],
        }
    }

    /// Record a key-down; returns whether the key is bound
    pub fn key_down(&mut self, key: &str) -> bool {
        match self.bindings.arena_for(key) {
            Some(arena) => {
                self.press(arena);
                true
            }
            None => false,
        }
    }

    /// Queue a fire request for `arena` directly
    pub fn press(&mut self, arena: usize) {
        if arena >= self.pending.len() {
            self.pending.resize(arena + 1, false);
        }
        self.pending[arena] = true;
    }

    /// Take the queued requests as the next tick's input
    pub fn drain(&mut self) -> TickInput {
        let fire = self.pending.clone();
        self.pending.iter_mut().for_each(|p| *p = false);
        TickInput { fire }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.arena_for("a"), Some(0));
        assert_eq!(bindings.arena_for("l"), Some(1));
        assert_eq!(bindings.arena_for("L"), Some(1));
        assert_eq!(bindings.arena_for("Enter"), None);
    }

    #[test]
    fn test_queue_collapses_repeats_and_clears() {
        let mut queue = FireQueue::default();
        assert!(queue.key_down("a"));
        assert!(queue.key_down("a"));
        assert!(!queue.key_down("x"));

        let input = queue.drain();
        assert!(input.wants_fire(0));
        assert!(!input.wants_fire(1));

        let input = queue.drain();
        assert!(!input.wants_fire(0));
    }

    #[test]
    fn test_both_players_same_frame() {
        let mut queue = FireQueue::default();
        queue.key_down("l");
        queue.key_down("a");
        let input = queue.drain();
        assert_eq!(input.fire, vec![true, true]);
    }
}
