//! Session pool: the shuffled, answered-filtered order in which entries are
//! handed out, plus the answered set that gates future rebuilds.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::vocabulary::VocabularyEntry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolState {
    /// No vocabulary has been loaded yet.
    Empty,
    /// Pool built, cursor before the first entry.
    Ready,
    InProgress,
    /// Cursor moved past the last entry.
    Exhausted,
}

#[derive(Debug, Default)]
pub struct SessionPool {
    order: Vec<String>,
    cursor: Option<usize>, // None = before first; Some(len) = exhausted
    answered: HashSet<String>,
    built: bool,
}

impl SessionPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from `entries`, leaving out answered ids, then shuffle.
    pub fn reset<R: Rng + ?Sized>(&mut self, entries: &[VocabularyEntry], rng: &mut R) {
        self.order = entries
            .iter()
            .filter(|e| !self.answered.contains(&e.id))
            .map(|e| e.id.clone())
            .collect();
        self.order.shuffle(rng);
        self.cursor = None;
        self.built = true;
    }

    /// Step the cursor forward and return the id under it, or `None` once the
    /// pool is used up.
    pub fn advance(&mut self) -> Option<&str> {
        if !self.built {
            return None;
        }
        let next = self.cursor.map_or(0, |c| c + 1).min(self.order.len());
        self.cursor = Some(next);
        self.order.get(next).map(String::as_str)
    }

    /// Like [`advance`](Self::advance), but hands out the first remaining id
    /// that `keep` accepts. Ids passed over are not consumed: they move back
    /// one place, in order, and stay available to later calls. Returns `None`
    /// without moving the cursor when nothing remaining is accepted.
    pub fn advance_where<F: FnMut(&str) -> bool>(&mut self, mut keep: F) -> Option<&str> {
        if !self.built {
            return None;
        }
        let next = self.cursor.map_or(0, |c| c + 1).min(self.order.len());
        let Some(offset) = self.order[next..].iter().position(|id| keep(id)) else {
            if next == self.order.len() {
                self.cursor = Some(next);
            }
            return None;
        };
        self.order[next..=next + offset].rotate_right(1);
        self.cursor = Some(next);
        self.order.get(next).map(String::as_str)
    }

    /// Only affects later `reset` calls; the current order is untouched.
    pub fn mark_answered(&mut self, id: &str) -> bool {
        self.answered.insert(id.to_string())
    }

    pub fn clear_answered(&mut self) {
        self.answered.clear();
    }

    pub fn is_answered(&self, id: &str) -> bool {
        self.answered.contains(id)
    }

    pub fn answered_count(&self) -> usize {
        self.answered.len()
    }

    pub fn state(&self) -> PoolState {
        if !self.built {
            return PoolState::Empty;
        }
        match self.cursor {
            None => PoolState::Ready,
            Some(c) if c < self.order.len() => PoolState::InProgress,
            Some(_) => PoolState::Exhausted,
        }
    }

    /// Positions not yet handed out by `advance`.
    pub fn remaining(&self) -> usize {
        let consumed = self.cursor.map_or(0, |c| (c + 1).min(self.order.len()));
        self.order.len() - consumed
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
