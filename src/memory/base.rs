use crate::{
    ds::RingBuffer,
    error::{Error, Result},
};

use super::Transition;

/// A bounded, time-ordered store of the current episode's transitions
///
/// This structure uses a ring buffer, so pushing is O(1) and never holds more than
/// `capacity` transitions. Once full, each push evicts the single oldest transition.
/// Iteration always runs oldest to newest.
#[derive(Debug, Clone)]
pub struct ReplayMemory {
    memory: RingBuffer<Transition>,
}

impl ReplayMemory {
    /// Construct an empty `ReplayMemory`
    ///
    /// Fails with [`Error::Configuration`] if `capacity` is zero
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::config(
                "memory_capacity",
                "capacity must be greater than 0",
            ));
        }
        Ok(Self {
            memory: RingBuffer::new(capacity),
        })
    }

    /// Add a new transition to the memory, returning the evicted oldest transition if the memory was full
    pub fn push(&mut self, transition: Transition) -> Option<Transition> {
        self.memory.push(transition)
    }

    /// Discard every stored transition
    pub fn clear(&mut self) {
        self.memory.clear();
    }

    /// Iterate over the transitions in temporal order, most recent last
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Transition> + ExactSizeIterator + '_ {
        self.memory.iter()
    }

    /// Get the transition at temporal index `index`, where `0` is the oldest
    pub fn get(&self, index: usize) -> Option<&Transition> {
        self.memory.get(index)
    }

    /// The most recently pushed transition
    pub fn last(&self) -> Option<&Transition> {
        self.len().checked_sub(1).and_then(|ix| self.get(ix))
    }

    pub fn len(&self) -> usize {
        self.memory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memory.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.memory.capacity()
    }
}
