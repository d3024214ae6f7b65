#![allow(clippy::len_without_is_empty)]
use std::ops::Index;

/// A fixed-capacity ring buffer that evicts its oldest element once full
///
/// Elements are addressed by logical index, where `0` is always the oldest element and
/// `len() - 1` the newest, regardless of where the write head currently sits.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    buffer: Vec<T>,
    ix: usize,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    /// Constructs an empty `RingBuffer`
    ///
    /// **Panics** if `capacity` is zero
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "RingBuffer capacity must be nonzero");
        Self {
            buffer: Vec::<T>::with_capacity(capacity),
            ix: 0,
            capacity,
        }
    }

    /// Returns the buffer length
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    /// Insert an element into the buffer, returning the evicted oldest element if the buffer was full
    pub fn push(&mut self, item: T) -> Option<T> {
        let ix = self.ix;
        self.ix = (ix + 1) % self.capacity;
        if ix >= self.len() {
            self.buffer.push(item);
            None
        } else {
            Some(std::mem::replace(&mut self.buffer[ix], item))
        }
    }

    /// Get the element at logical index `index`, where `0` is the oldest element
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        Some(&self.buffer[self.physical(index)])
    }

    /// Iterate over the elements from oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        (0..self.len()).map(move |i| &self.buffer[self.physical(i)])
    }

    /// Remove all elements, keeping the allocation
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.ix = 0;
    }

    fn physical(&self, index: usize) -> usize {
        if self.is_full() {
            (self.ix + index) % self.capacity
        } else {
            index
        }
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(
            index < self.len(),
            "index {} out of bounds for RingBuffer of length {}",
            index,
            self.len()
        );
        &self.buffer[self.physical(index)]
    }
}
