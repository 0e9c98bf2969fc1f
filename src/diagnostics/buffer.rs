// SPDX-License-Identifier: MPL-2.0
//! Fixed-size event storage.

use std::collections::VecDeque;

/// Ring of the most recent `capacity` items, oldest first.
///
/// ```
/// use iced_toast::diagnostics::RingBuffer;
///
/// let mut ring = RingBuffer::new(2);
/// assert_eq!(ring.push('a'), None);
/// assert_eq!(ring.push('b'), None);
/// assert_eq!(ring.push('c'), Some('a'));
///
/// assert_eq!(ring.iter().collect::<String>(), "bc");
/// assert_eq!(ring.evicted(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
    evicted: u64,
}

impl<T> RingBuffer<T> {
    /// A zero `capacity` is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
            evicted: 0,
        }
    }

    /// Appends `item`, handing back the oldest item if it had to make room.
    pub fn push(&mut self, item: T) -> Option<T> {
        let dropped = if self.items.len() == self.capacity {
            self.evicted += 1;
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        dropped
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }

    #[must_use]
    pub fn newest(&self) -> Option<&T> {
        self.items.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total number of items pushed out since creation.
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_newest_items() {
        let mut ring = RingBuffer::new(3);
        for n in 1..=5 {
            ring.push(n);
        }

        assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(ring.newest(), Some(&5));
        assert_eq!(ring.evicted(), 2);
    }

    #[test]
    fn iterates_newest_first_in_reverse() {
        let mut ring = RingBuffer::new(4);
        ring.push("shown");
        ring.push("paused");
        assert_eq!(ring.iter().rev().next(), Some(&"paused"));
        assert_eq!(ring.iter().len(), 2);
    }

    #[test]
    fn eviction_count_only_grows_once_full() {
        let mut ring = RingBuffer::new(2);
        ring.push(1);
        ring.push(2);
        assert_eq!(ring.evicted(), 0);
        assert!(!ring.is_empty());

        ring.push(3);
        assert_eq!(ring.evicted(), 1);
        assert_eq!(ring.len(), ring.capacity());
    }

    #[test]
    fn zero_capacity_holds_one_item() {
        let mut ring = RingBuffer::new(0);
        assert_eq!(ring.capacity(), 1);
        ring.push('x');
        assert_eq!(ring.push('y'), Some('x'));
    }
}
