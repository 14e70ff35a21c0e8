// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixed-capacity ring buffer backing the sliding window.

use crate::window_size::WindowSize;
use std::mem::replace;

/// Ring buffer holding at most `capacity` elements.
///
/// While filling, elements are appended. Once full, each push overwrites the
/// oldest slot in O(1) and hands the evicted element back. Iteration always
/// runs oldest to newest.
///
/// # Examples
///
/// ```
/// use slidewin_core::{WindowBuffer, WindowSize};
///
/// let mut buffer = WindowBuffer::new(WindowSize::new(2).unwrap());
/// assert_eq!(buffer.push(1), None);
/// assert_eq!(buffer.push(2), None);
/// assert_eq!(buffer.push(3), Some(1));
/// assert_eq!(buffer.snapshot(), vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct WindowBuffer<T> {
    slots: Vec<T>,
    // Index of the oldest element; only moves once the buffer is full.
    head: usize,
    capacity: usize,
}

impl<T> WindowBuffer<T> {
    /// Creates an empty buffer with room for exactly `size` elements.
    #[must_use]
    pub fn new(size: WindowSize) -> Self {
        Self {
            slots: Vec::with_capacity(size.get()),
            head: 0,
            capacity: size.get(),
        }
    }

    /// Appends `value`, evicting and returning the oldest element when full.
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.slots.len() < self.capacity {
            self.slots.push(value);
            return None;
        }

        let evicted = replace(&mut self.slots[self.head], value);
        self.head = (self.head + 1) % self.capacity;
        Some(evicted)
    }

    /// Number of buffered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// `true` once the buffer holds `capacity` elements.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates the buffered elements, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let (newer, older) = self.slots.split_at(self.head);
        older.iter().chain(newer.iter())
    }

    /// Drops every buffered element, keeping the allocation.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = 0;
    }
}

impl<T: Clone> WindowBuffer<T> {
    /// Copies the buffered elements, oldest first, into a fresh `Vec`.
    ///
    /// The returned `Vec` shares nothing with the buffer.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        let mut window = Vec::with_capacity(self.slots.len());
        window.extend(self.iter().cloned());
        window
    }
}
