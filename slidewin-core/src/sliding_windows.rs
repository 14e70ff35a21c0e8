// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sliding window adapters for iterators.
//!
//! [`SlidingWindows`] turns any iterator into an iterator of overlapping windows,
//! advancing one element per step. [`TrySlidingWindows`] does the same for iterators
//! of `Result`, handing the first source error back untouched and stopping there.
//!
//! # Basic Usage
//!
//! ```
//! use slidewin_core::SlidingWindowExt;
//!
//! let windows: Vec<Vec<i32>> = vec![1, 2, 3, 4, 5]
//!     .into_iter()
//!     .sliding_window(2)
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(windows, vec![vec![1, 2], vec![2, 3], vec![3, 4], vec![4, 5]]);
//! ```
//!
//! # Short Sources
//!
//! At least one window is always produced. A source shorter than the window size
//! yields a single partial window, and an empty source yields a single empty window.
//!
//! ```
//! use slidewin_core::SlidingWindowExt;
//!
//! let partial: Vec<Vec<i32>> = vec![1, 2, 3].into_iter().sliding_window(5).unwrap().collect();
//! assert_eq!(partial, vec![vec![1, 2, 3]]);
//!
//! let empty: Vec<Vec<i32>> = Vec::new().into_iter().sliding_window(3).unwrap().collect();
//! assert_eq!(empty, vec![Vec::<i32>::new()]);
//! ```
//!
//! # Source Lifetime
//!
//! The adapter owns its source and drops it as soon as the source reports its end
//! or an error, before that outcome reaches the caller. Dropping the adapter early
//! drops the source with it.

use crate::error::{Result, SlidewinError};
use crate::window_state::{SlidingWindowState, WindowPhase};
use crate::window_size::WindowSize;
use std::fmt;
use std::iter::FusedIterator;

/// Iterator over the sliding windows of `I`.
///
/// Created by [`SlidingWindowExt::sliding_window`] or [`sliding_window`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SlidingWindows<I: Iterator> {
    source: Option<I>,
    state: SlidingWindowState<I::Item>,
}

impl<I> SlidingWindows<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Wraps `source` without pulling from it.
    pub fn new(source: I, size: WindowSize) -> Self {
        Self {
            source: Some(source),
            state: SlidingWindowState::new(size),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> WindowPhase {
        self.state.phase()
    }

    /// `true` while the adapter still holds its source.
    #[must_use]
    pub const fn holds_source(&self) -> bool {
        self.source.is_some()
    }
}

impl<I> Iterator for SlidingWindows<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let source = self.source.as_mut()?;
            match source.next() {
                Some(value) => {
                    if let Some(window) = self.state.on_value(value) {
                        return Some(window);
                    }
                }
                None => {
                    self.source = None;
                    return self.state.on_end();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => window_count_hint(&self.state, source.size_hint()),
            None => (0, Some(0)),
        }
    }
}

impl<I> FusedIterator for SlidingWindows<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

impl<I: Iterator> fmt::Debug for SlidingWindows<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlidingWindows")
            .field("window_size", &self.state.window_size())
            .field("phase", &self.state.phase())
            .field("holds_source", &self.source.is_some())
            .finish_non_exhaustive()
    }
}

/// Iterator over the sliding windows of a fallible source.
///
/// Yields `Ok(window)` for every window and `Err(e)` for the first source error,
/// after which it is exhausted. The error is the source's own value, not wrapped.
///
/// # Examples
///
/// ```
/// use slidewin_core::SlidingWindowExt;
///
/// let source = vec![Ok(1), Ok(2), Ok(3), Err("disk gone"), Ok(5)];
/// let mut windows = source.into_iter().try_sliding_window(2).unwrap();
///
/// assert_eq!(windows.next(), Some(Ok(vec![1, 2])));
/// assert_eq!(windows.next(), Some(Ok(vec![2, 3])));
/// assert_eq!(windows.next(), Some(Err("disk gone")));
/// assert_eq!(windows.next(), None);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct TrySlidingWindows<I, T> {
    source: Option<I>,
    state: SlidingWindowState<T>,
}

impl<I, T: Clone> TrySlidingWindows<I, T> {
    /// Wraps `source` without pulling from it.
    pub fn new(source: I, size: WindowSize) -> Self {
        Self {
            source: Some(source),
            state: SlidingWindowState::new(size),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> WindowPhase {
        self.state.phase()
    }

    /// `true` while the adapter still holds its source.
    #[must_use]
    pub const fn holds_source(&self) -> bool {
        self.source.is_some()
    }
}

impl<I, T, E> Iterator for TrySlidingWindows<I, T>
where
    I: Iterator<Item = std::result::Result<T, E>>,
    T: Clone,
{
    type Item = std::result::Result<Vec<T>, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let source = self.source.as_mut()?;
            match source.next() {
                Some(Ok(value)) => {
                    if let Some(window) = self.state.on_value(value) {
                        return Some(Ok(window));
                    }
                }
                Some(Err(error)) => {
                    self.source = None;
                    self.state.on_error();
                    return Some(Err(error));
                }
                None => {
                    self.source = None;
                    return self.state.on_end().map(Ok);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            // An error may cut the source short at any point.
            Some(source) => {
                let (_, upper) = window_count_hint(&self.state, source.size_hint());
                (0, upper)
            }
            None => (0, Some(0)),
        }
    }
}

impl<I, T, E> FusedIterator for TrySlidingWindows<I, T>
where
    I: Iterator<Item = std::result::Result<T, E>>,
    T: Clone,
{
}

impl<I, T> fmt::Debug for TrySlidingWindows<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrySlidingWindows")
            .field("window_size", &self.state.window_size())
            .field("phase", &self.state.phase())
            .field("holds_source", &self.source.is_some())
            .finish_non_exhaustive()
    }
}

// Windows still to come, given what is buffered and what the source says it has left.
fn window_count_hint<T>(
    state: &SlidingWindowState<T>,
    (lower, upper): (usize, Option<usize>),
) -> (usize, Option<usize>) {
    match state.phase() {
        WindowPhase::Filling => {
            let first = |remaining: usize| {
                remaining
                    .checked_add(state.buffered() + 1)
                    .map(|total| total.saturating_sub(state.window_size()).max(1))
            };
            (first(lower).unwrap_or(usize::MAX), upper.and_then(first))
        }
        WindowPhase::Sliding => (lower, upper),
        WindowPhase::Exhausted => (0, Some(0)),
    }
}

/// Extension trait providing the sliding window operators on every iterator.
pub trait SlidingWindowExt: Iterator + Sized {
    /// Splits the iterator into overlapping windows of `size` elements.
    ///
    /// The first window holds `min(len, size)` elements and is emitted even when the
    /// source is empty. Every later window holds exactly `size` elements and is the
    /// previous one shifted by a single element. Each window is a fresh `Vec`.
    ///
    /// Nothing is pulled from the source until the returned iterator is polled, and
    /// pulling the first `m` windows consumes at most `m + size - 1` elements.
    ///
    /// # Errors
    ///
    /// Returns [`SlidewinError::InvalidArgument`] when `size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidewin_core::SlidingWindowExt;
    ///
    /// let mut windows = (1..).sliding_window(3).unwrap();
    /// assert_eq!(windows.next(), Some(vec![1, 2, 3]));
    /// assert_eq!(windows.next(), Some(vec![2, 3, 4]));
    ///
    /// assert!((1..).sliding_window(0).unwrap_err().is_invalid_argument());
    /// ```
    fn sliding_window(self, size: usize) -> Result<SlidingWindows<Self>>
    where
        Self::Item: Clone,
    {
        let size = WindowSize::new(size)?;
        Ok(SlidingWindows::new(self, size))
    }

    /// Like [`sliding_window`](Self::sliding_window), for iterators of `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`SlidewinError::InvalidArgument`] when `size` is zero.
    fn try_sliding_window<T, E>(self, size: usize) -> Result<TrySlidingWindows<Self, T>>
    where
        Self: Iterator<Item = std::result::Result<T, E>>,
        T: Clone,
    {
        let size = WindowSize::new(size)?;
        Ok(TrySlidingWindows::new(self, size))
    }
}

impl<I: Iterator> SlidingWindowExt for I {}

/// Creates a sliding window iterator over an optional source.
///
/// Validation happens here, before `source` is touched: an absent source or a
/// `size` that is zero or negative fails with [`SlidewinError::InvalidArgument`].
///
/// # Errors
///
/// Returns [`SlidewinError::InvalidArgument`] when `source` is `None` or `size <= 0`.
///
/// # Examples
///
/// ```
/// use slidewin_core::sliding_window;
///
/// let windows: Vec<Vec<i32>> = sliding_window(Some(vec![1, 2, 3, 4]), 1).unwrap().collect();
/// assert_eq!(windows, vec![vec![1], vec![2], vec![3], vec![4]]);
///
/// assert!(sliding_window(None::<Vec<i32>>, 2).unwrap_err().is_invalid_argument());
/// assert!(sliding_window(Some(vec![1]), -1).unwrap_err().is_invalid_argument());
/// ```
pub fn sliding_window<I>(source: Option<I>, size: i64) -> Result<SlidingWindows<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let source = require_source(source)?;
    let size = WindowSize::try_from(size)?;
    Ok(SlidingWindows::new(source.into_iter(), size))
}

/// Creates a sliding window iterator over an optional fallible source.
///
/// # Errors
///
/// Returns [`SlidewinError::InvalidArgument`] when `source` is `None` or `size <= 0`.
pub fn try_sliding_window<I, T, E>(
    source: Option<I>,
    size: i64,
) -> Result<TrySlidingWindows<I::IntoIter, T>>
where
    I: IntoIterator<Item = std::result::Result<T, E>>,
    T: Clone,
{
    let source = require_source(source)?;
    let size = WindowSize::try_from(size)?;
    Ok(TrySlidingWindows::new(source.into_iter(), size))
}

fn require_source<I>(source: Option<I>) -> Result<I> {
    source.ok_or_else(|| SlidewinError::invalid_argument("source", "source sequence is absent"))
}
