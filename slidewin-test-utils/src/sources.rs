// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Instrumented sources.
//!
//! Window adapters take their source by value, so each wrapper hands back a
//! shared handle the test keeps to observe the source after it has been moved.

use futures::Stream;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

/// Number of elements a [`CountingIter`] has handed out.
#[derive(Debug, Clone, Default)]
pub struct PullCount(Arc<AtomicUsize>);

impl PullCount {
    #[must_use]
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Iterator wrapper counting every element pulled through it.
#[derive(Debug)]
pub struct CountingIter<I> {
    inner: I,
    pulled: PullCount,
}

impl<I: Iterator> CountingIter<I> {
    pub fn new(inner: I) -> (Self, PullCount) {
        let pulled = PullCount::default();
        (
            Self {
                inner,
                pulled: pulled.clone(),
            },
            pulled,
        )
    }
}

impl<I: Iterator> Iterator for CountingIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.inner.next();
        if item.is_some() {
            self.pulled.0.fetch_add(1, Ordering::SeqCst);
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Set once the [`DropProbe`] it belongs to has been dropped.
#[derive(Debug, Clone, Default)]
pub struct ReleaseFlag(Arc<AtomicBool>);

impl ReleaseFlag {
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Source wrapper standing in for a resource that must be released, e.g. an open handle.
///
/// Works as an [`Iterator`] or a [`Stream`], depending on what it wraps.
#[derive(Debug)]
pub struct DropProbe<S> {
    inner: S,
    released: ReleaseFlag,
}

impl<S> DropProbe<S> {
    pub fn new(inner: S) -> (Self, ReleaseFlag) {
        let released = ReleaseFlag::default();
        (
            Self {
                inner,
                released: released.clone(),
            },
            released,
        )
    }
}

impl<S> Drop for DropProbe<S> {
    fn drop(&mut self) {
        self.released.0.store(true, Ordering::SeqCst);
    }
}

impl<I: Iterator> Iterator for DropProbe<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.inner.next()
    }
}

impl<S> Stream for DropProbe<S>
where
    S: Stream + Unpin,
{
    type Item = S::Item;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

/// Iterator of `Result` that yields `Err(error)` once, at position `fail_at`.
///
/// Values from `inner` keep flowing after the failure, so a test can check the
/// consumer stopped pulling.
///
/// # Examples
///
/// ```rust
/// use slidewin_test_utils::FailingIter;
///
/// let items: Vec<_> = FailingIter::new(vec![1, 2].into_iter(), 1, "boom").collect();
/// assert_eq!(items, vec![Ok(1), Err("boom"), Ok(2)]);
/// ```
#[derive(Debug)]
pub struct FailingIter<I, E> {
    inner: I,
    error: Option<E>,
    fail_at: usize,
    position: usize,
}

impl<I, E> FailingIter<I, E> {
    pub fn new(inner: I, fail_at: usize, error: E) -> Self {
        Self {
            inner,
            error: Some(error),
            fail_at,
            position: 0,
        }
    }
}

impl<I: Iterator, E> Iterator for FailingIter<I, E> {
    type Item = Result<I::Item, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.position;
        self.position += 1;

        if position == self.fail_at {
            if let Some(error) = self.error.take() {
                return Some(Err(error));
            }
        }
        self.inner.next().map(Ok)
    }
}
