// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Validated window size.

use crate::error::{Result, SlidewinError};
use std::fmt;
use std::num::NonZeroUsize;

/// Number of elements in a full window. Always at least 1.
///
/// # Examples
///
/// ```
/// use slidewin_core::WindowSize;
///
/// let size = WindowSize::new(3).unwrap();
/// assert_eq!(size.get(), 3);
///
/// assert!(WindowSize::new(0).is_err());
/// assert!(WindowSize::try_from(-2i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowSize(NonZeroUsize);

impl WindowSize {
    /// Validates `size`, failing with `InvalidArgument` when it is zero.
    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or_else(|| SlidewinError::invalid_argument("size", "window size must be at least 1"))
    }

    /// The window size as a plain `usize`.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for WindowSize {
    fn from(size: NonZeroUsize) -> Self {
        Self(size)
    }
}

impl TryFrom<usize> for WindowSize {
    type Error = SlidewinError;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

impl TryFrom<i64> for WindowSize {
    type Error = SlidewinError;

    fn try_from(size: i64) -> Result<Self> {
        if size <= 0 {
            return Err(SlidewinError::invalid_argument(
                "size",
                format!("window size must be positive, got {size}"),
            ));
        }
        let size = usize::try_from(size).map_err(|_| {
            SlidewinError::invalid_argument("size", format!("window size {size} does not fit in usize"))
        })?;
        Self::new(size)
    }
}

impl TryFrom<i32> for WindowSize {
    type Error = SlidewinError;

    fn try_from(size: i32) -> Result<Self> {
        Self::try_from(i64::from(size))
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
