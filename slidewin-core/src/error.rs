// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the slidewin sliding window library
//!
//! This module defines the root [`SlidewinError`] type. Argument errors are reported
//! synchronously when a window operator is constructed; failures of the underlying
//! source are carried through enumeration untouched.
//!
//! # Examples
//!
//! ```
//! use slidewin_core::{SlidewinError, Result};
//!
//! fn check(size: i64) -> Result<()> {
//!     if size <= 0 {
//!         return Err(SlidewinError::invalid_argument("size", "must be positive"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(0).unwrap_err().is_invalid_argument());
//! ```

/// Root error type for all slidewin operations
#[derive(Debug, thiserror::Error)]
pub enum SlidewinError {
    /// An argument passed to an operator was rejected
    ///
    /// Raised at call time, before the source is touched.
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        argument: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// Stream processing encountered an error
    ///
    /// This is a general error for stream sources that don't fit
    /// other specific categories.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by user sources so they can travel inside a
    /// [`StreamItem`](crate::StreamItem).
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SlidewinError {
    /// Create an invalid argument error
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Check if this error was raised by argument validation
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if this is a recoverable error
    ///
    /// Nothing in slidewin is retried, so no error is recoverable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        false
    }

    /// Check if this error indicates a permanent failure
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        true
    }
}

/// Specialized Result type for slidewin operations
///
/// # Examples
///
/// ```
/// use slidewin_core::Result;
///
/// fn process() -> Result<String> {
///     Ok("processed".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, SlidewinError>;

impl Clone for SlidewinError {
    fn clone(&self) -> Self {
        match self {
            Self::InvalidArgument { argument, reason } => Self::InvalidArgument {
                argument: *argument,
                reason: reason.clone(),
            },
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // The boxed error can't be cloned, keep its message
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {}", e),
            },
        }
    }
}
