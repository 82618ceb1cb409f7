//! Configuration for the repetition and recursion combinators.
//!
//! This module provides [`ParseConfig`] for controlling how [`many`],
//! [`many1`], [`separated`] and [`separated1`] repeat, and how deep
//! [`lazy_with`] lets a recursive grammar nest.
//!
//! # Recursion Limits
//!
//! Recursive grammars go through [`lazy`]/[`lazy_with`]. Every nested entry
//! into a lazy parser counts one level of depth on the current thread; past
//! `max_recursion_depth` the lazy parser fails with reason
//! `recursion limit exceeded` instead of overflowing the stack on input like
//! `[[[[[[...`.
//!
//! # Progress Guard
//!
//! A repetition over a parser that can succeed without consuming input would
//! loop forever (`many(maybe(p))` is the classic case). By default every
//! repetition compares the stream position before and after each successful
//! item, and a success that consumed nothing ends the repetition. The
//! non-advancing item is discarded and a warning is logged.
//!
//! # Example
//!
//! ```ignore
//! use bplus_core::config::ParseConfig;
//!
//! // Use default limits (no repetition cap, progress guard on)
//! let config = ParseConfig::default();
//!
//! // Read at most 16 items
//! let config = ParseConfig::new().with_max_repetitions(16);
//! let first_items = many_with(item(), config);
//!
//! // Allow deeper nesting for trusted input
//! let config = ParseConfig::new().with_max_recursion_depth(512);
//! let value = lazy_with("VALUE", config, value);
//! ```
//!
//! [`many`]: crate::combinators::many
//! [`many1`]: crate::combinators::many1
//! [`separated`]: crate::combinators::separated
//! [`separated1`]: crate::combinators::separated1
//! [`lazy`]: crate::combinators::lazy
//! [`lazy_with`]: crate::combinators::lazy_with

use std::cell::Cell;

/// Configuration for repetition behavior.
///
/// # Default Values
///
/// | Setting | Default | Rationale |
/// |---------|---------|-----------|
/// | `max_repetitions` | `usize::MAX` | No cap by default |
/// | `require_progress` | `true` | Repetition always terminates |
/// | `max_recursion_depth` | 128 | Matches serde_json default |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Maximum number of items a repetition collects.
    ///
    /// Reaching the cap ends the repetition successfully; the remaining input
    /// is left for the next parser. `many1`/`separated1` always read their
    /// first item, even with a cap of 0.
    ///
    /// Default: `usize::MAX` (no cap)
    pub max_repetitions: usize,

    /// Whether a success that consumed no input ends the repetition.
    ///
    /// Default: `true`
    pub require_progress: bool,

    /// Maximum nesting depth of lazy parsers on one thread.
    ///
    /// Default: 128
    pub max_recursion_depth: usize,
}

impl Default for ParseConfig {
    /// Returns the default configuration.
    ///
    /// - `max_repetitions`: `usize::MAX`
    /// - `require_progress`: `true`
    /// - `max_recursion_depth`: 128
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ParseConfig {
    /// Default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        max_repetitions: usize::MAX,
        require_progress: true,
        max_recursion_depth: 128,
    };

    /// Creates a new configuration with default values.
    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the maximum number of repeated items.
    #[inline]
    pub const fn with_max_repetitions(mut self, count: usize) -> Self {
        self.max_repetitions = count;
        self
    }

    /// Sets the maximum nesting depth of lazy parsers.
    #[inline]
    pub const fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    /// Disables the progress guard.
    ///
    /// # Warning
    ///
    /// Only use this when every repeated parser is known to consume input on
    /// success, or together with a finite `max_repetitions`. Otherwise the
    /// repetition can spin forever.
    #[inline]
    pub const fn allow_stalls(mut self) -> Self {
        self.require_progress = false;
        self
    }
}

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// One level of lazy-parser nesting on the current thread.
///
/// Entering increments the thread's depth; dropping the guard restores it,
/// including when a parse unwinds.
#[derive(Debug)]
pub(crate) struct RecursionGuard(());

impl RecursionGuard {
    /// Enters one level deeper, or returns `None` if that would exceed `limit`.
    pub(crate) fn enter(limit: usize) -> Option<Self> {
        DEPTH.with(|depth| {
            let next = depth.get().saturating_add(1);
            if next > limit {
                return None;
            }
            depth.set(next);
            Some(Self(()))
        })
    }

    /// Current nesting depth on this thread.
    pub(crate) fn depth() -> usize {
        DEPTH.with(Cell::get)
    }
}

impl Drop for RecursionGuard {
    fn drop(&mut self) {
        DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}
