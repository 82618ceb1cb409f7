//! Core error types for bplus.
//!
//! Parse failures inside a grammar are ordinary values ([`Failed`]) carried by
//! a [`ParseResult`](crate::ParseResult). [`Error`] is the owned,
//! stream-independent summary returned once a caller wants a plain
//! `Result<T, Error>` for a whole input, e.g. from
//! [`Parser::parse_complete`](crate::Parser::parse_complete).
//!
//! User-defined error types should implement `From<bplus::Error>` to integrate
//! with their own error handling.
//!
//! # Example
//!
//! ```ignore
//! use thiserror::Error;
//!
//! #[derive(Error, Debug)]
//! pub enum ConfigError {
//!     #[error("syntax error: {0}")]
//!     Syntax(#[from] bplus::Error),
//!
//!     #[error("unknown key {0}")]
//!     UnknownKey(String),
//! }
//! ```

use crate::result::Failed;
use crate::traits::Stream;

/// Core bplus error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The parser reported a failure.
    ///
    /// `message` is the rendered [`Failed`] (outermost expectation and the
    /// innermost reason), `position` the stream offset where it was detected.
    #[error("{message} at position {position}")]
    Parse {
        /// Rendered failure message.
        message: String,
        /// Stream position of the failure.
        position: usize,
    },

    /// The parser succeeded but input remains after it.
    ///
    /// Returned by `parse_complete()` when the remaining stream does not
    /// report end-of-input.
    #[error("stream not fully consumed: input remains at position {position}")]
    StreamNotConsumed {
        /// Stream position of the first unconsumed element.
        position: usize,
    },
}

impl<S: Stream> From<Failed<S>> for Error {
    fn from(failed: Failed<S>) -> Self {
        Error::Parse {
            message: failed.to_string(),
            position: failed.remaining.position(),
        }
    }
}
