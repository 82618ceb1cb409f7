//! Success and failure values produced by parsers.
//!
//! A parse never panics to signal a mismatch: it returns a [`ParseResult`],
//! which is a plain `Result` of [`Parsed`] (value plus remaining stream) or
//! [`Failed`] (labeled failure plus the stream where it was detected).
//! `Option` is likewise the standard one, so `Some("")` ("matched empty") and
//! `None` ("no match") never collapse into each other.

use std::fmt;

/// A successful parse: the produced value and the stream after it.
///
/// The remaining stream supersedes the input for all continuation parsing;
/// the input stream value stays valid and can be parsed again.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<S, O> {
    /// The produced value.
    pub value: O,
    /// The stream positioned after the consumed input.
    pub remaining: S,
}

impl<S, O> Parsed<S, O> {
    #[inline]
    pub fn new(value: O, remaining: S) -> Self {
        Self { value, remaining }
    }

    /// Transforms the value, keeping the remaining stream.
    #[inline]
    pub fn map<U, F: FnOnce(O) -> U>(self, f: F) -> Parsed<S, U> {
        Parsed {
            value: f(self.value),
            remaining: self.remaining,
        }
    }
}

/// A failed parse.
///
/// Holds the innermost reason (e.g. `"EOF"`), the stack of labels that the
/// failure was reported under as it propagated outward (innermost first) and
/// the stream position where the failure was detected. Relabeling never
/// moves that position; only [`Failed::rewind`] does.
#[derive(Debug, Clone, PartialEq)]
pub struct Failed<S> {
    reason: String,
    expected: Vec<String>,
    /// The stream at the point of failure.
    pub remaining: S,
}

impl<S> Failed<S> {
    /// Creates a failure reported by the parser labeled `label`.
    ///
    /// An empty label is not recorded.
    pub fn new(label: &str, reason: impl Into<String>, remaining: S) -> Self {
        let failed = Self {
            reason: reason.into(),
            expected: Vec::new(),
            remaining,
        };
        failed.relabel(label)
    }

    /// The innermost reason for the failure.
    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The outermost label the failure is reported under, or `""`.
    #[inline]
    pub fn label(&self) -> &str {
        self.expected.last().map_or("", String::as_str)
    }

    /// All labels the failure passed through, innermost first.
    #[inline]
    pub fn expected(&self) -> &[String] {
        &self.expected
    }

    /// Reports the failure under `label`, keeping its position.
    ///
    /// Consecutive identical labels are recorded once.
    pub fn relabel(mut self, label: &str) -> Self {
        if !label.is_empty() && self.label() != label {
            self.expected.push(label.to_owned());
        }
        self
    }

    /// Moves the failure to `remaining`, keeping reason and labels.
    #[inline]
    pub fn rewind(self, remaining: S) -> Self {
        Self { remaining, ..self }
    }
}

/// `{}` shows the outermost label, `{:#}` the whole stack outermost first:
/// `Expected: FUNCTION <- id <- ID (unexpected symbol)`.
impl<S> fmt::Display for Failed<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(label) = self.expected.last() else {
            return f.write_str(&self.reason);
        };
        if !f.alternate() {
            return write!(f, "Expected: {} ({})", label, self.reason);
        }
        f.write_str("Expected: ")?;
        for (i, label) in self.expected.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(" <- ")?;
            }
            f.write_str(label)?;
        }
        write!(f, " ({})", self.reason)
    }
}

impl<S: fmt::Debug> std::error::Error for Failed<S> {}

/// The outcome of running a parser over stream `S`.
pub type ParseResult<S, O> = Result<Parsed<S, O>, Failed<S>>;

/// Builds a successful result.
#[inline]
pub fn success<S, O>(value: O, remaining: S) -> ParseResult<S, O> {
    Ok(Parsed::new(value, remaining))
}

/// Builds a failed result reported under `label`.
#[inline]
pub fn failure<S, O>(label: &str, reason: impl Into<String>, remaining: S) -> ParseResult<S, O> {
    Err(Failed::new(label, reason, remaining))
}

/// Re-reports an existing failure under `label` without moving it.
#[inline]
pub fn refail<S, O>(label: &str, failed: Failed<S>) -> ParseResult<S, O> {
    Err(failed.relabel(label))
}

/// Convenience queries over a [`ParseResult`].
///
/// Every method is defined by an exhaustive match, so `is_success`,
/// `is_failure` and `fold` always agree.
pub trait ParseResultExt<S, O> {
    /// Collapses the result with one total function per variant.
    fn fold<U>(
        self,
        on_success: impl FnOnce(Parsed<S, O>) -> U,
        on_failure: impl FnOnce(Failed<S>) -> U,
    ) -> U;

    fn is_success(&self) -> bool;

    fn is_failure(&self) -> bool;

    /// The stream after the parse, whichever way it went.
    fn remaining(&self) -> &S;

    fn into_remaining(self) -> S;
}

impl<S, O> ParseResultExt<S, O> for ParseResult<S, O> {
    #[inline]
    fn fold<U>(
        self,
        on_success: impl FnOnce(Parsed<S, O>) -> U,
        on_failure: impl FnOnce(Failed<S>) -> U,
    ) -> U {
        match self {
            Ok(parsed) => on_success(parsed),
            Err(failed) => on_failure(failed),
        }
    }

    #[inline]
    fn is_success(&self) -> bool {
        match self {
            Ok(_) => true,
            Err(_) => false,
        }
    }

    #[inline]
    fn is_failure(&self) -> bool {
        !self.is_success()
    }

    #[inline]
    fn remaining(&self) -> &S {
        match self {
            Ok(parsed) => &parsed.remaining,
            Err(failed) => &failed.remaining,
        }
    }

    #[inline]
    fn into_remaining(self) -> S {
        self.fold(|parsed| parsed.remaining, |failed| failed.remaining)
    }
}
