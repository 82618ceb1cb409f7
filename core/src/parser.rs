use std::fmt;
use std::sync::Arc;

use crate::Error;
use crate::result::{ParseResult, failure};
use crate::traits::Stream;

/// The function a [`Parser`] runs. It receives the parser's current label so
/// that renaming a parser also renames the failures it reports.
type ParseFn<S, O> = dyn Fn(&str, S) -> ParseResult<S, O> + Send + Sync;

/// A labeled parsing function from a stream to a [`ParseResult`].
///
/// Parsers are immutable values. Combinators take parsers and return new
/// ones; cloning is a reference-count bump, so the same parser can be shared
/// between grammars and threads.
///
/// The label is diagnostic only: it names the parser in failure messages and
/// in the structural labels of the parsers composed from it. It never affects
/// what input is accepted.
///
/// # Example
///
/// ```ignore
/// let yes = Parser::create("YES", |stream: StrStream| match stream.try_take(&"y".into()) {
///     Some((value, rest)) => success(value, rest),
///     None => failure("YES", "expected y", stream),
/// });
/// ```
pub struct Parser<S, O> {
    label: Arc<str>,
    run: Arc<ParseFn<S, O>>,
}

impl<S, O> Parser<S, O> {
    /// The diagnostic label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Runs the parser on `stream`.
    #[inline]
    pub fn parse(&self, stream: S) -> ParseResult<S, O> {
        (self.run)(&self.label, stream)
    }

    /// Renames the parser without changing what it accepts.
    ///
    /// Failures the parser reports itself use the new label.
    #[inline]
    pub fn with_label(self, label: impl Into<Arc<str>>) -> Self {
        Self {
            label: label.into(),
            run: self.run,
        }
    }
}

impl<S: Stream, O: 'static> Parser<S, O> {
    /// Creates a labeled leaf parser.
    ///
    /// The returned parser fails with reason `"EOF"` without calling `parse`
    /// when the stream is at end-of-input, and reports every failure of
    /// `parse` under `label` at the position `parse` detected it.
    pub fn create<F>(label: impl Into<Arc<str>>, parse: F) -> Self
    where
        F: Fn(S) -> ParseResult<S, O> + Send + Sync + 'static,
    {
        Self::from_fn(label, move |_, stream| parse(stream)).guarded()
    }

    /// Creates a parser from a raw function, with no end-of-input check and
    /// no relabeling.
    ///
    /// `run` receives the parser's label and the stream.
    pub fn from_fn<F>(label: impl Into<Arc<str>>, run: F) -> Self
    where
        F: Fn(&str, S) -> ParseResult<S, O> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            run: Arc::new(run),
        }
    }

    /// Wraps the parser in the end-of-input short-circuit and failure
    /// relabeling under its own label.
    pub(crate) fn guarded(self) -> Self {
        let label = Arc::clone(&self.label);
        Self::from_fn(label, move |label, stream: S| {
            if stream.is_eof() {
                return failure(label, "EOF", stream);
            }
            self.parse(stream).map_err(|failed| failed.relabel(label))
        })
    }

    /// Runs the parser and requires it to consume the whole stream.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let value = number().parse_complete(StrStream::new("-12.5"))?;
    /// assert!(number().parse_complete(StrStream::new("1x")).is_err());
    /// ```
    pub fn parse_complete(&self, stream: S) -> Result<O, Error> {
        let parsed = self.parse(stream)?;
        if parsed.remaining.is_eof() {
            Ok(parsed.value)
        } else {
            Err(Error::StreamNotConsumed {
                position: parsed.remaining.position(),
            })
        }
    }
}

impl<S, O> Clone for Parser<S, O> {
    fn clone(&self) -> Self {
        Self {
            label: Arc::clone(&self.label),
            run: Arc::clone(&self.run),
        }
    }
}

impl<S, O> fmt::Debug for Parser<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
