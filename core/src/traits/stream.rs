use std::fmt::Debug;

use super::parse::Parse;
use crate::result::ParseResult;

/// A persistent cursor over a sequence of symbols.
///
/// Streams are values: consuming input never mutates the receiver, it
/// returns a new stream positioned after the consumed symbol. Any earlier
/// stream value stays valid and can be parsed again, which is what makes
/// backtracking a matter of keeping a clone around.
///
/// Implementations must be referentially stable: calling
/// [`try_take`](Stream::try_take) with the same argument on the same stream
/// value always yields the same result.
///
/// # Example
///
/// ```ignore
/// let stream = StrStream::new("abc");
/// let (taken, rest) = stream.try_take(&"ab".to_string()).unwrap();
/// assert_eq!(taken, "ab");
/// assert_eq!(rest.position(), 2);
/// assert_eq!(stream.position(), 0); // untouched
/// ```
pub trait Stream: Clone + 'static {
    /// The symbol type matched by [`try_take`](Stream::try_take).
    type Item: Clone + Debug + Send + Sync + 'static;

    /// Attempts to consume exactly `expected`.
    ///
    /// Returns the consumed symbol and the advanced stream, or `None` on a
    /// mismatch or at end-of-input.
    fn try_take(&self, expected: &Self::Item) -> Option<(Self::Item, Self)>;

    /// Returns `true` when no input remains.
    fn is_eof(&self) -> bool;

    /// The symbol at the current position, `None` at end-of-input.
    fn peek(&self) -> Option<Self::Item>;

    /// Number of elements consumed since the start of the input.
    ///
    /// Only required to grow strictly when a symbol is consumed; its unit is
    /// up to the implementation (bytes, tokens, items).
    fn position(&self) -> usize;

    /// Parses a value of type `T` from this stream.
    #[inline]
    fn parse<T: Parse<Self>>(self) -> ParseResult<Self, T> {
        T::parser().parse(self)
    }
}
