//! Fluent composition of parsers.
//!
//! [`combine`] starts a chain from one parser; every step returns a new
//! [`Builder`] and [`Builder::build`] turns the chain into a labeled
//! [`Parser`]. A builder chain and the nested combinator calls it stands for
//! produce identical results:
//!
//! ```ignore
//! // These two parse the same input to the same value.
//! let chained = combine(a).and(b).map(f).build(None);
//! let nested = labeled(format!("{} AND {}", a.label(), b.label()), map(and(a, b), f));
//! ```

use std::fmt::{self, Display};

use crate::Parser;
use crate::combinators::{and, labeled, map, skip, take, try_map};
use crate::traits::Stream;

/// Starts a builder chain from `parser`.
#[inline]
pub fn combine<S, O>(parser: Parser<S, O>) -> Builder<S, O>
where
    S: Stream,
    O: 'static,
{
    Builder::new(parser)
}

/// An in-progress composition of parsers.
///
/// # Example
///
/// ```ignore
/// let assignment = combine(ident())
///     .skip(exact("="))
///     .and(number())
///     .build(Some("ASSIGNMENT"));
/// ```
pub struct Builder<S, O> {
    parser: Parser<S, O>,
}

impl<S: Stream, O: 'static> Builder<S, O> {
    #[inline]
    pub fn new(parser: Parser<S, O>) -> Self {
        Self { parser }
    }

    /// Appends `next`, pairing both values.
    pub fn and<B: 'static>(self, next: Parser<S, B>) -> Builder<S, (O, B)> {
        Builder::new(and(self.parser, next))
    }

    /// Appends `next`, keeping only its value.
    pub fn take<B: 'static>(self, next: Parser<S, B>) -> Builder<S, B> {
        Builder::new(take(self.parser, next))
    }

    /// Appends `next`, keeping only the value so far.
    pub fn skip<B: 'static>(self, next: Parser<S, B>) -> Builder<S, O> {
        Builder::new(skip(self.parser, next))
    }

    pub fn map<B, F>(self, mapper: F) -> Builder<S, B>
    where
        B: 'static,
        F: Fn(O) -> B + Send + Sync + 'static,
    {
        Builder::new(map(self.parser, mapper))
    }

    /// Fallible [`map`](Builder::map). An `Err` fails the chain at the
    /// position the chain started from.
    pub fn try_map<B, E, F>(self, mapper: F) -> Builder<S, B>
    where
        B: 'static,
        E: Display,
        F: Fn(O) -> Result<B, E> + Send + Sync + 'static,
    {
        Builder::new(try_map(self.parser, mapper))
    }

    /// Finishes the chain as a labeled parser.
    ///
    /// Without a label the chain's structural label is used, e.g.
    /// `EXACT "a" AND EXACT "b"`. Either way the result carries the
    /// end-of-input short-circuit of [`labeled`], so it is not identical to
    /// the bare composition at end-of-input: a chain that starts with a
    /// parser that never fails (`maybe`, `many`) succeeds on empty input
    /// when composed by hand but fails with `EOF` once built. Use
    /// [`build_unlabeled`](Builder::build_unlabeled) for the exact
    /// composition.
    pub fn build(self, label: Option<&str>) -> Parser<S, O> {
        let label = label.map_or_else(|| self.parser.label().to_owned(), str::to_owned);
        labeled(label, self.parser)
    }

    /// Hands back the composed parser as is, without the end-of-input
    /// short-circuit.
    #[inline]
    pub fn build_unlabeled(self) -> Parser<S, O> {
        self.parser
    }
}

impl<S, O> Clone for Builder<S, O> {
    fn clone(&self) -> Self {
        Self {
            parser: self.parser.clone(),
        }
    }
}

impl<S, O> fmt::Debug for Builder<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("label", &self.parser.label())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{exact, maybe};
    use crate::result::{failure, success};
    use crate::testing::Chars;

    fn any_char() -> Parser<Chars, char> {
        Parser::create("CHAR", |stream: Chars| match stream.peek() {
            Some(c) => success(c, stream.advance()),
            None => failure("CHAR", "nothing to take", stream),
        })
    }

    #[test]
    fn test_chain_matches_nested_combinators() {
        let stream = Chars::new("ab!");
        let chained = combine(exact('a'))
            .and(exact('b'))
            .map(|(a, b): (char, char)| format!("{a}{b}"))
            .build(None);
        let nested = labeled(
            "EXACT 'a' AND EXACT 'b'",
            map(and(exact('a'), exact('b')), |(a, b): (char, char)| format!("{a}{b}")),
        );

        assert_eq!(chained.label(), nested.label());
        assert_eq!(chained.parse(stream.clone()), nested.parse(stream));
        let stream = Chars::new("ax");
        assert_eq!(chained.parse(stream.clone()), nested.parse(stream));
    }

    #[test]
    fn test_map_chain_matches_guarded_leaf() {
        let stream = Chars::new("q");
        let built = combine(any_char()).map(|c: char| c.is_alphabetic()).build(None);
        let manual = labeled("CHAR", map(any_char(), |c: char| c.is_alphabetic()));
        assert_eq!(built.parse(stream.clone()), manual.parse(stream.clone()));
        assert!(built.parse(stream).unwrap().value);
    }

    #[test]
    fn test_take_and_skip_in_chain() {
        let parsed = combine(exact('('))
            .take(exact('x'))
            .skip(exact(')'))
            .build(Some("PAREN"))
            .parse(Chars::new("(x)"))
            .unwrap();
        assert_eq!(parsed.value, 'x');
        assert!(parsed.remaining.is_eof());
    }

    #[test]
    fn test_build_label_rewrites_failures() {
        let parser = combine(exact('a')).and(exact('b')).build(Some("AB"));
        assert_eq!(parser.label(), "AB");

        let failed = parser.parse(Chars::new("ac")).unwrap_err();
        assert_eq!(failed.label(), "AB");
        assert_eq!(failed.remaining.position(), 1);

        let failed = parser.parse(Chars::new("")).unwrap_err();
        insta::assert_snapshot!(failed, @"Expected: AB (EOF)");
    }

    #[test]
    fn test_build_adds_eof_check() {
        let unlabeled = combine(maybe(exact('a'))).build_unlabeled();
        assert!(unlabeled.parse(Chars::new("")).is_ok());

        let built = combine(maybe(exact('a'))).build(None);
        assert_eq!(built.label(), "MAYBE");
        assert_eq!(built.parse(Chars::new("")).unwrap_err().reason(), "EOF");
    }

    #[test]
    fn test_try_map_fails_at_chain_start() {
        let parser = combine(exact('a'))
            .and(exact('b'))
            .try_map(|_| Err::<u8, _>("rejected"))
            .build(Some("CHECKED"));
        let failed = parser.parse(Chars::new("ab")).unwrap_err();
        assert_eq!(failed.reason(), "rejected");
        assert_eq!(failed.remaining.position(), 0);
        assert_eq!(failed.label(), "CHECKED");
    }

    #[test]
    fn test_build_differs_from_composition_only_at_eof() {
        let mapped = || {
            map(map(maybe(exact('a')), |found: Option<char>| found.is_some()), |found: bool| {
                u8::from(found)
            })
        };
        let built = combine(maybe(exact('a')))
            .map(|found: Option<char>| found.is_some())
            .map(|found: bool| u8::from(found))
            .build(None);
        let unlabeled = combine(maybe(exact('a')))
            .map(|found: Option<char>| found.is_some())
            .map(|found: bool| u8::from(found))
            .build_unlabeled();

        let empty = Chars::new("");
        assert_eq!(mapped().parse(empty.clone()).unwrap().value, 0);
        assert_eq!(unlabeled.parse(empty.clone()), mapped().parse(empty.clone()));
        assert_eq!(built.parse(empty).unwrap_err().reason(), "EOF");

        for input in ["a", "b"] {
            let stream = Chars::new(input);
            assert_eq!(built.parse(stream.clone()), mapped().parse(stream));
        }
    }
}
