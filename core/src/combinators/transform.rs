use std::fmt::Display;

use crate::Parser;
use crate::result::{failure, success};
use crate::traits::Stream;

/// Transforms the value of a successful parse.
///
/// Position, failure and label are `parser`'s own.
pub fn map<S, A, B, F>(parser: Parser<S, A>, mapper: F) -> Parser<S, B>
where
    S: Stream,
    A: 'static,
    B: 'static,
    F: Fn(A) -> B + Send + Sync + 'static,
{
    let label = parser.label().to_owned();
    Parser::from_fn(label, move |_, stream| {
        parser.parse(stream).map(|parsed| parsed.map(&mapper))
    })
}

/// Transforms the value of a successful parse with a fallible function.
///
/// An `Err` from `mapper` becomes a failure at the position the parse
/// started from, with the error's text as reason.
pub fn try_map<S, A, B, E, F>(parser: Parser<S, A>, mapper: F) -> Parser<S, B>
where
    S: Stream,
    A: 'static,
    B: 'static,
    E: Display,
    F: Fn(A) -> Result<B, E> + Send + Sync + 'static,
{
    let label = parser.label().to_owned();
    Parser::from_fn(label, move |label, stream: S| {
        let parsed = parser.parse(stream.clone())?;
        match mapper(parsed.value) {
            Ok(value) => success(value, parsed.remaining),
            Err(err) => failure(label, err.to_string(), stream),
        }
    })
}
