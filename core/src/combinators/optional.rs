use crate::Parser;
use crate::result::success;
use crate::traits::Stream;

/// Makes `parser` optional.
///
/// Succeeds with `Some(value)` when `parser` does, and with `None` at the
/// original position when it fails. Never fails. Labeled `MAYBE`.
pub fn maybe<S, O>(parser: Parser<S, O>) -> Parser<S, Option<O>>
where
    S: Stream,
    O: 'static,
{
    Parser::from_fn("MAYBE", move |_, stream: S| match parser.parse(stream.clone()) {
        Ok(parsed) => Ok(parsed.map(Some)),
        Err(_) => success(None, stream),
    })
}

/// Backtracks `parser` on failure.
///
/// Success is exactly `parser`'s. On failure the reported position is reset
/// to where `attempt` started, however far `parser` advanced before it
/// failed. Labeled `ATTEMPT`.
pub fn attempt<S, O>(parser: Parser<S, O>) -> Parser<S, O>
where
    S: Stream,
    O: 'static,
{
    Parser::from_fn("ATTEMPT", move |label, stream: S| {
        parser
            .parse(stream.clone())
            .map_err(|failed| failed.relabel(label).rewind(stream))
    })
}
