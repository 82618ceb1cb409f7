use std::fmt::Debug;

use crate::Parser;
use crate::result::Failed;
use crate::traits::Stream;

/// Observes `parser` without changing its outcome.
///
/// `on_success` receives the value and the remaining stream, `on_failure`
/// the failure. The result is returned untouched.
///
/// # Example
///
/// ```ignore
/// let watched = debug(
///     number(),
///     |value, rest| eprintln!("number {value} before {:?}", rest.peek()),
///     |failed| eprintln!("no number: {failed}"),
/// );
/// ```
pub fn debug<S, O, FS, FF>(parser: Parser<S, O>, on_success: FS, on_failure: FF) -> Parser<S, O>
where
    S: Stream,
    O: 'static,
    FS: Fn(&O, &S) + Send + Sync + 'static,
    FF: Fn(&Failed<S>) + Send + Sync + 'static,
{
    let label = parser.label().to_owned();
    Parser::from_fn(label, move |_, stream| {
        let result = parser.parse(stream);
        match &result {
            Ok(parsed) => on_success(&parsed.value, &parsed.remaining),
            Err(failed) => on_failure(failed),
        }
        result
    })
}

/// [`debug`] that reports through `log::trace!`.
pub fn trace<S, O>(parser: Parser<S, O>) -> Parser<S, O>
where
    S: Stream,
    O: Debug + 'static,
{
    let matched = parser.label().to_owned();
    let missed = matched.clone();
    debug(
        parser,
        move |value, remaining: &S| {
            log::trace!("{matched}: matched {value:?}, next at {}", remaining.position());
        },
        move |failed| {
            log::trace!("{missed}: {failed} at {}", failed.remaining.position());
        },
    )
}
