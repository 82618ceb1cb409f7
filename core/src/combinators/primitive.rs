use std::sync::Arc;

use crate::Parser;
use crate::config::{ParseConfig, RecursionGuard};
use crate::result::{failure, success};
use crate::traits::Stream;

/// Matches exactly `value` via [`Stream::try_take`].
///
/// Labeled `EXACT <value:?>`; fails with reason `exact value not found`.
pub fn exact<S: Stream>(value: impl Into<S::Item>) -> Parser<S, S::Item> {
    let value = value.into();
    Parser::from_fn(format!("EXACT {value:?}"), move |label, stream: S| {
        match stream.try_take(&value) {
            Some((taken, remaining)) => success(taken, remaining),
            None => failure(label, "exact value not found", stream),
        }
    })
    .guarded()
}

/// Names `parser` `label`.
///
/// Acceptance is unchanged, except that the labeled parser fails with reason
/// `EOF` at end-of-input without running `parser`. Failures of `parser` are
/// reported under `label` at the same position.
pub fn labeled<S, O>(label: impl Into<Arc<str>>, parser: Parser<S, O>) -> Parser<S, O>
where
    S: Stream,
    O: 'static,
{
    Parser::from_fn(label, move |_, stream| parser.parse(stream)).guarded()
}

/// Defers building a parser until it runs.
///
/// This is how recursive grammars refer to themselves: the grammar function
/// can call itself through `lazy` without recursing at construction time.
///
/// # Example
///
/// ```ignore
/// fn nested() -> Parser<StrStream, usize> {
///     any([
///         map(between(exact("("), exact(")"), lazy("NESTED", nested)), |depth| depth + 1),
///         map(exact("x"), |_| 0),
///     ])
/// }
/// ```
pub fn lazy<S, O, F>(label: impl Into<Arc<str>>, build: F) -> Parser<S, O>
where
    S: Stream,
    O: 'static,
    F: Fn() -> Parser<S, O> + Send + Sync + 'static,
{
    lazy_with(label, ParseConfig::DEFAULT, build)
}

/// [`lazy`] under an explicit [`ParseConfig`].
///
/// Each run nests one level deeper on the current thread. Once the depth
/// would pass `config.max_recursion_depth` the parser fails with reason
/// `recursion limit exceeded` at the current position, without building the
/// inner parser.
pub fn lazy_with<S, O, F>(label: impl Into<Arc<str>>, config: ParseConfig, build: F) -> Parser<S, O>
where
    S: Stream,
    O: 'static,
    F: Fn() -> Parser<S, O> + Send + Sync + 'static,
{
    let limit = config.max_recursion_depth;
    Parser::from_fn(label, move |label, stream: S| {
        let Some(_guard) = RecursionGuard::enter(limit) else {
            log::warn!(
                "{label}: recursion limit {limit} reached at depth {}, position {}",
                RecursionGuard::depth(),
                stream.position()
            );
            return failure(label, "recursion limit exceeded", stream);
        };
        build().parse(stream)
    })
}
