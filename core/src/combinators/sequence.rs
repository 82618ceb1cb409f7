use crate::Parser;
use crate::builder::combine;
use crate::result::Parsed;
use crate::traits::Stream;

/// Runs `first`, then `second` on what `first` left; pairs both values.
///
/// Labeled `<first> AND <second>`. Fails as soon as either side fails, at
/// the position the failing side reported.
pub fn and<S, A, B>(first: Parser<S, A>, second: Parser<S, B>) -> Parser<S, (A, B)>
where
    S: Stream,
    A: 'static,
    B: 'static,
{
    let label = format!("{} AND {}", first.label(), second.label());
    Parser::from_fn(label, move |label, stream| {
        let a = first.parse(stream).map_err(|failed| failed.relabel(label))?;
        let b = second
            .parse(a.remaining)
            .map_err(|failed| failed.relabel(label))?;
        Ok(Parsed::new((a.value, b.value), b.remaining))
    })
}

/// Sequence keeping the left value. Carries `first`'s label.
pub fn skip<S, A, B>(first: Parser<S, A>, second: Parser<S, B>) -> Parser<S, A>
where
    S: Stream,
    A: 'static,
    B: 'static,
{
    let label = first.label().to_owned();
    Parser::from_fn(label, move |label, stream| {
        let a = first.parse(stream).map_err(|failed| failed.relabel(label))?;
        let b = second
            .parse(a.remaining)
            .map_err(|failed| failed.relabel(label))?;
        Ok(Parsed::new(a.value, b.remaining))
    })
}

/// Sequence keeping the right value. Carries `second`'s label.
pub fn take<S, A, B>(first: Parser<S, A>, second: Parser<S, B>) -> Parser<S, B>
where
    S: Stream,
    A: 'static,
    B: 'static,
{
    let label = second.label().to_owned();
    Parser::from_fn(label, move |label, stream| {
        let a = first.parse(stream).map_err(|failed| failed.relabel(label))?;
        second
            .parse(a.remaining)
            .map_err(|failed| failed.relabel(label))
    })
}

/// Parses `open`, `parser`, `close` and keeps only `parser`'s value.
///
/// Labeled `BETWEEN`, with the end-of-input short-circuit of
/// [`labeled`](crate::combinators::labeled).
///
/// # Example
///
/// ```ignore
/// // (1,2,3)
/// let list = between(exact("("), exact(")"), separated(exact(","), digit()));
/// ```
pub fn between<S, A, B, O>(open: Parser<S, A>, close: Parser<S, B>, parser: Parser<S, O>) -> Parser<S, O>
where
    S: Stream,
    A: 'static,
    B: 'static,
    O: 'static,
{
    combine(open).take(parser).skip(close).build(Some("BETWEEN"))
}
