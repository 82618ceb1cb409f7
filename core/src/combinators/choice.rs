use crate::Parser;
use crate::result::failure;
use crate::traits::Stream;

/// Ordered choice: the first alternative that succeeds wins.
///
/// Every alternative runs on the original stream, in order. Labeled with the
/// alternatives' labels joined by ` OR `; when all of them fail the failure
/// is reported at the original position under that combined label. Carries
/// the end-of-input short-circuit of [`labeled`](crate::combinators::labeled).
///
/// # Example
///
/// ```ignore
/// let sign = any([exact("+"), exact("-")]);
/// ```
pub fn any<S, O, I>(alternatives: I) -> Parser<S, O>
where
    S: Stream,
    O: 'static,
    I: IntoIterator<Item = Parser<S, O>>,
{
    let alternatives: Vec<Parser<S, O>> = alternatives.into_iter().collect();
    let label = if alternatives.is_empty() {
        "ANY".to_owned()
    } else {
        alternatives
            .iter()
            .map(Parser::label)
            .collect::<Vec<_>>()
            .join(" OR ")
    };
    Parser::from_fn(label, move |label, stream: S| {
        for alternative in &alternatives {
            if let Ok(parsed) = alternative.parse(stream.clone()) {
                return Ok(parsed);
            }
        }
        failure(label, "no alternative matched", stream)
    })
    .guarded()
}
