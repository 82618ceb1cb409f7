use crate::Parser;
use crate::builder::combine;
use crate::combinators::maybe;
use crate::config::ParseConfig;
use crate::result::Parsed;
use crate::traits::Stream;

/// Zero or more `parser`, collected in order.
///
/// Stops at the first failure and succeeds with the position after the last
/// success (the start if nothing matched). Never fails. Labeled
/// `ZERO OR MANY`.
pub fn many<S, O>(parser: Parser<S, O>) -> Parser<S, Vec<O>>
where
    S: Stream,
    O: 'static,
{
    many_with(parser, ParseConfig::DEFAULT)
}

/// [`many`] under an explicit [`ParseConfig`].
pub fn many_with<S, O>(parser: Parser<S, O>, config: ParseConfig) -> Parser<S, Vec<O>>
where
    S: Stream,
    O: 'static,
{
    Parser::from_fn("ZERO OR MANY", move |label, stream| {
        Ok(repeat(&parser, label, &config, Vec::new(), stream))
    })
}

/// One or more `parser`: one required run, then [`many`].
///
/// Fails only when the first run fails. Labeled `ONE OR MANY`.
pub fn many1<S, O>(parser: Parser<S, O>) -> Parser<S, Vec<O>>
where
    S: Stream,
    O: 'static,
{
    many1_with(parser, ParseConfig::DEFAULT)
}

/// [`many1`] under an explicit [`ParseConfig`].
pub fn many1_with<S, O>(parser: Parser<S, O>, config: ParseConfig) -> Parser<S, Vec<O>>
where
    S: Stream,
    O: 'static,
{
    Parser::from_fn("ONE OR MANY", move |label, stream| {
        let first = parser.parse(stream).map_err(|failed| failed.relabel(label))?;
        let values = vec![first.value];
        Ok(repeat(&parser, label, &config, values, first.remaining))
    })
}

/// Zero or more `parser`, each optionally followed by `delimiter`.
///
/// A trailing delimiter is consumed. Never fails. Labeled `SEPARATED`.
///
/// # Example
///
/// ```ignore
/// let digits = separated(exact(","), digit());
/// let parsed = digits.parse(StrStream::new("1,2,3,"))?;
/// assert_eq!(parsed.value, ["1", "2", "3"]);
/// ```
pub fn separated<S, D, O>(delimiter: Parser<S, D>, parser: Parser<S, O>) -> Parser<S, Vec<O>>
where
    S: Stream,
    D: 'static,
    O: 'static,
{
    separated_with(delimiter, parser, ParseConfig::DEFAULT)
}

/// [`separated`] under an explicit [`ParseConfig`].
pub fn separated_with<S, D, O>(
    delimiter: Parser<S, D>,
    parser: Parser<S, O>,
    config: ParseConfig,
) -> Parser<S, Vec<O>>
where
    S: Stream,
    D: 'static,
    O: 'static,
{
    many_with(item(delimiter, parser), config).with_label("SEPARATED")
}

/// One or more `parser`, each optionally followed by `delimiter`.
///
/// Fails when there is no first item. Labeled `SEPARATED`.
pub fn separated1<S, D, O>(delimiter: Parser<S, D>, parser: Parser<S, O>) -> Parser<S, Vec<O>>
where
    S: Stream,
    D: 'static,
    O: 'static,
{
    separated1_with(delimiter, parser, ParseConfig::DEFAULT)
}

/// [`separated1`] under an explicit [`ParseConfig`].
pub fn separated1_with<S, D, O>(
    delimiter: Parser<S, D>,
    parser: Parser<S, O>,
    config: ParseConfig,
) -> Parser<S, Vec<O>>
where
    S: Stream,
    D: 'static,
    O: 'static,
{
    many1_with(item(delimiter, parser), config).with_label("SEPARATED")
}

fn item<S, D, O>(delimiter: Parser<S, D>, parser: Parser<S, O>) -> Parser<S, O>
where
    S: Stream,
    D: 'static,
    O: 'static,
{
    combine(parser).skip(maybe(delimiter)).build(None)
}

/// Collects successes of `parser` into `values` until it fails, the
/// repetition cap is reached or (with the progress guard on) a success
/// consumes nothing.
fn repeat<S, O>(
    parser: &Parser<S, O>,
    label: &str,
    config: &ParseConfig,
    mut values: Vec<O>,
    mut remaining: S,
) -> Parsed<S, Vec<O>>
where
    S: Stream,
{
    while values.len() < config.max_repetitions {
        let Ok(parsed) = parser.parse(remaining.clone()) else {
            break;
        };
        if config.require_progress && parsed.remaining.position() == remaining.position() {
            log::warn!(
                "{label}: `{}` matched without consuming input at position {}; stopping",
                parser.label(),
                remaining.position()
            );
            break;
        }
        values.push(parsed.value);
        remaining = parsed.remaining;
    }
    Parsed::new(values, remaining)
}
