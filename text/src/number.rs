use bplus_core::{Parse, Parser, any, combine, exact, flatten4, many, many1, maybe};

use crate::string::StrStream;
use crate::symbol::{SymbolStream, digit};
use crate::token::TokenStream;

type Digits = (Option<String>, Vec<String>, Option<String>, Vec<String>);

/// A decimal number: optional sign, digits, optional `.` and fraction
/// digits. Labeled `NUMBER`.
///
/// # Example
///
/// ```ignore
/// let parsed = number().parse(StrStream::new("-12.5 rest"))?;
/// assert_eq!(parsed.value, -12.5);
/// ```
pub fn number<S>() -> Parser<S, f64>
where
    S: SymbolStream<Item = String>,
{
    let sign: Parser<S, Option<String>> = maybe(any([exact("+"), exact("-")]));
    let integer: Parser<S, Vec<String>> = many1(digit());
    let dot: Parser<S, Option<String>> = maybe(exact("."));
    let fraction: Parser<S, Vec<String>> = many(digit());

    combine(sign)
        .and(integer)
        .and(dot)
        .and(fraction)
        .map(flatten4)
        .try_map(|(sign, integer, dot, fraction): Digits| {
            let mut text = sign.unwrap_or_default();
            text.extend(integer);
            text.extend(dot);
            text.extend(fraction);
            text.parse::<f64>()
        })
        .build(Some("NUMBER"))
}

impl Parse<StrStream> for f64 {
    fn parser() -> Parser<StrStream, Self> {
        number()
    }
}

impl Parse<TokenStream> for f64 {
    fn parser() -> Parser<TokenStream, Self> {
        number()
    }
}
