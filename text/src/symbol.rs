use std::sync::Arc;

use bplus_core::{Parser, Stream, failure, success};

use crate::string::StrStream;
use crate::token::TokenStream;

/// Streams whose symbols can be classified character by character.
pub trait SymbolStream: Stream {
    /// Consumes the next symbol if `accept` holds for it.
    ///
    /// For text streams the symbol is a single character; for token streams
    /// it is a whole, non-empty token whose every character is accepted.
    fn take_symbol<F: Fn(char) -> bool>(&self, accept: F) -> Option<(Self::Item, Self)>;
}

impl SymbolStream for StrStream {
    fn take_symbol<F: Fn(char) -> bool>(&self, accept: F) -> Option<(String, Self)> {
        let c = self.rest().chars().next().filter(|&c| accept(c))?;
        Some(self.advance(c.len_utf8()))
    }
}

impl SymbolStream for TokenStream {
    fn take_symbol<F: Fn(char) -> bool>(&self, accept: F) -> Option<(String, Self)> {
        let token = self.current()?;
        (!token.is_empty() && token.chars().all(accept)).then(|| (token, self.advance()))
    }
}

/// Leaf parser for one symbol accepted by `accept`.
///
/// # Example
///
/// ```ignore
/// let hex = symbol("HEX", |c| c.is_ascii_hexdigit());
/// ```
pub fn symbol<S, F>(label: impl Into<Arc<str>>, accept: F) -> Parser<S, S::Item>
where
    S: SymbolStream,
    F: Fn(char) -> bool + Send + Sync + 'static,
{
    Parser::create(label, move |stream: S| match stream.take_symbol(&accept) {
        Some((value, remaining)) => success(value, remaining),
        None => failure("", "unexpected symbol", stream),
    })
}

/// One whitespace symbol. Labeled `SPACE`.
pub fn space<S: SymbolStream>() -> Parser<S, S::Item> {
    symbol("SPACE", char::is_whitespace)
}

/// One word symbol: alphanumeric or `_`. Labeled `LETTER`.
pub fn letter<S: SymbolStream>() -> Parser<S, S::Item> {
    symbol("LETTER", |c: char| c.is_alphanumeric() || c == '_')
}

/// One ASCII digit symbol. Labeled `DIGIT`.
pub fn digit<S: SymbolStream>() -> Parser<S, S::Item> {
    symbol("DIGIT", |c: char| c.is_ascii_digit())
}
