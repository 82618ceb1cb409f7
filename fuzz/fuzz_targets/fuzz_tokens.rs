#![no_main]

use arbitrary::Arbitrary;
use bplus::{Parser, TokenStream, Stream, combine, exact, letter, many, number, separated};
use libfuzzer_sys::fuzz_target;
use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum Token {
    #[token("=")]
    Eq,
    #[token(";")]
    Semi,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token(".")]
    Dot,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex(r"[0-9]+")]
    Int,
}

#[derive(Debug, Arbitrary)]
struct Input {
    source: String,
    extra: Vec<String>,
}

fn assignments() -> Parser<TokenStream, Vec<(String, f64)>> {
    let assignment = combine(letter()).skip(exact("=")).and(number()).build(Some("ASSIGNMENT"));
    separated(exact(";"), assignment)
}

fuzz_target!(|input: Input| {
    let tokens: Vec<String> = Token::lexer(&input.source)
        .spanned()
        .filter_map(|(token, span)| token.ok().map(|_| input.source[span].to_string()))
        .chain(input.extra)
        .collect();
    let count = tokens.len();
    let stream = TokenStream::new(tokens);

    let parsed = assignments()
        .parse(stream.clone())
        .unwrap_or_else(|_| unreachable!());
    assert!(parsed.remaining.position() <= count);
    assert_eq!(stream.position(), 0);

    let words: Parser<TokenStream, Vec<String>> = many(letter());
    let _ = words.parse(stream);
});
