#![no_main]

use bplus::{
    Parser, StrOptions, StrStream, Stream, any, attempt, between, combine, digit, exact, labeled,
    lazy, letter, many, map, maybe, number, separated, space,
};
use libfuzzer_sys::fuzz_target;

/// Nested lists of numbers and words: `[1, x, [2.5, -3]]`
fn value() -> Parser<StrStream, usize> {
    let word = map(many(letter()), |letters: Vec<String>| letters.len());
    let scalar = map(number(), |_: f64| 1);
    let list = between(
        exact("["),
        exact("]"),
        separated(syntax(","), lazy("VALUE", value)),
    );
    let nested = map(list, |items: Vec<usize>| items.into_iter().sum::<usize>());
    labeled("VALUE", any([attempt(nested), scalar, word]))
}

fn syntax(value: &str) -> Parser<StrStream, String> {
    combine(many(space()))
        .take(exact(value))
        .skip(many(space()))
        .build(None)
}

fuzz_target!(|input: (bool, &str)| {
    let (case_insensitive, text) = input;
    let options = StrOptions {
        case_insensitive,
    };
    let stream = StrStream::with_options(text, options);

    // Persistent streams: parsing twice gives the same answer
    let grammar = value();
    let first = grammar.parse(stream.clone());
    assert_eq!(first, grammar.parse(stream.clone()));
    assert_eq!(stream.position(), 0);

    // Repetition never fails and never overruns the input
    let digits: Parser<StrStream, Vec<Option<String>>> = many(maybe(digit()));
    let parsed = digits.parse(stream.clone()).unwrap_or_else(|_| unreachable!());
    assert!(parsed.remaining.position() <= text.len());

    // Backtracking reports the starting position
    if let Err(failed) = attempt(value()).parse(stream.clone()) {
        assert_eq!(failed.remaining, stream);
    }
});
