//! Edge case tests for the bplus combinators over text streams.
use bplus::{
    Error, Parser, ParseConfig, ParseResultExt, Stream, StrStream, any, attempt, combine, digit,
    between, exact, labeled, lazy, lazy_with, many, many_with, map, maybe, number, separated,
    separated1,
};
use test_case::test_case;

fn text(input: &str) -> StrStream {
    StrStream::new(input)
}

fn digits() -> Parser<StrStream, Vec<String>> {
    separated1(exact(","), digit())
}

#[test]
fn test_separated1_digits() {
    let parsed = digits().parse(text("1,2,3")).unwrap();
    assert_eq!(parsed.value, ["1", "2", "3"]);
    assert!(parsed.remaining.is_eof());
}

#[test]
fn test_separated1_empty_input_fails() {
    assert!(digits().parse(text("")).is_failure());
}

#[test]
fn test_separated_empty_input_succeeds() {
    let parser: Parser<StrStream, Vec<String>> = separated(exact(","), digit());
    let parsed = parser.parse(text("")).unwrap();
    assert!(parsed.value.is_empty());
}

#[test]
fn test_number_negative() {
    let parsed = number().parse(text("-12.3")).unwrap();
    assert_eq!(parsed.value, -12.3);
}

#[test]
fn test_attempt_failure_leaves_stream_unconsumed() {
    let stream = text("abc");
    let failed = attempt(exact("aby")).parse(stream.clone()).unwrap_err();
    assert_eq!(failed.remaining, stream);
    assert_eq!(failed.remaining.rest(), "abc");
}

#[test]
fn test_attempt_success_advances() {
    let parsed = attempt(exact("abc")).parse(text("abcdef")).unwrap();
    assert_eq!(parsed.value, "abc");
    assert_eq!(parsed.remaining.rest(), "def");
}

#[test]
fn test_attempt_rewinds_partial_consumption() {
    let stream = text("ab!");
    let inner = combine(exact("a")).and(exact("b")).and(exact("c")).build(None);

    let failed = inner.parse(stream.clone()).unwrap_err();
    assert_eq!(failed.remaining.rest(), "!");

    let failed = attempt(inner).parse(stream.clone()).unwrap_err();
    assert_eq!(failed.remaining, stream);
}

#[test]
fn test_any_without_attempt_does_not_combine_progress() {
    let ab = combine(exact("a")).take(exact("b")).build(None);
    let ac = combine(exact("a")).take(exact("c")).build(None);
    let parsed = any([ab, ac]).parse(text("ac")).unwrap();
    assert_eq!(parsed.value, "c");
}

#[test]
fn test_any_prefers_first_alternative() {
    let short = map(exact("a"), |_| "short");
    let long = map(exact("ab"), |_| "long");
    let parsed = any([short, long]).parse(text("ab")).unwrap();
    assert_eq!(parsed.value, "short");
    assert_eq!(parsed.remaining.rest(), "b");
}

#[test]
fn test_label_rewriting_keeps_position() {
    let inner = combine(exact("key")).skip(exact("=")).build(None);
    let failed = labeled("ASSIGNMENT", inner).parse(text("key:")).unwrap_err();

    assert_eq!(failed.label(), "ASSIGNMENT");
    assert_eq!(failed.remaining.position(), 3);
    assert!(failed.to_string().contains("ASSIGNMENT"));
    assert_eq!(failed.expected().first().map(String::as_str), Some(r#"EXACT "=""#));
    insta::assert_snapshot!(failed, @"Expected: ASSIGNMENT (exact value not found)");
}

#[test]
fn test_builder_map_chain_matches_nested_map() {
    let stream = text("42 apples");
    let chained = combine(number())
        .map(|n: f64| n * 2.0)
        .map(|n: f64| n.to_string())
        .build(None);
    let nested = map(map(number(), |n: f64| n * 2.0), |n: f64| n.to_string());

    assert_eq!(chained.parse(stream.clone()), nested.parse(stream));
    let stream = text("apples");
    assert_eq!(
        chained.parse(stream.clone()).unwrap_err().remaining,
        nested.parse(stream).unwrap_err().remaining
    );
}

#[test_case(""; "empty")]
#[test_case("zzz"; "no match")]
#[test_case("a"; "single")]
fn test_many_never_fails(input: &str) {
    let parser: Parser<StrStream, Vec<String>> = many(exact("a"));
    assert!(parser.parse(text(input)).is_success());
}

#[test]
fn test_many_over_non_consuming_parser_terminates() {
    let parser: Parser<StrStream, Vec<Option<String>>> = many(maybe(exact("x")));
    let parsed = parser.parse(text("xxy")).unwrap();
    assert_eq!(parsed.value.len(), 2);
    assert_eq!(parsed.remaining.rest(), "y");
}

#[test]
fn test_many_with_cap() {
    let config = ParseConfig::new().with_max_repetitions(1);
    let parser: Parser<StrStream, Vec<String>> = many_with(exact("a"), config);
    let parsed = parser.parse(text("aaa")).unwrap();
    assert_eq!(parsed.value, ["a"]);
}

#[test]
fn test_parse_complete_reports_trailing_input() {
    assert_eq!(number().parse_complete(text("1.5")), Ok(1.5));
    assert_eq!(
        number().parse_complete(text("1.5x")),
        Err(Error::StreamNotConsumed { position: 3 })
    );

    let err = number().parse_complete(text("x")).unwrap_err();
    insta::assert_snapshot!(err, @"Expected: NUMBER (unexpected symbol) at position 0");
}

#[derive(Debug, thiserror::Error)]
enum SettingError {
    #[error("syntax error: {0}")]
    Syntax(#[from] Error),
}

fn read_setting(input: &str) -> Result<f64, SettingError> {
    Ok(number().parse_complete(text(input))?)
}

#[test]
fn test_error_converts_into_user_error() {
    assert_eq!(read_setting("2.5").unwrap(), 2.5);
    let err = read_setting("two").unwrap_err();
    assert_eq!(
        err.to_string(),
        "syntax error: Expected: NUMBER (unexpected symbol) at position 0"
    );
}

fn brackets(config: ParseConfig) -> Parser<StrStream, usize> {
    any([
        map(
            between(exact("["), exact("]"), lazy_with("BRACKETS", config, move || brackets(config))),
            |depth: usize| depth + 1,
        ),
        map(exact("."), |_| 0),
    ])
}

#[test]
fn test_nested_brackets_within_limit() {
    let config = ParseConfig::DEFAULT.with_max_recursion_depth(8);
    let parsed = brackets(config).parse(text("[[[.]]]")).unwrap();
    assert_eq!(parsed.value, 3);
    assert!(parsed.remaining.is_eof());
}

#[test]
fn test_nested_brackets_past_limit_fail() {
    let config = ParseConfig::DEFAULT.with_max_recursion_depth(2);
    assert_eq!(brackets(config).parse(text("[[.]]")).unwrap().value, 2);

    let failed = brackets(config).parse(text("[[[.]]]")).unwrap_err();
    assert_eq!(failed.remaining.position(), 0);
    assert_eq!(failed.label(), brackets(config).label());
}

#[test]
fn test_default_limit_stops_runaway_nesting() {
    fn value() -> Parser<StrStream, usize> {
        any([
            map(between(exact("["), exact("]"), lazy("VALUE", value)), |depth: usize| depth + 1),
            map(exact("."), |_| 0),
        ])
    }

    let outcome = std::thread::Builder::new()
        .stack_size(16 * 1024 * 1024)
        .spawn(|| value().parse(text(&"[".repeat(10_000))).is_err())
        .unwrap()
        .join()
        .unwrap();
    assert!(outcome);
}
