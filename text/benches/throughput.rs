use bplus_core::{Parser, Stream, exact, many, separated};
use bplus_text::{StrStream, TokenStream, number, space};
use divan::{Bencher, black_box};

fn main() {
    divan::main();
}

/// Generate a comma separated list of N numbers
fn generate_numbers(count: usize) -> String {
    let mut result = String::with_capacity(count * 8);
    for i in 0..count {
        if i > 0 {
            result.push(',');
        }
        result.push_str(&format!("{}.{}", i, i % 10));
    }
    result
}

/// Generate the same list pre-split into tokens
fn generate_tokens(count: usize) -> Vec<String> {
    let mut result = Vec::with_capacity(count * 4);
    for i in 0..count {
        if i > 0 {
            result.push(",".to_string());
        }
        result.push(i.to_string());
        result.push(".".to_string());
        result.push((i % 10).to_string());
    }
    result
}

fn list() -> Parser<StrStream, Vec<f64>> {
    separated(exact(","), number())
}

#[divan::bench(
    name = "separated_numbers",
    args = [100, 1000, 10_000],
)]
fn bench_separated_numbers(bencher: Bencher, n: usize) {
    let input = generate_numbers(n);
    let parser = list();

    bencher
        .counter(divan::counter::BytesCount::new(input.len()))
        .with_inputs(|| StrStream::new(input.as_str()))
        .bench_values(|stream| black_box(parser.parse(stream).map(|parsed| parsed.value.len())));
}

#[divan::bench(
    name = "token_numbers",
    args = [100, 1000, 10_000],
)]
fn bench_token_numbers(bencher: Bencher, n: usize) {
    let tokens = generate_tokens(n);
    let parser: Parser<TokenStream, Vec<f64>> = separated(exact(","), number());

    bencher
        .with_inputs(|| TokenStream::new(tokens.clone()))
        .bench_values(|stream| black_box(parser.parse(stream).map(|parsed| parsed.value.len())));
}

#[divan::bench(
    name = "whitespace_run",
    args = [1000, 100_000],
)]
fn bench_whitespace(bencher: Bencher, n: usize) {
    let input = " ".repeat(n);
    let parser: Parser<StrStream, Vec<String>> = many(space());

    bencher
        .with_inputs(|| StrStream::new(input.as_str()))
        .bench_values(|stream| black_box(parser.parse(stream).map(|parsed| parsed.remaining.is_eof())));
}
