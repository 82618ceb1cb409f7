//! A minimal character stream for unit tests.

use std::sync::Arc;

use crate::traits::Stream;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Chars {
    chars: Arc<[char]>,
    index: usize,
}

impl Chars {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            index: 0,
        }
    }

    pub(crate) fn advance(&self) -> Self {
        Self {
            chars: Arc::clone(&self.chars),
            index: (self.index + 1).min(self.chars.len()),
        }
    }

    pub(crate) fn rest(&self) -> String {
        self.chars[self.index..].iter().collect()
    }
}

impl Stream for Chars {
    type Item = char;

    fn try_take(&self, expected: &char) -> Option<(char, Self)> {
        match self.peek() {
            Some(c) if c == *expected => Some((c, self.advance())),
            _ => None,
        }
    }

    fn is_eof(&self) -> bool {
        self.index >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn position(&self) -> usize {
        self.index
    }
}
