use std::sync::Arc;

use bplus_core::Stream;

/// Matching options for [`StrStream`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrOptions {
    /// Compare with Unicode lowercase folding.
    ///
    /// Default: `false`
    pub case_insensitive: bool,
}

impl StrOptions {
    pub const DEFAULT: Self = Self {
        case_insensitive: false,
    };

    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    #[inline]
    pub const fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }
}

/// A persistent cursor over a string.
///
/// `try_take` matches `expected` against the start of the unread input and
/// yields the matched slice of the input itself, so in case-insensitive mode
/// `exact("select")` on `"SELECT"` produces `"SELECT"`. Positions are byte
/// offsets.
///
/// # Example
///
/// ```ignore
/// let stream = StrStream::new("let x");
/// let (keyword, rest) = stream.try_take(&"let".to_string()).unwrap();
/// assert_eq!(rest.rest(), " x");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrStream {
    input: Arc<str>,
    offset: usize,
    options: StrOptions,
}

impl StrStream {
    /// Case-sensitive stream over `input`.
    pub fn new(input: impl Into<Arc<str>>) -> Self {
        Self::with_options(input, StrOptions::DEFAULT)
    }

    pub fn with_options(input: impl Into<Arc<str>>, options: StrOptions) -> Self {
        Self {
            input: input.into(),
            offset: 0,
            options,
        }
    }

    /// The unread input.
    #[inline]
    pub fn rest(&self) -> &str {
        &self.input[self.offset..]
    }

    #[inline]
    pub fn options(&self) -> StrOptions {
        self.options
    }

    pub(crate) fn advance(&self, len: usize) -> (String, Self) {
        let end = self.offset + len;
        let taken = self.input[self.offset..end].to_owned();
        let stream = Self {
            input: Arc::clone(&self.input),
            offset: end,
            options: self.options,
        };
        (taken, stream)
    }

    /// Byte length of the prefix of the unread input equal to `expected`
    /// under the current options.
    fn match_len(&self, expected: &str) -> Option<usize> {
        let rest = self.rest();
        if !self.options.case_insensitive {
            return rest.starts_with(expected).then_some(expected.len());
        }
        let len = rest
            .char_indices()
            .map(|(index, c)| index + c.len_utf8())
            .nth(expected.chars().count().checked_sub(1)?)?;
        fold_eq(&rest[..len], expected).then_some(len)
    }
}

fn fold_eq(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

impl Stream for StrStream {
    type Item = String;

    fn try_take(&self, expected: &String) -> Option<(String, Self)> {
        if expected.is_empty() {
            return Some(self.advance(0));
        }
        self.match_len(expected).map(|len| self.advance(len))
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }

    fn peek(&self) -> Option<String> {
        self.rest().chars().next().map(String::from)
    }

    #[inline]
    fn position(&self) -> usize {
        self.offset
    }
}
