use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use bplus_core::Stream;

type Source = Box<dyn Iterator<Item = String> + Send>;

/// Tokens pulled so far plus the iterator they come from.
struct Buffer {
    tokens: Vec<String>,
    source: Option<Source>,
}

impl Buffer {
    /// Pulls from the source until `index` is buffered or the source ends.
    fn get(&mut self, index: usize) -> Option<&String> {
        while self.tokens.len() <= index {
            let next = self.source.as_mut().and_then(Iterator::next);
            match next {
                Some(token) => self.tokens.push(token),
                None => {
                    self.source = None;
                    break;
                }
            }
        }
        self.tokens.get(index)
    }
}

/// A persistent cursor over a sequence of string tokens.
///
/// Tokens are pulled from the underlying iterator only when a parser looks
/// at them and are kept in a buffer shared by every clone, so a stream value
/// sees the same token at the same position no matter when it asks.
/// Positions count tokens.
///
/// # Example
///
/// ```ignore
/// let stream = TokenStream::new(["fn", "main", "(", ")"]);
/// let parsed = exact("fn").parse(stream)?;
/// assert_eq!(parsed.remaining.peek().as_deref(), Some("main"));
/// ```
#[derive(Clone)]
pub struct TokenStream {
    buffer: Arc<Mutex<Buffer>>,
    index: usize,
    case_insensitive: bool,
}

impl TokenStream {
    pub fn new<I>(tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String> + 'static,
        I::IntoIter: Send + 'static,
    {
        let source: Source = Box::new(tokens.into_iter().map(Into::into));
        Self {
            buffer: Arc::new(Mutex::new(Buffer {
                tokens: Vec::new(),
                source: Some(source),
            })),
            index: 0,
            case_insensitive: false,
        }
    }

    /// Compares tokens with Unicode lowercase folding.
    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Number of tokens pulled from the source so far.
    pub fn buffered(&self) -> usize {
        self.lock().tokens.len()
    }

    pub(crate) fn current(&self) -> Option<String> {
        self.lock().get(self.index).cloned()
    }

    pub(crate) fn advance(&self) -> Self {
        Self {
            buffer: Arc::clone(&self.buffer),
            index: self.index + 1,
            case_insensitive: self.case_insensitive,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Buffer> {
        // The buffer is append-only, so a panic mid-pull leaves it usable.
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn matches(&self, token: &str, expected: &str) -> bool {
        if self.case_insensitive {
            token
                .chars()
                .flat_map(char::to_lowercase)
                .eq(expected.chars().flat_map(char::to_lowercase))
        } else {
            token == expected
        }
    }
}

impl Stream for TokenStream {
    type Item = String;

    fn try_take(&self, expected: &String) -> Option<(String, Self)> {
        let token = self.current()?;
        self.matches(&token, expected).then(|| (token, self.advance()))
    }

    fn is_eof(&self) -> bool {
        self.current().is_none()
    }

    #[inline]
    fn peek(&self) -> Option<String> {
        self.current()
    }

    #[inline]
    fn position(&self) -> usize {
        self.index
    }
}

impl PartialEq for TokenStream {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.buffer, &other.buffer)
            && self.index == other.index
            && self.case_insensitive == other.case_insensitive
    }
}

impl fmt::Debug for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStream")
            .field("index", &self.index)
            .field("current", &self.current())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn take(stream: &TokenStream, expected: &str) -> Option<(String, TokenStream)> {
        stream.try_take(&expected.to_string())
    }

    #[test]
    fn test_whole_token_match() {
        let stream = TokenStream::new(["let", "x"]);
        assert!(take(&stream, "le").is_none());
        let (token, rest) = take(&stream, "let").unwrap();
        assert_eq!(token, "let");
        assert_eq!(rest.position(), 1);
        assert_eq!(rest.peek().as_deref(), Some("x"));
    }

    #[test]
    fn test_pulls_lazily() {
        let pulled = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&pulled);
        let tokens = ["a", "b", "c", "d"].into_iter().inspect(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let stream = TokenStream::new(tokens);
        assert_eq!(pulled.load(Ordering::SeqCst), 0);

        let (_, rest) = take(&stream, "a").unwrap();
        assert_eq!(pulled.load(Ordering::SeqCst), 1);
        assert_eq!(rest.buffered(), 1);
        assert!(!rest.is_eof());
        assert_eq!(pulled.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_clones_see_same_tokens() {
        let early = TokenStream::new(vec!["x".to_string(), "y".to_string()]);
        let copy = early.clone();
        let (_, later) = take(&early, "x").unwrap();
        assert_eq!(later.peek().as_deref(), Some("y"));

        assert_eq!(copy.peek().as_deref(), Some("x"));
        assert_eq!(take(&copy, "x").map(|(_, rest)| rest), Some(later));
    }

    #[test]
    fn test_eof() {
        let stream = TokenStream::new(["only"]);
        let (_, rest) = take(&stream, "only").unwrap();
        assert!(rest.is_eof());
        assert!(take(&rest, "only").is_none());
        assert!(TokenStream::new(Vec::<String>::new()).is_eof());
    }

    #[test]
    fn test_case_insensitive() {
        let stream = TokenStream::new(["BEGIN"]).case_insensitive();
        let (token, _) = take(&stream, "begin").unwrap();
        assert_eq!(token, "BEGIN");
    }
}
