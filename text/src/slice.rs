use std::fmt;
use std::sync::Arc;

use bplus_core::Stream;

type Comparer<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// A persistent cursor over a slice of arbitrary values.
///
/// Whether the next value matches an expected one is decided by a comparer,
/// which defaults to `PartialEq`. Positions count values.
///
/// # Example
///
/// ```ignore
/// let bits = SliceStream::new(vec![1, 0, 1]);
/// let ones = separated(exact(0), exact(1)).parse(bits)?;
/// assert_eq!(ones.value, [1, 1]);
/// ```
pub struct SliceStream<T> {
    items: Arc<[T]>,
    index: usize,
    comparer: Comparer<T>,
}

impl<T: PartialEq + 'static> SliceStream<T> {
    pub fn new(items: impl Into<Arc<[T]>>) -> Self {
        Self::with_comparer(items, |expected: &T, actual: &T| expected == actual)
    }
}

impl<T> SliceStream<T> {
    /// Stream matching with `comparer(expected, actual)`.
    pub fn with_comparer<F>(items: impl Into<Arc<[T]>>, comparer: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self {
            items: items.into(),
            index: 0,
            comparer: Arc::new(comparer),
        }
    }

    /// The unread values.
    #[inline]
    pub fn rest(&self) -> &[T] {
        &self.items[self.index..]
    }
}

impl<T> Clone for SliceStream<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            index: self.index,
            comparer: Arc::clone(&self.comparer),
        }
    }
}

impl<T> Stream for SliceStream<T>
where
    T: Clone + fmt::Debug + Send + Sync + 'static,
{
    type Item = T;

    fn try_take(&self, expected: &T) -> Option<(T, Self)> {
        let actual = self.items.get(self.index)?;
        (self.comparer)(expected, actual).then(|| {
            let stream = Self {
                index: self.index + 1,
                ..self.clone()
            };
            (actual.clone(), stream)
        })
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.index >= self.items.len()
    }

    fn peek(&self) -> Option<T> {
        self.items.get(self.index).cloned()
    }

    #[inline]
    fn position(&self) -> usize {
        self.index
    }
}

impl<T> PartialEq for SliceStream<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items) && self.index == other.index
    }
}

impl<T: fmt::Debug> fmt::Debug for SliceStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceStream")
            .field("index", &self.index)
            .field("rest", &self.rest())
            .finish_non_exhaustive()
    }
}
