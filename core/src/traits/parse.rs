use super::stream::Stream;
use crate::Parser;
use crate::combinators::{many, map, maybe};

/// Trait for types that have a canonical grammar over stream `S`.
///
/// This is the entry point for typed grammars: implement it for AST nodes
/// and call `stream.parse::<T>()`.
///
/// # Example
///
/// ```ignore
/// struct Param {
///     name: String,
///     ty: String,
/// }
///
/// impl Parse<StrStream> for Param {
///     fn parser() -> Parser<StrStream, Self> {
///         combine(ident())
///             .skip(syntax(":"))
///             .and(ident())
///             .map(|(name, ty)| Param { name, ty })
///             .build(Some("PARAM"))
///     }
/// }
///
/// let param = StrStream::new("x: int").parse::<Param>()?;
/// ```
///
/// # Blanket Implementations
///
/// - `Option<T>`: [`maybe`] of `T`
/// - `Vec<T>`: [`many`] of `T`
/// - `Box<T>`: `T`, boxed
pub trait Parse<S: Stream>: Sized + 'static {
    /// Builds the parser for this type.
    fn parser() -> Parser<S, Self>;
}

impl<S: Stream, T: Parse<S>> Parse<S> for Option<T> {
    fn parser() -> Parser<S, Self> {
        maybe(T::parser())
    }
}

impl<S: Stream, T: Parse<S>> Parse<S> for Vec<T> {
    fn parser() -> Parser<S, Self> {
        many(T::parser())
    }
}

impl<S: Stream, T: Parse<S>> Parse<S> for Box<T> {
    fn parser() -> Parser<S, Self> {
        map(T::parser(), Box::new)
    }
}
