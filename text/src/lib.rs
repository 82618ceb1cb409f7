//! Streams and leaf parsers for text input.
//!
//! - [`StrStream`]: a string, matched by leading substring
//! - [`TokenStream`]: a lazily pulled sequence of string tokens
//! - [`SliceStream`]: any slice of values with a pluggable comparer
//!
//! The first two implement [`SymbolStream`], which the character-class leaves
//! ([`space`], [`letter`], [`digit`], [`symbol`]) and [`number`] build on.

mod number;
mod slice;
mod string;
mod symbol;
mod token;

pub use number::number;
pub use slice::SliceStream;
pub use string::{StrOptions, StrStream};
pub use symbol::{SymbolStream, digit, letter, space, symbol};
pub use token::TokenStream;
