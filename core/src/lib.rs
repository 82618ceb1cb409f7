//! Core of the bplus parser-combinator library.
//!
//! A [`Parser`] is a labeled function from a persistent [`Stream`] to a
//! [`ParseResult`]. Grammars are built either from the free functions in
//! [`combinators`] or fluently through [`combine`]/[`Builder`], and typed
//! grammars hang off the [`Parse`] trait.
//!
//! Concrete streams over text, token sequences and slices live in
//! `bplus-text`.

mod builder;
pub mod combinators;
pub mod config;
mod error;
mod flatten;
mod parser;
mod result;
pub mod traits;

#[cfg(test)]
mod testing;

pub use builder::{Builder, combine};
pub use combinators::*;
pub use config::ParseConfig;
pub use error::Error;
pub use flatten::{flatten3, flatten4, flatten5, flatten6, flatten7, flatten8};
pub use parser::Parser;
pub use result::{Failed, ParseResult, ParseResultExt, Parsed, failure, refail, success};
pub use traits::{Parse, Stream};
