//! Core traits for the bplus parsing framework.
//!
//! # Trait Hierarchy
//!
//! ```text
//! Stream (persistent cursor)
//!     └── parse::<T>() where T: Parse
//!
//! Parse (typed grammar entry point)
//!     └── parser() -> Parser<S, Self>
//! ```
//!
//! # Usage Patterns
//!
//! ```ignore
//! use bplus::{Parse, Stream};
//!
//! fn read_numbers(input: &str) -> Result<Vec<f64>, bplus::Error> {
//!     let parsed = StrStream::new(input).parse::<Vec<f64>>()?;
//!     Ok(parsed.value)
//! }
//! ```

mod parse;
mod stream;

pub use parse::Parse;
pub use stream::Stream;
