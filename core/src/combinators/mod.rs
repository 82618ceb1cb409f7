//! The combinator library.
//!
//! Every combinator is a plain function from parsers to a new [`Parser`];
//! nothing here mutates its inputs, so any parser can be reused in several
//! grammars at once.
//!
//! | Combinator | Label |
//! |------------|-------|
//! | [`and`] | `<a> AND <b>` |
//! | [`skip`] / [`take`] | the kept side's |
//! | [`maybe`] | `MAYBE` |
//! | [`many`] / [`many1`] | `ZERO OR MANY` / `ONE OR MANY` |
//! | [`attempt`] | `ATTEMPT` |
//! | [`any`] | alternatives joined by ` OR ` |
//! | [`exact`] | `EXACT <value>` |
//! | [`between`] | `BETWEEN` |
//! | [`lazy`] / [`lazy_with`] | the given label |
//! | [`separated`] / [`separated1`] | `SEPARATED` |
//! | [`map`] / [`try_map`] / [`debug`] / [`trace`] | the inner parser's |
//!
//! [`Parser`]: crate::Parser

mod choice;
mod inspect;
mod optional;
mod primitive;
mod repeat;
mod sequence;
mod transform;

pub use choice::any;
pub use inspect::{debug, trace};
pub use optional::{attempt, maybe};
pub use primitive::{exact, labeled, lazy, lazy_with};
pub use repeat::{
    many, many_with, many1, many1_with, separated, separated_with, separated1, separated1_with,
};
pub use sequence::{and, between, skip, take};
pub use transform::{map, try_map};
