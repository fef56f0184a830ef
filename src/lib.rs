//! A recursive-descent JSON recognizer that produces a skip-counted token
//! tree.
//!
//! Every grammar construct — value dispatch, object, array, key/value pair,
//! string, number — has its own recognizer, implemented as an explicit state
//! machine over character positions. Recognizers compose by slice-and-resume:
//! a sub-recognizer is handed the unconsumed suffix of the input and returns
//! a typed token carrying a *skip* count, the number of characters it
//! consumed. The caller advances its own position by that count; no cursor
//! object is ever shared between recognizers.
//!
//! ```
//! use jsontok::{Token, parse};
//!
//! let token = parse("{\"a\": 1}").unwrap();
//! assert_eq!(token.skip(), 8);
//!
//! let Token::Object(object) = token else {
//!     panic!("expected an object");
//! };
//! assert_eq!(object.members[0].key.value, "a");
//! ```
//!
//! Parsing is a pure function of its input: no shared mutable state, no I/O,
//! no partial results. A malformed document yields a single [`ParseError`]
//! describing the innermost violation.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod parser;
mod token;

#[cfg(test)]
mod tests;

pub use error::{ParseError, SyntaxError, TruncatedError};
pub use parser::parse;
pub use token::{ArrayToken, NumberToken, ObjectToken, PairToken, StringToken, Token};
