//! Key/value pair recognizer.
//!
//! Parses one `key : value` unit inside an object: whitespace, a string key,
//! whitespace, a colon, whitespace, then a value dispatched with the
//! in-object terminator set. The End state returns only while a character
//! remains in the slice; a pair is always followed by `}` or `,` inside its
//! enclosing object, so running out of input in any stage — including
//! immediately after the value — is a truncated pair.

use super::{Terminators, advance, is_whitespace, string};
use crate::{
    error::{ParseError, SyntaxError, TruncatedError},
    token::{PairToken, StringToken, Token},
};

/// Recognizer state, one per stage of the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Whitespace before the key.
    Scanning,
    /// The string key.
    Key,
    /// Whitespace and the required `:`.
    Colon,
    /// The member value.
    Value,
    /// All four stages complete.
    End,
}

/// Recognizes one object member at the start of `slice`.
pub(crate) fn parse(slice: &str) -> Result<PairToken, ParseError> {
    let mut mode = Mode::Scanning;
    let mut pos = 0usize;
    let mut key: Option<StringToken> = None;
    let mut value: Option<Token> = None;

    while let Some(ch) = advance(slice, pos).chars().next() {
        match mode {
            Mode::Scanning => {
                if is_whitespace(ch) {
                    pos += 1;
                } else {
                    mode = Mode::Key;
                }
            }
            Mode::Key => {
                let token = string::parse(advance(slice, pos))?;
                pos += token.skip;
                key = Some(token);
                mode = Mode::Colon;
            }
            Mode::Colon => {
                if is_whitespace(ch) {
                    pos += 1;
                } else if ch == ':' {
                    pos += 1;
                    mode = Mode::Value;
                } else {
                    return Err(SyntaxError::ExpectedColon(ch).into());
                }
            }
            Mode::Value => {
                let token = super::value(advance(slice, pos), Terminators::InObject)?;
                pos += token.skip();
                value = Some(token);
                mode = Mode::End;
            }
            Mode::End => {
                let (Some(key), Some(value)) = (key.take(), value.take()) else {
                    // Key and Value always run before End.
                    return Err(TruncatedError::Pair.into());
                };
                return Ok(PairToken {
                    skip: pos,
                    key,
                    value,
                });
            }
        }
    }

    Err(TruncatedError::Pair.into())
}
