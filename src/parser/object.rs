//! Object recognizer.
//!
//! Four-state machine over a `{`-delimited, comma-separated member list.
//! Each member delegates fully to the pair recognizer and the object
//! advances by the pair's skip. A `}` in the Pair state is legal only while
//! no member has been collected; afterwards it can only mean a comma was
//! left dangling, which is how a trailing comma is detected.

use alloc::vec::Vec;

use super::{advance, is_whitespace, pair};
use crate::{
    error::{ParseError, SyntaxError, TruncatedError},
    token::{ObjectToken, PairToken},
};

/// Recognizer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Whitespace and the opening `{`.
    Scanning,
    /// A member, or `}` closing an empty object.
    Pair,
    /// `,` continuing the list, or `}` closing it.
    Delimiter,
    /// The closing `}` has been consumed.
    End,
}

/// Recognizes an object at the start of `slice`.
pub(crate) fn parse(slice: &str) -> Result<ObjectToken, ParseError> {
    let mut mode = Mode::Scanning;
    let mut pos = 0usize;
    let mut members: Vec<PairToken> = Vec::new();

    while mode != Mode::End {
        let Some(ch) = advance(slice, pos).chars().next() else {
            break;
        };

        match mode {
            Mode::Scanning => {
                if is_whitespace(ch) {
                    pos += 1;
                } else if ch == '{' {
                    pos += 1;
                    mode = Mode::Pair;
                } else {
                    return Err(SyntaxError::ExpectedObjectOpen(ch).into());
                }
            }
            Mode::Pair => {
                if is_whitespace(ch) {
                    pos += 1;
                } else if ch == '}' {
                    if !members.is_empty() {
                        return Err(SyntaxError::TrailingComma.into());
                    }
                    pos += 1;
                    mode = Mode::End;
                } else {
                    let member = pair::parse(advance(slice, pos))?;
                    pos += member.skip;
                    members.push(member);
                    mode = Mode::Delimiter;
                }
            }
            Mode::Delimiter => {
                if is_whitespace(ch) {
                    pos += 1;
                } else if ch == ',' {
                    pos += 1;
                    mode = Mode::Pair;
                } else if ch == '}' {
                    pos += 1;
                    mode = Mode::End;
                } else {
                    return Err(SyntaxError::ExpectedObjectDelimiter(ch).into());
                }
            }
            Mode::End => break,
        }
    }

    if mode == Mode::End {
        Ok(ObjectToken { skip: pos, members })
    } else {
        Err(TruncatedError::Object.into())
    }
}
