//! Array recognizer.
//!
//! Symmetric to the object recognizer: the same four-state shape over a
//! `[`-delimited, comma-separated list, except that members are bare values
//! dispatched with the in-array terminator set rather than key/value pairs.

use alloc::vec::Vec;

use super::{Terminators, advance, is_whitespace};
use crate::{
    error::{ParseError, SyntaxError, TruncatedError},
    token::{ArrayToken, Token},
};

/// Recognizer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Whitespace and the opening `[`.
    Scanning,
    /// An element, or `]` closing an empty array.
    Value,
    /// `,` continuing the list, or `]` closing it.
    Delimiter,
    /// The closing `]` has been consumed.
    End,
}

/// Recognizes an array at the start of `slice`.
pub(crate) fn parse(slice: &str) -> Result<ArrayToken, ParseError> {
    let mut mode = Mode::Scanning;
    let mut pos = 0usize;
    let mut elements: Vec<Token> = Vec::new();

    while mode != Mode::End {
        let Some(ch) = advance(slice, pos).chars().next() else {
            break;
        };

        match mode {
            Mode::Scanning => {
                if is_whitespace(ch) {
                    pos += 1;
                } else if ch == '[' {
                    pos += 1;
                    mode = Mode::Value;
                } else {
                    return Err(SyntaxError::ExpectedArrayOpen(ch).into());
                }
            }
            Mode::Value => {
                if is_whitespace(ch) {
                    pos += 1;
                } else if ch == ']' {
                    if !elements.is_empty() {
                        return Err(SyntaxError::TrailingComma.into());
                    }
                    pos += 1;
                    mode = Mode::End;
                } else {
                    let element = super::value(advance(slice, pos), Terminators::InArray)?;
                    pos += element.skip();
                    elements.push(element);
                    mode = Mode::Delimiter;
                }
            }
            Mode::Delimiter => {
                if is_whitespace(ch) {
                    pos += 1;
                } else if ch == ',' {
                    pos += 1;
                    mode = Mode::Value;
                } else if ch == ']' {
                    pos += 1;
                    mode = Mode::End;
                } else {
                    return Err(SyntaxError::ExpectedArrayDelimiter(ch).into());
                }
            }
            Mode::End => break,
        }
    }

    if mode == Mode::End {
        Ok(ArrayToken {
            skip: pos,
            elements,
        })
    } else {
        Err(TruncatedError::Array.into())
    }
}
