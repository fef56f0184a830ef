//! Parse failure taxonomy.
//!
//! Failures come in two families: [`SyntaxError`], raised when the grammar is
//! violated at a specific character, and [`TruncatedError`], raised when the
//! input ends in the middle of a construct. Each recognizer reports the first
//! violation it observes and the error propagates up the call chain
//! unchanged; there is no recovery and no partial acceptance.

use thiserror::Error;

/// Any failure produced by [`parse`](crate::parse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The grammar was violated at a specific character.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The input ended before the current construct was complete.
    #[error(transparent)]
    Truncated(#[from] TruncatedError),
}

/// A grammar violation observed at a specific character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// An object did not begin with `{`.
    #[error("Expected '{{', actual '{0}'")]
    ExpectedObjectOpen(char),
    /// An array did not begin with `[`.
    #[error("Expected '[', actual '{0}'")]
    ExpectedArrayOpen(char),
    /// A string did not begin with `"`.
    #[error("Expected '\"', actual '{0}'")]
    ExpectedQuote(char),
    /// An object member key was not followed by `:`.
    #[error("Expected ':', actual '{0}'")]
    ExpectedColon(char),
    /// An object member was not followed by `,` or `}`.
    #[error("Expected ',' or '}}', actual '{0}'")]
    ExpectedObjectDelimiter(char),
    /// An array element was not followed by `,` or `]`.
    #[error("Expected ',' or ']', actual '{0}'")]
    ExpectedArrayDelimiter(char),
    /// A keyword literal (`null`, `true`, `false`) did not match.
    #[error("Expected '{expected}', actual '{actual}'")]
    ExpectedLiteral {
        /// The keyword that was being matched.
        expected: &'static str,
        /// The character that broke the match.
        actual: char,
    },
    /// A digit run was followed by a letter other than `e` or `E`.
    #[error("Expected 'e' or 'E', actual '{0}'")]
    ExpectedExponent(char),
    /// A `,` immediately preceded a closing `}` or `]`.
    #[error("Unexpected ','")]
    TrailingComma,
    /// A character that no rule of the current construct admits.
    #[error("Unexpected character '{0}'")]
    UnexpectedCharacter(char),
    /// A `\` escape introducing an unrecognized character.
    #[error("Unexpected escape character")]
    UnexpectedEscape,
    /// A `\u` escape containing a non-hexadecimal digit.
    #[error("Unexpected Unicode code")]
    BadUnicodeEscape,
    /// No value at all: empty input, or nothing but whitespace.
    #[error("value cannot be empty")]
    EmptyValue,
}

/// Input that ended while a construct was still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TruncatedError {
    /// An object was not closed before end of input.
    #[error("Incomplete object expression")]
    Object,
    /// An array was not closed before end of input.
    #[error("Incomplete array expression")]
    Array,
    /// A key/value pair was cut short, or nothing followed its value.
    #[error("Incomplete pair expression")]
    Pair,
    /// A string was missing its closing quote.
    #[error("Incomplete string expression")]
    String,
    /// A keyword literal (`null`, `true`, `false`) was cut short.
    #[error("Incomplete literal expression")]
    Literal,
    /// A number ended where a digit was still required.
    #[error("Number ended prematurely")]
    Number,
}
