//! The recognizer family and its composition discipline.
//!
//! Control flow is strictly top-down: [`parse`] calls the value dispatcher,
//! which routes to the recognizer for the construct named by the first
//! significant character; composite recognizers call back into the dispatcher
//! for their members. Data flows upward as tokens carrying skip counts, which
//! accumulate additively as each layer resumes from its caller's slice
//! offset.
//!
//! Each recognizer is a pure function of its slice, returning a token that
//! carries its own skip, with no hidden state. The only context a caller passes down is the
//! [`Terminators`] set: the characters that legally end a value in the
//! current grammatical position.

pub(crate) mod array;
pub(crate) mod number;
pub(crate) mod object;
pub(crate) mod pair;
pub(crate) mod string;


use crate::{
    error::{ParseError, SyntaxError, TruncatedError},
    token::Token,
};

/// The grammatical context of the value being recognized, which fixes the
/// set of characters that may legally terminate it.
///
/// The grammar admits exactly three such sets, so the context is an enum
/// rather than a free-form character predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Terminators {
    /// Whitespace only: no enclosing construct.
    TopLevel,
    /// Whitespace plus `}` and `,`, the characters that follow a pair value.
    InObject,
    /// Whitespace plus `]` and `,`, the characters that follow an element.
    InArray,
}

impl Terminators {
    /// Returns `true` if `ch` legally ends a value in this context.
    pub(crate) fn ends_value(self, ch: char) -> bool {
        match self {
            Self::TopLevel => is_whitespace(ch),
            Self::InObject => is_whitespace(ch) || ch == '}' || ch == ',',
            Self::InArray => is_whitespace(ch) || ch == ']' || ch == ',',
        }
    }
}

/// JSON insignificant whitespace: space, line feed, carriage return, tab.
pub(crate) fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\n' | '\r' | '\t')
}

/// The suffix of `slice` that remains after `skip` characters.
///
/// Skip counts are characters, not bytes, so the boundary is found by
/// walking `char_indices`.
pub(crate) fn advance(slice: &str, skip: usize) -> &str {
    match slice.char_indices().nth(skip) {
        Some((idx, _)) => &slice[idx..],
        None => "",
    }
}

/// Parses a complete JSON text into a token tree.
///
/// This is the sole entry point of the engine. It delegates once to the
/// value dispatcher with the top-level terminator set (whitespace only) and
/// returns the resulting token, or the innermost failure, unchanged.
///
/// # Examples
///
/// ```
/// use jsontok::{Token, parse};
///
/// let token = parse("[1, 2, 3]").unwrap();
/// let Token::Array(array) = token else {
///     panic!("expected an array");
/// };
/// assert_eq!(array.elements.len(), 3);
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first grammar violation or
/// truncation encountered; a failed parse produces no partial token.
pub fn parse(text: &str) -> Result<Token, ParseError> {
    value(text, Terminators::TopLevel)
}

/// The value dispatcher: skips leading whitespace, inspects the next
/// character and routes to the recognizer for that construct.
///
/// The returned token's skip includes the whitespace consumed here, so the
/// caller advances past both in one step.
pub(crate) fn value(slice: &str, terminators: Terminators) -> Result<Token, ParseError> {
    let mut whitespace = 0usize;
    let mut chars = slice.chars();
    let ch = loop {
        match chars.next() {
            Some(ch) if is_whitespace(ch) => whitespace += 1,
            Some(ch) => break ch,
            None => return Err(SyntaxError::EmptyValue.into()),
        }
    };

    let rest = advance(slice, whitespace);
    let token = match ch {
        '"' => Token::String(string::parse(rest)?),
        '{' => Token::Object(object::parse(rest)?),
        '[' => Token::Array(array::parse(rest)?),
        't' => literal(rest, "true", Token::True { skip: 4 })?,
        'f' => literal(rest, "false", Token::False { skip: 5 })?,
        'n' => literal(rest, "null", Token::Null { skip: 4 })?,
        '-' | '0'..='9' => Token::Number(number::parse(rest, terminators)?),
        other => return Err(SyntaxError::UnexpectedCharacter(other).into()),
    };
    Ok(add_whitespace(token, whitespace))
}

/// Matches an exact keyword literal (`null`, `true`, `false`) at the start
/// of `slice` and returns the prepared token on success.
fn literal(slice: &str, expected: &'static str, token: Token) -> Result<Token, ParseError> {
    let mut chars = slice.chars();
    for want in expected.chars() {
        match chars.next() {
            Some(ch) if ch == want => {}
            Some(ch) => {
                return Err(SyntaxError::ExpectedLiteral {
                    expected,
                    actual: ch,
                }
                .into());
            }
            None => return Err(TruncatedError::Literal.into()),
        }
    }
    Ok(token)
}

/// Folds the dispatcher's leading-whitespace count into the inner token's
/// skip before the token is handed to the caller.
fn add_whitespace(mut token: Token, whitespace: usize) -> Token {
    if whitespace > 0 {
        match &mut token {
            Token::Null { skip } | Token::True { skip } | Token::False { skip } => {
                *skip += whitespace;
            }
            Token::Number(token) => token.skip += whitespace,
            Token::String(token) => token.skip += whitespace,
            Token::Object(token) => token.skip += whitespace,
            Token::Array(token) => token.skip += whitespace,
        }
    }
    token
}
