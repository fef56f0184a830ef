//! Number recognizer.
//!
//! Recognizes the JSON number grammar as an explicit state machine: an
//! optional leading minus, an integer part (`0` alone, or a nonzero digit
//! followed by further digits), an optional fraction and an optional
//! exponent. The literal ends at the first character in the caller's
//! terminator set or at end of input; the matched text is kept verbatim
//! alongside its 64-bit float interpretation.

use alloc::string::ToString;

use super::Terminators;
use crate::{
    error::{ParseError, SyntaxError, TruncatedError},
    token::NumberToken,
};

/// Recognizer state, named for the part of the literal being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Before any character; a minus sign or the first digit is expected.
    Sign,
    /// After a leading minus; the first digit is still required.
    IntegerStart,
    /// After a leading zero; only `.`, an exponent marker or the end of the
    /// literal may follow.
    Zero,
    /// Inside the integer digit run.
    Integer,
    /// Just after the decimal point; at least one digit is required.
    FractionStart,
    /// Inside the fraction digit run.
    Fraction,
    /// Just after `e`/`E`; a sign or digit is required.
    ExponentStart,
    /// After the exponent sign; a digit is still required.
    ExponentSign,
    /// Inside the exponent digit run.
    Exponent,
}

/// Recognizes a number literal at the start of `slice`, stopping at the
/// first character of the caller's terminator set.
pub(crate) fn parse(slice: &str, terminators: Terminators) -> Result<NumberToken, ParseError> {
    let mut mode = Mode::Sign;
    let mut end = 0usize;

    for ch in slice.chars() {
        if terminators.ends_value(ch) {
            break;
        }
        mode = step(mode, ch)?;
        end += 1;
    }
    finish(mode)?;

    let literal = match slice.char_indices().nth(end) {
        Some((idx, _)) => &slice[..idx],
        None => slice,
    };
    // The state machine admits only text the float grammar accepts.
    let value: f64 = literal
        .parse()
        .expect("validated literal must parse as f64");

    Ok(NumberToken {
        skip: end,
        value,
        literal: literal.to_string(),
    })
}

/// Advances the state machine by one non-terminator character.
fn step(mode: Mode, ch: char) -> Result<Mode, SyntaxError> {
    match mode {
        Mode::Sign => match ch {
            '-' => Ok(Mode::IntegerStart),
            '0' => Ok(Mode::Zero),
            '1'..='9' => Ok(Mode::Integer),
            _ => Err(SyntaxError::UnexpectedCharacter(ch)),
        },
        Mode::IntegerStart => match ch {
            '0' => Ok(Mode::Zero),
            '1'..='9' => Ok(Mode::Integer),
            _ => Err(SyntaxError::UnexpectedCharacter(ch)),
        },
        Mode::Zero => match ch {
            '.' => Ok(Mode::FractionStart),
            'e' | 'E' => Ok(Mode::ExponentStart),
            // A digit here would be a leading zero.
            '0'..='9' => Err(SyntaxError::UnexpectedCharacter(ch)),
            _ => Err(SyntaxError::ExpectedExponent(ch)),
        },
        Mode::Integer => match ch {
            '0'..='9' => Ok(Mode::Integer),
            '.' => Ok(Mode::FractionStart),
            'e' | 'E' => Ok(Mode::ExponentStart),
            _ => Err(SyntaxError::ExpectedExponent(ch)),
        },
        Mode::FractionStart => match ch {
            '0'..='9' => Ok(Mode::Fraction),
            _ => Err(SyntaxError::UnexpectedCharacter(ch)),
        },
        Mode::Fraction => match ch {
            '0'..='9' => Ok(Mode::Fraction),
            'e' | 'E' => Ok(Mode::ExponentStart),
            '.' => Err(SyntaxError::UnexpectedCharacter(ch)),
            _ => Err(SyntaxError::ExpectedExponent(ch)),
        },
        Mode::ExponentStart => match ch {
            '+' | '-' => Ok(Mode::ExponentSign),
            '0'..='9' => Ok(Mode::Exponent),
            _ => Err(SyntaxError::UnexpectedCharacter(ch)),
        },
        Mode::ExponentSign | Mode::Exponent => match ch {
            '0'..='9' => Ok(Mode::Exponent),
            _ => Err(SyntaxError::UnexpectedCharacter(ch)),
        },
    }
}

/// Validates the mode reached when the literal's boundary (terminator or end
/// of input) is hit.
fn finish(mode: Mode) -> Result<(), ParseError> {
    match mode {
        Mode::Zero | Mode::Integer | Mode::Fraction | Mode::Exponent => Ok(()),
        Mode::Sign => Err(SyntaxError::EmptyValue.into()),
        Mode::IntegerStart | Mode::FractionStart | Mode::ExponentStart | Mode::ExponentSign => {
            Err(TruncatedError::Number.into())
        }
    }
}
