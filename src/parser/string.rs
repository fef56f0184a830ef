//! String recognizer.
//!
//! Iterates the characters between the delimiting quotes, decoding escape
//! sequences as it goes. One deliberate exception to decoding: a `\uXXXX`
//! escape is validated (exactly four hexadecimal digits) but copied into the
//! decoded value verbatim as six characters, matching the behavior the
//! original implementation's tests pin down.

use alloc::string::String;

use crate::{
    error::{ParseError, SyntaxError, TruncatedError},
    token::StringToken,
};

/// Recognizer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Before the opening quote.
    Scanning,
    /// Inside the string, outside any escape.
    Chars,
    /// Just after a backslash.
    Escape,
    /// Inside a `\u` escape, counting down the required hex digits.
    Unicode(u8),
}

/// Recognizes a string literal at the start of `slice`.
pub(crate) fn parse(slice: &str) -> Result<StringToken, ParseError> {
    let mut mode = Mode::Scanning;
    let mut value = String::new();
    let mut skip = 0usize;

    for ch in slice.chars() {
        skip += 1;
        mode = match mode {
            Mode::Scanning => {
                if ch == '"' {
                    Mode::Chars
                } else {
                    return Err(SyntaxError::ExpectedQuote(ch).into());
                }
            }
            Mode::Chars => match ch {
                '"' => return Ok(StringToken { skip, value }),
                '\\' => Mode::Escape,
                ch if ch.is_control() => {
                    return Err(SyntaxError::UnexpectedCharacter(ch).into());
                }
                ch => {
                    value.push(ch);
                    Mode::Chars
                }
            },
            Mode::Escape => match ch {
                '"' | '\\' | '/' => {
                    value.push(ch);
                    Mode::Chars
                }
                'b' => {
                    value.push('\u{0008}');
                    Mode::Chars
                }
                'f' => {
                    value.push('\u{000C}');
                    Mode::Chars
                }
                'n' => {
                    value.push('\n');
                    Mode::Chars
                }
                'r' => {
                    value.push('\r');
                    Mode::Chars
                }
                't' => {
                    value.push('\t');
                    Mode::Chars
                }
                // Validated but kept verbatim in the decoded value.
                'u' => {
                    value.push_str("\\u");
                    Mode::Unicode(4)
                }
                _ => return Err(SyntaxError::UnexpectedEscape.into()),
            },
            Mode::Unicode(remaining) => {
                if ch.is_ascii_hexdigit() {
                    value.push(ch);
                    if remaining == 1 {
                        Mode::Chars
                    } else {
                        Mode::Unicode(remaining - 1)
                    }
                } else {
                    return Err(SyntaxError::BadUnicodeEscape.into());
                }
            }
        };
    }

    Err(TruncatedError::String.into())
}
