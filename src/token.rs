//! The token tree produced by a successful parse.
//!
//! Every token records `skip`: the number of input characters its recognizer
//! consumed from the slice it was handed, counted from the start of that
//! slice. Leading whitespace skipped by the recognizer itself is included;
//! trailing whitespace after the construct is not. Callers advance their own
//! position by the returned skip and never consume characters on a token's
//! behalf.
//!
//! Tokens are immutable once constructed and own their children exclusively;
//! they exist only as recognizer return values, so a failed parse never
//! yields a partial tree.

use alloc::{string::String, vec::Vec};

/// A parsed JSON value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// The literal `null`.
    Null {
        /// Characters consumed, including leading whitespace.
        skip: usize,
    },
    /// The literal `true`.
    True {
        /// Characters consumed, including leading whitespace.
        skip: usize,
    },
    /// The literal `false`.
    False {
        /// Characters consumed, including leading whitespace.
        skip: usize,
    },
    /// A number literal.
    Number(NumberToken),
    /// A string literal.
    String(StringToken),
    /// An object.
    Object(ObjectToken),
    /// An array.
    Array(ArrayToken),
}

/// A parsed number, kept in dual representation: the exact matched text and
/// its 64-bit float interpretation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct NumberToken {
    /// Characters consumed.
    pub skip: usize,
    /// The literal interpreted as a 64-bit float.
    pub value: f64,
    /// The matched substring, verbatim: sign, digits, decimal point and
    /// exponent preserved exactly as written.
    pub literal: String,
}

/// A parsed string: the decoded content between the delimiting quotes.
///
/// Escape sequences are resolved, with one deliberate exception: a `\uXXXX`
/// escape is validated but copied into `value` verbatim as six characters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct StringToken {
    /// Characters consumed, including both quotes.
    pub skip: usize,
    /// The decoded string content.
    pub value: String,
}

/// One `key : value` member of an object.
///
/// A pair can only occur inside an [`ObjectToken`], so it is a plain struct
/// rather than a [`Token`] variant; the value dispatcher can never produce
/// one.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PairToken {
    /// Characters consumed across all four stages: key, colon, value and the
    /// whitespace between them.
    pub skip: usize,
    /// The member key.
    pub key: StringToken,
    /// The member value.
    pub value: Token,
}

/// A parsed object: its members in source order.
///
/// Duplicate keys are neither deduplicated nor rejected; both members are
/// retained.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectToken {
    /// Characters consumed, including the closing `}`.
    pub skip: usize,
    /// The members, in insertion order.
    pub members: Vec<PairToken>,
}

/// A parsed array: its elements in source order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayToken {
    /// Characters consumed, including the closing `]`.
    pub skip: usize,
    /// The elements, in order.
    pub elements: Vec<Token>,
}

impl Token {
    /// The number of characters the recognizer consumed to produce this
    /// token, counted from the start of the slice it was given.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontok::parse;
    ///
    /// // Leading whitespace is counted, trailing whitespace is not.
    /// assert_eq!(parse("  123 ").unwrap().skip(), 5);
    /// ```
    #[must_use]
    pub fn skip(&self) -> usize {
        match self {
            Self::Null { skip } | Self::True { skip } | Self::False { skip } => *skip,
            Self::Number(token) => token.skip,
            Self::String(token) => token.skip,
            Self::Object(token) => token.skip,
            Self::Array(token) => token.skip,
        }
    }

    /// Returns `true` if the token is the literal `null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null { .. })
    }

    /// Returns `true` if the token is the literal `true` or `false`.
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::True { .. } | Self::False { .. })
    }

    /// The boolean value, if the token is `true` or `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontok::parse;
    ///
    /// assert_eq!(parse("true").unwrap().as_bool(), Some(true));
    /// assert_eq!(parse("null").unwrap().as_bool(), None);
    /// ```
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::True { .. } => Some(true),
            Self::False { .. } => Some(false),
            _ => None,
        }
    }

    /// The number token, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<&NumberToken> {
        match self {
            Self::Number(token) => Some(token),
            _ => None,
        }
    }

    /// The string token, if this is a string.
    #[must_use]
    pub fn as_string(&self) -> Option<&StringToken> {
        match self {
            Self::String(token) => Some(token),
            _ => None,
        }
    }

    /// The object token, if this is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectToken> {
        match self {
            Self::Object(token) => Some(token),
            _ => None,
        }
    }

    /// The array token, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&ArrayToken> {
        match self {
            Self::Array(token) => Some(token),
            _ => None,
        }
    }
}
