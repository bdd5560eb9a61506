//! Free-text normalization for comparisons.
//!
//! Lowercases, strips combining diacritical marks (U+0300..=U+036F after
//! canonical decomposition), collapses inner whitespace runs to one ASCII
//! space and drops leading and trailing whitespace.

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;
use unicode_normalization::UnicodeNormalization;

/// Input accepted by [`normalize_string`].
pub enum TextInput<'a> {
    /// No value at all; normalizes to the empty string.
    Absent,
    Text(Cow<'a, str>),
    /// A non-textual value, coerced through its `Display` output.
    Value(&'a dyn fmt::Display),
}

impl<'a> From<&'a str> for TextInput<'a> {
    fn from(s: &'a str) -> Self {
        TextInput::Text(Cow::Borrowed(s))
    }
}

impl From<String> for TextInput<'_> {
    fn from(s: String) -> Self {
        TextInput::Text(Cow::Owned(s))
    }
}

impl<'a> From<&'a String> for TextInput<'a> {
    fn from(s: &'a String) -> Self {
        TextInput::Text(Cow::Borrowed(s.as_str()))
    }
}

impl<'a, T: Into<TextInput<'a>>> From<Option<T>> for TextInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(TextInput::Absent, Into::into)
    }
}

impl TextInput<'_> {
    fn coerce(&self) -> Cow<'_, str> {
        match self {
            TextInput::Absent => Cow::Borrowed(""),
            TextInput::Text(text) => Cow::Borrowed(text.as_ref()),
            TextInput::Value(value) => Cow::Owned(value.to_string()),
        }
    }
}

/// Canonical comparison form of a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedString(String);

impl NormalizedString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for NormalizedString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for NormalizedString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NormalizedString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<NormalizedString> for String {
    fn from(s: NormalizedString) -> Self {
        s.0
    }
}

/// Normalize `input` for case-, accent- and spacing-insensitive comparison.
///
/// Idempotent; never fails.
pub fn normalize_string<'a>(input: impl Into<TextInput<'a>>) -> NormalizedString {
    let input = input.into();
    let lowered = input.coerce().to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;
    for c in lowered.nfd().filter(|c| !is_combining_diacritic(*c)) {
        if is_whitespace(c) {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }

    NormalizedString(out)
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

// Matches the ECMAScript `\s` class, which adds U+FEFF to Unicode White_Space.
fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
