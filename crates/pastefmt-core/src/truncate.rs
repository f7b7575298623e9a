//! Text truncation with an ellipsis marker.
//!
//! Text longer than the limit is cut to exactly `limit` units and
//! [`ELLIPSIS`] is appended, so the result may be up to three units longer
//! than the limit. Text that fits is returned borrowed.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// How the length of a text is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    /// Unicode scalar values; a character is never split.
    #[default]
    Chars,
    /// UTF-16 code units, as counted by browser string APIs.
    Utf16,
}

impl LengthUnit {
    /// Returns the length of `text` in this unit.
    pub fn measure(&self, text: &str) -> usize {
        match self {
            Self::Chars => text.chars().count(),
            Self::Utf16 => text.encode_utf16().count(),
        }
    }
}

/// Truncates `text` to `limit` units of `unit`, appending [`ELLIPSIS`] if cut.
pub fn truncate(text: &str, limit: usize, unit: LengthUnit) -> Cow<'_, str> {
    match unit {
        LengthUnit::Chars => truncate_text(text, limit),
        LengthUnit::Utf16 => truncate_text_utf16(text, limit),
    }
}

/// Truncates with a limit that may be negative.
///
/// A negative limit is below every length, including that of empty text, so
/// the result is always just [`ELLIPSIS`].
pub fn truncate_signed(text: &str, limit: i64, unit: LengthUnit) -> Cow<'_, str> {
    match usize::try_from(limit) {
        Ok(limit) => truncate(text, limit, unit),
        Err(_) => {
            tracing::trace!(limit, "negative limit");
            Cow::Borrowed(ELLIPSIS)
        }
    }
}

/// Truncates `text` to `limit` characters, appending [`ELLIPSIS`] if cut.
///
/// ```rust
/// use pastefmt_core::truncate_text;
///
/// assert_eq!(truncate_text("hello", 3), "hel...");
/// assert_eq!(truncate_text("hi", 10), "hi");
/// ```
pub fn truncate_text(text: &str, limit: usize) -> Cow<'_, str> {
    match text.char_indices().nth(limit) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => {
            tracing::trace!(limit, cut, "truncating text");
            Cow::Owned(format!("{}{}", &text[..cut], ELLIPSIS))
        }
    }
}

/// Truncates `text` to `limit` UTF-16 code units, appending [`ELLIPSIS`] if cut.
///
/// A cut through a surrogate pair keeps the leading half, which Rust strings
/// cannot hold, so it is rendered as U+FFFD.
pub fn truncate_text_utf16(text: &str, limit: usize) -> Cow<'_, str> {
    let mut units = 0;
    for (idx, ch) in text.char_indices() {
        let width = ch.len_utf16();
        if units + width > limit {
            tracing::trace!(limit, cut = idx, "truncating text by UTF-16 units");
            let mut out = String::with_capacity(idx + ELLIPSIS.len() + 3);
            out.push_str(&text[..idx]);
            if units < limit {
                out.push(char::REPLACEMENT_CHARACTER);
            }
            out.push_str(ELLIPSIS);
            return Cow::Owned(out);
        }
        units += width;
    }
    Cow::Borrowed(text)
}
