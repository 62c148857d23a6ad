//! CSS Values & Units Level 3 — §3.1.1 CSS-wide keywords
//! Spec: <https://www.w3.org/TR/css-values-3/#common-keywords>

use crate::ValueError;
use core::fmt;
use log::trace;

/// One of the keywords valid on every CSS property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CssWideKeyword {
    Inherit,
    Initial,
    Unset,
    Revert,
}

impl CssWideKeyword {
    /// Match a CSS-wide keyword exactly (case-sensitive, as reported by browsers).
    pub fn from_ident(ident: &str) -> Option<Self> {
        match ident {
            "inherit" => Some(Self::Inherit),
            "initial" => Some(Self::Initial),
            "unset" => Some(Self::Unset),
            "revert" => Some(Self::Revert),
            _ => None,
        }
    }

    /// The keyword as written in CSS.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inherit => "inherit",
            Self::Initial => "initial",
            Self::Unset => "unset",
            Self::Revert => "revert",
        }
    }
}

impl fmt::Display for CssWideKeyword {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A raw CSS value string, flagged when it is a CSS-wide keyword.
///
/// Every typed wrapper in this crate starts from a `Value`. A wide keyword
/// defers to another source, so dependent parsers skip interpretation when
/// [`Value::is_css_wide_keyword`] is set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Value {
    raw: String,
    wide_keyword: Option<CssWideKeyword>,
}

impl Value {
    /// Wrap a raw value string.
    ///
    /// # Errors
    /// Returns `ValueError::EmptyValue` when `raw` is empty or only whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValueError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValueError::EmptyValue);
        }
        let wide_keyword = CssWideKeyword::from_ident(raw.trim());
        if let Some(keyword) = wide_keyword {
            trace!("[VALUE] `{raw}` is the CSS-wide keyword {keyword}");
        }
        Ok(Self { raw, wide_keyword })
    }

    /// The string exactly as it was given.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The string without surrounding whitespace; what the parsers operate on.
    pub fn trimmed(&self) -> &str {
        self.raw.trim()
    }

    pub fn is_css_wide_keyword(&self) -> bool {
        self.wide_keyword.is_some()
    }

    pub fn css_wide_keyword(&self) -> Option<CssWideKeyword> {
        self.wide_keyword
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.raw)
    }
}

impl AsRef<str> for Value {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "a failed unwrap is a failed test")]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_strings_are_rejected() {
        assert_eq!(Value::new(""), Err(ValueError::EmptyValue));
        assert_eq!(Value::new("   "), Err(ValueError::EmptyValue));
    }

    #[test]
    fn wide_keywords_are_flagged() {
        for (text, keyword) in [
            ("inherit", CssWideKeyword::Inherit),
            ("initial", CssWideKeyword::Initial),
            ("unset", CssWideKeyword::Unset),
            ("revert", CssWideKeyword::Revert),
        ] {
            let value = Value::new(text).unwrap();
            assert!(value.is_css_wide_keyword());
            assert_eq!(value.css_wide_keyword(), Some(keyword));
            assert_eq!(keyword.to_string(), text);
        }
    }

    #[test]
    fn keyword_match_is_case_sensitive() {
        let value = Value::new("Inherit").unwrap();
        assert!(!value.is_css_wide_keyword());
        assert!(!Value::new("revert-layer").unwrap().is_css_wide_keyword());
    }

    #[test]
    fn raw_text_is_preserved() {
        let value = Value::new(" 12px ").unwrap();
        assert_eq!(value.raw(), " 12px ");
        assert_eq!(value.trimmed(), "12px");
        assert_eq!(value.to_string(), " 12px ");
    }
}
