//! Legacy ASCII escape codec
//!
//! A narrow, reversible transform kept for reading files already committed
//! in this historical format: any code point above 127 becomes the literal
//! token `?[\u<decimal>]`, so the escaped form is pure ASCII. Independent of
//! the LaTeX symbol table; do not confuse the two.

use std::fmt::Write;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // 3-7 decimal digits: everything from U+0080 up to U+10FFFF. The
    // historical encoder only ever wrote 3-5 digits; the wider window makes
    // the round trip exact for supplementary-plane characters too.
    static ref ESCAPE_PATTERN: Regex = Regex::new(r"\?\[\\u([0-9]{3,7})\]").unwrap();
}

/// Escape every non-ASCII code point as `?[\u<decimal>]`.
pub fn legacy_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        let cp = c as u32;
        if cp <= 127 {
            out.push(c);
        } else {
            let _ = write!(out, "?[\\u{}]", cp);
        }
    }
    out
}

/// Reverse [`legacy_escape`]. Tokens naming an invalid scalar value are left
/// in place.
pub fn legacy_unescape(input: &str) -> String {
    ESCAPE_PATTERN
        .replace_all(input, |caps: &Captures| {
            caps[1]
                .parse::<u32>()
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_escape() {
        assert_eq!(legacy_escape("abc"), "abc");
        assert_eq!(legacy_escape("äbc"), "?[\\u228]bc");
        assert_eq!(legacy_escape("ǝ"), "?[\\u477]");
    }

    #[test]
    fn test_unescape() {
        assert_eq!(legacy_unescape("?[\\u228]bc"), "äbc");
        assert_eq!(legacy_unescape("a?[\\u233]b?[\\u233]c"), "aébéc");
        // Too few digits or invalid scalar values stay put
        assert_eq!(legacy_unescape("?[\\u12]"), "?[\\u12]");
        assert_eq!(legacy_unescape("?[\\u1114111]"), "\u{10FFFF}");
        assert_eq!(legacy_unescape("?[\\u1114112]"), "?[\\u1114112]");
    }

    #[test]
    fn test_supplementary_plane_round_trip() {
        let s = "Gothic \u{10330}\u{10331}";
        assert_eq!(legacy_unescape(&legacy_escape(s)), s);
    }

    proptest! {
        #[test]
        fn prop_round_trip(s in "\\PC*") {
            prop_assert_eq!(legacy_unescape(&legacy_escape(&s)), s);
        }

        #[test]
        fn prop_escape_is_ascii(s in "\\PC*") {
            prop_assert!(legacy_escape(&s).chars().all(|c| (c as u32) <= 127));
        }
    }
}
