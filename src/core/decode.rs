//! LaTeX -> Unicode decode pipeline
//!
//! Every stage is a total, pure function over the string; the pipeline never
//! mutates shared state. Unknown commands pass through untouched and are
//! reported in [`DecodeOutput::unresolved`]: the table is known-incomplete
//! and a partial decode of a heterogeneous historical corpus beats a hard
//! failure.
//!
//! The one failure mode is input that already carries standalone combining
//! marks. Combining marks must only appear after command substitution;
//! finding one up front means the record was decoded before, and decoding it
//! again would stack diacritics. That check runs on the raw input, before
//! NFC gets a chance to fold the mark into a precomposed character.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

use crate::core::table::SymbolTable;
use crate::data::LANGUAGE_TAGS;
use crate::utils::error::{TranscodeError, TranscodeResult};

lazy_static! {
    // Formatting commands whose braced argument is kept verbatim
    static ref ARG_COMMAND: Regex =
        Regex::new(r"\\(?:url|emph|textit|texttt)\s*\{([^}]+)\}").unwrap();
    // One level of bare grouping
    static ref DEBRACKET: Regex = Regex::new(r"\{([^{}]+)\}").unwrap();
    // Numeric character references, decimal: &#233; or \&#233;
    static ref NUMREF_AMP: Regex = Regex::new(r"\\?&#([0-9]+);").unwrap();
    // Numeric character references, legacy bracket notation: ?[\u233]
    static ref NUMREF_BRACKET: Regex = Regex::new(r"\?\[\\u\s*([0-9]+)\]").unwrap();
    // Language-tag commands, built from the tag table (longest token first)
    static ref LANGUAGE_TAG: Regex = {
        let mut tokens: Vec<&str> = LANGUAGE_TAGS.keys().copied().collect();
        tokens.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        Regex::new(&format!(r"\\({})\s+", tokens.join("|"))).unwrap()
    };
    // Any LaTeX command token left after the pipeline
    static ref LEFTOVER_COMMAND: Regex = Regex::new(r"\\(?:[A-Za-z]+\*?|[^A-Za-z\s])").unwrap();
}

/// Semantically empty commands dropped together with their terminating space.
const STRIP_COMMANDS: &[&str] = &["relax", "it", "em", "textsc", "cite", "citet"];

/// True for code points whose Unicode name marks them as combining.
pub fn is_combining(c: char) -> bool {
    unicode_names2::name(c)
        .map(|n| n.to_string().starts_with("COMBINING"))
        .unwrap_or(false)
}

/// Decode result: the text plus any LaTeX tokens the table could not resolve.
///
/// Callers decide whether a partially resolved record is acceptable; the
/// legacy system only logged leftovers to the console.
#[derive(Debug, Clone)]
pub struct DecodeOutput {
    /// NFC-normalized decoded text.
    pub text: String,
    /// Command tokens still present in `text`, in order of appearance.
    pub unresolved: Vec<String>,
}

impl DecodeOutput {
    /// True when every command in the input was resolved.
    pub fn is_fully_resolved(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Reject pre-combined input, then NFC-normalize.
fn preprocess(input: &str) -> TranscodeResult<String> {
    if let Some(c) = input.chars().find(|c| is_combining(*c)) {
        return Err(TranscodeError::data_integrity(
            format!("standalone combining mark U+{:04X} in input", c as u32),
            input,
        ));
    }
    Ok(input.nfc().collect())
}

/// Replace every recognized spelling with its code point.
fn substitute(table: &SymbolTable, input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match table.match_spelling(tail) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &tail[consumed..];
            }
            None => {
                // Unknown command: keep the backslash, scan on
                out.push('\\');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Drop semantically empty formatting commands, keeping their argument text.
fn strip_commands(input: &str) -> String {
    let mut s = ARG_COMMAND.replace_all(input, "$1").into_owned();
    for cmd in STRIP_COMMANDS {
        s = s.replace(&format!("\\{} ", cmd), "");
    }
    s
}

/// Remove empty groups, then two levels of bare `{...}` grouping.
fn strip_braces(input: &str) -> String {
    let s = input.replace("{}", "");
    let s = DEBRACKET.replace_all(&s, "$1");
    DEBRACKET.replace_all(&s, "$1").into_owned()
}

/// Move combining marks behind their base character.
///
/// LaTeX writes the diacritic command before the letter; Unicode wants the
/// mark after it. Consecutive marks are buffered and re-emitted after the
/// next base character, keeping their relative order. Marks with no
/// following base character end up at the end of the string.
fn reorder_combining_marks(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending: Vec<char> = Vec::new();
    for c in input.chars() {
        if is_combining(c) {
            pending.push(c);
        } else {
            out.push(c);
            out.extend(pending.drain(..));
        }
    }
    out.extend(pending);
    out
}

/// Resolve decimal numeric character references in both legacy notations.
/// References naming an invalid scalar value pass through unchanged.
fn resolve_char_refs(input: &str) -> String {
    let repl = |caps: &Captures| -> String {
        caps[1]
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    };
    let s = NUMREF_AMP.replace_all(input, repl).into_owned();
    NUMREF_BRACKET.replace_all(&s, repl).into_owned()
}

/// Rewrite known language-tag commands to a bracketed 3-letter code.
fn rewrite_language_tags(input: &str) -> String {
    LANGUAGE_TAG
        .replace_all(input, |caps: &Captures| {
            match LANGUAGE_TAGS.get(&caps[1]) {
                Some(code) => format!("[{}] ", code),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// LaTeX command tokens still present in a decoded string.
pub fn remaining_commands(input: &str) -> Vec<String> {
    LEFTOVER_COMMAND
        .find_iter(input)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Run the full decode pipeline against `table`.
pub fn decode(table: &SymbolTable, input: &str) -> TranscodeResult<DecodeOutput> {
    let s = preprocess(input)?;
    let s = substitute(table, &s);
    let s = strip_commands(&s);
    let s = strip_braces(&s);
    let s = reorder_combining_marks(&s);
    let s = resolve_char_refs(&s);
    let s = rewrite_language_tags(&s);
    let text: String = s.nfc().collect();
    let unresolved = remaining_commands(&text);
    Ok(DecodeOutput { text, unresolved })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn decode_text(input: &str) -> String {
        decode(SymbolTable::shared(), input).unwrap().text
    }

    #[test]
    fn test_is_combining() {
        assert!(is_combining('\u{0301}'));
        assert!(is_combining('\u{0323}'));
        assert!(!is_combining('e'));
        assert!(!is_combining('é'));
    }

    #[test]
    fn test_accent_command_composes() {
        assert_eq!(decode_text(r#"\"a"#), "ä");
        assert_eq!(decode_text(r#"M\"uller"#), "Müller");
        assert_eq!(decode_text(r"Caf\'e"), "Café");
    }

    #[test]
    fn test_braced_accent_argument() {
        assert_eq!(decode_text(r#"\"{o}"#), "ö");
        assert_eq!(decode_text(r"\v{s}"), "š");
    }

    #[test]
    fn test_override_beats_generic_reading() {
        // \c{a} is ogonek in this corpus, not cedilla
        assert_eq!(decode_text(r"\c{a}"), "ą");
        // while the bare accent keeps its generic cedilla meaning
        assert_eq!(decode_text(r"\c{c}"), "ç");
    }

    #[test]
    fn test_named_letters() {
        assert_eq!(decode_text(r"\textschwa x"), "əx");
        assert_eq!(decode_text(r"\ng"), "ŋ");
        assert_eq!(decode_text(r"\textipa{N}"), "ŋ");
        assert_eq!(decode_text(r"\dh\th"), "ðþ");
    }

    #[test]
    fn test_stacked_marks_keep_applied_order() {
        // Acute then macron on o: the acute composes with the base, the
        // macron stays combining.
        assert_eq!(decode_text(r"\'\=o"), "ó\u{0304}");
    }

    #[test]
    fn test_precomposed_override_with_literal_space() {
        assert_eq!(decode_text(r"\textacutemacron e"), "\u{1E17}");
        assert_eq!(decode_text(r"\textpolhook e"), "ę");
    }

    #[test]
    fn test_command_stripping() {
        assert_eq!(decode_text(r"a \relax b"), "a b");
        assert_eq!(decode_text(r"\emph{stress}"), "stress");
        assert_eq!(decode_text(r"\textit{title} rest"), "title rest");
        assert_eq!(decode_text(r"\url{http://example.org}"), "http://example.org");
        assert_eq!(decode_text(r"\textsc Rome"), "Rome");
    }

    #[test]
    fn test_brace_removal() {
        assert_eq!(decode_text("{Einstein}"), "Einstein");
        assert_eq!(decode_text("The {{DNA}} Structure"), "The DNA Structure");
        assert_eq!(decode_text("empty{} group"), "empty group");
    }

    #[test]
    fn test_numeric_character_references() {
        assert_eq!(decode_text("&#233;"), "é");
        assert_eq!(decode_text(r"\&#233;"), "é");
        assert_eq!(decode_text(r"?[\u233]"), "é");
        // Invalid scalar values pass through
        assert_eq!(decode_text("&#1114112;"), "&#1114112;");
    }

    #[test]
    fn test_language_tags() {
        assert_eq!(decode_text(r"\latin foo"), "[lat] foo");
        assert_eq!(decode_text(r"\tib bla"), "[bod] bla");
        // Case-sensitive exact match only
        assert_eq!(decode_text(r"\Latin foo"), "\\Latin foo");
    }

    #[test]
    fn test_precombined_input_is_rejected() {
        let err = decode(SymbolTable::shared(), "caf\u{e9}\u{301}").unwrap_err();
        assert!(matches!(err, TranscodeError::DataIntegrity { .. }));
        // Even marks NFC would fold away are rejected
        let err = decode(SymbolTable::shared(), "e\u{301}").unwrap_err();
        assert!(matches!(err, TranscodeError::DataIntegrity { .. }));
    }

    #[test]
    fn test_unknown_commands_pass_through_tagged() {
        let out = decode(SymbolTable::shared(), r#"\frobnicate x \"a"#).unwrap();
        assert_eq!(out.text, "\\frobnicate x ä");
        assert_eq!(out.unresolved, vec!["\\frobnicate"]);
        assert!(!out.is_fully_resolved());
    }

    #[test]
    fn test_fully_resolved() {
        let out = decode(SymbolTable::shared(), r"Stra\ss e").unwrap();
        assert_eq!(out.text, "Straße");
        assert!(out.is_fully_resolved());
    }

    #[test]
    fn test_reorder() {
        assert_eq!(reorder_combining_marks("\u{0308}ab"), "a\u{0308}b");
        assert_eq!(reorder_combining_marks("\u{0301}\u{0304}e"), "e\u{0301}\u{0304}");
        // A mark with no following base character is kept, not dropped
        assert_eq!(reorder_combining_marks("x\u{0301}"), "x\u{0301}");
    }
}
