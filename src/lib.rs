//! # ulatex
//!
//! Bidirectional LaTeX ↔ Unicode transcoder for bibliographic text.
//!
//! The bibliography sources of a language-catalog archive are LaTeX-escaped,
//! and not consistently: the same command name can mean different characters
//! in different source files. This crate decodes that legacy encoding into
//! normalized Unicode and re-encodes it, compensating for the historical
//! inconsistencies with a corpus-specific override table.
//!
//! ## Features
//!
//! - **Table-driven**: generic LaTeX correspondence plus ordered override
//!   rules with documented collision precedence
//! - **Bidirectional**: LaTeX → Unicode and Unicode → LaTeX
//! - **Permissive**: unknown commands pass through and are reported, not
//!   fatal — partial decodes of a heterogeneous corpus beat hard failures
//! - **NFC-normalized**: output is always in canonical composition form
//! - **Legacy escape codec**: reversible `?[\u<dec>]` ASCII escaping for
//!   files committed in the historical format
//! - **WASM support**: compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Decoding LaTeX-escaped text
//!
//! ```rust
//! use ulatex::decode_latex_text;
//!
//! let text = decode_latex_text(r#"M\"uller"#).unwrap();
//! assert_eq!(text, "Müller");
//! ```
//!
//! ### Partial decodes
//!
//! ```rust
//! use ulatex::decode_latex;
//!
//! let out = decode_latex(r"\'etude \unknowncmd").unwrap();
//! assert_eq!(out.text, "étude \\unknowncmd");
//! assert!(!out.is_fully_resolved());
//! ```
//!
//! ### Legacy ASCII escapes
//!
//! ```rust
//! use ulatex::{legacy_escape, legacy_unescape};
//!
//! assert_eq!(legacy_escape("Grünberg"), "Gr?[\\u252]nberg");
//! assert_eq!(legacy_unescape("Gr?[\\u252]nberg"), "Grünberg");
//! ```

/// Core transcoding modules
pub mod core;

/// Data layer - static mappings
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core types and functions
pub use crate::core::decode::{is_combining, remaining_commands, DecodeOutput};
pub use crate::core::escape::{legacy_escape, legacy_unescape};
pub use crate::core::table::SymbolTable;

// Re-export data tables
pub use crate::data::{BASE_RULES, LANGUAGE_TAGS, OVERRIDE_RULES};

// Re-export error types
pub use crate::utils::error::{TranscodeError, TranscodeResult};

/// Decode LaTeX-escaped text to normalized Unicode.
///
/// Fails with a recoverable [`TranscodeError::DataIntegrity`] when the input
/// already contains standalone combining marks (a sign the record was
/// decoded before). Unknown commands pass through and are listed in
/// [`DecodeOutput::unresolved`].
pub fn decode_latex(input: &str) -> TranscodeResult<DecodeOutput> {
    crate::core::decode::decode(SymbolTable::shared(), input)
}

/// Decode LaTeX-escaped text, discarding the unresolved-token report.
pub fn decode_latex_text(input: &str) -> TranscodeResult<String> {
    decode_latex(input).map(|out| out.text)
}

/// Encode Unicode text back to the corpus's LaTeX conventions.
///
/// Best-effort: characters without a canonical spelling pass through as
/// literal Unicode. Combining marks that survive NFC are emitted as their
/// accent command in front of the base character; a mark the table does not
/// cover is a recoverable [`TranscodeError::DataIntegrity`] error.
pub fn encode_to_latex(input: &str) -> TranscodeResult<String> {
    crate::core::encode::encode(SymbolTable::shared(), input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_diaeresis() {
        assert_eq!(decode_latex_text(r#"\"a"#).unwrap(), "ä");
    }

    #[test]
    fn test_decode_corpus_ogonek() {
        assert_eq!(decode_latex_text(r"\c{a}").unwrap(), "ą");
    }

    #[test]
    fn test_decode_relax() {
        assert_eq!(decode_latex_text(r"before \relax after").unwrap(), "before after");
    }

    #[test]
    fn test_decode_language_tag() {
        assert_eq!(decode_latex_text(r"\latin foo").unwrap(), "[lat] foo");
    }

    #[test]
    fn test_decode_numeric_references() {
        assert_eq!(decode_latex_text("&#233;").unwrap(), "é");
        assert_eq!(decode_latex_text(r"?[\u233]").unwrap(), "é");
    }

    #[test]
    fn test_decode_rejects_bare_combining_mark() {
        let err = decode_latex("e\u{301}").unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_encode_best_effort() {
        assert_eq!(encode_to_latex("ą og ə").unwrap(), "\\c{a} og \\textschwa");
        assert_eq!(encode_to_latex("無し").unwrap(), "無し");
    }

    #[test]
    fn test_legacy_codec_round_trip() {
        let s = "ʔarabic ع and ǝ";
        assert_eq!(legacy_unescape(&legacy_escape(s)), s);
    }
}
