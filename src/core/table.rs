//! Symbol table construction
//!
//! Builds the forward (code point -> canonical spelling) and inverse
//! (spelling -> code point) tables from the static base correspondence and
//! the corpus override rules. The table is immutable after construction; a
//! lazily built process-wide instance is available through
//! [`SymbolTable::shared`] and is safe to use from any thread.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::data::{BASE_RULES, OVERRIDE_RULES};
use crate::utils::error::{TranscodeError, TranscodeResult};

lazy_static! {
    static ref SHARED_TABLE: SymbolTable =
        SymbolTable::builtin().expect("builtin symbol table is well-formed");
}

/// Bidirectional mapping between Unicode code points and LaTeX spellings.
#[derive(Debug)]
pub struct SymbolTable {
    /// Code point -> canonical spelling, used for encoding.
    forward: HashMap<char, &'static str>,
    /// Spelling -> code point, used for decoding. Last write wins.
    inverse: HashMap<&'static str, char>,
    /// Inverse entries sorted longest-spelling-first so the most specific
    /// spelling wins during substitution.
    decode_order: Vec<(&'static str, char)>,
}

impl SymbolTable {
    /// Build a table from explicit rule sets.
    ///
    /// `base` entries are literal `(code point, spellings)` pairs; `overrides`
    /// are keyed by canonical Unicode character name and must all resolve
    /// through the Unicode character database, otherwise a `Configuration`
    /// error is returned.
    ///
    /// Override rules are applied in reverse lexicographic order by name.
    /// When a spelling is claimed by several rules the later registration
    /// wins, so the lexicographically earlier name takes the decode slot.
    /// This precedence resolves real collisions among historical source
    /// files and must not be changed without migrating the corpus.
    pub fn from_rules(
        base: &[(char, &'static [&'static str])],
        overrides: &[(&'static str, &'static [&'static str])],
    ) -> TranscodeResult<Self> {
        let mut forward: HashMap<char, &'static str> = HashMap::new();
        let mut inverse: HashMap<&'static str, char> = HashMap::new();

        for (ch, spellings) in base {
            debug_assert!(!spellings.is_empty());
            forward.insert(*ch, spellings[0]);
            for sp in *spellings {
                inverse.insert(sp, *ch);
            }
        }

        let mut ordered: Vec<&(&'static str, &'static [&'static str])> =
            overrides.iter().collect();
        ordered.sort_by(|a, b| b.0.cmp(a.0));

        for (name, spellings) in ordered {
            debug_assert!(!spellings.is_empty());
            let ch = unicode_names2::character(name).ok_or_else(|| {
                TranscodeError::configuration(format!("unknown Unicode character name {:?}", name))
            })?;
            forward.insert(ch, spellings[0]);
            for sp in *spellings {
                inverse.insert(sp, ch);
            }
        }

        let mut decode_order: Vec<(&'static str, char)> =
            inverse.iter().map(|(sp, ch)| (*sp, *ch)).collect();
        decode_order.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));

        Ok(Self {
            forward,
            inverse,
            decode_order,
        })
    }

    /// Build the table from the shipped static rules.
    pub fn builtin() -> TranscodeResult<Self> {
        Self::from_rules(BASE_RULES, OVERRIDE_RULES)
    }

    /// The process-wide table, built on first use.
    pub fn shared() -> &'static SymbolTable {
        &SHARED_TABLE
    }

    /// Canonical spelling for a code point, if the table covers it.
    pub fn canonical_spelling(&self, ch: char) -> Option<&'static str> {
        self.forward.get(&ch).copied()
    }

    /// Code point for an exact spelling.
    pub fn lookup_spelling(&self, spelling: &str) -> Option<char> {
        self.inverse.get(spelling).copied()
    }

    /// Number of distinct spellings registered for decoding.
    pub fn spelling_count(&self) -> usize {
        self.inverse.len()
    }

    /// Match the longest registered spelling at the start of `tail`.
    ///
    /// `tail` starts at a backslash. A spelling ending in an ASCII letter is
    /// a control word: it only matches when the following character would
    /// not extend the command name, and it swallows one following space,
    /// mirroring TeX tokenization.
    pub(crate) fn match_spelling(&self, tail: &str) -> Option<(char, usize)> {
        for (spelling, ch) in &self.decode_order {
            if !tail.starts_with(spelling) {
                continue;
            }
            let mut consumed = spelling.len();
            if spelling.ends_with(|c: char| c.is_ascii_alphabetic()) {
                match tail[consumed..].chars().next() {
                    Some(next) if next.is_ascii_alphanumeric() => continue,
                    Some(' ') => consumed += 1,
                    _ => {}
                }
            }
            return Some((*ch, consumed));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_builds() {
        let table = SymbolTable::builtin().unwrap();
        assert!(table.spelling_count() > 100);
    }

    #[test]
    fn test_override_spellings_decode() {
        let table = SymbolTable::shared();
        assert_eq!(table.lookup_spelling("\\textschwa"), Some('ə'));
        assert_eq!(table.lookup_spelling("\\c{a}"), Some('ą'));
        assert_eq!(table.lookup_spelling("\\ng"), Some('ŋ'));
        assert_eq!(table.lookup_spelling("\\textipa{N}"), Some('ŋ'));
    }

    #[test]
    fn test_override_replaces_base_canonical() {
        let table = SymbolTable::shared();
        // Base table says \aa, the corpus override says \r{a}.
        assert_eq!(table.canonical_spelling('å'), Some("\\r{a}"));
        // Both spellings still decode.
        assert_eq!(table.lookup_spelling("\\aa"), Some('å'));
        assert_eq!(table.lookup_spelling("\\r{a}"), Some('å'));
    }

    #[test]
    fn test_base_canonical_survives_without_override() {
        let table = SymbolTable::shared();
        assert_eq!(table.canonical_spelling('ß'), Some("\\ss"));
        assert_eq!(table.canonical_spelling('œ'), Some("\\oe"));
    }

    #[test]
    fn test_unknown_name_is_configuration_error() {
        static BAD: &[(&str, &[&str])] = &[("NO SUCH CHARACTER NAME", &["\\nope"])];
        let err = SymbolTable::from_rules(&[], BAD).unwrap_err();
        assert!(matches!(err, TranscodeError::Configuration { .. }));
        assert!(err.to_string().contains("NO SUCH CHARACTER NAME"));
    }

    #[test]
    fn test_reverse_lex_precedence() {
        // Both rules claim \amb; the reverse-lex application order means the
        // lexicographically earlier name is registered later and wins.
        static AMBIGUOUS: &[(&str, &[&str])] = &[
            ("LATIN SMALL LETTER B", &["\\amb"]),
            ("LATIN SMALL LETTER A", &["\\amb"]),
        ];
        let table = SymbolTable::from_rules(&[], AMBIGUOUS).unwrap();
        assert_eq!(table.lookup_spelling("\\amb"), Some('a'));
    }

    #[test]
    fn test_longest_spelling_wins() {
        let table = SymbolTable::shared();
        // \c{a} must match before the bare cedilla accent \c.
        assert_eq!(table.match_spelling("\\c{a}"), Some(('ą', 5)));
        assert_eq!(table.match_spelling("\\c{o}"), Some(('\u{0327}', 2)));
    }

    #[test]
    fn test_control_word_boundary() {
        let table = SymbolTable::shared();
        // \dh terminates at non-letters, swallows one space, and never
        // matches as a prefix of a longer command name.
        assert_eq!(table.match_spelling("\\dh,"), Some(('ð', 3)));
        assert_eq!(table.match_spelling("\\dh x"), Some(('ð', 4)));
        assert_eq!(table.match_spelling("\\dhx"), None);
        // An accent letter command followed by a digit is not a match, so
        // numeric references like ?[\u233] survive substitution.
        assert_eq!(table.match_spelling("\\u233]"), None);
    }

    #[test]
    fn test_spelling_with_literal_space() {
        let table = SymbolTable::shared();
        assert_eq!(
            table.match_spelling("\\textacutemacron e"),
            Some(('\u{1E17}', 18))
        );
    }
}
