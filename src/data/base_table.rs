//! Generic LaTeX–Unicode correspondence
//!
//! The base transliteration table: standard accent commands, ligature
//! letters, reserved characters and common text symbols as any LaTeX source
//! uses them. Corpus-specific deviations live in [`crate::data::overrides`]
//! and take precedence over these entries.
//!
//! Accent commands map to the *combining* mark, not to precomposed
//! characters: the decode pipeline substitutes the mark where the command
//! stood, reorders it behind its base letter and lets NFC compose the pair.
//! This keeps the table linear in the number of accents instead of quadratic
//! in accent × letter combinations.

/// Base rules: `(code point, spellings)`. The first spelling is canonical
/// for encoding; all spellings are registered for decoding.
pub static BASE_RULES: &[(char, &[&str])] = &[
    // Accent commands -> combining marks
    ('\u{0300}', &["\\`"]),  // grave
    ('\u{0301}', &["\\'"]),  // acute
    ('\u{0302}', &["\\^"]),  // circumflex
    ('\u{0303}', &["\\~"]),  // tilde
    ('\u{0304}', &["\\="]),  // macron
    ('\u{0306}', &["\\u"]),  // breve
    ('\u{0307}', &["\\."]),  // dot above
    ('\u{0308}', &["\\\""]), // diaeresis
    ('\u{030A}', &["\\r"]),  // ring above
    ('\u{030B}', &["\\H"]),  // double acute
    ('\u{030C}', &["\\v"]),  // caron
    ('\u{0323}', &["\\d"]),  // dot below
    ('\u{0327}', &["\\c"]),  // cedilla
    ('\u{0328}', &["\\k"]),  // ogonek
    ('\u{0331}', &["\\b"]),  // macron below
    ('\u{0361}', &["\\t"]),  // double inverted breve
    // Ligatures and special letters
    ('ß', &["\\ss"]),
    ('æ', &["\\ae"]),
    ('Æ', &["\\AE"]),
    ('œ', &["\\oe"]),
    ('Œ', &["\\OE"]),
    ('ø', &["\\o"]),
    ('Ø', &["\\O"]),
    ('å', &["\\aa"]),
    ('Å', &["\\AA"]),
    ('ł', &["\\l"]),
    ('Ł', &["\\L"]),
    ('ı', &["\\i"]),
    // Reserved characters
    ('%', &["\\%"]),
    ('&', &["\\&"]),
    ('#', &["\\#"]),
    ('$', &["\\$"]),
    ('_', &["\\_"]),
    ('{', &["\\{"]),
    ('}', &["\\}"]),
    // Text symbols
    ('…', &["\\dots", "\\ldots", "\\textellipsis"]),
    ('–', &["\\textendash"]),
    ('—', &["\\textemdash"]),
    ('¡', &["\\textexclamdown"]),
    ('¿', &["\\textquestiondown"]),
    ('\u{2018}', &["\\textquoteleft"]),
    ('\u{2019}', &["\\textquoteright"]),
    ('\u{201C}', &["\\textquotedblleft"]),
    ('\u{201D}', &["\\textquotedblright"]),
    ('«', &["\\guillemotleft"]),
    ('»', &["\\guillemotright"]),
    ('§', &["\\S"]),
    ('¶', &["\\P"]),
    ('©', &["\\textcopyright", "\\copyright"]),
    ('°', &["\\textdegree"]),
    ('£', &["\\pounds", "\\textsterling"]),
    ('€', &["\\texteuro"]),
    ('ª', &["\\textordfeminine"]),
    ('º', &["\\textordmasculine"]),
    ('±', &["\\textpm"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_are_well_formed() {
        for (ch, spellings) in BASE_RULES {
            assert!(
                !spellings.is_empty(),
                "no spellings for U+{:04X}",
                *ch as u32
            );
            for sp in *spellings {
                assert!(sp.starts_with('\\'), "spelling {:?} for {:?}", sp, ch);
            }
        }
    }

    #[test]
    fn test_no_duplicate_code_points() {
        let mut seen = std::collections::HashSet::new();
        for (ch, _) in BASE_RULES {
            assert!(seen.insert(*ch), "duplicate base rule for {:?}", ch);
        }
    }
}
