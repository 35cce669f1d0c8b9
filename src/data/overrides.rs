//! Corpus-specific override rules
//!
//! The archive's bibliography sources were not encoded consistently: LaTeX
//! commands with the same name are used with different meanings in different
//! files (e.g. `\:n` means N WITH DOT ABOVE in one source but is a textipa
//! retroflex command elsewhere). These rules pin down the readings observed
//! in the corpus and take precedence over the generic base table.
//!
//! Rules are keyed by canonical Unicode character name and resolved through
//! the Unicode character database at table-build time; an unresolvable name
//! is a fatal configuration error. Where a spelling is claimed by more than
//! one rule, registration order decides: [`crate::core::table`] applies the
//! rules in reverse lexicographic order by name, so the lexicographically
//! earlier name wins the decode slot. That precedence is deliberate and
//! load-bearing for existing corpora; do not rely on the declaration order
//! of this list.

/// Override rules: `(canonical Unicode name, spellings)`. The first spelling
/// is canonical for encoding; all spellings decode.
pub static OVERRIDE_RULES: &[(&str, &[&str])] = &[
    // Combining marks as the corpus spells them
    ("COMBINING DOT BELOW", &["\\textsubdot"]),
    ("COMBINING MACRON", &["\\=", "\\textbar"]),
    ("COMBINING MACRON BELOW", &["\\textsubbar", "\\textsubline"]),
    ("COMBINING COMMA BELOW", &["\\,", "\\cb"]),
    ("COMBINING TILDE BELOW", &["\\textsubtilde"]),
    ("COMBINING CARON", &["\\v"]),
    ("COMBINING CARON BELOW", &["\\textsubwedge"]),
    ("COMBINING CIRCUMFLEX ACCENT", &["\\^"]),
    ("COMBINING ACUTE ACCENT", &["\\'"]),
    ("COMBINING GRAVE ACCENT", &["\\`"]),
    ("COMBINING DIAERESIS", &["\\\""]),
    ("COMBINING LATIN SMALL LETTER C", &["\\textsuperscript{c}"]),
    ("COMBINING RING BELOW", &["\\textsubring"]),
    ("COMBINING OGONEK", &["\\textpolhook"]),
    ("COMBINING TILDE", &["\\~"]),
    ("COMBINING DOUBLE GRAVE ACCENT", &["\\textdoublegrave"]),
    ("COMBINING BREVE BELOW", &["\\textsubu"]),
    ("COMBINING BRIDGE BELOW", &["\\textsubbridge"]),
    // May clash with commands from the textipa package
    ("COMBINING HORN", &["\\;"]),
    ("COMBINING DOT ABOVE", &["\\.", "\\textdot", "\\:"]),
    // Punctuation and symbols
    ("MASCULINE ORDINAL INDICATOR", &["\\textordmasculine"]),
    ("LEFT SINGLE QUOTATION MARK", &["\\textquoteleft", "\\grq"]),
    ("SINGLE LOW-9 QUOTATION MARK", &["\\glq"]),
    ("RIGHT SINGLE QUOTATION MARK", &["\\textquoteright"]),
    ("NOT SIGN", &["\\textlnot"]),
    ("VULGAR FRACTION THREE QUARTERS", &["\\textthreequarters"]),
    ("LATIN SMALL LETTER A WITH RING ABOVE", &["\\r{a}"]),
    ("LATIN CAPITAL LETTER A WITH RING ABOVE", &["\\r{A}"]),
    ("MODIFIER LETTER SMALL W", &["\\textsuperscript{w}"]),
    ("SUPERSCRIPT ONE", &["\\textsuperscript{1}"]),
    ("SUPERSCRIPT TWO", &["\\textsuperscript{2}"]),
    ("SUPERSCRIPT THREE", &["\\textsuperscript{3}"]),
    ("SUPERSCRIPT FOUR", &["\\textsuperscript{4}"]),
    ("SUPERSCRIPT LATIN SMALL LETTER N", &["\\textsuperscript{n}"]),
    ("PERCENT SIGN", &["\\%"]),
    // Phonetic letters
    (
        "LATIN SMALL LETTER D WITH HOOK",
        &["\\texthtd", "\\texthooktopd", "\\textrhooktopd", "\\!d"],
    ),
    ("LATIN SMALL LETTER D WITH TAIL", &["\\:{d}"]),
    ("LATIN SMALL LETTER B WITH HOOK", &["\\texthtb", "\\texthooktopb"]),
    ("LATIN SMALL LETTER N WITH LEFT HOOK", &["\\textltailn"]),
    ("LATIN SMALL LETTER S WITH HOOK", &["\\textrtails"]),
    ("LATIN SMALL LETTER ETH", &["\\dh", "\\textdh"]),
    ("LATIN CAPITAL LETTER ETH", &["\\DH"]),
    ("LATIN SMALL LETTER ENG", &["\\ng", "\\textipa{N}"]),
    ("LATIN CAPITAL LETTER ENG", &["\\NG"]),
    ("LATIN SMALL LETTER OPEN O", &["\\textopeno"]),
    ("LATIN CAPITAL LETTER THORN", &["\\TH"]),
    ("LATIN SMALL LETTER THORN", &["\\textthorn", "\\th"]),
    ("LATIN LETTER GLOTTAL STOP", &["\\textglotstop"]),
    ("LATIN LETTER INVERTED GLOTTAL STOP", &["\\textrevglotstop"]),
    ("LATIN SMALL LETTER SCHWA", &["\\textschwa"]),
    ("LATIN SMALL LETTER R WITH TAIL", &["\\textrtailr"]),
    ("LATIN SMALL LETTER BARRED O", &["\\texttheta"]),
    ("LATIN SMALL LETTER O WITH HORN", &["\\ohorn"]),
    ("MODIFIER LETTER GLOTTAL STOP", &["\\textraiseglotstop"]),
    ("LATIN SMALL LETTER I WITH STROKE", &["\\textbari"]),
    ("LATIN SMALL LETTER E WITH TILDE", &["\\~e"]),
    ("INVERTED QUESTION MARK", &["\\textquestiondown"]),
    (
        "INVERTED EXCLAMATION MARK",
        &["\\textexclamationdown", "\\textexclamdown"],
    ),
    ("HORIZONTAL ELLIPSIS", &["\\dots"]),
    ("RIGHT DOUBLE QUOTATION MARK", &["\\textquotedblright"]),
    ("LEFT DOUBLE QUOTATION MARK", &["\\textquotedblleft"]),
    ("LEFT-POINTING DOUBLE ANGLE QUOTATION MARK", &["\\guillemotleft"]),
    ("RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK", &["\\guillemotright"]),
    (
        "LATIN LETTER ALVEOLAR CLICK",
        &["\\textdoublebarpipe", "\\textdoublebarpipevar"],
    ),
    ("PLUS-MINUS SIGN", &["\\plusminus"]),
    ("LATIN SMALL LETTER E WITH MACRON AND ACUTE", &["\\textacutemacron e"]),
    ("LATIN SMALL LETTER E WITH OGONEK", &["\\textpolhook e"]),
    ("LATIN SMALL LETTER A WITH OGONEK", &["\\c{a}"]),
    ("LATIN SMALL LETTER TURNED M", &["\\textturnm"]),
    ("MODIFIER LETTER TRIANGULAR COLON", &["\\textlengthmark"]),
    ("LESS-THAN SIGN", &["\\textless"]),
    ("GREATER-THAN SIGN", &["\\textgreater"]),
    // A misuse, but that's how goba.bib writes it
    ("LATIN CROSS", &["\\textbarpipe"]),
    // Again a misuse
    ("LATIN SMALL LETTER OPEN E", &["\\textepsilon"]),
    ("LATIN SMALL LETTER GAMMA", &["\\textgamma", "\\gamma"]),
    ("LATIN SMALL LETTER TURNED V", &["\\textturnv"]),
    ("GREEK SMALL LETTER BETA", &["\\textbeta"]),
    ("GREEK CAPITAL LETTER ETA", &["\\textEta"]),
    ("GREEK SMALL LETTER OMEGA", &["\\textomega"]),
    ("LATIN SMALL LETTER UPSILON", &["\\textupsilon"]),
    ("LATIN SMALL LETTER ESH", &["\\textesh"]),
    ("CYRILLIC SMALL LETTER HARD SIGN", &["\\texthardsign"]),
    ("EURO SIGN", &["\\eurosign"]),
    ("DEGREE SIGN", &["\\circ"]),
    ("VERTICAL LINE", &["\\textvertline"]),
    ("DOUBLE VERTICAL LINE", &["\\textdoublevertline"]),
    ("LATIN SMALL LETTER T WITH RETROFLEX HOOK", &["\\:{t}"]),
    ("LATIN SMALL LETTER H WITH STROKE", &["\\textcrh"]),
    ("LATIN SMALL LETTER REVERSED OPEN E", &["\\textrevepsilon"]),
    ("LATIN SMALL LETTER PHI", &["\\textphi"]),
    ("GREEK SMALL LETTER CHI", &["\\textchi"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_are_well_formed() {
        for (name, spellings) in OVERRIDE_RULES {
            assert!(!spellings.is_empty(), "no spellings for {}", name);
            for sp in *spellings {
                assert!(sp.starts_with('\\'), "spelling {:?} for {}", sp, name);
            }
        }
    }

    #[test]
    fn test_every_name_resolves() {
        for (name, _) in OVERRIDE_RULES {
            assert!(
                unicode_names2::character(name).is_some(),
                "unknown Unicode name {:?}",
                name
            );
        }
    }

    #[test]
    fn test_no_duplicate_names() {
        let mut seen = std::collections::HashSet::new();
        for (name, _) in OVERRIDE_RULES {
            assert!(seen.insert(*name), "duplicate override rule for {}", name);
        }
    }
}
