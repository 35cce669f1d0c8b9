//! Language-tag token mappings
//!
//! Some bibliography sources mark quoted material with short language
//! commands (`\latin`, `\zh`, ...). These are not spelling variants of any
//! code point; the decode pipeline rewrites them to a bracketed 3-letter
//! code, e.g. `\latin foo` becomes `[lat] foo`. Matching is case-sensitive
//! and exact.

use phf::phf_map;

/// Language-tag token -> 3-letter code
pub static LANGUAGE_TAGS: phf::Map<&'static str, &'static str> = phf_map! {
    "latin" => "lat",
    "zh" => "zho",
    "hindi" => "hin",
    "eng" => "eng",
    "viet" => "vie",
    "tib" => "bod",
    "skt" => "san", // Sanskrit
    "gujarati" => "guj",
    "pacoh" => "pac",
    "thai" => "tha",
    "dutch" => "nld",
    "burm" => "mya",
    "dan" => "dan",
    "norw" => "nor",
    "oldkhmer" => "qok",
    "ital" => "ita",
    "santali" => "sat",
    "span" => "spa",
    "germ" => "deu",
    "fr" => "fra",
    "rus" => "rus",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_three_letters() {
        for (tag, code) in LANGUAGE_TAGS.entries() {
            assert_eq!(code.len(), 3, "bad code {:?} for tag {:?}", code, tag);
            assert!(code.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_known_tags() {
        assert_eq!(LANGUAGE_TAGS.get("latin"), Some(&"lat"));
        assert_eq!(LANGUAGE_TAGS.get("tib"), Some(&"bod"));
        assert_eq!(LANGUAGE_TAGS.get("Latin"), None);
    }
}
