//! Unicode -> LaTeX encode path
//!
//! Best-effort re-encoding: characters covered by the forward table are
//! emitted as their canonical spelling, everything else passes through as
//! literal Unicode. Combining marks that survive NFC (marks with no
//! precomposed form, ring below, wedge below and the like) are emitted as
//! their accent command in front of the character they attach to, inverting
//! the decode pipeline's reorder pass. A mark the table does not cover
//! cannot be re-serialized and is a data-integrity error.

use unicode_normalization::UnicodeNormalization;

use crate::core::decode::is_combining;
use crate::core::table::SymbolTable;
use crate::utils::error::{TranscodeError, TranscodeResult};

/// Encode `input` against `table`.
///
/// An empty group `{}` terminates a control-word spelling whenever the next
/// character would otherwise be swallowed into the command (a letter, digit,
/// or the single space the decoder eats after a control word), so the result
/// decodes back to the same text.
pub fn encode(table: &SymbolTable, input: &str) -> TranscodeResult<String> {
    let normalized: String = input.nfc().collect();

    // Move each combining mark in front of its cluster, where the decoder's
    // reorder pass will put it back. Consecutive marks keep their order.
    let mut resequenced: Vec<char> = Vec::new();
    let mut insert_at = 0;
    for c in normalized.chars() {
        if is_combining(c) {
            if table.canonical_spelling(c).is_none() {
                return Err(TranscodeError::data_integrity(
                    format!("unmapped combining mark U+{:04X} in input", c as u32),
                    input,
                ));
            }
            resequenced.insert(insert_at, c);
            insert_at += 1;
        } else {
            insert_at = resequenced.len();
            resequenced.push(c);
        }
    }

    let mut out = String::with_capacity(normalized.len());
    let mut chars = resequenced.iter().peekable();
    while let Some(c) = chars.next() {
        match table.canonical_spelling(*c) {
            Some(spelling) => {
                out.push_str(spelling);
                if spelling.ends_with(|c: char| c.is_ascii_alphabetic()) {
                    if let Some(next) = chars.peek() {
                        if next.is_ascii_alphanumeric() || **next == ' ' {
                            out.push_str("{}");
                        }
                    }
                }
            }
            None => out.push(*c),
        }
    }
    Ok(out)
}
