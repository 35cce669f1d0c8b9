//! Data layer - static mappings
//!
//! This module contains all static data used for LaTeX ↔ Unicode
//! transcoding:
//! - Generic base correspondence (accents, ligatures, symbols)
//! - Corpus-specific override rules keyed by Unicode character name
//! - Language-tag token mappings

pub mod base_table;
pub mod language_tags;
pub mod overrides;

// Re-export commonly used items
pub use self::base_table::BASE_RULES;
pub use self::language_tags::LANGUAGE_TAGS;
pub use self::overrides::OVERRIDE_RULES;
