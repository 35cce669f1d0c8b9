//! Core transcoding engines
//!
//! - `table`: symbol table construction (forward + inverse mappings)
//! - `decode`: LaTeX -> Unicode pipeline
//! - `encode`: Unicode -> LaTeX path
//! - `escape`: legacy ASCII escape codec

pub mod decode;
pub mod encode;
pub mod escape;
pub mod table;

// Re-export main types and functions
pub use self::decode::{decode, is_combining, remaining_commands, DecodeOutput};
pub use self::encode::encode;
pub use self::escape::{legacy_escape, legacy_unescape};
pub use self::table::SymbolTable;
