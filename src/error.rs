//! Error types for the enigma library.

use thiserror::Error;

/// Errors produced by the enigma library.
///
/// Every failure is deterministic and derived from caller input: either a
/// malformed key parameter (plugboard pair set, rotor tag, reflector tag)
/// or a symbol that survived normalization without having a table entry.
/// A failed call never produces partial ciphertext.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Plugboard pair set failed validation.
    #[error("invalid plugboard: {reason}")]
    InvalidPlugboard {
        /// What the validator rejected.
        reason: String,
    },

    /// Rotor tag is not one of the configured identifiers.
    #[error("unknown rotor '{tag}'")]
    UnknownRotor {
        /// The tag as supplied by the caller.
        tag: String,
    },

    /// Reflector tag is not one of the configured identifiers.
    #[error("unknown reflector '{tag}'")]
    UnknownReflector {
        /// The tag as supplied by the caller.
        tag: String,
    },

    /// A normalized symbol has no entry in the substitution tables.
    ///
    /// Normalization keeps every word character, so digits and underscores
    /// reach the engine and are reported here instead of being guessed at.
    #[error("symbol '{symbol}' not in substitution table")]
    SymbolNotInTable {
        /// The offending character.
        symbol: char,
    },
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, EnigmaError>;
