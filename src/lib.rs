//! Historical three-rotor cipher machine simulator.
//!
//! Models the classic electromechanical rotor machine: a session
//! plugboard, three rotating rotors chosen from a set of ten, and a
//! fixed reflector. The same operation enciphers and deciphers, because
//! the per-symbol substitution is self-inverse; round-trip correctness
//! hinges on the permutation tables, the staggered rotor stepping
//! (including the double-step anomaly), and the forward/return signal
//! path being exactly right.
//!
//! # Architecture
//!
//! ```text
//! Plugboard       (session pair swaps, applied on entry and exit)
//!     ↓ forward                                  ↑ return
//! Rotor slots     (fast, middle, slow; positions advance per symbol)
//!     ↓ forward                                  ↑ return
//! Reflector       (fixed involutive pairing, turns the signal around)
//! ```
//!
//! # Examples
//!
//! One-shot encipherment with string key parameters:
//!
//! ```
//! use enigma::encipher;
//!
//! let ciphertext = encipher("Attack at dawn!", "1", "1", 0, "2", 0, "3", 0, "").unwrap();
//! assert_eq!(ciphertext, "BZHGNOCRRTCM");
//!
//! let plaintext = encipher(&ciphertext, "1", "1", 0, "2", 0, "3", 0, "").unwrap();
//! assert_eq!(plaintext, "ATTACKATDAWN");
//! ```
//!
//! Streaming through a session, with typed key settings:
//!
//! ```
//! use enigma::{Enigma, Plugboard, ReflectorId, RotorId};
//!
//! let mut machine = Enigma::new(
//!     ReflectorId::Two,
//!     [RotorId::IV, RotorId::Beta, RotorId::VI],
//!     [3, 12, 24],
//!     Plugboard::new("QW ER").unwrap(),
//! );
//!
//! let ciphertext = machine.encipher("SECRET MESSAGE").unwrap();
//! machine.reset();
//! assert_eq!(machine.encipher(&ciphertext).unwrap(), "SECRETMESSAGE");
//! ```

#![deny(clippy::all)]

pub mod error;

pub(crate) mod alphabet;
pub(crate) mod machine;
pub(crate) mod plugboard;
pub(crate) mod reflector;
pub(crate) mod rotor;
pub(crate) mod stepping;

pub use machine::{encipher, Enigma};
pub use plugboard::Plugboard;
pub use reflector::ReflectorId;
pub use rotor::RotorId;
