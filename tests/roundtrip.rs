//! Round-trip and structural property tests.
//!
//! The headline contract is that enciphering is self-inverse: running
//! ciphertext through a machine with identical key settings reproduces
//! the normalized plaintext. A deterministic matrix pins a spread of
//! configurations, and proptest explores random keys, texts, and
//! plugboards on top of it.

use enigma::{encipher, Enigma, Plugboard, ReflectorId, RotorId};
use proptest::prelude::*;

// ═══════════════════════════════════════════════════════════════════════
// Deterministic round-trip matrix
// ═══════════════════════════════════════════════════════════════════════

/// Every reflector against a spread of rotor sets, with and without a
/// plugboard.
#[test]
fn round_trip_matrix() {
    let plaintext = "THEREARENOSECRETSTHATTIMEWILLNOTREVEAL";
    let rotor_sets = [
        ["1", "2", "3"],
        ["4", "5", "6"],
        ["8", "7", "1"],
        ["7", "beta", "gamma"],
        ["gamma", "none", "5"],
        ["none", "none", "none"],
    ];
    for reflector in ["1", "2", "3", "4"] {
        for rotors in rotor_sets {
            for plug in ["", "AB CD EF"] {
                let encipher_once = |text: &str| {
                    encipher(
                        text, reflector, rotors[0], 3, rotors[1], 15, rotors[2], 24, plug,
                    )
                    .unwrap()
                };
                let ciphertext = encipher_once(plaintext);
                assert_eq!(
                    encipher_once(&ciphertext),
                    plaintext,
                    "round trip failed for reflector {} rotors {:?} plug {:?}",
                    reflector,
                    rotors,
                    plug
                );
            }
        }
    }
}

/// Paired sessions, the way a sender and receiver would hold them.
#[test]
fn paired_sessions_round_trip() {
    let mut sender = Enigma::new(
        ReflectorId::Three,
        [RotorId::II, RotorId::IV, RotorId::VIII],
        [19, 0, 8],
        Plugboard::new("QW ER TY").unwrap(),
    );
    let mut receiver = Enigma::new(
        ReflectorId::Three,
        [RotorId::II, RotorId::IV, RotorId::VIII],
        [19, 0, 8],
        Plugboard::new("QW ER TY").unwrap(),
    );

    for message in ["FIRSTMESSAGE", "SECONDMESSAGE", "THIRD"] {
        let ciphertext = sender.encipher(message).unwrap();
        assert_eq!(receiver.encipher(&ciphertext).unwrap(), message);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Property-based exploration
// ═══════════════════════════════════════════════════════════════════════

fn rotor_tag() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "1", "2", "3", "4", "5", "6", "7", "8", "beta", "gamma", "none",
    ])
}

fn reflector_tag() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["1", "2", "3", "4"])
}

/// Random disjoint pair set: an even-sized draw of distinct letters,
/// shuffled and joined into two-letter tokens.
fn plug_pairs() -> impl Strategy<Value = String> {
    let letters: Vec<char> = ('A'..='Z').collect();
    prop::sample::subsequence(letters, 0..=12)
        .prop_shuffle()
        .prop_map(|mut letters| {
            if letters.len() % 2 == 1 {
                letters.pop();
            }
            letters
                .chunks(2)
                .map(|pair| pair.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join(" ")
        })
}

proptest! {
    /// Self-inverse contract over random keys, shifts, plugboards, and
    /// letters-only texts, including out-of-range initial shifts.
    #[test]
    fn prop_round_trip(
        text in "[A-Z]{0,60}",
        reflector in reflector_tag(),
        rotors in (rotor_tag(), rotor_tag(), rotor_tag()),
        shifts in (-52..78i32, -52..78i32, -52..78i32),
        plug in plug_pairs(),
    ) {
        let (r1, r2, r3) = rotors;
        let (s1, s2, s3) = shifts;
        let ciphertext = encipher(&text, reflector, r1, s1, r2, s2, r3, s3, &plug).unwrap();
        let plaintext = encipher(&ciphertext, reflector, r1, s1, r2, s2, r3, s3, &plug).unwrap();
        prop_assert_eq!(plaintext, text);
    }

    /// Ciphertext is uppercase letters of the same length as the
    /// normalized input.
    #[test]
    fn prop_ciphertext_shape(
        text in "[A-Z]{0,60}",
        reflector in reflector_tag(),
        rotors in (rotor_tag(), rotor_tag(), rotor_tag()),
    ) {
        let (r1, r2, r3) = rotors;
        let ciphertext = encipher(&text, reflector, r1, 0, r2, 0, r3, 0, "").unwrap();
        prop_assert_eq!(ciphertext.len(), text.len());
        prop_assert!(ciphertext.bytes().all(|b| b.is_ascii_uppercase()));
    }

    /// A real reflector never maps a symbol to itself, so no plaintext
    /// symbol survives into the ciphertext at the same position.
    #[test]
    fn prop_no_fixed_points(
        text in "[A-Z]{1,60}",
        reflector in reflector_tag(),
        rotors in (rotor_tag(), rotor_tag(), rotor_tag()),
        plug in plug_pairs(),
    ) {
        let (r1, r2, r3) = rotors;
        let ciphertext = encipher(&text, reflector, r1, 7, r2, 11, r3, 2, &plug).unwrap();
        for (position, (p, c)) in text.chars().zip(ciphertext.chars()).enumerate() {
            prop_assert_ne!(p, c, "fixed point at position {}", position);
        }
    }

    /// Raw text and its pre-normalized form encipher identically.
    #[test]
    fn prop_normalization_equivalence(
        text in "[A-Za-z ,.!?'\"-]{0,60}",
        reflector in reflector_tag(),
        rotors in (rotor_tag(), rotor_tag(), rotor_tag()),
    ) {
        let (r1, r2, r3) = rotors;
        let normalized: String = text
            .to_uppercase()
            .chars()
            .filter(char::is_ascii_alphabetic)
            .collect();
        let raw = encipher(&text, reflector, r1, 4, r2, 9, r3, 17, "").unwrap();
        let folded = encipher(&normalized, reflector, r1, 4, r2, 9, r3, 17, "").unwrap();
        prop_assert_eq!(raw, folded);
    }

    /// With the reflector disabled the machine is the identity on
    /// normalized text for any rotor, shift, and plugboard choice.
    #[test]
    fn prop_disabled_reflector_identity(
        text in "[A-Z]{0,60}",
        rotors in (rotor_tag(), rotor_tag(), rotor_tag()),
        shifts in (0..26i32, 0..26i32, 0..26i32),
        plug in plug_pairs(),
    ) {
        let (r1, r2, r3) = rotors;
        let (s1, s2, s3) = shifts;
        let out = encipher(&text, "none", r1, s1, r2, s2, r3, s3, &plug).unwrap();
        prop_assert_eq!(out, text);
    }

    /// Any pair set sharing a letter between two tokens is rejected.
    #[test]
    fn prop_overlapping_pairs_rejected(
        letters in prop::sample::subsequence(('A'..='Z').collect::<Vec<char>>(), 3..=3),
    ) {
        let pairs = format!(
            "{}{} {}{}",
            letters[0], letters[1], letters[0], letters[2]
        );
        prop_assert!(Plugboard::new(&pairs).is_err());
    }
}
