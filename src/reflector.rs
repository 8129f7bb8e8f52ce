//! Reflector identifiers and pairing tables.
//!
//! A reflector is a perfect matching over the alphabet: 13 disjoint
//! letter pairs, no letter left out, no letter paired with itself. The
//! pair form is compiled once into an involutive index map.

use std::str::FromStr;
use std::sync::LazyLock;

use crate::alphabet;
use crate::error::EnigmaError;

/// Identifier of a reflector.
///
/// `One` and `Two` carry the classic B and C pairings; `Three` and
/// `Four` are additional matchings. `Disabled` is the identity
/// pass-through, which makes the whole machine the identity on
/// normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectorId {
    One,
    Two,
    Three,
    Four,
    Disabled,
}

impl FromStr for ReflectorId {
    type Err = EnigmaError;

    /// Parses a reflector tag: `"1"`..`"4"` or `"none"` (ASCII
    /// case-insensitive).
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "1" => Ok(ReflectorId::One),
            "2" => Ok(ReflectorId::Two),
            "3" => Ok(ReflectorId::Three),
            "4" => Ok(ReflectorId::Four),
            "none" => Ok(ReflectorId::Disabled),
            _ => Err(EnigmaError::UnknownReflector {
                tag: tag.to_string(),
            }),
        }
    }
}

impl ReflectorId {
    /// Pairing partner of `index`. Identity for `Disabled`.
    pub(crate) fn reflect(self, index: u8) -> u8 {
        let table = match self {
            ReflectorId::One => 0,
            ReflectorId::Two => 1,
            ReflectorId::Three => 2,
            ReflectorId::Four => 3,
            ReflectorId::Disabled => return index,
        };
        MAPS[table][index as usize]
    }
}

/// Source pairing data: 13 disjoint letter pairs per reflector.
static PAIRINGS: [[&str; 13]; 4] = [
    [
        "AY", "BR", "CU", "DH", "EQ", "FS", "GL", "IP", "JX", "KN", "MO", "TZ", "VW",
    ],
    [
        "AF", "BV", "CP", "DJ", "EI", "GO", "HY", "KR", "LZ", "MX", "NW", "TQ", "SU",
    ],
    [
        "AE", "BN", "CK", "DQ", "FU", "GY", "HW", "IJ", "LO", "MP", "RX", "SZ", "TV",
    ],
    [
        "AR", "BD", "CO", "EJ", "FN", "GT", "HK", "IV", "LM", "PW", "QZ", "SX", "UY",
    ],
];

/// Compiled involutive maps in [`PAIRINGS`] order, built and validated on
/// first access.
static MAPS: LazyLock<[[u8; alphabet::LEN]; 4]> = LazyLock::new(|| PAIRINGS.map(compile));

/// Compiles pairs into an index map, checking the perfect-matching
/// invariant: every letter in exactly one pair, no fixed points.
fn compile(pairs: [&str; 13]) -> [u8; alphabet::LEN] {
    const UNSET: u8 = u8::MAX;

    let mut map = [UNSET; alphabet::LEN];
    for pair in pairs {
        let mut symbols = pair.chars();
        let (first, second) = match (symbols.next(), symbols.next(), symbols.next()) {
            (Some(a), Some(b), None) => (a, b),
            _ => panic!("reflector pair '{}' is not two letters", pair),
        };
        let a = alphabet::index_of(first).expect("reflector pair holds a non-letter");
        let b = alphabet::index_of(second).expect("reflector pair holds a non-letter");
        assert!(a != b, "reflector pairs letter '{}' with itself", first);
        assert!(
            map[a as usize] == UNSET && map[b as usize] == UNSET,
            "letter appears in more than one reflector pair"
        );
        map[a as usize] = b;
        map[b as usize] = a;
    }
    assert!(
        !map.contains(&UNSET),
        "reflector pairs do not cover the alphabet"
    );
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_REFLECTORS: [ReflectorId; 4] = [
        ReflectorId::One,
        ReflectorId::Two,
        ReflectorId::Three,
        ReflectorId::Four,
    ];

    #[test]
    fn test_reflect_is_involution() {
        for reflector in ALL_REFLECTORS {
            for index in 0..alphabet::LEN as u8 {
                assert_eq!(
                    reflector.reflect(reflector.reflect(index)),
                    index,
                    "involution broken for {:?} at index {}",
                    reflector,
                    index
                );
            }
        }
    }

    #[test]
    fn test_reflect_has_no_fixed_points() {
        for reflector in ALL_REFLECTORS {
            for index in 0..alphabet::LEN as u8 {
                assert_ne!(
                    reflector.reflect(index),
                    index,
                    "fixed point in {:?} at index {}",
                    reflector,
                    index
                );
            }
        }
    }

    /// Frozen pairing rows. Reflectors 1 and 2 are the classic B and C
    /// matchings.
    #[test]
    fn test_frozen_rows() {
        let row = |reflector: ReflectorId| -> String {
            (0..alphabet::LEN as u8)
                .map(|i| alphabet::letter(reflector.reflect(i)))
                .collect()
        };
        assert_eq!(row(ReflectorId::One), "YRUHQSLDPXNGOKMIEBFZCWVJAT");
        assert_eq!(row(ReflectorId::Two), "FVPJIAOYEDRZXWGCTKUQSBNMHL");
        assert_eq!(row(ReflectorId::Three), "ENKQAUYWJICOPBLMDXZVFTHRGS");
        assert_eq!(row(ReflectorId::Four), "RDOBJNTKVEHMLFCWZAXGYIPSUQ");
    }

    #[test]
    fn test_disabled_is_identity() {
        for index in 0..alphabet::LEN as u8 {
            assert_eq!(ReflectorId::Disabled.reflect(index), index);
        }
    }

    #[test]
    fn test_from_str_accepts_all_tags() {
        assert_eq!("1".parse::<ReflectorId>().unwrap(), ReflectorId::One);
        assert_eq!("4".parse::<ReflectorId>().unwrap(), ReflectorId::Four);
        assert_eq!("NONE".parse::<ReflectorId>().unwrap(), ReflectorId::Disabled);
    }

    #[test]
    fn test_from_str_rejects_unknown_tags() {
        let err = "5".parse::<ReflectorId>().unwrap_err();
        assert_eq!(
            err,
            EnigmaError::UnknownReflector {
                tag: "5".to_string()
            }
        );
        assert!("b".parse::<ReflectorId>().is_err());
    }
}
