//! Rotor identifiers, wiring tables, and notch sets.
//!
//! A rotor's wiring is given as disjoint cyclic tracks that partition the
//! alphabet. Forward substitution maps a letter to the next letter of its
//! track, reverse substitution to the previous one. The track form is
//! compiled once, on first use, into direct index maps for both
//! directions, so per-symbol lookups never scan the tracks.

use std::str::FromStr;
use std::sync::LazyLock;

use crate::alphabet;
use crate::error::EnigmaError;

/// Identifier of a rotor that can occupy a slot.
///
/// Rotors `I`..`VIII` are the numbered stepping rotors; `Beta` and
/// `Gamma` are thin rotors without notches; `Disabled` is the identity
/// pass-through for an empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotorId {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    Beta,
    Gamma,
    Disabled,
}

impl FromStr for RotorId {
    type Err = EnigmaError;

    /// Parses a rotor tag: `"1"`..`"8"`, `"beta"`, `"gamma"`, or `"none"`
    /// (ASCII case-insensitive).
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "1" => Ok(RotorId::I),
            "2" => Ok(RotorId::II),
            "3" => Ok(RotorId::III),
            "4" => Ok(RotorId::IV),
            "5" => Ok(RotorId::V),
            "6" => Ok(RotorId::VI),
            "7" => Ok(RotorId::VII),
            "8" => Ok(RotorId::VIII),
            "beta" => Ok(RotorId::Beta),
            "gamma" => Ok(RotorId::Gamma),
            "none" => Ok(RotorId::Disabled),
            _ => Err(EnigmaError::UnknownRotor {
                tag: tag.to_string(),
            }),
        }
    }
}

impl RotorId {
    /// Position of this rotor in the wiring tables, or `None` for
    /// `Disabled`.
    fn table_index(self) -> Option<usize> {
        match self {
            RotorId::I => Some(0),
            RotorId::II => Some(1),
            RotorId::III => Some(2),
            RotorId::IV => Some(3),
            RotorId::V => Some(4),
            RotorId::VI => Some(5),
            RotorId::VII => Some(6),
            RotorId::VIII => Some(7),
            RotorId::Beta => Some(8),
            RotorId::Gamma => Some(9),
            RotorId::Disabled => None,
        }
    }

    /// Forward substitution at zero offset: the next letter of the track
    /// containing `index`. Identity for `Disabled`.
    pub(crate) fn forward(self, index: u8) -> u8 {
        match self.table_index() {
            Some(i) => WIRINGS[i].forward[index as usize],
            None => index,
        }
    }

    /// Reverse substitution at zero offset: the previous letter of the
    /// track containing `index`. Identity for `Disabled`.
    pub(crate) fn reverse(self, index: u8) -> u8 {
        match self.table_index() {
            Some(i) => WIRINGS[i].reverse[index as usize],
            None => index,
        }
    }

    /// Rotational offsets at which this rotor drives its neighbor.
    ///
    /// Thin and disabled rotors have no notch: in the middle slot they
    /// never fire the pre-check, in the fast slot they never carry.
    pub(crate) fn notches(self) -> &'static [u8] {
        match self {
            RotorId::I => &[17],
            RotorId::II => &[5],
            RotorId::III => &[22],
            RotorId::IV => &[10],
            RotorId::V => &[0],
            RotorId::VI | RotorId::VII | RotorId::VIII => &[0, 13],
            RotorId::Beta | RotorId::Gamma | RotorId::Disabled => &[],
        }
    }
}

/// Source wiring data: each rotor's disjoint cyclic tracks.
///
/// Rows are rotors 1..8, beta, gamma in table order. Rotors 7 and gamma
/// are a single 26-letter track; every other rotor splits into shorter
/// tracks. Singleton tracks (rotor 1's `S`, rotor 2's `A` and `Q`,
/// rotor 3's `N`) are fixed points of the substitution.
static TRACKS: [&[&str]; 10] = [
    &["AELTPHQXRU", "BKNW", "CMOY", "DFG", "IV", "JZ", "S"],
    &["FIXVYOMW", "CDKLHUP", "ESZ", "BJ", "GR", "NT", "A", "Q"],
    &["ABDHPEJT", "CFLVMZOYQIRWUKXSG", "N"],
    &["AEPLIYWCOXMRFZBSTGJQNH", "DV", "KU"],
    &["AVOLDRWFIUQ", "BZKSMNHYC", "EGTJPX"],
    &["AJQDVLEOZWIYTS", "CGMNHFUX", "BPRK"],
    &["ANOUPFRIMBZTLWKSVEGCJYDHXQ"],
    &["AFLSETWUNDHOZVICQ", "BKJ", "GXY", "MPR"],
    &["ALBEVFCYODJWUGNMQTZSKPR", "HIX"],
    &["AFNIRLBSQWVXGUZDKMTPCOYJHE"],
];

/// Compiled rotor wiring: direct index maps in both directions.
struct Wiring {
    forward: [u8; alphabet::LEN],
    reverse: [u8; alphabet::LEN],
}

/// Compiled wirings in [`TRACKS`] order, built and validated on first
/// access and shared read-only by every session afterwards.
static WIRINGS: LazyLock<[Wiring; 10]> = LazyLock::new(|| TRACKS.map(compile));

/// Compiles cyclic tracks into forward and reverse maps, checking the
/// partition invariant: every letter appears in exactly one track.
fn compile(tracks: &[&str]) -> Wiring {
    const UNSET: u8 = u8::MAX;

    let mut forward = [UNSET; alphabet::LEN];
    for track in tracks {
        let indices: Vec<u8> = track
            .chars()
            .map(|symbol| alphabet::index_of(symbol).expect("rotor track holds a non-letter"))
            .collect();
        for (pos, &from) in indices.iter().enumerate() {
            let to = indices[(pos + 1) % indices.len()];
            assert!(
                forward[from as usize] == UNSET,
                "letter '{}' appears more than once in a rotor's tracks",
                alphabet::letter(from)
            );
            forward[from as usize] = to;
        }
    }
    assert!(
        !forward.contains(&UNSET),
        "rotor tracks do not cover the alphabet"
    );

    let mut reverse = [0u8; alphabet::LEN];
    for (from, &to) in forward.iter().enumerate() {
        reverse[to as usize] = from as u8;
    }

    Wiring { forward, reverse }
}
