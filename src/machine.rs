//! The cipher machine: key setup, stepping, and the per-symbol signal
//! path.
//!
//! A session owns its plugboard and rotor positions; the wiring tables
//! behind the rotor and reflector identifiers are shared process-wide
//! statics, so any number of sessions can run in parallel.

use crate::alphabet;
use crate::error::{EnigmaError, Result};
use crate::plugboard::Plugboard;
use crate::reflector::ReflectorId;
use crate::rotor::RotorId;
use crate::stepping::ShiftState;

/// A configured cipher machine session.
///
/// # Architecture
///
/// Each symbol is routed through the plugboard, the three rotor slots
/// (fast, middle, slow) in the forward direction, the reflector, the
/// rotors again in reverse, and the plugboard once more. Before each
/// symbol the slot positions advance in the staggered odometer pattern,
/// including the double-step anomaly on the middle slot. Because the
/// reflector is an involution and every stage is undone on the return
/// path, the per-symbol substitution is self-inverse: enciphering
/// ciphertext under the same key settings yields the plaintext back.
///
/// # Examples
///
/// ```
/// use enigma::{Enigma, Plugboard, ReflectorId, RotorId};
///
/// let mut machine = Enigma::new(
///     ReflectorId::One,
///     [RotorId::I, RotorId::II, RotorId::III],
///     [0, 0, 0],
///     Plugboard::default(),
/// );
///
/// let ciphertext = machine.encipher("ATTACK AT DAWN").unwrap();
/// assert_eq!(ciphertext, "BZHGNOCRRTCM");
///
/// machine.reset();
/// assert_eq!(machine.encipher(&ciphertext).unwrap(), "ATTACKATDAWN");
/// ```
pub struct Enigma {
    reflector: ReflectorId,
    slots: [RotorId; 3],
    plugboard: Plugboard,
    start: ShiftState,
    state: ShiftState,
}

impl Enigma {
    /// Creates a machine from its key settings.
    ///
    /// Slots are listed slow to fast: `slots[0]` holds the slow rotor,
    /// `slots[2]` the fast rotor the signal enters first. Initial
    /// shifts are reduced into `[0, 26)` by Euclidean remainder, so
    /// `-1` and `25` select the same position.
    ///
    /// # Parameters
    /// - `reflector`: the reflector behind the rotor stack.
    /// - `slots`: rotor identifiers, slow to fast.
    /// - `shifts`: initial rotational positions, slow to fast.
    /// - `plugboard`: validated pair set from [`Plugboard::new`].
    pub fn new(
        reflector: ReflectorId,
        slots: [RotorId; 3],
        shifts: [i32; 3],
        plugboard: Plugboard,
    ) -> Self {
        let start = ShiftState::new(shifts[0], shifts[1], shifts[2]);
        tracing::debug!(
            "machine configured: reflector {:?}, slots {:?}, start ({}, {}, {}), {} plug pairs",
            reflector,
            slots,
            start.slow,
            start.middle,
            start.fast,
            plugboard.pair_count()
        );
        Enigma {
            reflector,
            slots,
            plugboard,
            start,
            state: start,
        }
    }

    /// Enciphers text, advancing rotor state across calls.
    ///
    /// Input is normalized first: case-folded to uppercase, with every
    /// character that is not a letter, digit, or underscore dropped.
    /// Two consecutive calls produce the same stream as one call on the
    /// concatenated text. Enciphering ciphertext on a fresh machine
    /// with identical key settings yields the normalized plaintext.
    ///
    /// The whole input is validated before any rotor moves, so a failed
    /// call leaves the session state unchanged and produces no partial
    /// output.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolNotInTable`] when a normalized
    /// symbol has no table entry (digits and underscores survive
    /// normalization and are rejected here).
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Enigma, Plugboard, ReflectorId, RotorId};
    ///
    /// let mut machine = Enigma::new(
    ///     ReflectorId::One,
    ///     [RotorId::I, RotorId::II, RotorId::III],
    ///     [0, 0, 0],
    ///     Plugboard::default(),
    /// );
    /// assert_eq!(machine.encipher("AA").unwrap(), "BD");
    /// ```
    pub fn encipher(&mut self, text: &str) -> Result<String> {
        let mut symbols = Vec::new();
        for symbol in alphabet::normalize(text) {
            let index =
                alphabet::index_of(symbol).ok_or(EnigmaError::SymbolNotInTable { symbol })?;
            symbols.push(index);
        }

        let mut output = String::with_capacity(symbols.len());
        for index in symbols {
            self.state
                .advance(self.slots[1].notches(), self.slots[2].notches());
            output.push(alphabet::letter(self.encode(index)));
        }
        Ok(output)
    }

    /// Returns the rotors to their configured starting positions.
    pub fn reset(&mut self) {
        self.state = self.start;
        tracing::debug!(
            "machine reset to start ({}, {}, {})",
            self.start.slow,
            self.start.middle,
            self.start.fast
        );
    }

    /// Current (slow, middle, fast) rotor positions.
    pub fn positions(&self) -> (u8, u8, u8) {
        (self.state.slow, self.state.middle, self.state.fast)
    }

    /// Runs one symbol through the full signal path at the current
    /// positions.
    ///
    /// The rotations align the symbol with each rotor's frame on the way
    /// in and mirror exactly on the way out, so the whole path is an
    /// involution for any fixed position triple.
    fn encode(&self, index: u8) -> u8 {
        let s1 = i32::from(self.state.slow);
        let s2 = i32::from(self.state.middle);
        let s3 = i32::from(self.state.fast);

        let mut c = self.plugboard.swap(index);
        c = alphabet::offset_by(c, s3);
        c = self.slots[2].forward(c);
        c = alphabet::offset_by(c, s2 - s3);
        c = self.slots[1].forward(c);
        c = alphabet::offset_by(c, s1 - s2);
        c = self.slots[0].forward(c);
        c = alphabet::offset_by(c, -s1);
        c = self.reflector.reflect(c);
        c = alphabet::offset_by(c, s1);
        c = self.slots[0].reverse(c);
        c = alphabet::offset_by(c, s2 - s1);
        c = self.slots[1].reverse(c);
        c = alphabet::offset_by(c, s3 - s2);
        c = self.slots[2].reverse(c);
        c = alphabet::offset_by(c, -s3);
        self.plugboard.swap(c)
    }
}

/// One-shot encipherment with string key parameters.
///
/// Parses the tags, validates the plugboard, and runs the whole text
/// through a fresh machine. The argument order mirrors the classic call
/// shape: reflector, then each rotor with its starting shift from slow
/// to fast, then the plugboard pairs.
///
/// # Parameters
/// - `text`: input text; normalized before processing.
/// - `reflector`: `"1"`..`"4"`, or `"none"` for a straight-through path.
/// - `rotor1`, `rotor2`, `rotor3`: `"1"`..`"8"`, `"beta"`, `"gamma"`,
///   or `"none"`, slow to fast.
/// - `shift1`, `shift2`, `shift3`: initial positions, reduced into
///   `[0, 26)`.
/// - `plug_pairs`: whitespace-separated two-letter pairs, empty for no
///   plugboard.
///
/// # Errors
/// Returns [`EnigmaError::UnknownReflector`] or
/// [`EnigmaError::UnknownRotor`] for an unrecognized tag,
/// [`EnigmaError::InvalidPlugboard`] for a malformed pair set, and
/// [`EnigmaError::SymbolNotInTable`] for a normalized symbol without a
/// table entry. All of these abort the call before any output is
/// produced.
///
/// # Examples
///
/// ```
/// use enigma::encipher;
///
/// let ciphertext = encipher("Attack at dawn!", "1", "1", 0, "2", 0, "3", 0, "").unwrap();
/// assert_eq!(ciphertext, "BZHGNOCRRTCM");
///
/// let plaintext = encipher(&ciphertext, "1", "1", 0, "2", 0, "3", 0, "").unwrap();
/// assert_eq!(plaintext, "ATTACKATDAWN");
/// ```
#[allow(clippy::too_many_arguments)]
pub fn encipher(
    text: &str,
    reflector: &str,
    rotor1: &str,
    shift1: i32,
    rotor2: &str,
    shift2: i32,
    rotor3: &str,
    shift3: i32,
    plug_pairs: &str,
) -> Result<String> {
    let reflector = reflector.parse::<ReflectorId>()?;
    let slots = [
        rotor1.parse::<RotorId>()?,
        rotor2.parse::<RotorId>()?,
        rotor3.parse::<RotorId>()?,
    ];
    let plugboard = Plugboard::new(plug_pairs)?;
    let mut machine = Enigma::new(reflector, slots, [shift1, shift2, shift3], plugboard);
    machine.encipher(text)
}
