//! Session plugboard: validated symmetric letter-pair swaps.

use crate::alphabet;
use crate::error::EnigmaError;

/// A validated set of disjoint letter pairs, applied as a symmetric swap
/// on entry to and exit from the rotor stack.
///
/// Built once per session from whitespace-separated two-letter tokens
/// and immutable afterwards. Unpaired letters pass through unchanged,
/// so `swap(swap(x)) == x` for every letter.
#[derive(Debug, Clone)]
pub struct Plugboard {
    map: [u8; alphabet::LEN],
}

impl Default for Plugboard {
    /// The identity plugboard: no pairs connected.
    fn default() -> Self {
        Plugboard {
            map: identity_map(),
        }
    }
}

impl Plugboard {
    /// Builds a plugboard from whitespace-separated two-letter pairs,
    /// for example `"AB CD EF"`. Tokens are ASCII case-insensitive; the
    /// empty string yields the identity plugboard.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidPlugboard`] if a token is not
    /// exactly two letters, or if any letter is used more than once
    /// across all tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Plugboard;
    ///
    /// assert!(Plugboard::new("AB CD").is_ok());
    /// assert!(Plugboard::new("AB AC").is_err());
    /// ```
    pub fn new(pairs: &str) -> Result<Self, EnigmaError> {
        let mut map = identity_map();
        let mut used = [false; alphabet::LEN];

        for token in pairs.split_whitespace() {
            let upper = token.to_uppercase();
            let mut symbols = upper.chars();
            let (first, second) = match (symbols.next(), symbols.next(), symbols.next()) {
                (Some(a), Some(b), None) => (a, b),
                _ => {
                    return Err(EnigmaError::InvalidPlugboard {
                        reason: format!("pair '{}' is not exactly two letters", token),
                    })
                }
            };
            let a = index_of_pair_letter(first, token)?;
            let b = index_of_pair_letter(second, token)?;
            for letter in [a, b] {
                if used[letter as usize] {
                    return Err(EnigmaError::InvalidPlugboard {
                        reason: format!(
                            "letter '{}' is used more than once",
                            alphabet::letter(letter)
                        ),
                    });
                }
                used[letter as usize] = true;
            }
            map[a as usize] = b;
            map[b as usize] = a;
        }

        Ok(Plugboard { map })
    }

    /// Partner of `index` under the pair set, or `index` when unpaired.
    pub(crate) fn swap(&self, index: u8) -> u8 {
        self.map[index as usize]
    }

    /// Number of connected pairs.
    pub(crate) fn pair_count(&self) -> usize {
        self.map
            .iter()
            .enumerate()
            .filter(|&(i, &partner)| (partner as usize) != i)
            .count()
            / 2
    }
}

fn identity_map() -> [u8; alphabet::LEN] {
    std::array::from_fn(|i| i as u8)
}

fn index_of_pair_letter(symbol: char, token: &str) -> Result<u8, EnigmaError> {
    alphabet::index_of(symbol).ok_or_else(|| EnigmaError::InvalidPlugboard {
        reason: format!("pair '{}' holds a non-letter", token),
    })
}
