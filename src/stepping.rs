//! Rotor-stepping state machine.
//!
//! Three slot positions advance once per processed symbol in a staggered
//! odometer pattern. The middle slot steps through a pre-check of its
//! *next* position against its notch set, and when it fires the slow
//! slot advances in the same tick (the double-step anomaly). The fast
//! slot always advances, and landing on one of its notch positions
//! carries into the middle slot, so the middle slot can advance twice
//! in a single tick.

use crate::alphabet;

/// Live rotational positions of the three rotor slots, each in `[0, 26)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ShiftState {
    pub(crate) slow: u8,
    pub(crate) middle: u8,
    pub(crate) fast: u8,
}

impl ShiftState {
    /// Builds a state from caller-supplied offsets, reduced into
    /// `[0, 26)` by Euclidean remainder so negative and oversized values
    /// land on the equivalent position.
    pub(crate) fn new(slow: i32, middle: i32, fast: i32) -> Self {
        ShiftState {
            slow: reduce(slow),
            middle: reduce(middle),
            fast: reduce(fast),
        }
    }

    /// Advances the state for one symbol.
    ///
    /// Order is load-bearing: middle pre-check (with the slow carry),
    /// then the unconditional fast step, then the fast-notch carry into
    /// the middle slot.
    pub(crate) fn advance(&mut self, middle_notches: &[u8], fast_notches: &[u8]) {
        if middle_notches.contains(&bump(self.middle)) {
            self.middle = bump(self.middle);
            self.slow = bump(self.slow);
            tracing::trace!(
                "double step: middle -> {}, slow -> {}",
                self.middle,
                self.slow
            );
        }
        self.fast = bump(self.fast);
        if fast_notches.contains(&self.fast) {
            self.middle = bump(self.middle);
        }
    }
}

fn reduce(position: i32) -> u8 {
    position.rem_euclid(alphabet::LEN as i32) as u8
}

fn bump(position: u8) -> u8 {
    (position + 1) % alphabet::LEN as u8
}
