//! Lower bound on the number of moves between two configurations.
//!
//! For every peg we look for the lowest disc that doesn't belong on the
//! corresponding peg of the target. That disc has to move at least once, and
//! so has every disc stacked above it. Pegs are counted independently, which
//! makes the bound loose but never too large.

use crate::configuration::Configuration;

impl Configuration {
    /// Lower bound on the number of moves needed to transform `self` into
    /// `other`. Both configurations must have the same number of pegs.
    pub fn lower_bound(&self, other: &Configuration) -> u32 {
        debug_assert_eq!(self.num_pegs(), other.num_pegs());

        let mut cost = 0;
        for (peg, other_peg) in self.pegs().iter().zip(other.pegs()) {
            let misplaced = peg
                .discs_bottom_up()
                .position(|disc| !other_peg.contains(disc));
            if let Some(height) = misplaced {
                cost += (peg.num_discs() - height) as u32;
            }
        }
        cost
    }
}
