use std::sync::Arc;

use crate::Disc;

/// A stack of discs, stored bottom-up. The last disc is the top one.
///
/// Pegs are never modified in place, every change produces a new `Peg`. This
/// lets configurations share the pegs that a move didn't touch.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Peg {
    discs: Arc<[Disc]>,
}

impl Peg {
    pub fn new(discs: impl IntoIterator<Item = Disc>) -> Self {
        Peg {
            discs: discs.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// A new peg without the top disc.
    ///
    /// Panics if the peg is empty. Move generation never produces a move
    /// from an empty peg.
    pub fn remove_top(&self) -> Peg {
        let (_, rest) = self
            .discs
            .split_last()
            .expect("cannot remove the top disc of an empty peg");
        Peg {
            discs: rest.into(),
        }
    }

    /// A new peg with `disc` placed on top. Legality is checked by the caller.
    pub fn put_top(&self, disc: Disc) -> Peg {
        let mut discs = Vec::with_capacity(self.discs.len() + 1);
        discs.extend_from_slice(&self.discs);
        discs.push(disc);
        Peg {
            discs: discs.into(),
        }
    }

    pub fn top_disc(&self) -> Option<Disc> {
        self.discs.last().copied()
    }

    pub fn num_discs(&self) -> usize {
        self.discs.len()
    }

    pub fn discs_bottom_up(&self) -> impl DoubleEndedIterator<Item = Disc> + '_ {
        self.discs.iter().copied()
    }

    pub fn contains(&self, disc: Disc) -> bool {
        self.discs.contains(&disc)
    }

    pub fn as_slice(&self) -> &[Disc] {
        &self.discs
    }
}
