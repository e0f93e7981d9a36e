use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::{Disc, peg::Peg};

/// A snapshot of all pegs, together with the path that led to it.
///
/// Identity is structural over the pegs only. `dist` and `parent_move` are
/// bookkeeping of the search and two configurations reached by different
/// move sequences compare equal.
pub struct Configuration {
    pegs: Box<[Peg]>,
    dist: u32,
    parent_move: Option<Move>,
}

/// Acts as a token, proving that the move is legal in the configuration it
/// was generated from. Moves can only be obtained from
/// [`Configuration::valid_moves`] and keep their origin alive, so the whole
/// path of a configuration can be walked back to the root.
///
/// Peg indices are 0-based. The `Display` output is 1-based.
#[derive(Clone)]
pub struct Move {
    origin: Arc<Configuration>,
    from: usize,
    to: usize,
}

impl Configuration {
    /// A root configuration, i.e. with distance zero and no parent.
    pub fn new(pegs: impl IntoIterator<Item = Peg>) -> Self {
        Configuration {
            pegs: pegs.into_iter().collect(),
            dist: 0,
            parent_move: None,
        }
    }

    /// Build a root configuration from bottom-up disc lists, one per peg.
    pub fn from_stacks<S, I>(stacks: S) -> Self
    where
        S: IntoIterator<Item = I>,
        I: IntoIterator<Item = Disc>,
    {
        Self::new(stacks.into_iter().map(Peg::new))
    }

    /// Build a root configuration where disc `i + 1` sits on peg
    /// `assignment[i]` (0-based). Larger discs go in first so every stack is
    /// ordered.
    ///
    /// Panics if an entry is not below `num_pegs`.
    pub fn from_assignment(assignment: &[usize], num_pegs: usize) -> Self {
        let mut stacks = vec![Vec::new(); num_pegs];
        for (idx, &peg) in assignment.iter().enumerate().rev() {
            stacks[peg].push(idx as Disc + 1);
        }
        Self::from_stacks(stacks)
    }

    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }

    pub fn num_pegs(&self) -> usize {
        self.pegs.len()
    }

    /// Total number of discs over all pegs
    pub fn num_discs(&self) -> usize {
        self.pegs.iter().map(Peg::num_discs).sum()
    }

    /// Number of moves from the root of the search to this configuration
    pub fn dist(&self) -> u32 {
        self.dist
    }

    pub fn parent_move(&self) -> Option<&Move> {
        self.parent_move.as_ref()
    }

    /// Check if the top disc of `from` may be placed onto `to`.
    pub fn can_move(&self, from: usize, to: usize) -> bool {
        if from == to {
            return false;
        }
        let Some(disc) = self.pegs[from].top_disc() else {
            return false;
        };
        match self.pegs[to].top_disc() {
            None => true,
            Some(below) => disc < below,
        }
    }

    /// All legal moves, ordered by source peg and then destination peg.
    pub fn valid_moves(self: &Arc<Self>) -> impl Iterator<Item = Move> + '_ {
        let n = self.pegs.len();
        (0..n)
            .flat_map(move |from| (0..n).map(move |to| (from, to)))
            .filter(move |&(from, to)| self.can_move(from, to))
            .map(move |(from, to)| Move {
                origin: Arc::clone(self),
                from,
                to,
            })
    }

    /// Apply a move that was generated by this very configuration.
    ///
    /// Panics if the move belongs to another configuration, even a
    /// structurally equal one.
    pub fn apply_move(&self, mv: &Move) -> Configuration {
        assert!(
            std::ptr::eq(Arc::as_ptr(&mv.origin), self),
            "move {mv:?} was not generated by this configuration"
        );

        let old_from = &self.pegs[mv.from];
        let old_to = &self.pegs[mv.to];
        let disc = mv.disc();

        let mut pegs = self.pegs.clone();
        pegs[mv.from] = old_from.remove_top();
        pegs[mv.to] = old_to.put_top(disc);

        Configuration {
            pegs,
            dist: self.dist + 1,
            parent_move: Some(mv.clone()),
        }
    }

    /// The moves leading from the root to this configuration, in the order
    /// they were taken.
    pub fn path(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.dist as usize);
        let mut current = self.parent_move.as_ref();
        while let Some(mv) = current {
            moves.push(mv.clone());
            current = mv.origin.parent_move.as_ref();
        }
        moves.reverse();
        moves
    }

    /// Every disc `1..=num_discs` appears exactly once and every peg is
    /// strictly decreasing from the bottom.
    pub fn is_well_formed(&self) -> bool {
        let num_discs = self.num_discs();
        let mut seen = vec![false; num_discs];
        for peg in self.pegs.iter() {
            let discs = peg.as_slice();
            if discs.windows(2).any(|w| w[0] <= w[1]) {
                return false;
            }
            for &disc in discs {
                let idx = disc as usize;
                if idx == 0 || idx > num_discs || seen[idx - 1] {
                    return false;
                }
                seen[idx - 1] = true;
            }
        }
        true
    }
}

// Dropping the last handle on a deep configuration would otherwise free its
// ancestors recursively, one stack frame per move.
impl Drop for Configuration {
    fn drop(&mut self) {
        let mut next = self.parent_move.take();
        while let Some(mv) = next {
            next = match Arc::try_unwrap(mv.origin) {
                Ok(mut parent) => parent.parent_move.take(),
                Err(_) => None,
            };
        }
    }
}

impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        self.pegs == other.pegs
    }
}

impl Eq for Configuration {}

impl Hash for Configuration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pegs.hash(state);
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field(
                "pegs",
                &self.pegs.iter().map(Peg::as_slice).collect::<Vec<_>>(),
            )
            .field("dist", &self.dist)
            .finish()
    }
}

impl Move {
    /// Source peg, 0-based
    pub fn from(&self) -> usize {
        self.from
    }

    /// Destination peg, 0-based
    pub fn to(&self) -> usize {
        self.to
    }

    /// The disc that this move carries.
    pub fn disc(&self) -> Disc {
        self.origin.pegs[self.from]
            .top_disc()
            .expect("moves are only generated for non-empty pegs")
    }

    /// The configuration this move was generated from.
    pub fn origin(&self) -> &Configuration {
        &self.origin
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Move")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move {} to {}", self.from + 1, self.to + 1)
    }
}
