//! Best-first search for the generalized Tower of Hanoi: any number of pegs,
//! any start and goal arrangement, moves between any two pegs.

pub mod configuration;
pub mod heuristic;
pub mod peg;
pub mod problem;
pub mod solver;

/// Size of a disc. 1 is the smallest disc.
pub type Disc = u32;

pub use configuration::{Configuration, Move};
pub use peg::Peg;
pub use problem::{DEFAULT_PROBLEM, Problem};
pub use solver::{DEFAULT_MAX_STEPS, SearchLimits, SearchStats, SolveResult, Solver, solve};
