use std::{
    cmp::Ordering,
    collections::BinaryHeap,
    sync::Arc,
    time::{Duration, Instant},
};

use rustc_hash::FxHashSet;

use crate::configuration::{Configuration, Move};

/// Move budget used when the caller doesn't pick one.
pub const DEFAULT_MAX_STEPS: u32 = 7;

/// Bounds on a single search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Configurations whose distance plus lower bound exceeds this are
    /// never queued.
    pub max_steps: u32,
    /// Stop after this many configurations have been expanded.
    pub max_expansions: Option<u64>,
    /// Stop once this much wall-clock time has passed.
    pub time_limit: Option<Duration>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            max_steps: DEFAULT_MAX_STEPS,
            max_expansions: None,
            time_limit: None,
        }
    }
}

impl SearchLimits {
    pub fn with_max_steps(max_steps: u32) -> Self {
        SearchLimits {
            max_steps,
            ..Default::default()
        }
    }
}

#[derive(Debug)]
pub enum SolveResult {
    /// Moves in the order they have to be taken, possibly empty.
    Solved(Vec<Move>),
    /// The goal can't be reached within the move budget.
    Unsolvable,
    /// The expansion or time limit was hit before the search finished.
    TimedOut,
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: u64,
    pub generated: u64,
    pub skipped_visited: u64,
    pub pruned_budget: u64,
    pub max_frontier: usize,
}

/// Frontier entry. The heap is a max-heap, so the ordering is reversed to pop
/// the lowest estimate first, and among equal estimates the oldest entry.
struct FrontierEntry {
    estimate: u32,
    seq: u64,
    cfg: Arc<Configuration>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.estimate, other.seq).cmp(&(self.estimate, self.seq))
    }
}

/// Best-first search over configurations, ordered by distance from the start
/// plus the lower bound to the goal.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    limits: SearchLimits,
}

impl Solver {
    pub fn new(limits: SearchLimits) -> Self {
        Solver { limits }
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Search for a sequence of moves from `start` to `goal`.
    ///
    /// The first goal configuration that is generated within the move budget
    /// is returned. Because the lower bound never overestimates, pruning by
    /// the budget never discards a solution that fits into it.
    ///
    /// Panics if `start` and `goal` differ in their number of pegs or discs.
    pub fn solve(&self, start: Configuration, goal: &Configuration) -> (SolveResult, SearchStats) {
        assert_eq!(
            start.num_pegs(),
            goal.num_pegs(),
            "start and goal need the same number of pegs"
        );
        assert_eq!(
            start.num_discs(),
            goal.num_discs(),
            "start and goal need the same number of discs"
        );

        let mut stats = SearchStats::default();

        if start == *goal {
            log::info!("start is already the goal");
            return (SolveResult::Solved(vec![]), stats);
        }

        let max_steps = self.limits.max_steps;
        let deadline = self.limits.time_limit.map(|limit| Instant::now() + limit);

        let mut frontier = BinaryHeap::new();
        let mut visited: FxHashSet<Arc<Configuration>> = FxHashSet::default();
        let mut seq = 0;

        // no bound has been computed for the start, it goes in by distance alone
        frontier.push(FrontierEntry {
            estimate: start.dist(),
            seq,
            cfg: Arc::new(start),
        });

        while let Some(FrontierEntry { estimate, cfg, .. }) = frontier.pop() {
            if self.out_of_budget(&stats, deadline) {
                log::info!("search stopped by its limits: {stats:?}");
                return (SolveResult::TimedOut, stats);
            }

            log::trace!("expanding {cfg:?} with estimate {estimate}");
            stats.expanded += 1;
            visited.insert(Arc::clone(&cfg));

            for mv in cfg.valid_moves() {
                let next = cfg.apply_move(&mv);
                stats.generated += 1;

                if visited.contains(&next) {
                    stats.skipped_visited += 1;
                    continue;
                }

                let estimate = next.dist() + next.lower_bound(goal);
                if estimate > max_steps {
                    stats.pruned_budget += 1;
                    continue;
                }

                if next == *goal {
                    let solution = next.path();
                    log::info!("found a solution with {} moves", solution.len());
                    log::debug!("search stats: {stats:?}");
                    return (SolveResult::Solved(solution), stats);
                }

                seq += 1;
                frontier.push(FrontierEntry {
                    estimate,
                    seq,
                    cfg: Arc::new(next),
                });
            }

            stats.max_frontier = stats.max_frontier.max(frontier.len());
        }

        log::info!("no solution within {max_steps} moves");
        log::debug!("search stats: {stats:?}");
        (SolveResult::Unsolvable, stats)
    }

    fn out_of_budget(&self, stats: &SearchStats, deadline: Option<Instant>) -> bool {
        let too_many = self
            .limits
            .max_expansions
            .is_some_and(|max| stats.expanded >= max);
        let too_late = deadline.is_some_and(|deadline| Instant::now() >= deadline);
        too_many || too_late
    }
}

/// Find a sequence of moves transforming `start` into `goal` that takes at
/// most `max_steps` moves, or `None` if the search finds none.
pub fn solve(start: Configuration, goal: &Configuration, max_steps: u32) -> Option<Vec<Move>> {
    let solver = Solver::new(SearchLimits::with_max_steps(max_steps));
    match solver.solve(start, goal).0 {
        SolveResult::Solved(moves) => Some(moves),
        SolveResult::Unsolvable | SolveResult::TimedOut => None,
    }
}
