use std::str::FromStr;

use anyhow::{Context, bail, ensure};

use crate::configuration::Configuration;

/// The demo problem: six discs on four pegs, to be gathered on the first peg.
pub const DEFAULT_PROBLEM: &str = "6 4
4 2 4 3 1 1
1 1 1 1 1 1";

/// A start and a goal arrangement of the same discs.
///
/// The textual form has three lines. The first holds the number of discs and
/// the number of pegs, the other two list for every disc (smallest first) the
/// 1-based peg it sits on, first for the start and then for the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    num_discs: usize,
    num_pegs: usize,
    /// 0-based peg per disc, smallest disc first
    start: Vec<usize>,
    goal: Vec<usize>,
}

impl Problem {
    pub fn parse(input: &str) -> anyhow::Result<Problem> {
        let lines: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let [sizes, start, goal] = lines[..] else {
            bail!(
                "expected 3 lines (sizes, start, goal), found {}",
                lines.len()
            );
        };

        let sizes = parse_numbers(sizes).context("cannot read the number of discs and pegs")?;
        let [num_discs, num_pegs] = sizes[..] else {
            bail!(
                "first line must hold exactly two numbers, found {}",
                sizes.len()
            );
        };
        ensure!(num_pegs > 0, "there must be at least one peg");

        let start = parse_assignment(start, num_discs, num_pegs)
            .context("cannot read the start configuration")?;
        let goal = parse_assignment(goal, num_discs, num_pegs)
            .context("cannot read the goal configuration")?;

        Ok(Problem {
            num_discs,
            num_pegs,
            start,
            goal,
        })
    }

    pub fn default_problem() -> Problem {
        Self::parse(DEFAULT_PROBLEM).expect("the built-in problem is well-formed")
    }

    pub fn num_discs(&self) -> usize {
        self.num_discs
    }

    pub fn num_pegs(&self) -> usize {
        self.num_pegs
    }

    pub fn start(&self) -> Configuration {
        Configuration::from_assignment(&self.start, self.num_pegs)
    }

    pub fn goal(&self) -> Configuration {
        Configuration::from_assignment(&self.goal, self.num_pegs)
    }
}

impl FromStr for Problem {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Problem::parse(s)
    }
}

fn parse_numbers(line: &str) -> anyhow::Result<Vec<usize>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse()
                .with_context(|| format!("'{token}' is not a non-negative number"))
        })
        .collect()
}

/// Read a line of 1-based peg numbers into 0-based peg indices.
fn parse_assignment(line: &str, num_discs: usize, num_pegs: usize) -> anyhow::Result<Vec<usize>> {
    let pegs = parse_numbers(line)?;
    ensure!(
        pegs.len() == num_discs,
        "expected a peg for each of the {num_discs} discs, found {}",
        pegs.len()
    );

    pegs.into_iter()
        .enumerate()
        .map(|(idx, peg)| {
            if !(1..=num_pegs).contains(&peg) {
                bail!(
                    "disc {} is on peg {peg}, but pegs are numbered 1 to {num_pegs}",
                    idx + 1
                );
            }
            Ok(peg - 1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_problem() {
        let problem = Problem::default_problem();
        assert_eq!(problem.num_discs(), 6);
        assert_eq!(problem.num_pegs(), 4);
        assert_eq!(
            problem.start(),
            Configuration::from_stacks([vec![6, 5], vec![2], vec![4], vec![3, 1]])
        );
        assert_eq!(
            problem.goal(),
            Configuration::from_stacks([vec![6, 5, 4, 3, 2, 1], vec![], vec![], vec![]])
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let problem: Problem = "
            3 3
            1 1 1
            3 3 3
        "
        .parse()
        .unwrap();

        assert_eq!(
            problem.start(),
            Configuration::from_stacks([vec![3, 2, 1], vec![], vec![]])
        );
        assert_eq!(
            problem.goal(),
            Configuration::from_stacks([vec![], vec![], vec![3, 2, 1]])
        );
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let err = Problem::parse("0 2\n\n").unwrap_err();
        assert!(err.to_string().contains("expected 3 lines"));
    }

    fn error_chain(input: &str) -> String {
        format!("{:#}", Problem::parse(input).unwrap_err())
    }

    #[test]
    fn test_wrong_line_count() {
        assert!(error_chain("3 3\n1 1 1").contains("found 2"));
        assert!(error_chain("3 3\n1 1 1\n1 1 1\n1 1 1").contains("found 4"));
    }

    #[test]
    fn test_bad_sizes() {
        assert!(error_chain("3\n1 1 1\n1 1 1").contains("exactly two numbers"));
        assert!(error_chain("x 3\n1 1 1\n1 1 1").contains("'x' is not"));
        assert!(error_chain("3 0\n1 1 1\n1 1 1").contains("at least one peg"));
    }

    #[test]
    fn test_bad_assignment() {
        let err = error_chain("3 3\n1 1\n1 1 1");
        assert!(err.contains("start configuration"), "{err}");
        assert!(err.contains("found 2"), "{err}");

        let err = error_chain("3 3\n1 1 1\n1 4 1");
        assert!(err.contains("goal configuration"), "{err}");
        assert!(err.contains("disc 2 is on peg 4"), "{err}");

        let err = error_chain("3 3\n0 1 1\n1 1 1");
        assert!(err.contains("disc 1 is on peg 0"), "{err}");

        let err = error_chain("3 3\n1 -1 1\n1 1 1");
        assert!(err.contains("'-1' is not"), "{err}");
    }

    #[test]
    fn test_parsed_configurations_are_well_formed() {
        let problem = Problem::parse("5 3\n3 1 2 3 1\n2 2 2 1 3").unwrap();
        assert!(problem.start().is_well_formed());
        assert!(problem.goal().is_well_formed());
        assert_eq!(problem.start().num_discs(), 5);
    }
}
