use colored::Colorize;
use hanoi_common::{Configuration, Move, SolveResult};

/// The textual answer for a search result, one line per move.
pub fn render_result(result: &SolveResult) -> String {
    match result {
        SolveResult::Solved(moves) => moves.iter().map(|mv| format!("{mv}\n")).collect(),
        SolveResult::Unsolvable => "No solution found\n".to_string(),
        SolveResult::TimedOut => "No solution found (search limit reached)\n".to_string(),
    }
}

/// Draw all pegs of a configuration, one line per peg, bottom disc first.
///
/// If `last_move` is given, the disc it moved is highlighted and the peg it
/// came from is marked.
pub fn draw(cfg: &Configuration, last_move: Option<&Move>) -> String {
    let mut out = String::new();
    for (idx, peg) in cfg.pegs().iter().enumerate() {
        let marker = match last_move {
            Some(mv) if mv.from() == idx => "<".on_blue().to_string(),
            _ => " ".to_string(),
        };
        out.push_str(&format!("{:>3} |{marker}", idx + 1));

        for disc in peg.discs_bottom_up() {
            let label = disc.to_string();
            let highlight =
                last_move.is_some_and(|mv| mv.to() == idx && peg.top_disc() == Some(disc));
            if highlight {
                out.push_str(&format!(" {}", label.on_red()));
            } else {
                out.push_str(&format!(" {label}"));
            }
        }
        out.push('\n');
    }
    out
}

/// Draw the start and every configuration along the solution.
pub fn draw_solution(start: &Configuration, moves: &[Move]) -> String {
    let mut out = draw(start, None);
    for mv in moves {
        let next = mv.origin().apply_move(mv);
        out.push('\n');
        out.push_str(&format!("{mv}\n"));
        out.push_str(&draw(&next, Some(mv)));
    }
    out
}
