use crate::models::{DisplayRecord, FixtureState};

/// Shown in the VS column when no score applies
pub const NO_SCORE: &str = "-  -";

const NOT_STARTED: &str = "Not Started";
const FINISHED: &str = "Finished";

fn goal(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |g| g.to_string())
}

fn scoreline(state: &FixtureState) -> String {
    format!("{} - {}", goal(state.goals_a), goal(state.goals_b))
}

/// Map a fixture onto its display row.
///
/// Not started games show the kickoff time, finished games the final score
/// and games in play the elapsed minute with the current score. A penalty
/// shootout result is appended to whatever the VS column ends up holding.
pub fn normalize(state: &FixtureState) -> DisplayRecord {
    let mut time = state.status.clone();
    let mut vs = NO_SCORE.to_string();

    if state.status == NOT_STARTED {
        vs = state.kickoff.clone();
    } else if state.status.contains(FINISHED) {
        vs = scoreline(state);
    } else if let Some(elapsed) = state.elapsed {
        time = format!("{}'", elapsed);
        vs = scoreline(state);
    }

    if let Some(penalty_a) = state.penalty_a {
        vs = format!("{} P({}-{})", vs, penalty_a, goal(state.penalty_b));
    }

    DisplayRecord {
        time,
        team_a: state.team_a.clone(),
        vs,
        team_b: state.team_b.clone(),
    }
}
