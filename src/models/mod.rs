use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One row of output: a single fixture ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct DisplayRecord {
    #[tabled(rename = "TIME")]
    pub time: String,
    #[tabled(rename = "TEAM_A")]
    pub team_a: String,
    #[tabled(rename = "VS")]
    pub vs: String,
    #[tabled(rename = "TEAM_B")]
    pub team_b: String,
}

/// The parts of a fixture the normalizer looks at, flattened out of the API payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureState {
    pub team_a: String,
    pub team_b: String,
    pub goals_a: Option<u32>,
    pub goals_b: Option<u32>,
    pub elapsed: Option<u32>,
    pub status: String,
    pub kickoff: String, // HH:MM in the requested timezone
    pub penalty_a: Option<u32>,
    pub penalty_b: Option<u32>,
}

/// Which set of fixtures to look up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseCase {
    /// Games in play in the top competitions
    Live,
    /// Today's games in the "today's top" competitions
    TodaysTop,
    /// Today's games in every competition of one country
    Country(String),
}
