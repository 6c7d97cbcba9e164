use async_graphql::{InputObject, SimpleObject};

use crate::league;

/// A fixture from the reference catalog.
#[derive(SimpleObject, Clone)]
pub struct Match {
    pub id: String,
    pub team_a: String,
    pub team_b: String,
    /// `"TeamA vs TeamB"`, ready for a match selector.
    pub label: String,
}

/// One selectable player, tagged with the roster it belongs to so clients
/// can render `"Player (Team)"`.
#[derive(SimpleObject, Clone)]
pub struct RosterPlayer {
    pub name: String,
    pub team: String,
}

#[derive(InputObject)]
pub struct SubmitTeamInput {
    pub match_id: String,
    pub name: String,
    pub mobile: String,
    pub players: Vec<String>,
}

#[derive(SimpleObject)]
pub struct SubmitTeamPayload {
    pub match_id: String,
    pub name: String,
    pub mobile: String,
    pub player_count: i32,
    pub message: String,
}

#[derive(SimpleObject, Clone)]
pub struct LeaderboardEntry {
    /// Position in the leaderboard (1-based).
    pub rank: i32,
    pub mobile: String,
    pub total_points: f64,
}

impl From<league::leaderboard::RankedEntry> for LeaderboardEntry {
    fn from(entry: league::leaderboard::RankedEntry) -> Self {
        Self {
            rank: entry.rank as i32,
            mobile: entry.mobile,
            total_points: entry.total_points,
        }
    }
}

#[derive(SimpleObject)]
pub struct Leaderboard {
    /// `false` until a results file has been uploaded.
    pub available: bool,
    pub entries: Vec<LeaderboardEntry>,
    /// Top entry, when the board is non-empty.
    pub winner: Option<LeaderboardEntry>,
}

#[derive(SimpleObject, Clone)]
pub struct TeamSummary {
    /// 1-based display sequence.
    pub seq: i32,
    pub match_label: Option<String>,
    pub name: String,
    pub mobile: String,
    pub players: String,
}

impl From<league::roster::TeamSummary> for TeamSummary {
    fn from(summary: league::roster::TeamSummary) -> Self {
        Self {
            seq: summary.seq as i32,
            match_label: summary.match_label,
            name: summary.name,
            mobile: summary.mobile,
            players: summary.players,
        }
    }
}

#[derive(SimpleObject)]
pub struct TeamsView {
    /// `false` until the first team has been submitted.
    pub available: bool,
    pub teams: Vec<TeamSummary>,
}
