use async_graphql::{Context, Object, Result};
use chrono::{DateTime, Utc};

use crate::gql::error::GqlError;
use crate::gql::types::{Leaderboard, Match, RosterPlayer, TeamSummary, TeamsView};
use crate::league::{leaderboard, roster};
use crate::state::AppState;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Current server time (UTC).
    async fn server_time(&self) -> DateTime<Utc> {
        Utc::now()
    }

    /// All matches from the reference catalog, for the match selector.
    async fn matches(&self, ctx: &Context<'_>) -> Result<Vec<Match>> {
        let state = ctx.data::<AppState>()?;
        Ok(state
            .reference()
            .matches()
            .iter()
            .map(|m| Match {
                id: m.match_id.clone(),
                team_a: m.team_a.clone(),
                team_b: m.team_b.clone(),
                label: m.label(),
            })
            .collect())
    }

    /// The selectable players for a match: both rosters in order. This list
    /// is the choice set a submission is expected to draw from.
    async fn match_players(
        &self,
        ctx: &Context<'_>,
        match_id: String,
    ) -> Result<Vec<RosterPlayer>> {
        let state = ctx.data::<AppState>()?;
        let reference = state.reference();

        let m = reference
            .find_match(&match_id)
            .ok_or_else(|| GqlError::new(format!("Unknown match id: {match_id}")))?;

        let mut players = Vec::new();
        for team in [&m.team_a, &m.team_b] {
            let roster = reference
                .roster(team)
                .ok_or_else(|| GqlError::new(format!("No roster for team: {team}")))?;
            players.extend(roster.iter().map(|name| RosterPlayer {
                name: name.clone(),
                team: team.clone(),
            }));
        }
        Ok(players)
    }

    /// Ranked leaderboard for a match, recomputed from the results log on
    /// every call. `available` is false while no results file exists.
    async fn leaderboard(&self, ctx: &Context<'_>, match_id: String) -> Result<Leaderboard> {
        let state = ctx.data::<AppState>()?;

        let Some(rows) = state.results.all_rows().map_err(GqlError::from)? else {
            return Ok(Leaderboard {
                available: false,
                entries: Vec::new(),
                winner: None,
            });
        };

        let entries: Vec<_> = leaderboard::compute(&match_id, &rows)
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(Leaderboard {
            available: true,
            winner: entries.first().cloned(),
            entries,
        })
    }

    /// Match ids that appear in the results log, for the leaderboard's
    /// match selector.
    async fn result_match_ids(&self, ctx: &Context<'_>) -> Result<Vec<String>> {
        let state = ctx.data::<AppState>()?;

        Ok(match state.results.all_rows().map_err(GqlError::from)? {
            Some(rows) => leaderboard::match_ids(&rows),
            None => Vec::new(),
        })
    }

    /// All submitted teams, one row per logical team. `available` is false
    /// while nothing has been submitted.
    async fn teams(&self, ctx: &Context<'_>) -> Result<TeamsView> {
        let state = ctx.data::<AppState>()?;

        let Some(rows) = state.submissions.all_rows().map_err(GqlError::from)? else {
            return Ok(TeamsView {
                available: false,
                teams: Vec::new(),
            });
        };

        let teams: Vec<TeamSummary> = roster::summarize(&rows, state.reference())
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(TeamsView {
            available: true,
            teams,
        })
    }
}
