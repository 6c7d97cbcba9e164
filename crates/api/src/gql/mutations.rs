use async_graphql::{Context, Object, Result};

use crate::gql::error::GqlError;
use crate::gql::types::{SubmitTeamInput, SubmitTeamPayload};
use crate::league::validator::{self, NewTeam, SubmitError};
use crate::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Submit a team for a match. Validation failures (blank identity,
    /// wrong squad size, repeated player) surface as errors and persist
    /// nothing; on accept the whole team is appended to the submission log.
    async fn submit_team(
        &self,
        ctx: &Context<'_>,
        input: SubmitTeamInput,
    ) -> Result<SubmitTeamPayload> {
        let state = ctx.data::<AppState>()?;

        let accepted = validator::submit_team(
            &state.submissions,
            state.squad_size(),
            NewTeam {
                match_id: input.match_id,
                name: input.name,
                mobile: input.mobile,
                players: input.players,
            },
        )
        .map_err(|e| match e {
            SubmitError::Store(err) => async_graphql::Error::from(GqlError::from(err)),
            reject => async_graphql::Error::new(reject.to_string()),
        })?;

        tracing::info!(
            match_id = %accepted.match_id,
            name = %accepted.name,
            players = accepted.player_count,
            "team submitted"
        );

        Ok(SubmitTeamPayload {
            match_id: accepted.match_id,
            name: accepted.name,
            mobile: accepted.mobile,
            player_count: accepted.player_count as i32,
            message: "Team submitted successfully".to_string(),
        })
    }
}
