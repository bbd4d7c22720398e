use axum::extract::{Path, State};
use view::{
    detail::{fetch_vote, VoteView},
    route::coerce_id,
};

use crate::{ApiState, Screen};

/// An account's vote on a referendum
#[utoipa::path(
    get,
    path = "/referenda/{id}/votes/{voter}",
    responses(
        (status = 200, description = "The vote or the not-found card", body = VoteView),
        (status = 502, description = "Query failed")
    ),
    params(
        ("id", description = "referendum id, 0 when not numeric"),
        ("voter", description = "voter address"),
    )
)]
pub async fn get_vote(
    State(state): State<ApiState>,
    Path((id, voter)): Path<(String, String)>,
) -> Screen<VoteView> {
    fetch_vote(&state.client, voter, coerce_id(Some(&id)))
        .await
        .into()
}
