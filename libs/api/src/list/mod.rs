use axum::extract::{Query, State};
use query::documents::ListVariables;
use view::list::{fetch_list, ListKind, ListView};

pub mod request;

use crate::{ApiState, Screen};

use self::request::ListParam;

async fn get_list(
    state: &ApiState,
    kind: ListKind,
    params: ListParam,
) -> Screen<ListView> {
    let lists = &state.config.lists;
    let post_topic = match kind {
        ListKind::Tips => lists.tips_topic,
        ListKind::ChildBounties => lists.child_bounties_topic,
        ListKind::Referenda => lists.referenda_topic,
        ListKind::Proposals => lists.proposals_topic,
    };

    let variables = ListVariables {
        post_type: lists.post_type,
        post_topic,
        limit: params.limit.unwrap_or(lists.limit),
    };

    fetch_list(&state.client, kind, variables).await.into()
}

/// Latest tips
#[utoipa::path(
    get,
    path = "/tips",
    responses(
        (status = 200, description = "Tip cards or the empty-state card", body = ListView),
        (status = 502, description = "Query failed")
    ),
    params(
        ListParam
    )
)]
pub async fn get_tips(
    State(state): State<ApiState>,
    Query(params): Query<ListParam>,
) -> Screen<ListView> {
    get_list(&state, ListKind::Tips, params).await
}

/// Latest child bounties
#[utoipa::path(
    get,
    path = "/child-bounties",
    responses(
        (status = 200, description = "Child bounty cards or the empty-state card", body = ListView),
        (status = 502, description = "Query failed")
    ),
    params(
        ListParam
    )
)]
pub async fn get_child_bounties(
    State(state): State<ApiState>,
    Query(params): Query<ListParam>,
) -> Screen<ListView> {
    get_list(&state, ListKind::ChildBounties, params).await
}

/// Latest referenda
#[utoipa::path(
    get,
    path = "/referenda",
    responses(
        (status = 200, description = "Referendum cards or the empty-state card", body = ListView),
        (status = 502, description = "Query failed")
    ),
    params(
        ListParam
    )
)]
pub async fn get_referenda(
    State(state): State<ApiState>,
    Query(params): Query<ListParam>,
) -> Screen<ListView> {
    get_list(&state, ListKind::Referenda, params).await
}

/// Latest democracy proposals
#[utoipa::path(
    get,
    path = "/proposals",
    responses(
        (status = 200, description = "Proposal cards or the empty-state card", body = ListView),
        (status = 502, description = "Query failed")
    ),
    params(
        ListParam
    )
)]
pub async fn get_proposals(
    State(state): State<ApiState>,
    Query(params): Query<ListParam>,
) -> Screen<ListView> {
    get_list(&state, ListKind::Proposals, params).await
}
