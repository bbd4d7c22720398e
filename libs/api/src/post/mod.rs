use axum::extract::{Path, State};
use query::{
    documents::{PostById, PostVariables},
    QueryHandle,
};
use view::{
    detail::{fetch_detail, render_detail, DetailView},
    route::coerce_id,
};

use crate::{ApiState, Screen};

/// A post with its on-chain summary
#[utoipa::path(
    get,
    path = "/posts/{id}",
    responses(
        (status = 200, description = "Post detail or the not-found card", body = DetailView),
        (status = 502, description = "Query failed")
    ),
    params(
        ("id", description = "post id, 0 when not numeric"),
    )
)]
pub async fn get_post(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Screen<DetailView> {
    post_screen(&state, coerce_id(Some(&id))).await
}

/// The post route without an id
#[utoipa::path(
    get,
    path = "/posts",
    responses(
        (status = 200, description = "Post 0 or the not-found card", body = DetailView),
        (status = 502, description = "Query failed")
    )
)]
pub async fn get_post_without_id(
    State(state): State<ApiState>,
) -> Screen<DetailView> {
    post_screen(&state, coerce_id(None)).await
}

async fn post_screen(state: &ApiState, id: i64) -> Screen<DetailView> {
    fetch_detail(&state.client, id)
        .await
        .map(|screen| screen.view)
        .into()
}

/// Re-issues the post query, bypassing cached results
#[utoipa::path(
    post,
    path = "/posts/{id}/refetch",
    responses(
        (status = 200, description = "Fresh post detail or the not-found card", body = DetailView),
        (status = 502, description = "Query failed")
    ),
    params(
        ("id", description = "post id, 0 when not numeric"),
    )
)]
pub async fn refetch_post(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Screen<DetailView> {
    let id = coerce_id(Some(&id));
    let handle =
        QueryHandle::<PostById>::new(state.client.clone(), PostVariables { id });

    handle
        .refetch()
        .await
        .map(|response| render_detail(response, handle.clone()).view)
        .into()
}
