use std::str::FromStr;

use axum::extract::{Query, State};
use chrono::Utc;
use query::{
    documents::{CalendarEvents, CalendarVariables},
    QueryHandle,
};
use view::calendar::{CalendarAdapter, CalendarView, DisplayMode};

pub mod request;

use crate::{ApiError, ApiResponse, ApiState, Screen};

use self::request::CalendarParam;

/// Chain events for the current week
#[utoipa::path(
    get,
    path = "/calendar",
    responses(
        (status = 200, description = "Calendar tiles, headers and toolbar", body = CalendarView),
        (status = 400, description = "Unknown display mode"),
        (status = 502, description = "Query failed")
    ),
    params(
        CalendarParam
    )
)]
pub async fn get_calendar(
    State(state): State<ApiState>,
    Query(params): Query<CalendarParam>,
) -> ApiResponse<Screen<CalendarView>> {
    let mode = match params.mode.as_deref() {
        Some(mode) => DisplayMode::from_str(mode).map_err(|_| {
            ApiError::ClientError(format!("unknown display mode: {}", mode))
        })?,
        None => DisplayMode::default(),
    };

    let mut adapter: CalendarAdapter = CalendarAdapter::default();
    adapter.set_mode(mode);
    adapter.set_small(params.small.unwrap_or(false));

    let handle = QueryHandle::<CalendarEvents>::new(
        state.client.clone(),
        CalendarVariables {
            network: state.config.network.clone(),
        },
    );

    let fetched = adapter.mount(&handle).await;

    Ok(fetched.map(|_| adapter.render(Utc::now())).into())
}
