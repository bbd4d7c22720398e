//! Calendar of chain events.
//!
//! Raw events are normalized into `{id, title, start, end}` and rendered
//! through a [`Localizer`]. The display mode only decides whether event tiles
//! carry a time label; changing it never touches the backend.

use chrono::{format::StrftimeItems, DateTime, Datelike, Duration, Utc};
use entity::prelude::*;
use query::{
    documents::{CalendarEvents, CalendarEventsResponse},
    FetchState, QueryHandle,
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::info;
use utoipa::ToSchema;

/// Label of the time gutter. Event times are always shown in UTC.
pub static TIMEZONE_LABEL: &str = "UTC";

const TILE_TITLE_LEN: usize = 24;

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEvent {
    pub id: i64,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Events without an end time end when they start.
pub fn normalize(event: &CalendarEventEntity) -> NormalizedEvent {
    NormalizedEvent {
        id: event.id,
        title: event.title.clone(),
        start: event.start_time,
        end: event.end_time.unwrap_or(event.start_time),
    }
}

#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ToSchema,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Month,
    Week,
    Day,
    Agenda,
    List,
}

pub trait Localizer {
    fn format(&self, date: &DateTime<Utc>, pattern: &str) -> String;
}

/// strftime-style patterns. An invalid pattern falls back to RFC 3339.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChronoLocalizer;

impl Localizer for ChronoLocalizer {
    fn format(&self, date: &DateTime<Utc>, pattern: &str) -> String {
        let items = StrftimeItems::new(pattern);
        if items
            .clone()
            .any(|item| matches!(item, chrono::format::Item::Error))
        {
            return date.to_rfc3339();
        }
        date.format_with_items(items).to_string()
    }
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct EventTile {
    pub id: i64,
    /// Compact title shown in the cell.
    pub title: String,
    /// Only set in month view.
    pub time_label: Option<String>,
    /// Full title revealed on click.
    pub popup: String,
}

pub fn render_event(
    event: &NormalizedEvent,
    mode: DisplayMode,
    localizer: &impl Localizer,
) -> EventTile {
    let time_label = match mode {
        DisplayMode::Month => Some(localizer.format(&event.start, "%H:%M")),
        _ => None,
    };

    EventTile {
        id: event.id,
        title: compact_title(&event.title),
        time_label,
        popup: event.title.clone(),
    }
}

fn compact_title(title: &str) -> String {
    if title.chars().count() <= TILE_TITLE_LEN {
        return title.to_string();
    }
    let mut compact = title.chars().take(TILE_TITLE_LEN).collect::<String>();
    compact.push_str("...");
    compact
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderProps {
    pub date: DateTime<Utc>,
    pub small: bool,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct WeekHeader {
    pub weekday: String,
    pub day: String,
    pub gutter: String,
}

pub fn render_header(props: HeaderProps, localizer: &impl Localizer) -> WeekHeader {
    let pattern = if props.small { "%a" } else { "%A" };

    WeekHeader {
        weekday: localizer.format(&props.date, pattern),
        day: localizer.format(&props.date, "%d"),
        gutter: TIMEZONE_LABEL.to_string(),
    }
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Toolbar {
    pub label: String,
    pub modes: Vec<DisplayMode>,
    pub active: DisplayMode,
}

pub fn render_toolbar(
    date: DateTime<Utc>,
    mode: DisplayMode,
    localizer: &impl Localizer,
) -> Toolbar {
    let label = match mode {
        DisplayMode::Month => localizer.format(&date, "%B %Y"),
        DisplayMode::Day => localizer.format(&date, "%A, %d %B %Y"),
        DisplayMode::Week | DisplayMode::Agenda | DisplayMode::List => {
            format!("Week of {}", localizer.format(&week_start(date), "%d %B %Y"))
        }
    };

    Toolbar {
        label,
        modes: DisplayMode::iter().collect(),
        active: mode,
    }
}

fn week_start(date: DateTime<Utc>) -> DateTime<Utc> {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct CalendarView {
    pub mode: DisplayMode,
    pub toolbar: Toolbar,
    pub headers: Vec<WeekHeader>,
    pub tiles: Vec<EventTile>,
}

pub type EmitSink = Box<dyn Fn(&[NormalizedEvent]) + Send + Sync>;

/// Local view state of the calendar screen.
pub struct CalendarAdapter<L: Localizer = ChronoLocalizer> {
    events: Vec<NormalizedEvent>,
    mode: DisplayMode,
    small: bool,
    emit: Option<EmitSink>,
    localizer: L,
}

impl Default for CalendarAdapter<ChronoLocalizer> {
    fn default() -> Self {
        Self::new(ChronoLocalizer)
    }
}

impl<L: Localizer> CalendarAdapter<L> {
    pub fn new(localizer: L) -> Self {
        Self {
            events: Vec::new(),
            mode: DisplayMode::default(),
            small: false,
            emit: None,
            localizer,
        }
    }

    /// Publishes every refreshed event list to `sink`.
    pub fn with_emit(mut self, sink: EmitSink) -> Self {
        self.emit = Some(sink);
        self
    }

    pub fn events(&self) -> &[NormalizedEvent] {
        &self.events
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    pub fn set_small(&mut self, small: bool) {
        self.small = small;
    }

    /// Refetches once so a fresh navigation never shows stale events.
    pub async fn mount(
        &mut self,
        handle: &QueryHandle<CalendarEvents>,
    ) -> FetchState<()> {
        let state = handle.refetch().await;
        state.map(|response| self.on_data(&response))
    }

    pub fn on_data(&mut self, response: &CalendarEventsResponse) {
        self.events = response.calender_events.iter().map(normalize).collect();

        info!(task = "calendar refresh", events = self.events.len());

        if let Some(emit) = &self.emit {
            emit(&self.events);
        }
    }

    pub fn render(&self, today: DateTime<Utc>) -> CalendarView {
        let start = week_start(today);
        let headers = (0..7)
            .map(|offset| {
                render_header(
                    HeaderProps {
                        date: start + Duration::days(offset),
                        small: self.small,
                    },
                    &self.localizer,
                )
            })
            .collect();

        let tiles = self
            .events
            .iter()
            .map(|event| render_event(event, self.mode, &self.localizer))
            .collect();

        CalendarView {
            mode: self.mode,
            toolbar: render_toolbar(today, self.mode, &self.localizer),
            headers,
            tiles,
        }
    }
}
