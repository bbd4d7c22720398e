use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};
use utoipa::{IntoParams, ToSchema};

#[serde_as]
#[derive(Deserialize, ToSchema, IntoParams)]
pub struct CalendarParam {
    /// month, week, day, agenda or list.
    #[serde(default)]
    pub mode: Option<String>,
    /// Abbreviated weekday headers.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub small: Option<bool>,
}
