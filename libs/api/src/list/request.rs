use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};
use utoipa::{IntoParams, ToSchema};

#[serde_as]
#[derive(Deserialize, ToSchema, IntoParams)]
pub struct ListParam {
    /// Number of posts to ask for, 5 when omitted.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,
}
