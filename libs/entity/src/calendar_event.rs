use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};

#[serde_as]
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct CalendarEvent {
    pub id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub title: String,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_null_title_defaults_to_empty() {
        // Act
        let event = serde_json::from_str::<CalendarEvent>(
            r#"{
                "id": 4,
                "title": null,
                "start_time": "2024-05-01T12:00:00Z",
                "end_time": null
            }"#,
        )
        .unwrap();

        // Assert
        assert_eq!(event.title, "");
        assert_eq!(event.end_time, None);
    }
}
