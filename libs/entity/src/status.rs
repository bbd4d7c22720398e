use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct StatusEntry {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Status of the most recent entry. History arrives oldest first, so the
/// last element wins. Entries without a status are skipped.
pub fn latest_status(history: &[StatusEntry]) -> Option<&str> {
    history.iter().rev().find_map(|entry| entry.status.as_deref())
}

#[cfg(test)]
mod test {
    use super::*;

    fn entry(status: &str) -> StatusEntry {
        StatusEntry {
            id: None,
            status: Some(status.to_string()),
        }
    }

    #[test]
    fn test_latest_status_takes_last_entry() {
        // Arrange
        let history = vec![entry("Opened"), entry("Closing"), entry("Closed")];

        // Act
        let status = latest_status(&history);

        // Assert
        assert_eq!(status, Some("Closed"));
    }

    #[test]
    fn test_latest_status_of_empty_history() {
        assert_eq!(latest_status(&[]), None);
    }

    #[test]
    fn test_null_status_is_skipped() {
        // Arrange
        let history = serde_json::from_str::<Vec<StatusEntry>>(
            r#"[{"id": 1, "status": "Opened"}, {"id": 2, "status": null}]"#,
        )
        .unwrap();

        // Act
        let status = latest_status(&history);

        // Assert
        assert_eq!(status, Some("Opened"));
    }
}
