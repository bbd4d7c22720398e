use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

#[serde_as]
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct ReferendumVote {
    pub id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub voter: String,
    pub referendum_id: i64,
    pub decision: Decision,
    /// Planck-denominated balance, kept as text to avoid overflow.
    #[serde(default)]
    pub balance: Option<String>,
    #[serde(default)]
    pub lock_period: Option<i64>,
}

#[derive(
    Debug,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Decision {
    Aye,
    Nay,
}

impl ReferendumVote {
    /// Conviction multiplier label; a zero lock period votes at 0.1x.
    pub fn conviction(&self) -> String {
        match self.lock_period.unwrap_or(0) {
            0 => "0.1x".to_string(),
            n => format!("{}x", n),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deserialize_vote() {
        // Arrange
        let json = r#"{
            "id": 1,
            "voter": "addr",
            "referendum_id": 12,
            "decision": "aye",
            "balance": "10000000000",
            "lock_period": 3
        }"#;

        // Act
        let vote = serde_json::from_str::<ReferendumVote>(json).unwrap();

        // Assert
        assert_eq!(vote.decision, Decision::Aye);
        assert_eq!(vote.decision.to_string(), "aye");
        assert_eq!(vote.conviction(), "3x");
    }

    #[test]
    fn test_conviction_without_lock() {
        // Arrange
        let vote = ReferendumVote {
            id: 1,
            voter: "addr".to_string(),
            referendum_id: 1,
            decision: Decision::Nay,
            balance: None,
            lock_period: None,
        };

        // Act & Assert
        assert_eq!(vote.conviction(), "0.1x");
    }
}
