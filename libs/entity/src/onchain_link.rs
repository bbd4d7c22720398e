use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::status::{latest_status, StatusEntry};

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone)]
pub struct TipRecord {
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "tipStatus", default)]
    pub tip_status: Vec<StatusEntry>,
}

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone)]
pub struct ChildBountyRecord {
    #[serde(default)]
    pub value: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "childBountyStatus", default)]
    pub child_bounty_status: Vec<StatusEntry>,
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone)]
pub struct Preimage {
    #[serde(default)]
    pub method: Option<String>,
}

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone)]
pub struct ReferendumRecord {
    /// Block number at which voting ends.
    #[serde(default)]
    pub end: Option<i64>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "referendumStatus", default)]
    pub referendum_status: Vec<StatusEntry>,
    #[serde(default)]
    pub preimage: Option<Preimage>,
}

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone)]
pub struct ProposalRecord {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "proposalStatus", default)]
    pub proposal_status: Vec<StatusEntry>,
    #[serde(default)]
    pub preimage: Option<Preimage>,
}

/// The single on-chain entity a post is linked to.
#[derive(Serialize, Debug, Default, PartialEq, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OnchainEntity {
    /// Always non-empty.
    Tip { records: Vec<TipRecord> },
    ChildBounty {
        id: i64,
        record: Option<ChildBountyRecord>,
    },
    Referendum {
        id: i64,
        record: Option<ReferendumRecord>,
    },
    Proposal {
        id: i64,
        record: Option<ProposalRecord>,
    },
    #[default]
    None,
}

impl OnchainEntity {
    /// Identifier used to build the detail-page link.
    pub fn onchain_id(&self) -> Option<String> {
        match self {
            OnchainEntity::Tip { records } => {
                records.first().and_then(|tip| tip.hash.clone())
            }
            OnchainEntity::ChildBounty { id, .. }
            | OnchainEntity::Referendum { id, .. }
            | OnchainEntity::Proposal { id, .. } => Some(id.to_string()),
            OnchainEntity::None => None,
        }
    }

    pub fn status(&self) -> Option<&str> {
        match self {
            OnchainEntity::Tip { records } => records
                .first()
                .and_then(|tip| latest_status(&tip.tip_status)),
            OnchainEntity::ChildBounty { record, .. } => record
                .as_ref()
                .and_then(|r| latest_status(&r.child_bounty_status)),
            OnchainEntity::Referendum { record, .. } => record
                .as_ref()
                .and_then(|r| latest_status(&r.referendum_status)),
            OnchainEntity::Proposal { record, .. } => record
                .as_ref()
                .and_then(|r| latest_status(&r.proposal_status)),
            OnchainEntity::None => None,
        }
    }

    /// Topic-specific excerpt: tip reason, bounty value or preimage method.
    pub fn excerpt(&self) -> Option<&str> {
        match self {
            OnchainEntity::Tip { records } => {
                records.first().and_then(|tip| tip.reason.as_deref())
            }
            OnchainEntity::ChildBounty { record, .. } => {
                record.as_ref().and_then(|r| r.value.as_deref())
            }
            OnchainEntity::Referendum { record, .. } => record
                .as_ref()
                .and_then(|r| r.preimage.as_ref())
                .and_then(|p| p.method.as_deref()),
            OnchainEntity::Proposal { record, .. } => record
                .as_ref()
                .and_then(|r| r.preimage.as_ref())
                .and_then(|p| p.method.as_deref()),
            OnchainEntity::None => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(from = "RawOnchainLink")]
pub struct OnchainLink {
    pub id: i64,
    pub proposer_address: String,
    pub entity: OnchainEntity,
}

/// Wire shape of `onchain_link`: every entity reference is a nullable
/// column or relation array.
#[serde_as]
#[derive(Deserialize)]
struct RawOnchainLink {
    id: i64,
    #[serde(default)]
    proposer_address: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    onchain_tip: Vec<TipRecord>,
    #[serde(default)]
    onchain_child_bounty_id: Option<i64>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    onchain_child_bounty: Vec<ChildBountyRecord>,
    #[serde(default)]
    onchain_referendum_id: Option<i64>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    onchain_referendum: Vec<ReferendumRecord>,
    #[serde(default)]
    onchain_proposal_id: Option<i64>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    onchain_proposal: Vec<ProposalRecord>,
}

impl From<RawOnchainLink> for OnchainLink {
    fn from(raw: RawOnchainLink) -> Self {
        let entity = if !raw.onchain_tip.is_empty() {
            OnchainEntity::Tip {
                records: raw.onchain_tip,
            }
        } else if let Some(id) = raw.onchain_child_bounty_id {
            OnchainEntity::ChildBounty {
                id,
                record: raw.onchain_child_bounty.into_iter().next(),
            }
        } else if let Some(id) = raw.onchain_referendum_id {
            OnchainEntity::Referendum {
                id,
                record: raw.onchain_referendum.into_iter().next(),
            }
        } else if let Some(id) = raw.onchain_proposal_id {
            OnchainEntity::Proposal {
                id,
                record: raw.onchain_proposal.into_iter().next(),
            }
        } else {
            OnchainEntity::None
        };

        OnchainLink {
            id: raw.id,
            proposer_address: raw.proposer_address.unwrap_or_default(),
            entity,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_tip_array_is_no_entity() {
        // Arrange
        let json = r#"{
            "id": 3,
            "proposer_address": "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY",
            "onchain_tip": []
        }"#;

        // Act
        let link = serde_json::from_str::<OnchainLink>(json).unwrap();

        // Assert
        assert_eq!(link.entity, OnchainEntity::None);
        assert_eq!(link.entity.onchain_id(), None);
    }

    #[test]
    fn test_tip_link() {
        // Arrange
        let json = r#"{
            "id": 4,
            "proposer_address": "addr",
            "onchain_tip": [{
                "hash": "0xabc",
                "reason": "Translate the wiki",
                "tipStatus": [
                    {"id": 1, "status": "Opened"},
                    {"id": 2, "status": "Closing"}
                ]
            }],
            "onchain_referendum_id": null,
            "onchain_referendum": null
        }"#;

        // Act
        let link = serde_json::from_str::<OnchainLink>(json).unwrap();

        // Assert
        assert!(matches!(link.entity, OnchainEntity::Tip { .. }));
        assert_eq!(link.entity.onchain_id().as_deref(), Some("0xabc"));
        assert_eq!(link.entity.status(), Some("Closing"));
        assert_eq!(link.entity.excerpt(), Some("Translate the wiki"));
    }

    #[test]
    fn test_referendum_link() {
        // Arrange
        let json = r#"{
            "id": 9,
            "proposer_address": "addr",
            "onchain_tip": [],
            "onchain_referendum_id": 12,
            "onchain_referendum": [{
                "end": 1200,
                "referendumStatus": [{"status": "Started"}],
                "preimage": {"method": "setBalance"}
            }]
        }"#;

        // Act
        let link = serde_json::from_str::<OnchainLink>(json).unwrap();

        // Assert
        assert_eq!(link.entity.onchain_id().as_deref(), Some("12"));
        assert_eq!(link.entity.status(), Some("Started"));
        assert_eq!(link.entity.excerpt(), Some("setBalance"));
    }

    #[test]
    fn test_child_bounty_without_record() {
        // Arrange
        let json = r#"{
            "id": 10,
            "proposer_address": null,
            "onchain_child_bounty_id": 7,
            "onchain_child_bounty": []
        }"#;

        // Act
        let link = serde_json::from_str::<OnchainLink>(json).unwrap();

        // Assert
        assert_eq!(
            link.entity,
            OnchainEntity::ChildBounty { id: 7, record: None }
        );
        assert_eq!(link.proposer_address, "");
        assert_eq!(link.entity.status(), None);
        assert_eq!(link.entity.excerpt(), None);
    }
}
