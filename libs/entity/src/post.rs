use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};

use crate::onchain_link::{OnchainEntity, OnchainLink};

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub comments_aggregate: Option<CommentsAggregate>,
    #[serde(rename = "type", default)]
    pub post_type: Option<PostType>,
    #[serde(default)]
    pub topic: Option<PostTopic>,
    #[serde(default)]
    pub onchain_link: Option<OnchainLink>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone)]
pub struct Author {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone)]
pub struct CommentsAggregate {
    #[serde(default)]
    pub aggregate: Option<Aggregate>,
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone)]
pub struct Aggregate {
    #[serde(default)]
    pub count: Option<i64>,
}

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone)]
pub struct PostType {
    #[serde(default)]
    pub id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,
}

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone)]
pub struct PostTopic {
    #[serde(default)]
    pub id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,
}

impl Post {
    /// Username of the author, if the record carries a non-empty one.
    pub fn author_username(&self) -> Option<&str> {
        self.author
            .as_ref()
            .and_then(|author| author.username.as_deref())
            .filter(|username| !username.is_empty())
    }

    pub fn comment_count(&self) -> Option<i64> {
        self.comments_aggregate
            .as_ref()
            .and_then(|c| c.aggregate.as_ref())
            .and_then(|a| a.count)
    }

    pub fn onchain_entity(&self) -> &OnchainEntity {
        const NONE: &OnchainEntity = &OnchainEntity::None;
        self.onchain_link
            .as_ref()
            .map(|link| &link.entity)
            .unwrap_or(NONE)
    }

    pub fn proposer_address(&self) -> Option<&str> {
        self.onchain_link
            .as_ref()
            .map(|link| link.proposer_address.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deserialize_post() {
        // Arrange
        let json = r#"{
            "id": 42,
            "title": "Tip for the docs",
            "author": {"id": 1, "username": "alice"},
            "created_at": "2021-03-04T10:20:30.123456+00:00",
            "updated_at": null,
            "comments_aggregate": {"aggregate": {"count": 7}},
            "type": {"id": 2, "name": "On chain"},
            "topic": {"id": 4, "name": "Treasury"},
            "onchain_link": {
                "id": 5,
                "proposer_address": "addr",
                "onchain_tip": [{"reason": "docs", "tipStatus": []}]
            }
        }"#;

        // Act
        let post = serde_json::from_str::<Post>(json).unwrap();

        // Assert
        assert_eq!(post.author_username(), Some("alice"));
        assert_eq!(post.comment_count(), Some(7));
        assert_eq!(post.proposer_address(), Some("addr"));
        assert!(matches!(post.onchain_entity(), OnchainEntity::Tip { .. }));
        assert_eq!(post.post_type.unwrap().name, "On chain");
    }

    #[test]
    fn test_deserialize_sparse_post() {
        // Act
        let post =
            serde_json::from_str::<Post>(r#"{"id": 1, "author": {}}"#).unwrap();

        // Assert
        assert_eq!(post.author_username(), None);
        assert_eq!(post.comment_count(), None);
        assert_eq!(post.onchain_entity(), &OnchainEntity::None);
        assert_eq!(post.proposer_address(), None);
    }

    #[test]
    fn test_null_names_default_to_empty() {
        // Act
        let post = serde_json::from_str::<Post>(
            r#"{
                "id": 3,
                "type": {"id": 2, "name": null},
                "topic": {"name": null}
            }"#,
        )
        .unwrap();

        // Assert
        assert_eq!(post.post_type.unwrap().name, "");
        assert_eq!(post.topic.unwrap(), PostTopic::default());
    }
}
