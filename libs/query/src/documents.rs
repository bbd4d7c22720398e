//! GraphQL documents and the variables/response shapes they are bound to.
//!
//! Field names here are the backend contract; renaming one is a breaking
//! change on both sides.

use std::fmt::Debug;

use entity::prelude::*;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Default number of posts a list query asks for.
pub const DEFAULT_LIMIT: i64 = 5;

pub trait Query {
    /// Operation name, also used as the cache namespace.
    const NAME: &'static str;
    const DOCUMENT: &'static str;

    type Variables: Serialize + Debug + Clone + Send + Sync;
    type Response: DeserializeOwned + Debug + Clone + Send;
}

macro_rules! post_list_fields {
    () => {
        r#"
        id
        title
        author {
            id
            username
        }
        created_at
        updated_at
        comments_aggregate {
            aggregate {
                count
            }
        }
        type {
            id
            name
        }
        topic {
            id
            name
        }
        "#
    };
}

macro_rules! list_document {
    ($operation:literal, $filter:literal, $onchain:literal) => {
        concat!(
            "query ",
            $operation,
            "($postType: Int!, $postTopic: Int!, $limit: Int! = 5) {\n",
            "    posts(\n",
            "        limit: $limit\n",
            "        where: {\n",
            "            type: { id: { _eq: $postType } }\n",
            "            topic: { id: { _eq: $postTopic } }\n",
            "            onchain_link: { ",
            $filter,
            ": { _is_null: false } }\n",
            "        }\n",
            "        order_by: { onchain_link: { id: desc } }\n",
            "    ) {",
            post_list_fields!(),
            "        onchain_link {\n",
            "            id\n",
            "            proposer_address\n",
            $onchain,
            "        }\n",
            "    }\n",
            "}\n"
        )
    };
}

pub const LATEST_TIPS: &str = list_document!(
    "LatestTipPosts",
    "onchain_tip_id",
    r#"
            onchain_tip {
                hash
                reason
                tipStatus(orderBy: id_ASC) {
                    id
                    status
                }
            }
"#
);

pub const LATEST_CHILD_BOUNTIES: &str = list_document!(
    "LatestChildBountyPosts",
    "onchain_child_bounty_id",
    r#"
            onchain_child_bounty_id
            onchain_child_bounty {
                value
                childBountyStatus(last: 1) {
                    id
                    status
                }
            }
"#
);

pub const LATEST_REFERENDA: &str = list_document!(
    "LatestReferendaPosts",
    "onchain_referendum_id",
    r#"
            onchain_referendum_id
            onchain_referendum {
                end
                referendumStatus(last: 1) {
                    id
                    status
                }
                preimage {
                    method
                }
            }
"#
);

pub const LATEST_PROPOSALS: &str = list_document!(
    "LatestDemocracyProposalPosts",
    "onchain_proposal_id",
    r#"
            onchain_proposal_id
            onchain_proposal {
                proposalStatus(last: 1) {
                    id
                    status
                }
                preimage {
                    method
                }
            }
"#
);

pub const POST_BY_ID: &str = concat!(
    "query PostById($id: Int!) {\n",
    "    posts(where: { id: { _eq: $id } }) {",
    post_list_fields!(),
    r#"
        content
        onchain_link {
            id
            proposer_address
            onchain_tip {
                hash
                reason
                tipStatus(orderBy: id_ASC) {
                    id
                    status
                }
            }
            onchain_child_bounty_id
            onchain_child_bounty {
                value
                childBountyStatus(orderBy: id_ASC) {
                    id
                    status
                }
            }
            onchain_referendum_id
            onchain_referendum {
                end
                referendumStatus(orderBy: id_ASC) {
                    id
                    status
                }
                preimage {
                    method
                }
            }
            onchain_proposal_id
            onchain_proposal {
                proposalStatus(orderBy: id_ASC) {
                    id
                    status
                }
                preimage {
                    method
                }
            }
        }
    }
}
"#
);

pub const VOTES_BY_VOTER: &str = r#"query VotesByVoter($voter: String!, $referendumId: Int!) {
    referendum_votes(
        where: { voter: { _eq: $voter }, referendum_id: { _eq: $referendumId } }
        order_by: { id: desc }
    ) {
        id
        voter
        referendum_id
        decision
        balance
        lock_period
    }
}
"#;

pub const CALENDAR_EVENTS: &str = r#"query CalendarEvents($network: String!) {
    calender_events(where: { network: { _eq: $network } }) {
        id
        title
        content
        start_time
        end_time
        url
        event_type
        module
        network
        status
    }
}
"#;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListVariables {
    pub post_type: i64,
    pub post_topic: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PostVariables {
    pub id: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoterVariables {
    pub voter: String,
    pub referendum_id: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CalendarVariables {
    pub network: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PostsResponse {
    /// May be absent or null on a partial result.
    #[serde(default)]
    pub posts: Option<Vec<PostEntity>>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct VotesResponse {
    #[serde(default)]
    pub referendum_votes: Vec<ReferendumVoteEntity>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CalendarEventsResponse {
    #[serde(default)]
    pub calender_events: Vec<CalendarEventEntity>,
}

macro_rules! define_query {
    ($name:ident, $operation:literal, $document:expr, $variables:ty, $response:ty) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl Query for $name {
            const NAME: &'static str = $operation;
            const DOCUMENT: &'static str = $document;

            type Variables = $variables;
            type Response = $response;
        }
    };
}

define_query!(
    LatestTips,
    "LatestTipPosts",
    LATEST_TIPS,
    ListVariables,
    PostsResponse
);
define_query!(
    LatestChildBounties,
    "LatestChildBountyPosts",
    LATEST_CHILD_BOUNTIES,
    ListVariables,
    PostsResponse
);
define_query!(
    LatestReferenda,
    "LatestReferendaPosts",
    LATEST_REFERENDA,
    ListVariables,
    PostsResponse
);
define_query!(
    LatestProposals,
    "LatestDemocracyProposalPosts",
    LATEST_PROPOSALS,
    ListVariables,
    PostsResponse
);
define_query!(PostById, "PostById", POST_BY_ID, PostVariables, PostsResponse);
define_query!(
    VotesByVoter,
    "VotesByVoter",
    VOTES_BY_VOTER,
    VoterVariables,
    VotesResponse
);
define_query!(
    CalendarEvents,
    "CalendarEvents",
    CALENDAR_EVENTS,
    CalendarVariables,
    CalendarEventsResponse
);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_documents_declare_operation_and_variables() {
        assert!(LATEST_TIPS.starts_with(
            "query LatestTipPosts($postType: Int!, $postTopic: Int!, $limit: Int! = 5)"
        ));
        assert!(LATEST_TIPS.contains("onchain_tip_id: { _is_null: false }"));
        assert!(LATEST_REFERENDA.contains("preimage {"));
        assert!(POST_BY_ID.starts_with("query PostById($id: Int!)"));
        assert!(VOTES_BY_VOTER.contains("$voter: String!, $referendumId: Int!"));
        assert!(CALENDAR_EVENTS.contains("calender_events"));
    }

    #[test]
    fn test_list_variables_wire_names() {
        // Arrange
        let variables = ListVariables {
            post_type: 2,
            post_topic: 4,
            limit: DEFAULT_LIMIT,
        };

        // Act
        let json = serde_json::to_value(&variables).unwrap();

        // Assert
        assert_eq!(
            json,
            serde_json::json!({"postType": 2, "postTopic": 4, "limit": 5})
        );
    }

    #[test]
    fn test_list_variables_default_limit() {
        let variables = serde_json::from_str::<ListVariables>(
            r#"{"postType": 2, "postTopic": 4}"#,
        )
        .unwrap();

        assert_eq!(variables.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_posts_response_tolerates_null() {
        let response =
            serde_json::from_str::<PostsResponse>(r#"{"posts": null}"#).unwrap();

        assert!(response.posts.is_none());
    }
}
