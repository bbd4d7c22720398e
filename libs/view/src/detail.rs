use chrono::{DateTime, Utc};
use entity::prelude::*;
use query::{
    documents::{
        PostById, PostVariables, PostsResponse, VoterVariables, VotesByVoter,
        VotesResponse,
    },
    Client, FetchState, QueryHandle,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::card::comment_label;

pub static POST_NOT_FOUND: &str = "Post not found.";
pub static VOTE_NOT_FOUND: &str = "No vote found for this account.";

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct OnchainSummary {
    /// tip, child_bounty, referendum or proposal.
    pub kind: String,
    pub onchain_id: Option<String>,
    pub proposer_address: String,
    pub status: Option<String>,
    pub excerpt: Option<String>,
    /// Referendum end block.
    pub end: Option<i64>,
}

/// Shared detail shape for every post type.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PostDetail {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub post_type: Option<String>,
    pub topic: Option<String>,
    pub comments: String,
    pub onchain: Option<OnchainSummary>,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DetailView {
    NothingFound { text: String },
    Post { post: PostDetail },
}

/// A rendered detail view together with the handle that produced it, so a
/// caller can re-issue the query after a change made elsewhere.
#[derive(Debug, Clone)]
pub struct DetailScreen {
    pub view: DetailView,
    pub refetch: QueryHandle<PostById>,
}

impl DetailScreen {
    pub async fn refresh(&self) -> FetchState<DetailScreen> {
        let refetch = self.refetch.clone();
        self.refetch
            .refetch()
            .await
            .map(|response| render_detail(response, refetch))
    }
}

pub fn render_detail(
    response: PostsResponse,
    refetch: QueryHandle<PostById>,
) -> DetailScreen {
    let post = response.posts.unwrap_or_default().into_iter().next();

    let view = match post {
        Some(post) => DetailView::Post {
            post: post_detail(post),
        },
        None => DetailView::NothingFound {
            text: POST_NOT_FOUND.to_string(),
        },
    };

    DetailScreen { view, refetch }
}

fn post_detail(post: PostEntity) -> PostDetail {
    let onchain = post.onchain_link.as_ref().and_then(onchain_summary);

    PostDetail {
        id: post.id,
        author: post.author_username().map(str::to_string),
        comments: comment_label(post.comment_count()),
        title: post.title,
        content: post.content,
        created_at: post.created_at,
        updated_at: post.updated_at,
        post_type: post.post_type.map(|t| t.name),
        topic: post.topic.map(|t| t.name),
        onchain,
    }
}

fn onchain_summary(link: &OnchainLinkEntity) -> Option<OnchainSummary> {
    let (kind, end) = match &link.entity {
        OnchainEntity::Tip { .. } => ("tip", None),
        OnchainEntity::ChildBounty { .. } => ("child_bounty", None),
        OnchainEntity::Referendum { record, .. } => {
            ("referendum", record.as_ref().and_then(|r| r.end))
        }
        OnchainEntity::Proposal { .. } => ("proposal", None),
        OnchainEntity::None => return None,
    };

    Some(OnchainSummary {
        kind: kind.to_string(),
        onchain_id: link.entity.onchain_id(),
        proposer_address: link.proposer_address.clone(),
        status: link.entity.status().map(str::to_string),
        excerpt: link.entity.excerpt().map(str::to_string),
        end,
    })
}

pub async fn fetch_detail(client: &Client, id: i64) -> FetchState<DetailScreen> {
    let handle = QueryHandle::<PostById>::new(client.clone(), PostVariables { id });
    let refetch = handle.clone();

    handle
        .fetch()
        .await
        .map(|response| render_detail(response, refetch))
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct VoteSummary {
    pub voter: String,
    pub referendum_id: i64,
    pub decision: String,
    pub balance: Option<String>,
    pub conviction: String,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum VoteView {
    NothingFound { text: String },
    Vote { vote: VoteSummary },
}

/// Latest vote the account cast on the referendum.
pub fn render_vote(response: VotesResponse) -> VoteView {
    let Some(vote) = response.referendum_votes.into_iter().next() else {
        return VoteView::NothingFound {
            text: VOTE_NOT_FOUND.to_string(),
        };
    };

    VoteView::Vote {
        vote: VoteSummary {
            decision: vote.decision.to_string(),
            conviction: vote.conviction(),
            voter: vote.voter,
            referendum_id: vote.referendum_id,
            balance: vote.balance,
        },
    }
}

pub async fn fetch_vote(
    client: &Client,
    voter: String,
    referendum_id: i64,
) -> FetchState<VoteView> {
    QueryHandle::<VotesByVoter>::new(
        client.clone(),
        VoterVariables {
            voter,
            referendum_id,
        },
    )
    .fetch()
    .await
    .map(render_vote)
}
