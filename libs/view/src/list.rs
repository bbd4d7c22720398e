use entity::prelude::*;
use query::{
    documents::{
        LatestChildBounties, LatestProposals, LatestReferenda, LatestTips,
        ListVariables,
    },
    Client, FetchState, QueryHandle,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::card::{comment_label, SummaryCard};

#[derive(
    Debug,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ListKind {
    Tips,
    ChildBounties,
    Referenda,
    Proposals,
}

impl ListKind {
    /// Whether a post's on-chain link carries the entity this list shows.
    pub fn accepts(&self, entity: &OnchainEntity) -> bool {
        matches!(
            (self, entity),
            (ListKind::Tips, OnchainEntity::Tip { .. })
                | (ListKind::ChildBounties, OnchainEntity::ChildBounty { .. })
                | (ListKind::Referenda, OnchainEntity::Referendum { .. })
                | (ListKind::Proposals, OnchainEntity::Proposal { .. })
        )
    }

    pub fn empty_text(&self) -> &'static str {
        match self {
            ListKind::Tips => "There are currently no active tips.",
            ListKind::ChildBounties => {
                "There are currently no active child bounties."
            }
            ListKind::Referenda => "There are currently no active referenda.",
            ListKind::Proposals => "There are currently no active proposals.",
        }
    }

    /// First segment of a detail-page link.
    pub fn link_segment(&self) -> &'static str {
        match self {
            ListKind::Tips => "tip",
            ListKind::ChildBounties => "child_bounty",
            ListKind::Referenda => "referendum",
            ListKind::Proposals => "proposal",
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ListView {
    NothingFound { text: String },
    Cards { cards: Vec<SummaryCard> },
}

/// Maps a list result onto cards, or the empty-state card when no post
/// carries the entity `kind` shows.
///
/// The emptiness check runs before posts without an author username are
/// dropped, so a result made only of such posts yields an empty card list
/// rather than the empty-state card.
pub fn render_list(
    kind: ListKind,
    posts: Option<&[PostEntity]>,
    empty_text: &str,
) -> ListView {
    let posts = posts.unwrap_or_default();

    if !posts.iter().any(|post| kind.accepts(post.onchain_entity())) {
        return ListView::NothingFound {
            text: empty_text.to_string(),
        };
    }

    let cards = posts
        .iter()
        .filter(|post| kind.accepts(post.onchain_entity()))
        .filter(|post| post.author_username().is_some())
        .map(|post| summary_card(kind, post))
        .collect();

    ListView::Cards { cards }
}

fn summary_card(kind: ListKind, post: &PostEntity) -> SummaryCard {
    let entity = post.onchain_entity();
    let onchain_id = entity.onchain_id().unwrap_or_else(|| post.id.to_string());

    SummaryCard {
        address: post.proposer_address().unwrap_or_default().to_string(),
        comments: comment_label(post.comment_count()),
        excerpt: entity.excerpt().map(str::to_string),
        status: entity.status().map(str::to_string),
        title: post.title.clone(),
        link: format!("/{}/{}", kind.link_segment(), onchain_id),
        onchain_id,
    }
}

/// Fetches the list for `kind` and renders it.
pub async fn fetch_list(
    client: &Client,
    kind: ListKind,
    variables: ListVariables,
) -> FetchState<ListView> {
    info!(task = "fetch list", kind = kind.to_string());

    let state = match kind {
        ListKind::Tips => {
            QueryHandle::<LatestTips>::new(client.clone(), variables)
                .fetch()
                .await
        }
        ListKind::ChildBounties => {
            QueryHandle::<LatestChildBounties>::new(client.clone(), variables)
                .fetch()
                .await
        }
        ListKind::Referenda => {
            QueryHandle::<LatestReferenda>::new(client.clone(), variables)
                .fetch()
                .await
        }
        ListKind::Proposals => {
            QueryHandle::<LatestProposals>::new(client.clone(), variables)
                .fetch()
                .await
        }
    };

    state.map(|response| {
        render_list(kind, response.posts.as_deref(), kind.empty_text())
    })
}
