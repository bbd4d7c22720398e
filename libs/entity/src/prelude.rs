pub use crate::calendar_event::CalendarEvent as CalendarEventEntity;
pub use crate::onchain_link::{
    ChildBountyRecord, OnchainEntity, OnchainLink as OnchainLinkEntity,
    Preimage, ProposalRecord, ReferendumRecord, TipRecord,
};
pub use crate::post::Post as PostEntity;
pub use crate::status::StatusEntry;
pub use crate::vote::ReferendumVote as ReferendumVoteEntity;
