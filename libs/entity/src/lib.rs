pub mod calendar_event;
pub mod onchain_link;
pub mod post;
pub mod prelude;
pub mod status;
pub mod vote;
