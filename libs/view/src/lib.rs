pub mod calendar;
pub mod card;
pub mod detail;
pub mod list;
pub mod route;
