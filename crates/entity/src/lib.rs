//! Entity definitions for the Quorum review service
//!
//! This crate contains Sea-ORM entity definitions for the database models.
//! The schema is owned by the `migration` crate; the entities here mirror it.

pub mod sea_orm_active_enums;
pub use sea_orm_active_enums::PullRequestStatus;
pub mod teams;
pub use teams::Entity as Teams;
pub mod users;
pub use users::Entity as Users;
pub mod pull_requests;
pub use pull_requests::Entity as PullRequests;
pub mod assignments;
pub use assignments::Entity as Assignments;
