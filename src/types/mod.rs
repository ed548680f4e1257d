pub mod equipment;
pub mod error;
pub mod footage;
pub mod query;
pub mod response;
pub mod schedule;
pub mod submission;
pub mod user;
