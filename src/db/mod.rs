pub mod db_service;
pub mod equipment;
pub mod footage;
pub mod profile;
pub mod schedule;
pub mod submission;
pub mod user;
