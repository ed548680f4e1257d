pub mod request;
pub mod update;
