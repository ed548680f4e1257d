pub mod access;
pub mod auth_provider;
pub mod storage;
pub mod webutils;
