pub mod access;
pub mod profile;
pub mod sync;
