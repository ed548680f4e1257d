pub mod config;
pub mod db;
pub mod routes;
pub mod state;
pub mod types;
pub mod utils;
