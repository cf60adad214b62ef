pub mod auth;
pub mod common;
pub mod match_data;
