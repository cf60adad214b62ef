pub mod data_handler;
pub mod match_handler;
