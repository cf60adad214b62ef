pub mod narrator_service;

pub use narrator_service::NarratorService;
