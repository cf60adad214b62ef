pub mod live_update;
pub mod validation;
