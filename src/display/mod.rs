pub mod display_model;
pub mod messages;
