pub mod error;
pub mod handler;
pub mod outcome;
pub mod reply;
pub mod transport;
