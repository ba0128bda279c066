pub mod logger;
pub mod subscriber;
pub mod trace;
