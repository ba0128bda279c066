#![allow(dead_code)]

pub mod logs;
pub mod server;
pub mod transport;
pub mod utils;
