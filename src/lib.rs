pub mod cli;
pub mod display;
pub mod form;
pub mod page;
pub mod report;
pub mod submit;
pub mod trace;
