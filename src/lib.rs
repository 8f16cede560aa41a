pub mod catalog;
pub mod core;
pub mod shell;
pub mod utils;
