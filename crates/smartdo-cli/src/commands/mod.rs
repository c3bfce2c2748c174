pub mod classify;
pub mod completions;
pub mod config;
pub mod session;
