//! # askbot-cli
//!
//! Argument parsing, env file loading and wiring of store, handlers and router.

pub mod app;
pub mod cli;

pub use app::{build_router, load_env_file, run};
pub use cli::{Cli, Commands};
