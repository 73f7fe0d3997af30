//! Command line front end for publication lookups and notice quotes.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;

pub use commands::{EXIT_CLIENT_ERROR, EXIT_FAILURE, EXIT_SUCCESS, Session, exit_code};
