//! Unionname CLI library.
//!
//! The binary is a thin `main` over these modules; they are public so the
//! integration tests and shell completions can reach the clap definitions.

pub mod cli;
pub mod commands;
pub mod common;
