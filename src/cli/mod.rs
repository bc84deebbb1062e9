//! CLI module for the JWT service
//!
//! Provides subcommands:
//! - `serve`: HTTP token endpoint (default)
//! - `issue`: sign a single token and print it to stdout

pub mod issue;
pub mod serve;

use clap::{Parser, Subcommand};

/// JWT Service - issues short-lived RS256 tokens for CI test fixtures
#[derive(Parser, Debug)]
#[command(name = "jwt-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP token service (default)
    Serve(serve::ServeArgs),

    /// Sign one token for a username and print it
    Issue(issue::IssueArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve(serve::ServeArgs::default())
    }
}
