//! Command-line dispatcher.
//!
//! `dcl` takes a single positional word. `stop`, `list` and `status` are
//! commands; any other word is the name of a bucket to start tracking:
//!
//! ```text
//! dcl gtd_meeting              start tracking now
//! dcl jamaica --since 14:00    start tracking from 14:00 today
//! dcl stop                     stop the running entry
//! dcl list                     show configured buckets
//! dcl status                   show the running entry
//! ```
//!
//! Each invocation reads the configuration once and then issues a short
//! sequence of blocking Clockify calls.

pub mod list;
pub mod start;
pub mod status;
pub mod stop;

use crate::api::Clockify;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use chrono::Local;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Bucket to start tracking, or one of `stop`, `list`, `status`
    pub bucket: String,

    /// Start the entry at this time today instead of now
    #[arg(long, value_name = "HH:MM")]
    pub since: Option<String>,

    /// Log every Clockify request to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// What a parsed command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start { bucket: String, since: Option<String> },
    Stop,
    List,
    Status,
}

impl Cli {
    pub fn command(&self) -> Command {
        match self.bucket.as_str() {
            "stop" => Command::Stop,
            "list" => Command::List,
            "status" => Command::Status,
            bucket => Command::Start {
                bucket: bucket.to_string(),
                since: self.since.clone(),
            },
        }
    }

    /// Runs the parsed command against the real Clockify API.
    pub fn execute(&self) -> Result<()> {
        let command = self.command();
        if self.since.is_some() && !matches!(command, Command::Start { .. }) {
            msg_warning!(Message::SinceIgnored(self.bucket.clone()));
        }

        let config = Config::read()?;
        tracing::debug!(?config, "loaded configuration");

        match command {
            Command::List => list::cmd(&config),
            Command::Start { bucket, since } => {
                let clockify = Clockify::new(&config)?;
                start::cmd(&clockify, &config, &bucket, since.as_deref(), &Local::now())
            }
            Command::Stop => {
                let clockify = Clockify::new(&config)?;
                stop::cmd(&clockify, &config, &Local::now())
            }
            Command::Status => {
                let clockify = Clockify::new(&config)?;
                status::cmd(&clockify, &config)
            }
        }
    }
}
