//! # dcl - Dimagi Clockify CLI
//!
//! Starts and stops Clockify time entries against "buckets": short names
//! mapped to a Clockify project and task in `config.yaml`.
//!
//! ## Features
//!
//! - **Bucket switching**: `dcl <bucket>` stops the running entry and starts a new one
//! - **Backdating**: `--since HH:MM` starts the entry earlier today
//! - **Stop / status**: end or inspect the running entry
//! - **Offline listing**: `dcl list` shows configured buckets
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clap::Parser;
//! use dcl::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::parse().execute()
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
