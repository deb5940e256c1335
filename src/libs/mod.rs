//! Core library modules for dcl.
//!
//! - **config** / **data_storage**: locating and validating `config.yaml`
//! - **clock**: `--since` parsing and Clockify timestamps
//! - **tracker**: start, stop and status on top of the Clockify client
//! - **messages** / **view**: terminal output
//! - **logging**: tracing subscriber setup
//! - **error**: the error taxonomy shared by all of the above

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod logging;
pub mod messages;
pub mod tracker;
pub mod view;
