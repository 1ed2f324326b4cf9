//! Bug Hunt (workspace facade crate).
//!
//! Re-exports the member crates as `bug_hunt::{core,input,term,types}` and
//! holds the application shell that ties them together: screen routing,
//! configuration and the event log.

pub use bug_hunt_core as core;
pub use bug_hunt_input as input;
pub use bug_hunt_term as term;
pub use bug_hunt_types as types;

pub mod app;
pub mod config;
pub mod event_log;

pub use app::App;
pub use config::{parse_args, AppConfig, CliCommand, USAGE};
pub use event_log::EventLog;
