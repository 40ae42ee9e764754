//! Command interpreter and session model for the Pixaloom site terminal.
//!
//! [`terminal::Terminal`] owns one session: it echoes each submission into
//! the scrollback, runs it through the [`terminal::Interpreter`] and reports
//! any navigation or scroll request as an [`terminal::Effect`] for the host.

pub mod catalog;
pub mod config;
pub mod core;
pub mod terminal;

pub use catalog::{Project, ProjectCatalog, StaticCatalog};
pub use config::Config;
pub use crate::core::{SessionState, Theme};
pub use terminal::{Effect, Host, Line, Submission, Terminal};
