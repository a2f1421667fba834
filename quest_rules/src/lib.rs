//! # Quest Rules
//!
//! The data side of the quest system - quest definitions, lifecycle rules, the
//! external JSON schema and the runtime configuration.
//! This crate holds no runtime state; the registry lives in `quest_core`.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod quest;
pub mod schema;

pub use config::*;
pub use error::*;
pub use lifecycle::*;
pub use quest::*;
pub use schema::*;
