//! # Quest Core
//!
//! The runtime half of the quest system. This crate owns the quest catalog
//! and its progress, gates quests on their prerequisites, and broadcasts
//! lifecycle events to whoever is listening (UI, audio, save system).
//!
//! ## Core Components
//!
//! - **registry**: The catalog, the active/completed indices and all lifecycle operations
//! - **events**: Lifecycle events and the synchronous listener bus
//! - **loader**: Data sources that produce quest records for the catalog
//!
//! ## Design Philosophy
//!
//! - **Single owner**: One registry per session, driven from one thread
//! - **Non-fatal**: Missing quests and unmet prerequisites are `false`/`None`, never panics
//! - **Theme-agnostic**: Every theme pack runs on the same registry

pub mod events;
pub mod loader;
pub mod registry;

pub use events::*;
pub use loader::*;
pub use registry::*;
