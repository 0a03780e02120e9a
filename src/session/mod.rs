//! Session system: active encounters and their registry.
//!
//! ## Key Types
//!
//! - `SessionId`: identifier unique among active sessions
//! - `CombatSession`: participants, turn holder, narrative log
//! - `SessionRegistry`: start / look up / end sessions

pub mod registry;
pub mod session;

pub use registry::SessionRegistry;
pub use session::{CombatSession, SessionId};
