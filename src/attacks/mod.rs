//! Attack system: definitions and the role-indexed catalog.
//!
//! ## Key Types
//!
//! - `DamageKind`: physical / magical / defensive / effect
//! - `AttackDefinition`: static attack data (power, cost)
//! - `AttackCatalog`: ordered per-role attack tables, validated at
//!   construction

pub mod catalog;
pub mod definition;

pub use catalog::AttackCatalog;
pub use definition::{AttackDefinition, DamageKind};
