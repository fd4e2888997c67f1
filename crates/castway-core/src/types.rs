//! Shared types for the castway gateway.
//!
//! Used across castway-lib and castway-cli. Keeping them here means
//! consumers can depend on the wire types without pulling in tokio,
//! axum, or other heavy deps.

use serde::{Deserialize, Serialize};

// ─── Demo inventory types ──────────────────────────────────────────────────

/// Demonstration entity held in the in-memory item list.
///
/// Unrelated to the podcast flow; kept as the canonical "is the gateway up"
/// CRUD surface. Reset on process restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub price: f64,
}

// ─── Script types ──────────────────────────────────────────────────────────

/// One generated script as returned by the listing endpoint: the opaque
/// identifier assigned by the script service plus its display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub id: String,
    pub name: String,
}
