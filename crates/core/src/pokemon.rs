//! The pokemon record type.

use serde::{Deserialize, Serialize};

/// A pokemon record.
///
/// `id` is assigned once (by the store for locally created records, by the
/// upstream API for fetched ones) and never changes. `name` is unique among
/// records, compared case-sensitively as created. `sprites` is always a
/// sequence, possibly empty, never absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub hp: u32,
    #[serde(default)]
    pub sprites: Vec<String>,
}
