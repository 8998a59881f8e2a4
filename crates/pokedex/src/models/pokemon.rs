//! Request payloads for the pokemon endpoints.
//!
//! `CreatePokemon` keeps its required fields loosely typed so a missing or
//! mistyped field turns into a per-field validation message instead of a
//! blanket deserialization error. `UpdatePokemon` is the explicit
//! optional-fields struct merged field-by-field into the stored record.

use serde::Deserialize;
use serde_json::Value;

use pokedex_core::Pokemon;

/// Request payload for creating a pokemon.
///
/// `name` and `type` are validated by [`CreatePokemon::validate`]; `hp` and
/// `sprites` are optional and default to `0` / empty.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePokemon {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default, rename = "type")]
    pub kind: Option<Value>,
    #[serde(default)]
    pub hp: Option<u32>,
    #[serde(default)]
    pub sprites: Option<Vec<String>>,
}

/// A validated create payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPokemon {
    pub name: String,
    pub kind: String,
    pub hp: u32,
    pub sprites: Vec<String>,
}

/// Validates a required string field, collecting messages on failure.
///
/// Absent and `null` fields report both the type and the non-empty message,
/// a wrong-typed field only the type message, and an empty string only the
/// non-empty message.
fn required_string(field: &str, value: Option<Value>, messages: &mut Vec<String>) -> Option<String> {
    match value {
        None => {
            messages.push(format!("{field} must be a string"));
            messages.push(format!("{field} should not be empty"));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            messages.push(format!("{field} should not be empty"));
            None
        }
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            messages.push(format!("{field} must be a string"));
            None
        }
    }
}

impl CreatePokemon {
    /// Validates the payload, returning either the usable input or the full
    /// list of human-readable messages.
    pub fn validate(self) -> Result<NewPokemon, Vec<String>> {
        let mut messages = Vec::new();

        let name = required_string("name", self.name, &mut messages);
        let kind = required_string("type", self.kind, &mut messages);

        match (name, kind) {
            (Some(name), Some(kind)) => Ok(NewPokemon {
                name,
                kind,
                hp: self.hp.unwrap_or(0),
                sprites: self.sprites.unwrap_or_default(),
            }),
            _ => Err(messages),
        }
    }
}

/// Request payload for partially updating a pokemon.
///
/// Any subset of fields may be present; absent fields leave the stored
/// record untouched. `id` is never part of the payload and never changes.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePokemon {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub hp: Option<u32>,
    #[serde(default)]
    pub sprites: Option<Vec<String>>,
}

impl UpdatePokemon {
    /// Merges the provided fields into an existing record, preserving its id.
    pub fn merge_into(self, pokemon: &mut Pokemon) {
        if let Some(name) = self.name {
            pokemon.name = name;
        }
        if let Some(kind) = self.kind {
            pokemon.kind = kind;
        }
        if let Some(hp) = self.hp {
            pokemon.hp = hp;
        }
        if let Some(sprites) = self.sprites {
            pokemon.sprites = sprites;
        }
    }
}
