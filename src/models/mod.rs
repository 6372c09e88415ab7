//! Response models for the catalog API
//!
//! This module defines the DTOs (Data Transfer Objects) the client
//! deserializes cached or freshly fetched JSON payloads into.

pub mod location;
pub mod pokemon;

use serde::Deserialize;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};

/// A `{ name, url }` pair, the API's reference to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}
