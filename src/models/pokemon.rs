//! Pokemon DTO (`/pokemon/{name}`)

use serde::Deserialize;

use super::NamedResource;

/// The subset of a Pokemon record the explorer shows and catches with.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    /// Null for some forms in the upstream data
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

/// A base stat such as `hp` or `speed`.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One of a Pokemon's types.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
