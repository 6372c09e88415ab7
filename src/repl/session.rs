//! REPL session state and command handlers
//!
//! A session remembers where the user is in the location listing and which
//! Pokemon they have caught. Handlers write to any `io::Write` so the whole
//! session can be driven from tests.

use std::collections::BTreeMap;
use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::api::ApiClient;
use crate::error::{PokedexError, Result};
use crate::models::Pokemon;
use crate::repl::Command;

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Percent chance of catching a Pokemon with the given base experience.
///
/// Falls linearly from 100% at 0 experience to 0% at 400 and above.
pub fn catch_chance(base_experience: u32) -> f32 {
    ((400.0 - base_experience as f32) / 4.0).clamp(0.0, 100.0)
}

/// Rolls a catch attempt.
pub fn roll_catch<R: Rng>(rng: &mut R, base_experience: u32) -> bool {
    rng.gen::<f32>() * 100.0 < catch_chance(base_experience)
}

// == Session ==
/// State carried between commands of one REPL run.
#[derive(Debug)]
pub struct Session {
    client: ApiClient,
    /// Link to the page after the one last shown
    next_url: Option<String>,
    /// Link to the page before the one last shown
    previous_url: Option<String>,
    /// Whether any page has been shown yet
    listing_started: bool,
    /// Caught Pokemon keyed by lowercase name
    pokedex: BTreeMap<String, Pokemon>,
    rng: StdRng,
}

impl Session {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            next_url: None,
            previous_url: None,
            listing_started: false,
            pokedex: BTreeMap::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Replaces the catch RNG, for reproducible runs.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Pokemon caught so far.
    pub fn pokedex(&self) -> &BTreeMap<String, Pokemon> {
        &self.pokedex
    }

    // == Execute ==
    /// Runs one command with its arguments, writing its output to `out`.
    pub async fn execute<W: Write>(
        &mut self,
        command: Command,
        args: &[String],
        out: &mut W,
    ) -> Result<Flow> {
        debug!("Executing {:?} with args {:?}", command, args);

        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map_forward(out).await?,
            Command::MapBack => self.map_back(out).await?,
            Command::Explore => {
                let area = first_arg(args, "a location area name or id")?;
                self.explore(area, out).await?
            }
            Command::Catch => {
                let name = first_arg(args, "a Pokemon name")?;
                self.catch(name, out).await?
            }
            Command::Inspect => {
                let name = first_arg(args, "a Pokemon name")?;
                self.inspect(name, out)?
            }
            Command::Pokedex => self.list_pokedex(out)?,
        }

        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for command in Command::ALL {
            writeln!(out, "  {}: {}", command.name(), command.description())?;
        }
        Ok(())
    }

    async fn map_forward<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let url = match (&self.next_url, self.listing_started) {
            (Some(next), _) => next.clone(),
            (None, false) => self.client.first_page_url(),
            (None, true) => {
                writeln!(out, "You're on the last page.")?;
                return Ok(());
            }
        };
        self.show_page(&url, out).await
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<()> {
        match self.previous_url.clone() {
            Some(url) => self.show_page(&url, out).await,
            None => {
                writeln!(out, "You're on the first page.")?;
                Ok(())
            }
        }
    }

    async fn show_page<W: Write>(&mut self, url: &str, out: &mut W) -> Result<()> {
        let page = self.client.location_areas(url).await?;

        self.next_url = page.next;
        self.previous_url = page.previous;
        self.listing_started = true;

        for (index, area) in page.results.iter().enumerate() {
            writeln!(out, "Location {}: {}", index + 1, area.name)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&self, area: &str, out: &mut W) -> Result<()> {
        let location = self.client.location_area(area).await?;

        writeln!(out, "Exploring location area {}:", area)?;
        for name in location.pokemon_names() {
            writeln!(out, "  - {}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        let pokemon = self.client.pokemon(name).await?;

        writeln!(out, "Throwing a Pokeball at {}...", pokemon.name)?;
        let base_experience = pokemon.base_experience.unwrap_or_default();
        if roll_catch(&mut self.rng, base_experience) {
            writeln!(out, "{} was caught!", pokemon.name)?;
            self.pokedex.insert(pokemon.name.to_lowercase(), pokemon);
        } else {
            writeln!(out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let Some(pokemon) = self.pokedex.get(&name.to_lowercase()) else {
            writeln!(out, "You have not caught that Pokemon.")?;
            return Ok(());
        };

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            writeln!(out, "No Pokemon have been caught yet.")?;
            return Ok(());
        }

        writeln!(out, "Your Pokedex:")?;
        for pokemon in self.pokedex.values() {
            writeln!(out, " - {}", pokemon.name)?;
        }
        Ok(())
    }
}

fn first_arg<'a>(args: &'a [String], what: &'static str) -> Result<&'a str> {
    args.first()
        .map(String::as_str)
        .filter(|arg| !arg.is_empty())
        .ok_or(PokedexError::MissingArgument(what))
}
