//! REPL command table

/// Every command the explorer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

impl Command {
    /// All commands in the order `help` lists them.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::MapBack,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
    ];

    /// Looks up a command by the word typed at the prompt.
    pub fn parse(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == word)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Show available commands",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Display the next page of location areas",
            Command::MapBack => "Display the previous page of location areas",
            Command::Explore => "List the Pokemon found in a location area. Usage: explore <area>",
            Command::Catch => "Attempt to catch a Pokemon. Usage: catch <pokemon>",
            Command::Inspect => "Inspect a Pokemon you have caught. Usage: inspect <pokemon>",
            Command::Pokedex => "List all the Pokemon you have caught",
        }
    }
}
