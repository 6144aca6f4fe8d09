//! Read-eval-print loop over a [`Console`].

use std::io::{BufRead, Write};
use std::str::FromStr;

use tilequest_core::{Direction, EquipmentSlot, MoveReport, PcgRng, Player, Session, World};

use crate::console::Console;
use crate::render;

pub const HELP: &str = "\
Commands:
  w/a/s/d, up/down/left/right   move
  map, minimap                  look around
  status, inventory             check yourself
  equip <item>, unequip <slot>  change gear
  use <item>                    eat or drink something
  help, quit
Anything else is tried on the tile you stand on (e.g. open, drink).";

/// One line of player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Map,
    Minimap,
    Status,
    Inventory,
    Equip(String),
    Unequip(String),
    Use(String),
    Help,
    Quit,
    /// Free word offered to the tile's event.
    Word(String),
}

impl FromStr for Command {
    type Err = ();

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let command = match (verb.to_ascii_lowercase().as_str(), rest.is_empty()) {
            ("", _) => return Err(()),
            ("w" | "up", true) => Self::Move(Direction::Up),
            ("s" | "down", true) => Self::Move(Direction::Down),
            ("a" | "left", true) => Self::Move(Direction::Left),
            ("d" | "right", true) => Self::Move(Direction::Right),
            ("map", true) => Self::Map,
            ("minimap" | "mm", true) => Self::Minimap,
            ("status" | "stats", true) => Self::Status,
            ("inventory" | "inv" | "i", true) => Self::Inventory,
            ("equip", false) => Self::Equip(rest.to_owned()),
            ("unequip", false) => Self::Unequip(rest.to_owned()),
            ("use", false) => Self::Use(rest.to_owned()),
            ("help" | "?", true) => Self::Help,
            ("quit" | "exit" | "q", true) => Self::Quit,
            _ => Self::Word(line.to_owned()),
        };
        Ok(command)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Game {
    pub world: World,
    pub player: Player,
    pub rng: PcgRng,
    pub minimap_radius: u32,
}

impl Game {
    pub fn new(world: World, player: Player, rng: PcgRng) -> Self {
        Self {
            world,
            player,
            rng,
            minimap_radius: crate::CliConfig::DEFAULT_MINIMAP_RADIUS,
        }
    }

    pub fn with_minimap_radius(mut self, radius: u32) -> Self {
        self.minimap_radius = radius;
        self
    }

    /// Runs until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &Console<R, W>) {
        self.player.update_map(&mut self.world, None);
        console.say(&format!(
            "Welcome, {}! Type 'help' for commands.",
            self.player.entity.name()
        ));
        self.look(console);
        loop {
            console.print("> ");
            let Some(line) = console.read_line() else {
                break;
            };
            let Ok(command) = line.parse::<Command>() else {
                continue;
            };
            if self.execute(command, console) == Flow::Quit {
                break;
            }
        }
        console.say("Goodbye.");
        tracing::info!("session ended for {}", self.player.entity.name());
    }

    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        command: Command,
        console: &Console<R, W>,
    ) -> Flow {
        match command {
            Command::Move(direction) => self.step(direction, console),
            Command::Map => console.print(&render::map(
                self.world.map(self.player.map()),
                &self.player,
            )),
            Command::Minimap => self.look(console),
            Command::Status => console.print(&render::status(&self.player.entity)),
            Command::Inventory => console.print(&render::inventory(&self.player.entity)),
            Command::Equip(name) => match self.player.entity.equip(&name) {
                Ok(()) => console.say(&format!("You equip the {}.", name)),
                Err(e) => console.say(&e.to_string()),
            },
            Command::Unequip(slot) => match EquipmentSlot::from_str(&slot) {
                Ok(slot) => match self.player.entity.unequip(slot) {
                    Ok(()) => console.say(&format!("You take off your {}.", slot)),
                    Err(e) => console.say(&e.to_string()),
                },
                Err(_) => console.say(&format!("There is no '{}' slot.", slot)),
            },
            Command::Use(name) => match self.player.entity.use_item(&name) {
                Some(narration) => console.say(&narration),
                None => console.say(&format!("You have no {}.", name)),
            },
            Command::Help => console.say(HELP),
            Command::Quit => return Flow::Quit,
            Command::Word(word) => match self.world.interact(&mut self.player, &word) {
                Some(narration) => console.say(&narration),
                None => console.say(&format!("Nothing happens when you {}.", word)),
            },
        }
        Flow::Continue
    }

    fn step<R: BufRead, W: Write>(&mut self, direction: Direction, console: &Console<R, W>) {
        let mut prompt = console;
        let mut observer = console;
        let mut session = Session::new(&mut prompt, &mut self.rng).with_observer(&mut observer);
        match self
            .world
            .move_direction(&mut self.player, direction, &mut session)
        {
            MoveReport::Blocked(_) => console.say("You can't go that way."),
            MoveReport::Moved(arrival) => {
                if let Some(narration) = arrival.event {
                    console.say(&narration);
                }
                self.look(console);
            }
        }
    }

    fn look<R: BufRead, W: Write>(&self, console: &Console<R, W>) {
        let map = self.world.map(self.player.map());
        console.print(&render::minimap(map, &self.player, self.minimap_radius));
        if let Some(tile) = map.tile_at(self.player.location()) {
            if !tile.description.is_empty() {
                console.say(&tile.description);
            }
        }
    }
}
