//! Interactive console session.
//!
//! A session loads a grid, then loops over the main menu until the user
//! exits. Every interaction loop is iterative: choosing `0` at a menu
//! returns to the caller without touching the habitat, and the end of the
//! input stream ends the session without saving anything.

mod prompt;
mod render;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::game::{
    Blocked, Coord, Direction, Entity, FaunaStep, Habitat, RobotStep, RoverStep, Side,
};
use crate::history::{self, RunRecord};
use crate::persistence;
use prompt::Prompt;
use render::{LIVESTOCK_LABELS, PLANT_LABELS};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose to exit. `saved` is where the grid was written, if
    /// anywhere.
    Completed {
        /// Path of the saved grid.
        saved: Option<PathBuf>,
    },
    /// No grid was loaded.
    Aborted,
    /// The input stream ended before the user exited.
    InputClosed,
}

enum MainChoice {
    Continue,
    Exit,
}

/// An interactive session over a pair of streams.
#[derive(Debug)]
pub struct Session<R, W> {
    prompt: Prompt<R, W>,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session reading answers from `input` and writing to `output`.
    #[must_use]
    pub const fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            prompt: Prompt::new(input, output),
            config,
        }
    }

    /// Consume the session, returning the output stream.
    #[must_use]
    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    /// Run the session to completion.
    ///
    /// When `map` is `None` the user picks between a map file and the
    /// configured default map.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output or reading input fails. The end
    /// of input is not an error; it yields [`SessionEnd::InputClosed`].
    pub fn run(&mut self, map: Option<&Path>) -> Result<SessionEnd, SessionError> {
        match self.run_inner(map) {
            Err(SessionError::InputClosed) => {
                tracing::info!("input closed, ending session without saving");
                Ok(SessionEnd::InputClosed)
            }
            other => other,
        }
    }

    fn run_inner(&mut self, map: Option<&Path>) -> Result<SessionEnd, SessionError> {
        let path = match map {
            Some(path) => path.to_path_buf(),
            None => match self.startup_menu()? {
                Some(path) => path,
                None => return Ok(SessionEnd::Aborted),
            },
        };

        let grid = match persistence::load_grid(&path) {
            Ok(grid) => grid,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "grid load failed");
                self.prompt.say(&e.to_string())?;
                return Ok(SessionEnd::Aborted);
            }
        };

        let mut habitat = Habitat::new(grid);
        self.show_map(&habitat)?;
        render::write_status(self.prompt.out(), &habitat.report())?;

        loop {
            if let MainChoice::Exit = self.main_menu(&mut habitat)? {
                break;
            }
        }

        let saved = self.save(&habitat)?;
        self.prompt
            .say("Terminating the mission for now. See you next time.")?;
        self.record_history(&habitat);
        Ok(SessionEnd::Completed { saved })
    }

    fn startup_menu(&mut self) -> Result<Option<PathBuf>, SessionError> {
        self.prompt.say("Please enter")?;
        self.prompt.say("[1] to load Martian map from a file")?;
        self.prompt.say("[2] to load default Martian map")?;
        match self.prompt.text()?.trim().parse::<u8>() {
            Ok(1) => {
                self.prompt.say("Enter a file name to setup Martian Land Map")?;
                Ok(Some(PathBuf::from(self.prompt.text()?)))
            }
            Ok(2) => Ok(Some(self.config.default_map.clone())),
            _ => Ok(None),
        }
    }

    fn main_menu(&mut self, habitat: &mut Habitat) -> Result<MainChoice, SessionError> {
        render::write_main_menu(self.prompt.out())?;
        match self.prompt.choose_from_one(6)? {
            1 => {
                let robots = habitat.robots();
                if let Some(at) = self.select_unit("Space Robot", &robots)? {
                    self.robot_loop(habitat, at)?;
                }
            }
            2 => {
                let rovers = habitat.rovers();
                if let Some(at) = self.select_unit("Space Rover", &rovers)? {
                    self.rover_loop(habitat, at)?;
                }
            }
            3 => {
                let animals = habitat.martian_animals();
                if let Some(at) = self.select_unit("Martian animal", &animals)? {
                    self.fauna_loop(habitat, at)?;
                }
            }
            4 => render::write_status(self.prompt.out(), &habitat.report())?,
            5 => self.show_history()?,
            _ => return Ok(MainChoice::Exit),
        }
        Ok(MainChoice::Continue)
    }

    fn select_unit(
        &mut self,
        label: &str,
        units: &[(Coord, Entity)],
    ) -> Result<Option<Coord>, SessionError> {
        if units.is_empty() {
            self.prompt.say(&format!("No {label} found to move."))?;
            return Ok(None);
        }
        render::write_units(self.prompt.out(), label, units)?;
        let choice = self.prompt.choose(units.len())?;
        Ok(choice.checked_sub(1).map(|n| units[n].0))
    }

    fn direction(&mut self, unit: &str) -> Result<Option<Direction>, SessionError> {
        render::write_directions(self.prompt.out(), unit)?;
        let key = self.prompt.choose(8)?;
        Ok(u8::try_from(key)
            .ok()
            .and_then(Direction::from_key)
            .filter(|d| !d.is_stay()))
    }

    fn robot_loop(&mut self, habitat: &mut Habitat, mut at: Coord) -> Result<(), SessionError> {
        while let Some(direction) = self.direction("Space Robot")? {
            match habitat.step_robot(at, direction)? {
                RobotStep::Moved { to, site } => {
                    at = to;
                    if let Some(site) = site {
                        self.show_map(habitat)?;
                        self.robot_action_menu(habitat, site)?;
                    }
                }
                RobotStep::CanWater { target, .. } => {
                    self.prompt
                        .say("Do you want to water the plant?Enter Y for yes, N for No")?;
                    if self.prompt.confirm()? && habitat.water(target) {
                        self.prompt.say("You watered a plant. It will grow")?;
                    }
                }
                RobotStep::CanFeed { target, .. } => {
                    self.prompt
                        .say("Do you want to feed the animal?Enter Y for yes, N for No")?;
                    if self.prompt.confirm()? && habitat.feed(target) {
                        self.prompt.say("You have fed the animal. It will grow")?;
                    }
                }
                RobotStep::Blocked(blocked) => self.say_blocked(blocked)?,
            }
            self.show_map(habitat)?;
        }
        Ok(())
    }

    /// Offer planting or livestock on `site`; at most one is applied.
    fn robot_action_menu(&mut self, habitat: &mut Habitat, site: Coord) -> Result<(), SessionError> {
        loop {
            self.prompt.say("Please select")?;
            self.prompt.say("[1] to plant a tree")?;
            self.prompt.say("[2] to rear cattle")?;
            self.prompt.say("[0] to go back to previous menu")?;
            match self.prompt.choose(2)? {
                0 => return Ok(()),
                1 => {
                    render::write_choice_menu(
                        self.prompt.out(),
                        "Let's Plant something",
                        "plant",
                        &PLANT_LABELS,
                    )?;
                    let key = self.prompt.choose(PLANT_LABELS.len())?;
                    if let Some(flora) = menu_pick(key, Entity::plantable) {
                        if habitat.plant(site, flora) {
                            self.prompt.say(&format!("You planted a {}.", flora.name()))?;
                        }
                        return Ok(());
                    }
                }
                _ => {
                    render::write_choice_menu(
                        self.prompt.out(),
                        "Let's add some cattle",
                        "add",
                        &LIVESTOCK_LABELS,
                    )?;
                    let key = self.prompt.choose(LIVESTOCK_LABELS.len())?;
                    if let Some(animal) = menu_pick(key, Entity::livestock) {
                        if habitat.add_livestock(site, animal) {
                            self.prompt.say(&format!("You added a {}.", animal.name()))?;
                        }
                        return Ok(());
                    }
                }
            }
        }
    }

    fn rover_loop(&mut self, habitat: &mut Habitat, mut at: Coord) -> Result<(), SessionError> {
        while let Some(direction) = self.direction("Space Rover")? {
            let step = habitat.step_rover(at, direction)?;
            match step {
                RoverStep::Moved { .. } => {}
                RoverStep::DestroyedRock { .. } => self
                    .prompt
                    .say("We found a plain rock, Rover will destroy it now.")?,
                RoverStep::CollectedMineral { .. } => self
                    .prompt
                    .say("We found a mineral, Rover will collect it now.")?,
                RoverStep::Blocked(blocked) => self.say_blocked(blocked)?,
            }
            if let Some(to) = step.destination() {
                at = to;
            }
            self.show_map(habitat)?;
        }
        Ok(())
    }

    fn fauna_loop(&mut self, habitat: &mut Habitat, mut at: Coord) -> Result<(), SessionError> {
        while let Some(direction) = self.direction("Martian animal")? {
            let step = habitat.step_fauna(at, direction)?;
            match &step {
                FaunaStep::Moved { .. } => {}
                FaunaStep::Consumed { prey, health, .. } => {
                    let verb = if prey.is_flora() { "eaten" } else { "killed" };
                    self.prompt.say(&format!(
                        "The {} was {verb} by the Martian animal. Present Health: {health}",
                        prey.name()
                    ))?;
                }
                FaunaStep::Fought(fight) => {
                    self.prompt.say("Martian animal and Dog have entered a fight")?;
                    for round in &fight.duel.rounds {
                        self.prompt.say(&format!(
                            "Martian animal attacked dog. Health of dog reduced by 2, Present Health: {}",
                            round.defender_health
                        ))?;
                        match round.attacker_health {
                            None => self.prompt.say("Dog died")?,
                            Some(health) => self.prompt.say(&format!(
                                "Dog attacked Martian animal. Martian animal's health reduced by 2, Present Health: {health}"
                            ))?,
                        }
                    }
                    if fight.duel.winner == Side::Defender {
                        self.prompt.say("Martian animal died")?;
                    }
                }
                FaunaStep::Blocked(blocked) => self.say_blocked(*blocked)?,
            }
            self.show_map(habitat)?;
            match step.position_after(at) {
                Some(next) => at = next,
                None => break,
            }
        }
        Ok(())
    }

    fn say_blocked(&mut self, blocked: Blocked) -> Result<(), SessionError> {
        match blocked {
            Blocked::Boundary => self.prompt.say("Invalid Location, Boundary reached."),
            Blocked::Occupied(_) => self.prompt.say("You cannot move to this location."),
        }
    }

    fn show_map(&mut self, habitat: &Habitat) -> Result<(), SessionError> {
        render::write_map(self.prompt.out(), &habitat.grid)?;
        Ok(())
    }

    fn show_history(&mut self) -> Result<(), SessionError> {
        let path = self.config.history_log.clone();
        self.prompt.say(&path.display().to_string())?;
        match history::read_history(&path) {
            Ok(records) => render::write_history(self.prompt.out(), &records)?,
            Err(e) => self.prompt.say(&e.to_string())?,
        }
        Ok(())
    }

    fn save(&mut self, habitat: &Habitat) -> Result<Option<PathBuf>, SessionError> {
        self.prompt.say("Enter a filename for saving Martian Land Map")?;
        let name = self.prompt.text()?;
        if name.is_empty() {
            self.prompt.say("Cannot create file for Martian Land Map.")?;
            return Ok(None);
        }
        let path = PathBuf::from(name);
        match persistence::save_grid(&habitat.grid, &path) {
            Ok(()) => Ok(Some(path)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "grid save failed");
                self.prompt.say("Cannot create file for Martian Land Map.")?;
                Ok(None)
            }
        }
    }

    fn record_history(&self, habitat: &Habitat) {
        let record = RunRecord::from_report(&habitat.report());
        if let Err(e) = history::append_record(&self.config.history_log, &record) {
            tracing::warn!(
                path = %self.config.history_log.display(),
                error = %e,
                "could not append history record"
            );
        }
    }
}

fn menu_pick(key: usize, lookup: fn(u8) -> Option<Entity>) -> Option<Entity> {
    u8::try_from(key).ok().and_then(lookup)
}
