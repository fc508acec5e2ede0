//! Interactive battle loop.
//!
//! [`ArenaApp`] is generic over its input and output streams so the same loop
//! drives the real terminal (`stdin`/`stdout`) and scripted tests.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use arena_core::{ArenaError, Battle, Character, Command, RandomSource, Side};

use crate::input::{self, InputError, TurnChoice};
use crate::presentation;

pub struct ArenaApp<In, Out> {
    input: In,
    output: Out,
}

impl<In: BufRead, Out: Write> ArenaApp<In, Out> {
    pub fn new(input: In, output: Out) -> Self {
        Self { input, output }
    }

    /// Play one full match and return the winner's final state.
    pub fn run<R: RandomSource>(&mut self, rng: R) -> Result<Character> {
        self.line(&presentation::banner())?;

        let first = self.choose_fighter(Side::First)?;
        let second = self.choose_fighter(Side::Second)?;
        self.line(&presentation::introduce(Side::First, &first))?;
        self.line(&presentation::introduce(Side::Second, &second))?;
        self.line(&presentation::battle_start())?;

        let mut battle = Battle::new(first, second, rng);
        let winner = loop {
            let command = self.choose_command(battle.fighter(battle.active()))?;
            let outcome = battle.execute(command)?;

            for line in presentation::narrate(&outcome, battle.fighters()) {
                self.line(&line)?;
            }
            self.line(&presentation::stat_line(battle.fighters()))?;

            if let Some(winner) = outcome.winner {
                break winner;
            }
        };

        let [first, second] = battle.into_fighters();
        let winner = match winner {
            Side::First => first,
            Side::Second => second,
        };
        self.line(&presentation::winner_line(&winner))?;

        Ok(winner)
    }

    fn choose_fighter(&mut self, side: Side) -> Result<Character> {
        for line in presentation::class_menu(side) {
            self.line(&line)?;
        }
        let class = self.prompt(None, input::parse_class)?;
        let name = self.prompt(Some(presentation::name_prompt()), input::parse_name)?;

        tracing::info!(%side, %class, name = %name, "fighter selected");
        Ok(Character::new(name, class)?)
    }

    fn choose_command(&mut self, fighter: &Character) -> Result<Command> {
        for line in presentation::turn_menu(fighter) {
            self.line(&line)?;
        }

        let command = match self.prompt(None, input::parse_turn_choice)? {
            TurnChoice::Attack => Command::Attack,
            TurnChoice::Spell => Command::CastSpell,
            TurnChoice::LevelUp => {
                self.line(&presentation::level_up_menu())?;
                Command::LevelUp(self.prompt(None, input::parse_attribute)?)
            }
        };
        Ok(command)
    }

    /// Read lines until `parse` accepts one. Recoverable errors are shown and
    /// the prompt repeats; anything else aborts the game.
    fn prompt<T>(
        &mut self,
        text: Option<&str>,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T> {
        loop {
            if let Some(text) = text {
                write!(self.output, "{text}")?;
            }
            self.output.flush()?;

            let parsed = self.read_line().and_then(|line| parse(&line));
            match parsed {
                Ok(value) => return Ok(value),
                Err(err) if err.severity().is_recoverable() => {
                    tracing::debug!(code = err.error_code(), "rejected input");
                    self.line(&err.to_string())?;
                }
                Err(err) => {
                    tracing::error!(code = err.error_code(), %err, "cannot continue");
                    return Err(err).context("no more input");
                }
            }
        }
    }

    /// Read one line. Bytes that are not UTF-8 are replaced rather than
    /// rejected, so a garbled line fails parsing and gets re-prompted.
    fn read_line(&mut self) -> Result<String, InputError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(InputError::EndOfInput);
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}
