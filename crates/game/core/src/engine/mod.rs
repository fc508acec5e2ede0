//! Turn scheduling and command execution.
//!
//! The [`Battle`] is the authoritative reducer for a match. It owns both
//! fighters and the [`CombatEngine`], enforces turn order, and returns a
//! [`TurnOutcome`] describing every step so a presenter can narrate it.
//!
//! Each command runs through the same pipeline:
//! pre_validate → apply → post_validate

mod errors;
mod events;
mod turns;

pub use errors::BattleError;
pub use events::{BattleEvent, TurnOutcome};
pub use turns::{Command, Side};

use crate::character::Character;
use crate::combat::CombatEngine;
use crate::rng::RandomSource;

use turns::pair_mut;

/// A two-player match.
///
/// Turn rules:
/// - Attack, level-up and successful spells consume the turn; the actor then
///   regenerates once and play passes to the opponent.
/// - A spell without enough mana does not consume the turn. The failed cast
///   regenerates the caster and the same side acts again.
/// - The match ends as soon as either fighter's health reaches zero after a
///   full turn.
pub struct Battle<R> {
    fighters: [Character; 2],
    active: Side,
    turn: u32,
    winner: Option<Side>,
    engine: CombatEngine<R>,
}

impl<R: RandomSource> Battle<R> {
    /// Start a match; `first` acts first.
    pub fn new(first: Character, second: Character, rng: R) -> Self {
        tracing::info!(
            first = first.name(),
            first_class = %first.class(),
            second = second.name(),
            second_class = %second.class(),
            "battle started"
        );

        Self {
            fighters: [first, second],
            active: Side::First,
            turn: 1,
            winner: None,
            engine: CombatEngine::new(rng),
        }
    }

    pub fn fighter(&self, side: Side) -> &Character {
        &self.fighters[side.index()]
    }

    pub fn fighters(&self) -> &[Character; 2] {
        &self.fighters
    }

    /// Side whose command will be executed next.
    pub fn active(&self) -> Side {
        self.active
    }

    /// 1-based count of turns started so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Give both fighters back, e.g. to report the final state.
    pub fn into_fighters(self) -> [Character; 2] {
        self.fighters
    }

    /// Execute a command for the active side.
    pub fn execute(&mut self, command: Command) -> Result<TurnOutcome, BattleError> {
        self.pre_validate()?;

        let outcome = self.apply(command);

        self.post_validate()?;

        Ok(outcome)
    }

    fn pre_validate(&self) -> Result<(), BattleError> {
        match self.winner {
            Some(winner) => Err(BattleError::Finished { winner }),
            None => Ok(()),
        }
    }

    fn apply(&mut self, command: Command) -> TurnOutcome {
        let side = self.active;
        let (actor, target) = pair_mut(&mut self.fighters, side);
        let mut events = Vec::new();

        tracing::debug!(
            turn = self.turn,
            %side,
            actor = actor.name(),
            ?command,
            "executing command"
        );

        let turn_consumed = match command {
            Command::Attack => {
                let report = self.engine.attack(actor, target);
                events.push(BattleEvent::Attack { actor: side, report });
                true
            }
            Command::LevelUp(attribute) => {
                let report = self.engine.level_up(actor, attribute);
                events.push(BattleEvent::LevelUp { actor: side, report });
                true
            }
            Command::CastSpell => {
                let report = self.engine.cast_spell(actor, target);
                let succeeded = report.effect.succeeded();
                events.push(BattleEvent::Spell { actor: side, report });
                succeeded
            }
        };

        if !turn_consumed {
            tracing::debug!(%side, "turn not consumed, same side acts again");
            return TurnOutcome {
                actor: side,
                command,
                events,
                turn_consumed,
                winner: None,
            };
        }

        let report = self.engine.regenerate(actor);
        events.push(BattleEvent::Regenerated { actor: side, report });

        let winner = self.check_winner();
        if let Some(winner) = winner {
            events.push(BattleEvent::Defeated {
                side: winner.other(),
            });
            tracing::info!(
                winner = self.fighter(winner).name(),
                turns = self.turn,
                "battle finished"
            );
        } else {
            self.active = side.other();
            self.turn += 1;
        }

        TurnOutcome {
            actor: side,
            command,
            events,
            turn_consumed,
            winner,
        }
    }

    /// If the first fighter has fallen the second wins, otherwise the first.
    fn check_winner(&mut self) -> Option<Side> {
        let winner = if self.fighters[Side::First.index()].is_defeated() {
            Some(Side::Second)
        } else if self.fighters[Side::Second.index()].is_defeated() {
            Some(Side::First)
        } else {
            None
        };
        self.winner = winner;
        winner
    }

    fn post_validate(&self) -> Result<(), BattleError> {
        for fighter in &self.fighters {
            fighter
                .check_invariants()
                .map_err(|detail| BattleError::InvariantViolated {
                    name: fighter.name().to_owned(),
                    detail: detail.to_owned(),
                })?;
        }
        Ok(())
    }
}
