//! Action operations bound to a randomness source.

use crate::attributes::Attribute;
use crate::character::{Character, LevelUpReport, RegenReport};
use crate::rng::RandomSource;
use crate::spell::{SpellReport, cast_spell};

use super::result::{AttackReport, resolve_attack};

/// Executes single actions between an actor and a target.
///
/// The engine owns the only [`RandomSource`] of a match. It never holds on to
/// characters: each operation borrows the actor and target for its duration.
#[derive(Clone, Debug)]
pub struct CombatEngine<R> {
    rng: R,
}

impl<R: RandomSource> CombatEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Weapon attack with crit and dodge checks.
    pub fn attack(&mut self, actor: &Character, target: &mut Character) -> AttackReport {
        resolve_attack(actor, target, &mut self.rng)
    }

    /// Class spell; regenerates the caster whether or not the cast succeeds.
    pub fn cast_spell(&mut self, actor: &mut Character, target: &mut Character) -> SpellReport {
        cast_spell(actor, target, &mut self.rng)
    }

    pub fn level_up(&mut self, actor: &mut Character, attribute: Attribute) -> LevelUpReport {
        let report = actor.level_up(attribute);
        tracing::debug!(
            actor = actor.name(),
            %attribute,
            new_value = report.new_value,
            "level up"
        );
        report
    }

    /// End-of-turn health and mana regeneration.
    pub fn regenerate(&mut self, actor: &mut Character) -> RegenReport {
        actor.regenerate()
    }
}
