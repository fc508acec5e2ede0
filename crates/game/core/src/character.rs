//! The combatant entity.
//!
//! A [`Character`] owns its attributes and combat state and exposes the
//! primitive transitions every action is built from: taking damage,
//! regenerating, levelling up and spending mana. Each transition returns a
//! small report so presentation layers never need to diff state.

use core::fmt;

use crate::attributes::{Attribute, Attributes};
use crate::class::CharacterClass;
use crate::config::ArenaConfig;
use crate::error::{ArenaError, ErrorSeverity};

/// Errors raised while constructing a character.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CharacterError {
    #[error("character name must not be empty")]
    EmptyName,
}

impl ArenaError for CharacterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // The presenter validates names before constructing; reaching
            // this means the caller skipped that check.
            CharacterError::EmptyName => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CharacterError::EmptyName => "CHARACTER_EMPTY_NAME",
        }
    }
}

/// Result of routing damage through a character's shield.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageReport {
    /// Damage absorbed by the shield.
    pub blocked: f64,
    /// Damage that reached health (before clamping at zero).
    pub applied: f64,
    /// Health after the hit.
    pub health_after: f64,
}

/// Amounts actually regained by end-of-action regeneration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegenReport {
    pub hp: f64,
    pub mana: f64,
}

/// Result of a level-up.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUpReport {
    pub attribute: Attribute,
    /// Attribute value after the increase.
    pub new_value: u32,
    /// Health gained as a side effect (strength only).
    pub health_gained: f64,
}

/// One combatant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    name: String,
    class: CharacterClass,
    attributes: Attributes,

    health: f64,
    mana: f64,
    shield_strength: f64,
    evasion_bonus: f64,

    // Per-character rule constants, fixed at construction.
    max_mana: f64,
    hp_regen_per_turn: f64,
    mana_regen_per_turn: f64,
}

impl Character {
    /// Create a fresh character of the given class.
    ///
    /// The name is stored as given. Empty and whitespace-only names are
    /// rejected.
    pub fn new(name: impl Into<String>, class: CharacterClass) -> Result<Self, CharacterError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CharacterError::EmptyName);
        }

        let attributes = class.base_attributes();
        Ok(Self {
            name,
            class,
            attributes,
            health: ArenaConfig::starting_health(attributes.strength),
            mana: ArenaConfig::MAX_MANA,
            shield_strength: 0.0,
            evasion_bonus: 0.0,
            max_mana: ArenaConfig::MAX_MANA,
            hp_regen_per_turn: ArenaConfig::HP_REGEN_PER_TURN,
            mana_regen_per_turn: ArenaConfig::MANA_REGEN_PER_TURN,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> CharacterClass {
        self.class
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, attribute: Attribute) -> u32 {
        self.attributes.get(attribute)
    }

    pub fn strength(&self) -> u32 {
        self.attributes.strength
    }

    pub fn agility(&self) -> u32 {
        self.attributes.agility
    }

    pub fn intelligence(&self) -> u32 {
        self.attributes.intelligence
    }

    pub fn magick_ability(&self) -> u32 {
        self.attributes.magick_ability
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn mana(&self) -> f64 {
        self.mana
    }

    pub fn max_mana(&self) -> f64 {
        self.max_mana
    }

    pub fn shield_strength(&self) -> f64 {
        self.shield_strength
    }

    pub fn evasion_bonus(&self) -> f64 {
        self.evasion_bonus
    }

    pub fn hp_regen_per_turn(&self) -> f64 {
        self.hp_regen_per_turn
    }

    pub fn mana_regen_per_turn(&self) -> f64 {
        self.mana_regen_per_turn
    }

    /// A character is defeated once health reaches zero.
    pub fn is_defeated(&self) -> bool {
        self.health <= 0.0
    }

    /// Apply incoming damage, shield first.
    ///
    /// The shield absorbs up to its full strength and is depleted by what it
    /// blocks; the remainder comes off health, which never drops below zero.
    pub fn take_damage(&mut self, damage: f64) -> DamageReport {
        let mut remaining = damage.max(0.0);
        let mut blocked = 0.0;

        if self.shield_strength > 0.0 {
            blocked = remaining.min(self.shield_strength);
            self.shield_strength -= blocked;
            remaining -= blocked;
        }

        self.health = (self.health - remaining).max(0.0);

        DamageReport {
            blocked,
            applied: remaining,
            health_after: self.health,
        }
    }

    /// Regain the fixed per-turn health. Health has no upper bound.
    pub fn regenerate_hp(&mut self) -> f64 {
        self.health += self.hp_regen_per_turn;
        self.hp_regen_per_turn
    }

    /// Regain per-turn mana, capped at max mana. Returns the amount gained.
    pub fn regenerate_mana(&mut self) -> f64 {
        let before = self.mana;
        self.mana = (self.mana + self.mana_regen_per_turn).min(self.max_mana);
        self.mana - before
    }

    /// Health then mana regeneration.
    pub fn regenerate(&mut self) -> RegenReport {
        let hp = self.regenerate_hp();
        let mana = self.regenerate_mana();
        RegenReport { hp, mana }
    }

    /// Raise one attribute by the level-up step.
    ///
    /// Strength is the only attribute with a secondary effect: it also grants
    /// health.
    pub fn level_up(&mut self, attribute: Attribute) -> LevelUpReport {
        let new_value = self.attributes.raise(attribute, ArenaConfig::LEVEL_UP_STEP);
        let health_gained = match attribute {
            Attribute::Strength => {
                self.health += ArenaConfig::STRENGTH_LEVEL_UP_HEALTH;
                ArenaConfig::STRENGTH_LEVEL_UP_HEALTH
            }
            Attribute::Agility | Attribute::Intelligence | Attribute::MagickAbility => 0.0,
        };

        LevelUpReport {
            attribute,
            new_value,
            health_gained,
        }
    }

    /// Spend mana if enough is available. Returns whether it was spent.
    pub(crate) fn try_spend_mana(&mut self, cost: f64) -> bool {
        if self.mana < cost {
            return false;
        }
        self.mana = (self.mana - cost).max(0.0);
        true
    }

    /// Overwrite the shield (spells never stack).
    pub(crate) fn set_shield_strength(&mut self, strength: f64) {
        self.shield_strength = strength.max(0.0);
    }

    /// Overwrite the evasion bonus (spells never stack).
    pub(crate) fn set_evasion_bonus(&mut self, bonus: f64) {
        self.evasion_bonus = bonus.max(0.0);
    }

    /// Verify the resource invariants.
    ///
    /// Returns a short description of the first violated invariant.
    pub fn check_invariants(&self) -> Result<(), &'static str> {
        if self.health.is_nan() || self.health < 0.0 {
            return Err("health is negative");
        }
        if self.mana.is_nan() || self.mana < 0.0 {
            return Err("mana is negative");
        }
        if self.mana > self.max_mana {
            return Err("mana exceeds max mana");
        }
        if self.shield_strength.is_nan() || self.shield_strength < 0.0 {
            return Err("shield strength is negative");
        }
        if self.evasion_bonus.is_nan() || self.evasion_bonus < 0.0 {
            return Err("evasion bonus is negative");
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn with_health(mut self, health: f64) -> Self {
        self.health = health;
        self
    }

    #[cfg(test)]
    pub(crate) fn with_mana(mut self, mana: f64) -> Self {
        self.mana = mana;
        self
    }

    #[cfg(test)]
    pub(crate) fn with_shield(mut self, shield: f64) -> Self {
        self.shield_strength = shield;
        self
    }
}

/// Renders the stat line, e.g.
/// `Conan, Str:10, Agi:8, Int:2, Mag:0, HP:120, Mana:100/100`.
impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for attribute in Attribute::ALL {
            write!(f, ", {}:{}", attribute.short_label(), self.attribute(attribute))?;
        }
        write!(f, ", HP:{}, Mana:{}/{}", self.health, self.mana, self.max_mana)
    }
}
