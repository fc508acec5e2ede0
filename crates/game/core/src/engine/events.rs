//! Structured record of what happened during a turn.

use crate::character::{LevelUpReport, RegenReport};
use crate::combat::AttackReport;
use crate::spell::SpellReport;

use super::turns::{Command, Side};

/// A single step of a turn, in the order it happened.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    Attack { actor: Side, report: AttackReport },
    Spell { actor: Side, report: SpellReport },
    LevelUp { actor: Side, report: LevelUpReport },
    /// End-of-turn regeneration (spell casts carry their own in the report).
    Regenerated { actor: Side, report: RegenReport },
    Defeated { side: Side },
}

/// Complete outcome of one executed command.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOutcome {
    pub actor: Side,
    pub command: Command,
    pub events: Vec<BattleEvent>,
    /// False when the same side must act again (failed spell cast).
    pub turn_consumed: bool,
    /// Set once the command ended the battle.
    pub winner: Option<Side>,
}
