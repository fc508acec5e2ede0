//! Deterministic rules for the two-player battle arena.
//!
//! `arena-core` defines the canonical combat rules (characters, attacks,
//! spells, regeneration, level-ups) and exposes pure APIs that never block on
//! input. Every state mutation of a running match flows through
//! [`engine::Battle`], which owns both fighters and a single
//! [`rng::RandomSource`]; presentation layers consume the structured
//! [`engine::TurnOutcome`] it returns.
pub mod attributes;
pub mod character;
pub mod class;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod rng;
pub mod spell;

pub use attributes::{Attribute, Attributes};
pub use character::{Character, CharacterError, DamageReport, LevelUpReport, RegenReport};
pub use class::CharacterClass;
pub use combat::{AttackReport, CombatEngine};
pub use config::ArenaConfig;
pub use engine::{Battle, BattleError, BattleEvent, Command, Side, TurnOutcome};
pub use error::{ArenaError, ErrorSeverity};
pub use rng::{PcgRng, RandomSource, ScriptedRng};
pub use spell::{Spell, SpellEffect, SpellReport};
