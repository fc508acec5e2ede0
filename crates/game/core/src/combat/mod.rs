//! Combat resolution system.
//!
//! Pure functions compute damage and roll checks; [`CombatEngine`] wires them
//! to a [`RandomSource`](crate::rng::RandomSource) and applies the results to
//! the two characters involved.
//!
//! # Core Functions
//!
//! - `calculate_damage`: class damage roll, rounded up to an even value
//! - `crit_chance` / `dodge_chance`: percentage thresholds for the two checks
//! - `resolve_attack`: complete attack (damage, crit, dodge, shield)
//! - `apply_damage`: shield absorption then health reduction (clamped to 0)

pub mod damage;
pub mod engine;
pub mod hit;
pub mod result;

pub use crate::character::{DamageReport, RegenReport};
pub use damage::{apply_damage, calculate_damage, damage_from_roll, fireball_damage};
pub use engine::CombatEngine;
pub use hit::{crit_chance, dodge_chance, is_critical, is_dodged};
pub use result::{AttackReport, resolve_attack};
