//! Attack results and attack resolution.

use crate::character::Character;
use crate::config::ArenaConfig;
use crate::rng::RandomSource;

use super::damage::{apply_damage, calculate_damage};
use super::hit::{crit_chance, dodge_chance, is_critical, is_dodged};

/// Result of an attack.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    /// Crit roll succeeded (damage doubled).
    pub was_critical: bool,
    /// Target dodged; no damage applied.
    pub was_miss: bool,
    /// Rolled damage after the crit multiplier, whether or not it landed.
    pub rolled_damage: f64,
    /// Damage delivered to the target (before its shield). Zero on a miss.
    pub damage_dealt: f64,
    /// Portion of `damage_dealt` absorbed by the target's shield.
    pub shield_blocked: f64,
    /// Target health once the attack resolved.
    pub target_health_after: f64,
}

/// Resolve a complete attack.
///
/// Draw order is fixed: damage multiplier, crit roll, hit roll.
///
/// 1. Roll class damage
/// 2. Crit check against `intelligence / 5`; a crit doubles damage
/// 3. Dodge check against the target's `agility + floor(evasion_bonus)`
/// 4. On a hit, apply damage through the target's shield
pub fn resolve_attack(
    actor: &Character,
    target: &mut Character,
    rng: &mut impl RandomSource,
) -> AttackReport {
    let mut damage = calculate_damage(actor, rng);

    let crit_roll = rng.next_int(0, ArenaConfig::ROLL_SIDES);
    let was_critical = is_critical(crit_roll, crit_chance(actor.intelligence()));
    if was_critical {
        damage *= ArenaConfig::CRIT_MULTIPLIER;
    }

    let hit_roll = rng.next_int(0, ArenaConfig::ROLL_SIDES);
    let dodge = dodge_chance(target.agility(), target.evasion_bonus());
    if is_dodged(hit_roll, dodge) {
        tracing::debug!(
            actor = actor.name(),
            target = target.name(),
            hit_roll,
            dodge,
            "attack dodged"
        );
        return AttackReport {
            was_critical,
            was_miss: true,
            rolled_damage: damage,
            damage_dealt: 0.0,
            shield_blocked: 0.0,
            target_health_after: target.health(),
        };
    }

    let applied = apply_damage(target, damage);
    tracing::debug!(
        actor = actor.name(),
        target = target.name(),
        damage,
        was_critical,
        health_after = applied.health_after,
        "attack landed"
    );

    AttackReport {
        was_critical,
        was_miss: false,
        rolled_damage: damage,
        damage_dealt: damage,
        shield_blocked: applied.blocked,
        target_health_after: applied.health_after,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::CharacterClass;
    use crate::rng::{PcgRng, ScriptedRng};

    fn fighters() -> (Character, Character) {
        (
            Character::new("Warrior", CharacterClass::Warrior).unwrap(),
            Character::new("Mage", CharacterClass::Mage).unwrap(),
        )
    }

    #[test]
    fn normal_hit_applies_damage() {
        let (warrior, mut mage) = fighters();
        // multiplier 1.0 → 10 damage; crit roll 99 (warrior crit chance 0); hit roll 50 ≥ 3
        let mut rng = ScriptedRng::new([10, 99, 50]);
        let report = resolve_attack(&warrior, &mut mage, &mut rng);

        assert!(!report.was_critical);
        assert!(!report.was_miss);
        assert_eq!(report.damage_dealt, 10.0);
        assert_eq!(report.target_health_after, 98.0);
        assert_eq!(mage.health(), 98.0);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn critical_hit_doubles_damage() {
        let (mut warrior, mage) = fighters();
        // Intelligence 7 → crit chance 1: mage crits only on roll 0.
        // 8 × 1.0 = 8 → 16 after crit; hit roll 99 ≥ warrior agility 8.
        let mut rng = ScriptedRng::new([10, 0, 99]);
        let report = resolve_attack(&mage, &mut warrior, &mut rng);

        assert!(report.was_critical);
        assert!(!report.was_miss);
        assert_eq!(report.damage_dealt, 16.0);
        assert_eq!(warrior.health(), 104.0);
    }

    #[test]
    fn dodged_attack_leaves_target_untouched() {
        let (warrior, mut mage) = fighters();
        // hit roll 2 < mage agility 3
        let mut rng = ScriptedRng::new([10, 99, 2]);
        let report = resolve_attack(&warrior, &mut mage, &mut rng);

        assert!(report.was_miss);
        assert_eq!(report.damage_dealt, 0.0);
        assert_eq!(report.rolled_damage, 10.0);
        assert_eq!(mage.health(), 108.0);
        assert_eq!(report.target_health_after, 108.0);
    }

    #[test]
    fn shield_blocks_part_of_an_attack() {
        let (warrior, mut mage) = fighters();
        mage = mage.with_shield(4.0);
        let mut rng = ScriptedRng::new([10, 99, 50]);
        let report = resolve_attack(&warrior, &mut mage, &mut rng);

        assert_eq!(report.shield_blocked, 4.0);
        assert_eq!(mage.health(), 102.0);
        assert_eq!(mage.shield_strength(), 0.0);
    }

    #[test]
    fn dodge_rate_tracks_target_agility() {
        // Assassin (agility 10) should dodge roughly 10% of attacks.
        let warrior = Character::new("W", CharacterClass::Warrior).unwrap();
        let mut rng = PcgRng::new(2024);
        let trials = 20_000;
        let mut misses = 0;
        for _ in 0..trials {
            let mut target = Character::new("A", CharacterClass::Assassin).unwrap();
            if resolve_attack(&warrior, &mut target, &mut rng).was_miss {
                misses += 1;
            }
        }
        let rate = f64::from(misses) / f64::from(trials);
        assert!((0.08..0.12).contains(&rate), "dodge rate {rate}");
    }
}
