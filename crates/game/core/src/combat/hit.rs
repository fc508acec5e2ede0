//! Critical-hit and dodge checks.
//!
//! Both checks compare a percentage roll drawn from `[0, 100)` against a
//! threshold: the roll must be strictly below the threshold to trigger.

use crate::config::ArenaConfig;

/// Crit chance in percent: `intelligence / 5` (integer division).
pub fn crit_chance(intelligence: u32) -> i64 {
    i64::from(intelligence / ArenaConfig::CRIT_DIVISOR)
}

/// Dodge chance in percent: `agility + floor(evasion_bonus)`.
///
/// Evasion bonuses below 1.0 therefore do not move the threshold.
pub fn dodge_chance(agility: u32, evasion_bonus: f64) -> i64 {
    i64::from(agility) + evasion_bonus.max(0.0).floor() as i64
}

/// Check if a crit roll lands.
pub fn is_critical(roll: i32, crit_chance: i64) -> bool {
    i64::from(roll) < crit_chance
}

/// Check if the defender dodges a hit roll.
pub fn is_dodged(hit_roll: i32, dodge_chance: i64) -> bool {
    i64::from(hit_roll) < dodge_chance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crit_chance_uses_integer_division() {
        assert_eq!(crit_chance(2), 0);
        assert_eq!(crit_chance(5), 1);
        assert_eq!(crit_chance(7), 1);
        assert_eq!(crit_chance(12), 2);
    }

    #[test]
    fn zero_crit_chance_never_crits() {
        assert!(!is_critical(0, crit_chance(4)));
    }

    #[test]
    fn crit_requires_roll_strictly_below() {
        assert!(is_critical(0, 1));
        assert!(!is_critical(1, 1));
    }

    #[test]
    fn dodge_floors_the_evasion_bonus() {
        assert_eq!(dodge_chance(10, 0.8), 10);
        assert_eq!(dodge_chance(10, 1.9), 11);
        assert_eq!(dodge_chance(3, 0.0), 3);
    }

    #[test]
    fn dodge_requires_roll_strictly_below() {
        assert!(is_dodged(9, 10));
        assert!(!is_dodged(10, 10));
    }
}
