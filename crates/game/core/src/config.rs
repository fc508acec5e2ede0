/// Rule constants for a match.
///
/// The arena has a single, fixed rule set. Characters copy the per-character
/// values (max mana, regeneration rates) at construction so every fighter
/// carries its own constants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArenaConfig;

impl ArenaConfig {
    // ===== resources =====
    pub const MAX_MANA: f64 = 100.0;
    pub const HP_REGEN_PER_TURN: f64 = 2.0;
    pub const MANA_REGEN_PER_TURN: f64 = 5.0;
    pub const SPELL_MANA_COST: f64 = 20.0;

    // ===== health =====
    /// Health every character starts with before the strength bonus.
    pub const BASE_HEALTH: f64 = 100.0;
    /// Extra starting health per point of strength.
    pub const HEALTH_PER_STRENGTH: f64 = 2.0;

    // ===== progression =====
    /// Points added to an attribute by a single level-up.
    pub const LEVEL_UP_STEP: u32 = 5;
    /// Health granted alongside a strength level-up.
    pub const STRENGTH_LEVEL_UP_HEALTH: f64 = 5.0;

    // ===== rolls =====
    /// Percentage rolls are drawn from `[0, ROLL_SIDES)`.
    pub const ROLL_SIDES: i32 = 100;
    /// Crit chance (percent) is `intelligence / CRIT_DIVISOR`.
    pub const CRIT_DIVISOR: u32 = 5;
    pub const CRIT_MULTIPLIER: f64 = 2.0;

    // ===== spells =====
    /// Warrior shield strength per point of strength.
    pub const SHIELD_PER_STRENGTH: f64 = 0.5;
    /// Evasion bonus granted by the assassin spell.
    pub const EVASION_BONUS: f64 = 0.8;
    /// Fireball scales magick ability by 1.5, expressed in tenths.
    pub const FIREBALL_SCALE_TENTHS: u32 = 15;
    /// Fireball multiplier draw in tenths, half-open.
    pub const FIREBALL_MULTIPLIER_TENTHS: (i32, i32) = (5, 10);

    /// Starting health for a given strength.
    pub fn starting_health(strength: u32) -> f64 {
        Self::BASE_HEALTH + f64::from(strength) * Self::HEALTH_PER_STRENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_health_scales_with_strength() {
        assert_eq!(ArenaConfig::starting_health(0), 100.0);
        assert_eq!(ArenaConfig::starting_health(10), 120.0);
        assert_eq!(ArenaConfig::starting_health(4), 108.0);
    }
}
