//! Damage calculation and application.

use crate::character::{Character, DamageReport};
use crate::class::DamageProfile;
use crate::config::ArenaConfig;
use crate::rng::RandomSource;

// ============================================================================
// Damage Calculation
// ============================================================================

/// Draw a multiplier, in tenths, from a half-open `[min, max)` range.
pub fn roll_multiplier_tenths(
    min_tenths: i32,
    max_tenths: i32,
    rng: &mut impl RandomSource,
) -> u32 {
    rng.next_int(min_tenths, max_tenths).max(0) as u32
}

/// Final weapon damage for an attribute value and multiplier.
///
/// # Formula
///
/// ```text
/// base_damage  = attribute × (multiplier_tenths / 10)
/// final_damage = ceil(base_damage / 2) × 2
/// ```
///
/// Computed in integer tenths so the result is always an exact, even,
/// non-negative integer value.
pub fn damage_from_roll(attribute: u32, multiplier_tenths: u32) -> f64 {
    let base_tenths = u64::from(attribute) * u64::from(multiplier_tenths);
    (base_tenths.div_ceil(20) * 2) as f64
}

/// Roll weapon damage for an actor according to its class profile.
pub fn calculate_damage(actor: &Character, rng: &mut impl RandomSource) -> f64 {
    let DamageProfile {
        primary,
        min_tenths,
        max_tenths,
    } = actor.class().damage_profile();

    let tenths = roll_multiplier_tenths(min_tenths, max_tenths, rng);
    let damage = damage_from_roll(actor.attribute(primary), tenths);

    tracing::debug!(
        actor = actor.name(),
        %primary,
        multiplier_tenths = tenths,
        damage,
        "rolled weapon damage"
    );

    damage
}

/// Fireball damage for a magick ability and multiplier.
///
/// # Formula
///
/// ```text
/// fireball = round(magick × 1.5 × (multiplier_tenths / 10))
/// ```
///
/// Rounding is half-to-even. The product is held in hundredths so ties are
/// detected exactly.
pub fn fireball_damage(magick_ability: u32, multiplier_tenths: u32) -> f64 {
    let hundredths = u64::from(magick_ability)
        * u64::from(ArenaConfig::FIREBALL_SCALE_TENTHS)
        * u64::from(multiplier_tenths);

    let whole = hundredths / 100;
    let fraction = hundredths % 100;
    let rounded = match fraction {
        0..50 => whole,
        50 if whole % 2 == 0 => whole,
        _ => whole + 1,
    };
    rounded as f64
}

// ============================================================================
// Damage Application
// ============================================================================

/// Route damage through the target's shield and into its health.
pub fn apply_damage(target: &mut Character, damage: f64) -> DamageReport {
    let report = target.take_damage(damage);
    if report.blocked > 0.0 {
        tracing::debug!(
            target = target.name(),
            blocked = report.blocked,
            shield_left = target.shield_strength(),
            "shield absorbed damage"
        );
    }
    report
}
