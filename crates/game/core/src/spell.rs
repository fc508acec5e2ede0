//! Class spells.
//!
//! Each class has exactly one spell. A cast costs mana only when it succeeds;
//! regeneration runs after every cast attempt, successful or not.

use crate::character::{Character, DamageReport, RegenReport};
use crate::class::CharacterClass;
use crate::combat::damage::{
    apply_damage, calculate_damage, fireball_damage, roll_multiplier_tenths,
};
use crate::config::ArenaConfig;
use crate::rng::RandomSource;

/// The spell a class casts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spell {
    /// Warrior: shield worth half the caster's strength.
    Shield,
    /// Assassin: flat evasion bonus.
    Evasion,
    /// Mage: magick damage that ignores crit and dodge checks.
    Fireball,
    /// Skirmisher: a weapon-damage strike that cannot miss.
    #[strum(to_string = "Quick Strike")]
    QuickStrike,
}

impl Spell {
    pub const fn for_class(class: CharacterClass) -> Self {
        match class {
            CharacterClass::Warrior => Spell::Shield,
            CharacterClass::Assassin => Spell::Evasion,
            CharacterClass::Mage => Spell::Fireball,
            CharacterClass::Skirmisher => Spell::QuickStrike,
        }
    }
}

/// What a cast attempt did.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellEffect {
    /// Not enough mana; nothing happened and no mana was spent.
    InsufficientMana { available: f64, cost: f64 },
    /// Caster's shield was set (not stacked) to `strength`.
    Shield { strength: f64 },
    /// Caster's evasion bonus was set (not stacked) to `bonus`.
    Evasion { bonus: f64 },
    /// Fireball hit the target.
    Fireball { damage: f64, mitigation: DamageReport },
    /// Quick strike hit the target.
    QuickStrike { damage: f64, mitigation: DamageReport },
}

impl SpellEffect {
    pub fn succeeded(&self) -> bool {
        !matches!(self, SpellEffect::InsufficientMana { .. })
    }
}

/// Complete result of a cast attempt, including the trailing regeneration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellReport {
    pub spell: Spell,
    pub effect: SpellEffect,
    /// Regeneration applied to the caster after the attempt.
    pub regen: RegenReport,
    /// Caster mana once the cast and regeneration finished.
    pub caster_mana_after: f64,
}

/// Cast the actor's class spell at the target.
pub fn cast_spell(
    actor: &mut Character,
    target: &mut Character,
    rng: &mut impl RandomSource,
) -> SpellReport {
    let spell = Spell::for_class(actor.class());

    let effect = if actor.mana() < ArenaConfig::SPELL_MANA_COST {
        tracing::debug!(
            caster = actor.name(),
            mana = actor.mana(),
            cost = ArenaConfig::SPELL_MANA_COST,
            "not enough mana to cast"
        );
        SpellEffect::InsufficientMana {
            available: actor.mana(),
            cost: ArenaConfig::SPELL_MANA_COST,
        }
    } else {
        let effect = resolve_effect(spell, actor, target, rng);
        actor.try_spend_mana(ArenaConfig::SPELL_MANA_COST);
        tracing::debug!(caster = actor.name(), %spell, ?effect, "spell cast");
        effect
    };

    let regen = actor.regenerate();

    SpellReport {
        spell,
        effect,
        regen,
        caster_mana_after: actor.mana(),
    }
}

fn resolve_effect(
    spell: Spell,
    actor: &mut Character,
    target: &mut Character,
    rng: &mut impl RandomSource,
) -> SpellEffect {
    match spell {
        Spell::Shield => {
            let strength = f64::from(actor.strength()) * ArenaConfig::SHIELD_PER_STRENGTH;
            actor.set_shield_strength(strength);
            SpellEffect::Shield { strength }
        }
        Spell::Evasion => {
            actor.set_evasion_bonus(ArenaConfig::EVASION_BONUS);
            SpellEffect::Evasion {
                bonus: ArenaConfig::EVASION_BONUS,
            }
        }
        Spell::Fireball => {
            let (min, max) = ArenaConfig::FIREBALL_MULTIPLIER_TENTHS;
            let tenths = roll_multiplier_tenths(min, max, rng);
            let damage = fireball_damage(actor.magick_ability(), tenths);
            let mitigation = apply_damage(target, damage);
            SpellEffect::Fireball { damage, mitigation }
        }
        Spell::QuickStrike => {
            // Weapon damage is already a whole number; rounding keeps the
            // strike integral even if that ever changes.
            let damage = calculate_damage(actor, rng).round();
            let mitigation = apply_damage(target, damage);
            SpellEffect::QuickStrike { damage, mitigation }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::hit::dodge_chance;
    use crate::rng::ScriptedRng;

    fn new(name: &str, class: CharacterClass) -> Character {
        Character::new(name, class).unwrap()
    }

    #[test]
    fn warrior_shield_is_half_strength() {
        let mut warrior = new("W", CharacterClass::Warrior).with_mana(60.0);
        let mut mage = new("M", CharacterClass::Mage);
        let report = cast_spell(&mut warrior, &mut mage, &mut ScriptedRng::default());

        assert_eq!(report.spell, Spell::Shield);
        assert_eq!(report.effect, SpellEffect::Shield { strength: 5.0 });
        assert_eq!(warrior.shield_strength(), 5.0);
        // -20 for the cast, +5 regeneration
        assert_eq!(warrior.mana(), 45.0);
        assert_eq!(report.caster_mana_after, 45.0);
        assert_eq!(warrior.health(), 122.0);
        assert_eq!(mage.health(), 108.0);
    }

    #[test]
    fn shield_overwrites_instead_of_stacking() {
        let mut warrior = new("W", CharacterClass::Warrior);
        let mut mage = new("M", CharacterClass::Mage);
        let mut rng = ScriptedRng::default();
        cast_spell(&mut warrior, &mut mage, &mut rng);
        cast_spell(&mut warrior, &mut mage, &mut rng);
        assert_eq!(warrior.shield_strength(), 5.0);
    }

    #[test]
    fn assassin_evasion_feeds_dodge_chance() {
        let mut assassin = new("A", CharacterClass::Assassin);
        let mut warrior = new("W", CharacterClass::Warrior);
        let report = cast_spell(&mut assassin, &mut warrior, &mut ScriptedRng::default());

        assert_eq!(report.effect, SpellEffect::Evasion { bonus: 0.8 });
        assert_eq!(assassin.evasion_bonus(), 0.8);
        // Floored when the opponent attacks: agility 10 + floor(0.8)
        assert_eq!(dodge_chance(assassin.agility(), assassin.evasion_bonus()), 10);
    }

    #[test]
    fn mage_fireball_bypasses_checks() {
        let mut mage = new("M", CharacterClass::Mage);
        let mut warrior = new("W", CharacterClass::Warrior);
        // Only one draw: the fireball multiplier 0.9 → round(8 × 1.5 × 0.9) = 11
        let mut rng = ScriptedRng::new([9]);
        let report = cast_spell(&mut mage, &mut warrior, &mut rng);

        match report.effect {
            SpellEffect::Fireball { damage, mitigation } => {
                assert_eq!(damage, 11.0);
                assert_eq!(mitigation.health_after, 109.0);
            }
            other => panic!("unexpected effect {other:?}"),
        }
        assert_eq!(warrior.health(), 109.0);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn fireball_is_absorbed_by_shield() {
        let mut mage = new("M", CharacterClass::Mage);
        let mut warrior = new("W", CharacterClass::Warrior).with_shield(5.0);
        let mut rng = ScriptedRng::new([5]);
        let report = cast_spell(&mut mage, &mut warrior, &mut rng);

        match report.effect {
            SpellEffect::Fireball { damage, mitigation } => {
                assert_eq!(damage, 6.0);
                assert_eq!(mitigation.blocked, 5.0);
                assert_eq!(mitigation.applied, 1.0);
            }
            other => panic!("unexpected effect {other:?}"),
        }
        assert_eq!(warrior.health(), 119.0);
        assert_eq!(warrior.shield_strength(), 0.0);
    }

    #[test]
    fn skirmisher_quick_strike_uses_weapon_damage() {
        let mut skirmisher = new("S", CharacterClass::Skirmisher);
        let mut mage = new("M", CharacterClass::Mage);
        // 9 × 1.0 = 9 → 10
        let mut rng = ScriptedRng::new([10]);
        let report = cast_spell(&mut skirmisher, &mut mage, &mut rng);

        match report.effect {
            SpellEffect::QuickStrike { damage, .. } => assert_eq!(damage, 10.0),
            other => panic!("unexpected effect {other:?}"),
        }
        assert_eq!(mage.health(), 98.0);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn insufficient_mana_fails_but_still_regenerates() {
        let mut mage = new("M", CharacterClass::Mage).with_mana(15.0);
        let mut warrior = new("W", CharacterClass::Warrior);
        let report = cast_spell(&mut mage, &mut warrior, &mut ScriptedRng::new([9]));

        assert_eq!(
            report.effect,
            SpellEffect::InsufficientMana {
                available: 15.0,
                cost: 20.0
            }
        );
        assert!(!report.effect.succeeded());
        assert_eq!(mage.mana(), 20.0);
        assert_eq!(mage.health(), 110.0);
        assert_eq!(report.regen, RegenReport { hp: 2.0, mana: 5.0 });
        assert_eq!(warrior.health(), 120.0);
        assert_eq!(warrior.shield_strength(), 0.0);
    }

    #[test]
    fn exactly_enough_mana_succeeds() {
        let mut warrior = new("W", CharacterClass::Warrior).with_mana(20.0);
        let mut mage = new("M", CharacterClass::Mage);
        let report = cast_spell(&mut warrior, &mut mage, &mut ScriptedRng::default());
        assert!(report.effect.succeeded());
        assert_eq!(warrior.mana(), 5.0);
    }

    #[test]
    fn spell_names() {
        assert_eq!(Spell::QuickStrike.to_string(), "Quick Strike");
        assert_eq!(Spell::for_class(CharacterClass::Mage), Spell::Fireball);
    }
}
