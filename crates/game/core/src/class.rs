//! Character classes and their fixed starting profiles.

use crate::attributes::{Attribute, Attributes};

/// Closed set of playable classes.
///
/// The class is chosen once at character creation and determines:
/// - Starting attributes (and therefore starting health)
/// - Which attribute drives weapon damage, and its multiplier range
/// - The spell cast by [`Command::CastSpell`](crate::Command::CastSpell)
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum CharacterClass {
    /// Heavy hitter; casts a damage-absorbing shield.
    Warrior,
    /// Agile striker; casts an evasion buff.
    Assassin,
    /// Fragile caster; hurls fireballs.
    Mage,
    /// Balanced skirmisher; follows up with a quick strike.
    Skirmisher,
}

/// Weapon damage profile of a class.
///
/// Damage is `primary × multiplier`, where the multiplier is drawn as an
/// integer number of tenths from `[min_tenths, max_tenths)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageProfile {
    pub primary: Attribute,
    pub min_tenths: i32,
    pub max_tenths: i32,
}

impl CharacterClass {
    /// All classes in menu order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Warrior,
        CharacterClass::Assassin,
        CharacterClass::Mage,
        CharacterClass::Skirmisher,
    ];

    /// Fixed starting attributes.
    pub const fn base_attributes(&self) -> Attributes {
        match self {
            CharacterClass::Warrior => Attributes::new(10, 8, 2, 0),
            CharacterClass::Assassin => Attributes::new(8, 10, 5, 0),
            CharacterClass::Mage => Attributes::new(4, 3, 7, 8),
            CharacterClass::Skirmisher => Attributes::new(7, 9, 4, 0),
        }
    }

    pub const fn damage_profile(&self) -> DamageProfile {
        match self {
            CharacterClass::Warrior => DamageProfile {
                primary: Attribute::Strength,
                min_tenths: 6,
                max_tenths: 12,
            },
            CharacterClass::Assassin => DamageProfile {
                primary: Attribute::Agility,
                min_tenths: 8,
                max_tenths: 15,
            },
            CharacterClass::Mage => DamageProfile {
                primary: Attribute::MagickAbility,
                min_tenths: 7,
                max_tenths: 14,
            },
            CharacterClass::Skirmisher => DamageProfile {
                primary: Attribute::Agility,
                min_tenths: 7,
                max_tenths: 14,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn base_attributes_match_class_table() {
        let warrior = CharacterClass::Warrior.base_attributes();
        assert_eq!(
            (warrior.strength, warrior.agility, warrior.intelligence, warrior.magick_ability),
            (10, 8, 2, 0)
        );

        let mage = CharacterClass::Mage.base_attributes();
        assert_eq!(
            (mage.strength, mage.agility, mage.intelligence, mage.magick_ability),
            (4, 3, 7, 8)
        );
    }

    #[test]
    fn every_class_has_a_non_empty_multiplier_range() {
        for class in CharacterClass::iter() {
            let profile = class.damage_profile();
            assert!(profile.min_tenths < profile.max_tenths, "{class}");
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("mage".parse::<CharacterClass>().unwrap(), CharacterClass::Mage);
        assert_eq!(
            "SKIRMISHER".parse::<CharacterClass>().unwrap(),
            CharacterClass::Skirmisher
        );
        assert!("paladin".parse::<CharacterClass>().is_err());
    }

    #[test]
    fn all_lists_classes_in_menu_order() {
        assert_eq!(CharacterClass::ALL.to_vec(), CharacterClass::iter().collect::<Vec<_>>());
    }
}
