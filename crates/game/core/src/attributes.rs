//! Base attributes.
//!
//! Attributes are plain integers set once from the class and only ever raised
//! by level-ups, so they are stored unsigned and grown with saturating adds.

/// Individual attribute, used for level-up selection and damage profiles.
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
pub enum Attribute {
    Strength,
    Agility,
    Intelligence,
    #[strum(serialize = "MagickAbility", to_string = "Magick Ability")]
    MagickAbility,
}

impl Attribute {
    /// All attributes in level-up menu order.
    pub const ALL: [Attribute; 4] = [
        Attribute::Strength,
        Attribute::Agility,
        Attribute::Intelligence,
        Attribute::MagickAbility,
    ];

    /// Three-letter label used in stat lines.
    pub const fn short_label(&self) -> &'static str {
        match self {
            Attribute::Strength => "Str",
            Attribute::Agility => "Agi",
            Attribute::Intelligence => "Int",
            Attribute::MagickAbility => "Mag",
        }
    }
}

/// The four base attributes of a character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub strength: u32,
    pub agility: u32,
    pub intelligence: u32,
    pub magick_ability: u32,
}

impl Attributes {
    pub const fn new(strength: u32, agility: u32, intelligence: u32, magick_ability: u32) -> Self {
        Self {
            strength,
            agility,
            intelligence,
            magick_ability,
        }
    }

    pub const fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Agility => self.agility,
            Attribute::Intelligence => self.intelligence,
            Attribute::MagickAbility => self.magick_ability,
        }
    }

    /// Raises one attribute and returns its new value.
    pub fn raise(&mut self, attribute: Attribute, amount: u32) -> u32 {
        let slot = match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Agility => &mut self.agility,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::MagickAbility => &mut self.magick_ability,
        };
        *slot = slot.saturating_add(amount);
        *slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_only_touches_selected_attribute() {
        let mut attrs = Attributes::new(10, 8, 2, 0);
        assert_eq!(attrs.raise(Attribute::Agility, 5), 13);
        assert_eq!(attrs, Attributes::new(10, 13, 2, 0));
    }

    #[test]
    fn get_reads_matching_field() {
        let attrs = Attributes::new(1, 2, 3, 4);
        let values: Vec<u32> = Attribute::ALL.iter().map(|a| attrs.get(*a)).collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(Attribute::MagickAbility.to_string(), "Magick Ability");
        assert_eq!(
            "magickability".parse::<Attribute>().unwrap(),
            Attribute::MagickAbility
        );
        assert_eq!(Attribute::Intelligence.short_label(), "Int");
    }
}
