//! Turn order and player commands.

use crate::attributes::Attribute;

/// One of the two seats in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    #[strum(to_string = "Player 1")]
    First,
    #[strum(to_string = "Player 2")]
    Second,
}

impl Side {
    pub const fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// A validated choice for the active player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Attack,
    LevelUp(Attribute),
    CastSpell,
}

/// Borrow both fighters at once: the one acting for `actor` and its opponent.
pub(crate) fn pair_mut<T>(pair: &mut [T; 2], actor: Side) -> (&mut T, &mut T) {
    let (first, second) = pair.split_at_mut(1);
    match actor {
        Side::First => (&mut first[0], &mut second[0]),
        Side::Second => (&mut second[0], &mut first[0]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_alternate() {
        assert_eq!(Side::First.other(), Side::Second);
        assert_eq!(Side::Second.other().other(), Side::Second);
        assert_eq!(Side::Second.index(), 1);
        assert_eq!(Side::First.to_string(), "Player 1");
    }

    #[test]
    fn pair_mut_orders_actor_first() {
        let mut pair = [1, 2];
        let (actor, target) = pair_mut(&mut pair, Side::Second);
        assert_eq!((*actor, *target), (2, 1));
        *actor = 20;
        assert_eq!(pair, [1, 20]);
    }
}
