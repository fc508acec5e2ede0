//! Menu input parsing.
//!
//! Players answer numbered menus. This module maps raw lines to the typed
//! choices the engine understands, so the loop in [`crate::app`] never deals
//! with strings beyond reading them.

use arena_core::{ArenaError, Attribute, CharacterClass, ErrorSeverity};

/// Options of the per-turn menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnChoice {
    Attack,
    LevelUp,
    Spell,
}

impl TurnChoice {
    pub const ALL: [TurnChoice; 3] = [TurnChoice::Attack, TurnChoice::LevelUp, TurnChoice::Spell];

    pub fn label(self) -> &'static str {
        match self {
            TurnChoice::Attack => "Attack",
            TurnChoice::LevelUp => "Level Up",
            TurnChoice::Spell => "Spell",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Invalid input. Please enter a valid number.")]
    NotANumber,

    #[error("Invalid choice. Please select a valid option (1-{max}).")]
    OutOfRange { max: usize },

    #[error("Name must not be empty.")]
    EmptyName,

    #[error("input ended before the battle finished")]
    EndOfInput,

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl ArenaError for InputError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            InputError::NotANumber | InputError::OutOfRange { .. } | InputError::EmptyName => {
                ErrorSeverity::Recoverable
            }
            InputError::EndOfInput | InputError::Io(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            InputError::NotANumber => "INPUT_NOT_A_NUMBER",
            InputError::OutOfRange { .. } => "INPUT_OUT_OF_RANGE",
            InputError::EmptyName => "INPUT_EMPTY_NAME",
            InputError::EndOfInput => "INPUT_END_OF_INPUT",
            InputError::Io(_) => "INPUT_IO",
        }
    }
}

/// Pick the entry for a 1-based menu number.
pub fn parse_menu<T: Copy>(line: &str, options: &[T]) -> Result<T, InputError> {
    let number: usize = line.trim().parse().map_err(|_| InputError::NotANumber)?;
    number
        .checked_sub(1)
        .and_then(|index| options.get(index))
        .copied()
        .ok_or(InputError::OutOfRange { max: options.len() })
}

pub fn parse_class(line: &str) -> Result<CharacterClass, InputError> {
    parse_menu(line, &CharacterClass::ALL)
}

pub fn parse_turn_choice(line: &str) -> Result<TurnChoice, InputError> {
    parse_menu(line, &TurnChoice::ALL)
}

pub fn parse_attribute(line: &str) -> Result<Attribute, InputError> {
    parse_menu(line, &Attribute::ALL)
}

pub fn parse_name(line: &str) -> Result<String, InputError> {
    let name = line.trim();
    if name.is_empty() {
        return Err(InputError::EmptyName);
    }
    Ok(name.to_owned())
}
