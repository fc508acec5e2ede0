//! Colored narration of battle outcomes.
//!
//! Everything here is a pure function from engine values to display lines;
//! the app decides where the lines are written.

use arena_core::{
    Attribute, AttackReport, BattleEvent, Character, CharacterClass, LevelUpReport, RegenReport,
    Side, SpellEffect, SpellReport, TurnOutcome,
};
use crossterm::style::{Stylize, style};

use crate::input::TurnChoice;

pub fn banner() -> String {
    format!("{}", style("=== Battle Arena ===").magenta().bold())
}

pub fn class_menu(side: Side) -> Vec<String> {
    let options = CharacterClass::ALL
        .iter()
        .enumerate()
        .map(|(index, class)| format!("{}. {class}", index + 1))
        .collect::<Vec<_>>()
        .join("  ");
    vec![format!("{side}, choose your character:"), options]
}

pub fn name_prompt() -> &'static str {
    "Enter your hero's name: "
}

pub fn introduce(side: Side, fighter: &Character) -> String {
    format!("{side}: {} the {}", style(fighter.name()).bold(), fighter.class())
}

pub fn battle_start() -> String {
    format!("{}", style("Battle Start!").yellow().bold())
}

pub fn turn_menu(fighter: &Character) -> Vec<String> {
    let options = TurnChoice::ALL
        .iter()
        .enumerate()
        .map(|(index, choice)| format!("{}. {}", index + 1, choice.label()))
        .collect::<Vec<_>>()
        .join("  ");
    vec![format!("{}'s turn:", style(fighter.name()).bold()), options]
}

pub fn level_up_menu() -> String {
    let options = Attribute::ALL
        .iter()
        .enumerate()
        .map(|(index, attribute)| format!("{}.{attribute}", index + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Choose an attribute to level up: {options}")
}

/// Both fighters' stat lines, first player on the left.
pub fn stat_line(fighters: &[Character; 2]) -> String {
    format!(
        "{} | {}",
        style(&fighters[0]).cyan(),
        style(&fighters[1]).cyan()
    )
}

pub fn winner_line(winner: &Character) -> String {
    format!("{} {}", style(winner.name()).bold(), style("wins!").red().bold())
}

/// Render every event of a turn, in order.
pub fn narrate(outcome: &TurnOutcome, fighters: &[Character; 2]) -> Vec<String> {
    let name = |side: Side| fighters[side.index()].name();
    let mut lines = Vec::new();

    for event in &outcome.events {
        match *event {
            BattleEvent::Attack { actor, report } => {
                narrate_attack(&mut lines, name(actor.other()), &report);
            }
            BattleEvent::Spell { actor, report } => {
                narrate_spell(&mut lines, name(actor), name(actor.other()), &report);
            }
            BattleEvent::LevelUp { actor, report } => {
                lines.push(level_up_line(name(actor), &report));
            }
            BattleEvent::Regenerated { actor, report } => {
                lines.push(regen_line(name(actor), &report));
            }
            BattleEvent::Defeated { side } => {
                lines.push(format!("{} has fallen.", style(name(side)).red()));
            }
        }
    }

    lines
}

fn narrate_attack(lines: &mut Vec<String>, target: &str, report: &AttackReport) {
    if report.was_critical {
        lines.push(format!(
            "{} {} damage dealt.",
            style("CRITICAL HIT!").red().bold(),
            report.rolled_damage
        ));
    }

    if report.was_miss {
        lines.push(format!("{} {}", style("Attack").yellow(), style("missed!").green()));
        return;
    }

    lines.push(format!(
        "{} {}",
        style("Attack").yellow(),
        style(format!("successful! {} damage dealt.", report.damage_dealt)).blue()
    ));
    if report.shield_blocked > 0.0 {
        lines.push(shield_line(target, report.shield_blocked));
    }
    lines.push(enemy_hp_line(report.target_health_after));
}

fn narrate_spell(lines: &mut Vec<String>, caster: &str, target: &str, report: &SpellReport) {
    match report.effect {
        SpellEffect::InsufficientMana { .. } => {
            lines.push(format!(
                "{} {caster}'s turn continues.",
                style("Not enough mana to cast a spell!").red()
            ));
        }
        SpellEffect::Shield { strength } => {
            lines.push(format!(
                "{caster} casts {}! Gains {strength} shield.",
                style(report.spell).blue().bold()
            ));
        }
        SpellEffect::Evasion { .. } => {
            lines.push(format!(
                "{caster} activates {}! Dodge chance significantly increased.",
                style(report.spell).green().bold()
            ));
        }
        SpellEffect::Fireball { damage, mitigation } => {
            if mitigation.blocked > 0.0 {
                lines.push(shield_line(target, mitigation.blocked));
            }
            lines.push(format!(
                "{caster} hurls a {}! Deals {damage} damage.",
                style(report.spell).red().bold()
            ));
            lines.push(enemy_hp_line(mitigation.health_after));
        }
        SpellEffect::QuickStrike { damage, mitigation } => {
            if mitigation.blocked > 0.0 {
                lines.push(shield_line(target, mitigation.blocked));
            }
            lines.push(format!(
                "{caster} performs a {}! Deals {damage} damage.",
                style(report.spell).yellow().bold()
            ));
            lines.push(enemy_hp_line(mitigation.health_after));
        }
    }
    lines.push(regen_line(caster, &report.regen));
}

fn shield_line(target: &str, blocked: f64) -> String {
    format!("{target}'s shield blocked {blocked} damage.")
}

fn enemy_hp_line(health: f64) -> String {
    format!("Enemy HP: {}", style(health).bold())
}

fn regen_line(name: &str, regen: &RegenReport) -> String {
    format!(
        "{name} regenerates {} HP and {} Mana.",
        style(regen.hp).green(),
        style(regen.mana).blue()
    )
}

fn level_up_line(name: &str, report: &LevelUpReport) -> String {
    let mut line = format!(
        "{name}'s {} rises to {}.",
        report.attribute,
        style(report.new_value).bold()
    );
    if report.health_gained > 0.0 {
        line.push_str(&format!(" Health +{}.", report.health_gained));
    }
    line
}
