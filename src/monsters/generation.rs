//! Random monster generation.

use super::types::{Monster, MonsterTemplate};
use crate::core::error::GameError;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Looks up a template by exact name.
pub fn find_template<'a>(
    templates: &'a [MonsterTemplate],
    name: &str,
) -> Result<&'a MonsterTemplate, GameError> {
    templates
        .iter()
        .find(|t| t.name == name)
        .ok_or_else(|| GameError::UnknownTemplate(name.to_string()))
}

/// Builds a monster from `template`, picking one description and drawing
/// health, power and money independently from their ranges.
pub fn spawn_monster(template: &MonsterTemplate, rng: &mut impl Rng) -> Monster {
    let description = template
        .descriptions
        .choose(rng)
        .cloned()
        .unwrap_or_default();

    Monster {
        name: template.name.clone(),
        description,
        health: template.health.roll(rng),
        power: template.power.roll(rng),
        money: template.money.roll(rng),
    }
}

/// Generates a monster from a uniformly chosen template, or from the template
/// named by `forced` when given. Stats are randomized either way.
pub fn generate_monster(
    templates: &[MonsterTemplate],
    forced: Option<&str>,
    rng: &mut impl Rng,
) -> Result<Monster, GameError> {
    let template = match forced {
        Some(name) => find_template(templates, name)?,
        None => templates.choose(rng).ok_or(GameError::NoMonsterTemplates)?,
    };
    let monster = spawn_monster(template, rng);
    debug!(
        name = %monster.name,
        health = monster.health,
        power = monster.power,
        money = monster.money,
        "monster generated"
    );
    Ok(monster)
}
