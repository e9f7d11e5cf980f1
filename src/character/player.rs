use super::inventory::Inventory;
use crate::core::constants::{STARTING_GOLD, STARTING_HP};
use crate::core::error::GameError;
use crate::items::Item;
use serde::{Deserialize, Serialize};

const MAX_NAME_LEN: usize = 16;

/// The adventurer. `hp` is not floored: monsters can push it below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub hp: i32,
    pub gold: u32,
    pub inventory: Inventory,
}

impl Player {
    pub fn new(name: String) -> Self {
        Self::with_resources(name, STARTING_HP, STARTING_GOLD)
    }

    pub fn with_resources(name: String, hp: i32, gold: u32) -> Self {
        Self {
            name,
            hp,
            gold,
            inventory: Inventory::new(),
        }
    }

    pub fn equipped_weapon(&self) -> Option<&Item> {
        self.inventory.equipped_weapon()
    }

    /// True once hp has dropped to zero or below. Nothing in the core acts
    /// on this; it is for the menu to report.
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    pub fn award_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }
}

pub fn validate_name(name: &str) -> Result<(), GameError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(GameError::InvalidName("name cannot be empty"));
    }

    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(GameError::InvalidName(
            "name must be 16 characters or less",
        ));
    }

    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_');

    if !valid_chars {
        return Err(GameError::InvalidName(
            "name can only contain letters, numbers, spaces, hyphens, and underscores",
        ));
    }

    Ok(())
}
