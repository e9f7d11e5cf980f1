//! The shop's stock of item templates.

use super::types::{ConsumableEffect, ItemTemplate};
use crate::core::error::GameError;
use serde::{Deserialize, Serialize};

/// Ordered, read-only list of item templates the shop sells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopCatalog {
    items: Vec<ItemTemplate>,
}

impl ShopCatalog {
    pub fn new(items: Vec<ItemTemplate>) -> Self {
        Self { items }
    }

    /// Sword, holy amulet and buckler, in that order.
    pub fn builtin() -> Self {
        // Durabilities are nonzero constants
        let sword = ItemTemplate::weapon("sword", 150, 10).expect("valid durability");
        let buckler = ItemTemplate::shield("buckler", 100, 6).expect("valid durability");
        Self::new(vec![
            sword,
            ItemTemplate::consumable("holy amulet", 200, ConsumableEffect::AutoDefeatMonster),
            buckler,
        ])
    }

    pub fn get(&self, index: usize) -> Result<&ItemTemplate, GameError> {
        self.items
            .get(index)
            .ok_or(GameError::UnknownShopItem(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemTemplate> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ShopCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
