//! The player's owned items and the equipped-weapon reference.
//!
//! The equipped weapon is stored here rather than on the player so that every
//! removal path clears it in the same call. Whenever `equipped_weapon` is
//! `Some(id)`, `id` names a live weapon in `items`.

use crate::core::error::GameError;
use crate::items::{ConsumableEffect, Item, ItemId, ItemTemplate, ItemView};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Acquisition order
    items: Vec<Item>,
    equipped_weapon: Option<ItemId>,
    next_id: u64,
}

/// Result of using the equipped weapon once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaponWear {
    pub weapon: ItemId,
    pub name: String,
    pub remaining: u32,
    pub max: u32,
    /// Set when the weapon hit zero and was removed
    pub broken: Option<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clones `template` into a new item with a fresh id and appends it.
    pub fn add_item(&mut self, template: &ItemTemplate) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(template.instantiate(id));
        debug!(item = %id, name = %template.name, "item added to inventory");
        id
    }

    /// Removes the item, unequipping it first if it was the equipped weapon.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        if self.equipped_weapon == Some(id) {
            self.equipped_weapon = None;
        }
        let item = self.items.remove(index);
        debug!(item = %id, name = %item.name, "item removed from inventory");
        Some(item)
    }

    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Weapons in acquisition order. Reflects the inventory at call time;
    /// call again for a fresh pass.
    pub fn list_weapons(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.is_weapon())
    }

    pub fn views(&self) -> impl Iterator<Item = ItemView> + '_ {
        self.items.iter().map(Item::view)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Equips a weapon, returning the previously equipped one. The previous
    /// weapon stays in the inventory.
    ///
    /// On error the equipped reference is left as it was.
    pub fn equip(&mut self, id: ItemId) -> Result<Option<ItemId>, GameError> {
        let item = self.find(id).ok_or(GameError::NotInInventory(id))?;
        if !item.is_weapon() {
            return Err(GameError::NotAWeapon(id));
        }
        debug!(item = %id, name = %item.name, "weapon equipped");
        Ok(self.equipped_weapon.replace(id))
    }

    pub fn unequip(&mut self) -> Option<ItemId> {
        self.equipped_weapon.take()
    }

    pub fn equipped_weapon_id(&self) -> Option<ItemId> {
        self.equipped_weapon
    }

    pub fn equipped_weapon(&self) -> Option<&Item> {
        self.equipped_weapon.and_then(|id| self.find(id))
    }

    /// First item, in acquisition order, carrying `effect`.
    pub fn first_with_effect(&self, effect: ConsumableEffect) -> Option<&Item> {
        self.items.iter().find(|item| item.effect() == Some(effect))
    }

    /// Decrements the equipped weapon's durability. If it reaches zero the
    /// weapon is removed and unequipped before returning, so callers never
    /// observe a broken weapon that is still equipped.
    ///
    /// Returns `None` when nothing is equipped.
    pub(crate) fn wear_equipped_weapon(&mut self) -> Option<WeaponWear> {
        let id = self.equipped_weapon?;
        let weapon = self.items.iter_mut().find(|item| item.id == id)?;
        let durability = weapon.kind.durability_mut()?;

        let remaining = durability.wear();
        let max = durability.max();
        let name = weapon.name.clone();
        debug!(item = %id, remaining, max, "weapon durability decremented");

        let broken = if remaining == 0 {
            self.remove_item(id)
        } else {
            None
        };

        Some(WeaponWear {
            weapon: id,
            name,
            remaining,
            max,
            broken,
        })
    }
}
