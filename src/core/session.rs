//! One running game: the player plus the catalogs they interact with.

use crate::character::{rest_to, validate_name, Player};
use crate::config::GameConfig;
use crate::core::error::GameError;
use crate::encounter::{resolve_encounter, EncounterReport};
use crate::items::{Item, ItemId, ItemView, ShopCatalog};
use crate::monsters::{generate_monster, Monster, MonsterTemplate};
use crate::shop::{self, Receipt};
use rand::Rng;

/// Owns all mutable game state for a single player. Nothing here is global;
/// the menu holds one session and calls into it once per turn.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub player: Player,
    shop: ShopCatalog,
    monsters: Vec<MonsterTemplate>,
    rest_cost: u32,
    full_hp: i32,
}

impl GameSession {
    pub fn new(name: &str, config: GameConfig) -> Result<Self, GameError> {
        validate_name(name)?;
        Ok(Self {
            player: Player::with_resources(
                name.trim().to_string(),
                config.starting_hp,
                config.starting_gold,
            ),
            shop: config.shop,
            monsters: config.monsters,
            rest_cost: config.rest_cost,
            full_hp: config.full_hp,
        })
    }

    pub fn shop(&self) -> &ShopCatalog {
        &self.shop
    }

    pub fn monsters(&self) -> &[MonsterTemplate] {
        &self.monsters
    }

    pub fn rest_cost(&self) -> u32 {
        self.rest_cost
    }

    pub fn generate_monster(
        &self,
        forced: Option<&str>,
        rng: &mut impl Rng,
    ) -> Result<Monster, GameError> {
        generate_monster(&self.monsters, forced, rng)
    }

    /// Buys up to `quantity` of shop entry `index`.
    pub fn buy(&mut self, index: usize, quantity: u32) -> Result<Receipt, GameError> {
        shop::buy(&mut self.player, &self.shop, index, quantity)
    }

    pub fn list_inventory(&self) -> Vec<ItemView> {
        self.player.inventory.views().collect()
    }

    pub fn list_weapons(&self) -> impl Iterator<Item = &Item> {
        self.player.inventory.list_weapons()
    }

    /// Returns the previously equipped weapon, if any.
    pub fn equip_weapon(&mut self, id: ItemId) -> Result<Option<ItemId>, GameError> {
        self.player.inventory.equip(id)
    }

    pub fn resolve_encounter(&mut self, rng: &mut impl Rng) -> Result<EncounterReport, GameError> {
        resolve_encounter(&mut self.player, &self.monsters, None, rng)
    }

    /// Fights a specific monster type. Used for scripted fights and tests.
    pub fn resolve_encounter_with(
        &mut self,
        forced: &str,
        rng: &mut impl Rng,
    ) -> Result<EncounterReport, GameError> {
        resolve_encounter(&mut self.player, &self.monsters, Some(forced), rng)
    }

    /// Sleeps at the inn. Fails without changing anything when gold is short.
    pub fn rest(&mut self) -> Result<(i32, u32), GameError> {
        let (hp, gold) = rest_to(
            self.player.hp,
            self.player.gold,
            self.rest_cost,
            self.full_hp,
        )?;
        self.player.hp = hp;
        self.player.gold = gold;
        Ok((hp, gold))
    }
}
