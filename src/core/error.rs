//! Recoverable game errors.
//!
//! None of these are fatal: the menu reports them and asks again.

use crate::items::ItemId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid price {price}: prices must be positive")]
    InvalidPrice { price: u32 },

    #[error("no monster template named {0:?}")]
    UnknownTemplate(String),

    #[error("item {0} is not a weapon")]
    NotAWeapon(ItemId),

    #[error("item {0} is not in the inventory")]
    NotInInventory(ItemId),

    #[error("not enough gold: need {cost}, have {gold}")]
    InsufficientFunds { cost: u32, gold: u32 },

    #[error("no shop item at index {0}")]
    UnknownShopItem(usize),

    #[error("cannot buy {quantity} at once (max {max})")]
    QuantityTooLarge { quantity: u32, max: u32 },

    #[error("invalid durability {current}/{max}")]
    InvalidDurability { current: u32, max: u32 },

    #[error("invalid stat range {min}..={max}")]
    InvalidRange { min: u32, max: u32 },

    #[error("no monster templates to choose from")]
    NoMonsterTemplates,

    #[error("invalid name: {0}")]
    InvalidName(&'static str),
}

/// Errors raised while loading a [`GameConfig`](crate::config::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid catalog entry {name:?}: {reason}")]
    InvalidCatalog { name: String, reason: String },

    #[error(transparent)]
    Invalid(#[from] GameError),
}
