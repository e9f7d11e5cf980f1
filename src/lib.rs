//! Delve - Text Adventure Core Library
//!
//! Player resources, the shop, and monster encounters. The text menu in
//! `main.rs` is a thin layer over this crate.

pub mod build_info;
pub mod character;
pub mod config;
pub mod core;
pub mod encounter;
pub mod items;
pub mod monsters;
pub mod shop;

pub use crate::core::error::{ConfigError, GameError};
pub use crate::core::session::GameSession;
pub use character::{Inventory, Player};
pub use config::GameConfig;
pub use encounter::{EncounterOutcome, EncounterReport};
pub use items::{Item, ItemId, ItemKind, ItemTemplate, ItemView, ShopCatalog};
pub use monsters::{Monster, MonsterTemplate};
