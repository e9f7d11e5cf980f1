//! Game configuration: starting resources, rest pricing and the catalogs.
//!
//! Loaded from `~/.delve/config.json` when present. Every field is optional
//! in the file; missing fields take the built-in defaults.

use crate::core::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, FULL_HP, REST_COST, STARTING_GOLD, STARTING_HP,
};
use crate::core::error::{ConfigError, GameError};
use crate::items::ShopCatalog;
use crate::monsters::{builtin_monsters, MonsterTemplate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_hp: i32,
    pub starting_gold: u32,
    pub full_hp: i32,
    pub rest_cost: u32,
    pub shop: ShopCatalog,
    pub monsters: Vec<MonsterTemplate>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_hp: STARTING_HP,
            starting_gold: STARTING_GOLD,
            full_hp: FULL_HP,
            rest_cost: REST_COST,
            shop: ShopCatalog::builtin(),
            monsters: builtin_monsters(),
        }
    }
}

impl GameConfig {
    /// Parses and validates a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks what serde can't: every monster needs a description and at
    /// least one monster must exist. Durabilities and stat ranges are
    /// already checked while parsing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.monsters.is_empty() {
            return Err(GameError::NoMonsterTemplates.into());
        }
        for monster in &self.monsters {
            if monster.descriptions.is_empty() {
                return Err(ConfigError::InvalidCatalog {
                    name: monster.name.clone(),
                    reason: "monster has no descriptions".to_string(),
                });
            }
        }
        for item in self.shop.iter() {
            if item.price == 0 {
                // Allowed, but buying it will fail with InvalidPrice
                warn!(item = %item.name, "shop item has price 0 and cannot be bought");
            }
        }
        Ok(())
    }

    /// Loads the config at `path`, falling back to defaults when the file is
    /// missing (silently) or broken (with a warning).
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                debug!(path = %path.display(), "config loaded");
                config
            }
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring config file");
                Self::default()
            }
        }
    }
}

/// `~/.delve/config.json`
pub fn default_config_path() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
