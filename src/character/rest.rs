//! Sleeping at the inn: gold for a full heal.

use crate::core::constants::FULL_HP;
use crate::core::error::GameError;
use tracing::info;

/// Rests with the default full-restore value. See [`rest_to`].
pub fn rest(hp: i32, gold: u32, cost: u32) -> Result<(i32, u32), GameError> {
    rest_to(hp, gold, cost, FULL_HP)
}

/// Spends `cost` gold and restores hp to `full_hp`.
///
/// Fails with `InsufficientFunds` when `gold < cost`; nothing is spent in
/// that case. Returns `(new_hp, new_gold)`.
pub fn rest_to(hp: i32, gold: u32, cost: u32, full_hp: i32) -> Result<(i32, u32), GameError> {
    let remaining = gold
        .checked_sub(cost)
        .ok_or(GameError::InsufficientFunds { cost, gold })?;
    info!(from = hp, to = full_hp, cost, "rested");
    Ok((full_hp, remaining))
}
