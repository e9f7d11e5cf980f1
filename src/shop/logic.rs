//! Transaction engine and the shop purchase flow.

use crate::character::Player;
use crate::core::constants::MAX_PURCHASE_QUANTITY;
use crate::core::error::GameError;
use crate::items::{ItemId, ShopCatalog};
use tracing::info;

/// Resolves a purchase against available funds.
///
/// Buys as many units as the funds allow, up to `desired_quantity`.
/// Returns `(purchased_quantity, remaining_funds)`. Not being able to afford
/// a single unit is a normal `(0, funds)` result; only a zero price is an
/// error.
pub fn purchase(price: u32, funds: u32, desired_quantity: u32) -> Result<(u32, u32), GameError> {
    if price == 0 {
        return Err(GameError::InvalidPrice { price });
    }
    let max_affordable = funds / price;
    let quantity = desired_quantity.min(max_affordable);
    // quantity * price <= funds, so neither step can overflow
    let remaining = funds - quantity * price;
    Ok((quantity, remaining))
}

/// What a completed shop visit bought.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub name: String,
    pub quantity: u32,
    pub spent: u32,
    pub remaining_gold: u32,
    /// Ids of the new inventory items, in insertion order
    pub items: Vec<ItemId>,
}

/// Buys up to `quantity` of the catalog entry at `index` with the player's gold.
///
/// Each unit becomes its own inventory item cloned from the template. When
/// the player can't afford even one the receipt has quantity 0 and nothing
/// changes. Asking for more than [`MAX_PURCHASE_QUANTITY`] at once fails.
pub fn buy(
    player: &mut Player,
    catalog: &ShopCatalog,
    index: usize,
    quantity: u32,
) -> Result<Receipt, GameError> {
    let template = catalog.get(index)?;
    if quantity > MAX_PURCHASE_QUANTITY {
        return Err(GameError::QuantityTooLarge {
            quantity,
            max: MAX_PURCHASE_QUANTITY,
        });
    }
    let (bought, remaining) = purchase(template.price, player.gold, quantity)?;

    let spent = player.gold - remaining;
    player.gold = remaining;
    let items: Vec<ItemId> = (0..bought)
        .map(|_| player.inventory.add_item(template))
        .collect();

    if bought > 0 {
        info!(item = %template.name, quantity = bought, spent, remaining, "purchase complete");
    } else {
        info!(item = %template.name, price = template.price, gold = remaining, "purchase declined: not enough gold");
    }

    Ok(Receipt {
        name: template.name.clone(),
        quantity: bought,
        spent,
        remaining_gold: remaining,
        items,
    })
}
