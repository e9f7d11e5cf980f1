use crate::items::{Item, ItemId};
use crate::monsters::Monster;

/// How an encounter ended. Exactly one per encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOutcome {
    /// An auto-defeat consumable was used up.
    AutoWin { consumable: ItemId },
    /// The equipped weapon won the fight and lost one durability.
    WeaponWin {
        weapon: ItemId,
        remaining: u32,
        max: u32,
        broke: bool,
    },
    /// No consumable, no weapon: the monster hits the player.
    UnarmedLoss,
}

impl EncounterOutcome {
    pub fn is_win(&self) -> bool {
        !matches!(self, EncounterOutcome::UnarmedLoss)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterReport {
    pub outcome: EncounterOutcome,
    pub monster: Monster,
    pub gold_delta: u32,
    /// Zero or negative
    pub hp_delta: i32,
    /// Consumed or broken items, already gone from the inventory
    pub items_removed: Vec<Item>,
}
