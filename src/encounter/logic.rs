//! Encounter resolution.
//!
//! Checks run in a fixed priority order and the first match ends the
//! encounter:
//! 1. an auto-defeat consumable in the inventory (first one in acquisition order)
//! 2. the equipped weapon
//! 3. bare hands, which always loses

use super::types::{EncounterOutcome, EncounterReport};
use crate::character::Player;
use crate::core::error::GameError;
use crate::items::ConsumableEffect;
use crate::monsters::{generate_monster, Monster, MonsterTemplate};
use rand::Rng;
use tracing::info;

/// Spawns a monster from `templates` and resolves the encounter against it.
/// `forced` picks a template by name, as in [`generate_monster`].
pub fn resolve_encounter(
    player: &mut Player,
    templates: &[MonsterTemplate],
    forced: Option<&str>,
    rng: &mut impl Rng,
) -> Result<EncounterReport, GameError> {
    let monster = generate_monster(templates, forced, rng)?;
    Ok(resolve_against(player, monster))
}

/// Resolves one encounter against an already spawned monster.
pub fn resolve_against(player: &mut Player, monster: Monster) -> EncounterReport {
    let consumable = player
        .inventory
        .first_with_effect(ConsumableEffect::AutoDefeatMonster)
        .map(|item| item.id);

    if let Some(id) = consumable {
        let removed = player.inventory.remove_item(id);
        let gold_delta = award(player, monster.money);
        info!(
            monster = %monster.name,
            effect = ConsumableEffect::AutoDefeatMonster.tag(),
            gold = gold_delta,
            "monster defeated by consumable"
        );
        return EncounterReport {
            outcome: EncounterOutcome::AutoWin { consumable: id },
            gold_delta,
            hp_delta: 0,
            items_removed: removed.into_iter().collect(),
            monster,
        };
    }

    if let Some(wear) = player.inventory.wear_equipped_weapon() {
        let gold_delta = award(player, monster.money);
        let broke = wear.broken.is_some();
        info!(
            monster = %monster.name,
            weapon = %wear.name,
            remaining = wear.remaining,
            broke,
            gold = gold_delta,
            "monster defeated with weapon"
        );
        return EncounterReport {
            outcome: EncounterOutcome::WeaponWin {
                weapon: wear.weapon,
                remaining: wear.remaining,
                max: wear.max,
                broke,
            },
            gold_delta,
            hp_delta: 0,
            items_removed: wear.broken.into_iter().collect(),
            monster,
        };
    }

    let damage = i32::try_from(monster.power).unwrap_or(i32::MAX);
    let hp_before = player.hp;
    player.hp = player.hp.saturating_sub(damage);
    let hp_delta = player.hp - hp_before;
    info!(monster = %monster.name, damage, hp = player.hp, "unarmed player took damage");
    EncounterReport {
        outcome: EncounterOutcome::UnarmedLoss,
        gold_delta: 0,
        hp_delta,
        items_removed: Vec::new(),
        monster,
    }
}

/// Pays out `money` and returns what actually reached the purse.
fn award(player: &mut Player, money: u32) -> u32 {
    let before = player.gold;
    player.award_gold(money);
    player.gold - before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{ItemId, ItemTemplate};
    use crate::monsters::builtin_monsters;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn goblin() -> Monster {
        Monster {
            name: "Goblin".to_string(),
            description: "A goblin.".to_string(),
            health: 7,
            power: 4,
            money: 25,
        }
    }

    fn sword(durability: u32) -> ItemTemplate {
        ItemTemplate::weapon("sword", 150, durability).unwrap()
    }

    fn amulet() -> ItemTemplate {
        ItemTemplate::consumable("holy amulet", 200, ConsumableEffect::AutoDefeatMonster)
    }

    fn player() -> Player {
        Player::with_resources("Tester".to_string(), 30, 50)
    }

    #[test]
    fn test_unarmed_loss_subtracts_power() {
        let mut player = player();
        let buckler = player
            .inventory
            .add_item(&ItemTemplate::shield("buckler", 100, 6).unwrap());

        let report = resolve_against(&mut player, goblin());
        assert_eq!(report.outcome, EncounterOutcome::UnarmedLoss);
        assert!(!report.outcome.is_win());
        assert_eq!(report.hp_delta, -4);
        assert_eq!(report.gold_delta, 0);
        assert!(report.items_removed.is_empty());
        assert_eq!(player.hp, 26);
        assert_eq!(player.gold, 50);
        // Shields are never used up by unarmed fights
        assert_eq!(
            player.inventory.find(buckler).unwrap().durability().unwrap().current(),
            6
        );
    }

    #[test]
    fn test_unarmed_hp_can_go_negative() {
        let mut player = Player::with_resources("Tester".to_string(), 2, 0);
        resolve_against(&mut player, goblin());
        assert_eq!(player.hp, -2);
        assert!(player.is_defeated());
    }

    #[test]
    fn test_deltas_match_clamped_state() {
        let mut player = Player::with_resources("Tester".to_string(), 30, u32::MAX - 10);
        player.inventory.add_item(&amulet());
        let report = resolve_against(&mut player, goblin());
        assert_eq!(report.gold_delta, 10);
        assert_eq!(player.gold, u32::MAX);

        let mut player = Player::with_resources("Tester".to_string(), i32::MIN + 1, 0);
        let report = resolve_against(&mut player, goblin());
        assert_eq!(report.hp_delta, -1);
        assert_eq!(player.hp, i32::MIN);
    }

    #[test]
    fn test_weapon_win_wears_weapon() {
        let mut player = player();
        let id = player.inventory.add_item(&sword(10));
        player.inventory.equip(id).unwrap();

        let report = resolve_against(&mut player, goblin());
        assert_eq!(
            report.outcome,
            EncounterOutcome::WeaponWin {
                weapon: id,
                remaining: 9,
                max: 10,
                broke: false
            }
        );
        assert_eq!(report.gold_delta, 25);
        assert_eq!(player.gold, 75);
        assert_eq!(player.hp, 30);
        assert!(report.items_removed.is_empty());
        assert_eq!(player.equipped_weapon().unwrap().durability().unwrap().current(), 9);
    }

    #[test]
    fn test_weapon_breaks_on_last_use_and_still_wins() {
        let mut player = player();
        let id = player.inventory.add_item(&sword(1));
        player.inventory.equip(id).unwrap();

        let report = resolve_against(&mut player, goblin());
        assert!(matches!(
            report.outcome,
            EncounterOutcome::WeaponWin { broke: true, remaining: 0, .. }
        ));
        assert_eq!(report.items_removed.len(), 1);
        assert_eq!(report.items_removed[0].id, id);
        assert!(player.inventory.find(id).is_none());
        assert!(player.equipped_weapon().is_none());
        assert_eq!(player.gold, 75);

        // Next fight is unarmed
        let report = resolve_against(&mut player, goblin());
        assert_eq!(report.outcome, EncounterOutcome::UnarmedLoss);
    }

    #[test]
    fn test_unequipped_weapon_does_not_fight() {
        let mut player = player();
        player.inventory.add_item(&sword(10));

        let report = resolve_against(&mut player, goblin());
        assert_eq!(report.outcome, EncounterOutcome::UnarmedLoss);
    }

    #[test]
    fn test_consumable_beats_weapon() {
        let mut player = player();
        let weapon = player.inventory.add_item(&sword(10));
        let charm = player.inventory.add_item(&amulet());
        player.inventory.equip(weapon).unwrap();

        let report = resolve_against(&mut player, goblin());
        assert_eq!(report.outcome, EncounterOutcome::AutoWin { consumable: charm });
        assert_eq!(report.gold_delta, 25);
        assert_eq!(report.items_removed.len(), 1);
        assert_eq!(report.items_removed[0].id, charm);
        assert_eq!(player.gold, 75);
        assert!(player.inventory.find(charm).is_none());
        assert_eq!(player.equipped_weapon().unwrap().durability().unwrap().current(), 10);
    }

    #[test]
    fn test_consumable_without_weapon() {
        let mut player = player();
        player.inventory.add_item(&amulet());

        let report = resolve_against(&mut player, goblin());
        assert!(matches!(report.outcome, EncounterOutcome::AutoWin { .. }));
        assert_eq!(player.hp, 30);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn test_only_first_consumable_is_used() {
        let mut player = player();
        let first = player.inventory.add_item(&amulet());
        let second = player.inventory.add_item(&amulet());

        let report = resolve_against(&mut player, goblin());
        assert_eq!(report.outcome, EncounterOutcome::AutoWin { consumable: first });
        assert!(player.inventory.find(second).is_some());
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn test_resolve_encounter_spawns_forced_monster() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut player = player();
        let templates = builtin_monsters();

        let report = resolve_encounter(&mut player, &templates, Some("Goblin"), &mut rng).unwrap();
        assert_eq!(report.monster.name, "Goblin");
        assert_eq!(report.hp_delta, -(report.monster.power as i32));
        assert_eq!(player.hp, 30 - report.monster.power as i32);
    }

    #[test]
    fn test_resolve_encounter_unknown_template_leaves_player_alone() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut player = player();
        player.inventory.add_item(&amulet());
        let before = player.clone();

        let result = resolve_encounter(&mut player, &builtin_monsters(), Some("Dragon"), &mut rng);
        assert_eq!(result, Err(GameError::UnknownTemplate("Dragon".to_string())));
        assert_eq!(player, before);
    }

    #[test]
    fn test_outcome_ids_refer_to_removed_items() {
        let mut player = player();
        player.inventory.add_item(&amulet());
        let report = resolve_against(&mut player, goblin());
        let removed: Vec<ItemId> = report.items_removed.iter().map(|i| i.id).collect();
        match report.outcome {
            EncounterOutcome::AutoWin { consumable } => assert_eq!(removed, vec![consumable]),
            other => panic!("expected AutoWin, got {other:?}"),
        }
    }
}
