use crate::core::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a single owned item. Two swords bought back to back are two
/// different ids even though everything else about them is equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Remaining uses of a weapon or shield. Always `1 <= current <= max` while
/// the item is alive; reaching zero means the item is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DurabilitySpec")]
pub struct Durability {
    current: u32,
    max: u32,
}

/// Config form: `{"max": 10}` or `{"max": 10, "current": 4}`.
#[derive(Debug, Deserialize)]
pub struct DurabilitySpec {
    pub max: u32,
    #[serde(default)]
    pub current: Option<u32>,
}

impl TryFrom<DurabilitySpec> for Durability {
    type Error = GameError;

    fn try_from(spec: DurabilitySpec) -> Result<Self, Self::Error> {
        Durability::with_current(spec.current.unwrap_or(spec.max), spec.max)
    }
}

impl Durability {
    /// Fresh durability at full strength.
    pub fn new(max: u32) -> Result<Self, GameError> {
        Self::with_current(max, max)
    }

    pub fn with_current(current: u32, max: u32) -> Result<Self, GameError> {
        if max == 0 || current == 0 || current > max {
            return Err(GameError::InvalidDurability { current, max });
        }
        Ok(Self { current, max })
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_broken(&self) -> bool {
        self.current == 0
    }

    /// Uses the item once. Returns the remaining durability.
    pub(crate) fn wear(&mut self) -> u32 {
        self.current = self.current.saturating_sub(1);
        self.current
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsumableEffect {
    /// Wins the next encounter outright.
    AutoDefeatMonster,
}

impl ConsumableEffect {
    pub fn tag(&self) -> &'static str {
        match self {
            ConsumableEffect::AutoDefeatMonster => "auto-defeat-monster",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    Weapon { durability: Durability },
    Shield { durability: Durability },
    Consumable { effect: ConsumableEffect },
}

impl ItemKind {
    /// Lowercase display name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Weapon { .. } => "weapon",
            ItemKind::Shield { .. } => "shield",
            ItemKind::Consumable { .. } => "consumable",
        }
    }

    pub fn durability(&self) -> Option<&Durability> {
        match self {
            ItemKind::Weapon { durability } | ItemKind::Shield { durability } => Some(durability),
            ItemKind::Consumable { .. } => None,
        }
    }

    pub(crate) fn durability_mut(&mut self) -> Option<&mut Durability> {
        match self {
            ItemKind::Weapon { durability } | ItemKind::Shield { durability } => Some(durability),
            ItemKind::Consumable { .. } => None,
        }
    }

    pub fn effect(&self) -> Option<ConsumableEffect> {
        match self {
            ItemKind::Consumable { effect } => Some(*effect),
            _ => None,
        }
    }
}

/// Read-only shop blueprint. Buying one produces an [`Item`] with its own id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub name: String,
    pub price: u32,
    pub kind: ItemKind,
}

impl ItemTemplate {
    pub fn weapon(name: &str, price: u32, max_durability: u32) -> Result<Self, GameError> {
        Ok(Self {
            name: name.to_string(),
            price,
            kind: ItemKind::Weapon {
                durability: Durability::new(max_durability)?,
            },
        })
    }

    pub fn shield(name: &str, price: u32, max_durability: u32) -> Result<Self, GameError> {
        Ok(Self {
            name: name.to_string(),
            price,
            kind: ItemKind::Shield {
                durability: Durability::new(max_durability)?,
            },
        })
    }

    pub fn consumable(name: &str, price: u32, effect: ConsumableEffect) -> Self {
        Self {
            name: name.to_string(),
            price,
            kind: ItemKind::Consumable { effect },
        }
    }

    /// Clones this blueprint into a new owned item.
    pub fn instantiate(&self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name.clone(),
            price: self.price,
            kind: self.kind.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: u32,
    pub kind: ItemKind,
}

impl Item {
    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon { .. })
    }

    pub fn effect(&self) -> Option<ConsumableEffect> {
        self.kind.effect()
    }

    pub fn durability(&self) -> Option<&Durability> {
        self.kind.durability()
    }

    pub fn view(&self) -> ItemView {
        ItemView {
            id: self.id,
            name: self.name.clone(),
            kind: self.kind.name(),
            durability: self.durability().map(|d| (d.current(), d.max())),
        }
    }
}

/// Snapshot of an inventory entry for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: ItemId,
    pub name: String,
    pub kind: &'static str,
    /// (current, max) for weapons and shields
    pub durability: Option<(u32, u32)>,
}

impl fmt::Display for ItemView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", title_case(&self.name), self.kind)?;
        if let Some((current, max)) = self.durability {
            write!(f, " - Durability: {}/{}", current, max)?;
        }
        Ok(())
    }
}

/// "holy amulet" -> "Holy Amulet"
pub fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durability_rejects_bad_bounds() {
        assert!(Durability::new(0).is_err());
        assert_eq!(
            Durability::with_current(11, 10),
            Err(GameError::InvalidDurability {
                current: 11,
                max: 10
            })
        );
        assert!(Durability::with_current(0, 10).is_err());
        assert!(Durability::with_current(1, 10).is_ok());
    }

    #[test]
    fn test_durability_wear_counts_down_to_broken() {
        let mut durability = Durability::new(2).unwrap();
        assert_eq!(durability.wear(), 1);
        assert!(!durability.is_broken());
        assert_eq!(durability.wear(), 0);
        assert!(durability.is_broken());
        // Never underflows
        assert_eq!(durability.wear(), 0);
    }

    #[test]
    fn test_instantiate_clones_template() {
        let template = ItemTemplate::weapon("sword", 150, 10).unwrap();
        let mut item = template.instantiate(ItemId(7));
        item.kind.durability_mut().unwrap().wear();

        assert_eq!(item.id, ItemId(7));
        assert_eq!(item.durability().unwrap().current(), 9);
        // The blueprint is untouched
        assert_eq!(template.kind.durability().unwrap().current(), 10);
    }

    #[test]
    fn test_item_kind_accessors() {
        let amulet =
            ItemTemplate::consumable("holy amulet", 200, ConsumableEffect::AutoDefeatMonster)
                .instantiate(ItemId(1));
        assert!(!amulet.is_weapon());
        assert_eq!(amulet.effect(), Some(ConsumableEffect::AutoDefeatMonster));
        assert!(amulet.durability().is_none());
        assert_eq!(amulet.kind.name(), "consumable");

        let buckler = ItemTemplate::shield("buckler", 100, 6)
            .unwrap()
            .instantiate(ItemId(2));
        assert!(!buckler.is_weapon());
        assert_eq!(buckler.effect(), None);
        assert_eq!(buckler.durability().unwrap().max(), 6);
    }

    #[test]
    fn test_item_view_display() {
        let sword = ItemTemplate::weapon("sword", 150, 10)
            .unwrap()
            .instantiate(ItemId(1));
        assert_eq!(sword.view().to_string(), "Sword (weapon) - Durability: 10/10");

        let amulet =
            ItemTemplate::consumable("holy amulet", 200, ConsumableEffect::AutoDefeatMonster)
                .instantiate(ItemId(2));
        assert_eq!(amulet.view().to_string(), "Holy Amulet (consumable)");
    }

    #[test]
    fn test_template_deserializes_from_config_form() {
        let json = r#"{"name":"axe","price":80,"kind":{"type":"weapon","durability":{"max":4}}}"#;
        let template: ItemTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(template, ItemTemplate::weapon("axe", 80, 4).unwrap());

        let json = r#"{"name":"charm","price":5,"kind":{"type":"consumable","effect":"auto-defeat-monster"}}"#;
        let template: ItemTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(template.kind.effect(), Some(ConsumableEffect::AutoDefeatMonster));
    }

    #[test]
    fn test_effect_tag_matches_config_form() {
        let effect = ConsumableEffect::AutoDefeatMonster;
        let json = serde_json::to_string(&effect).unwrap();
        assert_eq!(json, format!("\"{}\"", effect.tag()));
    }

    #[test]
    fn test_template_with_zero_durability_fails_to_parse() {
        let json = r#"{"name":"twig","price":1,"kind":{"type":"weapon","durability":{"max":0}}}"#;
        assert!(serde_json::from_str::<ItemTemplate>(json).is_err());
    }
}
