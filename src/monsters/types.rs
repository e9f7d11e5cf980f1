use crate::core::error::GameError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inclusive integer range a monster stat is drawn from. Written as
/// `[min, max]` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct StatRange {
    min: u32,
    max: u32,
}

impl StatRange {
    pub fn new(min: u32, max: u32) -> Result<Self, GameError> {
        if min > max {
            return Err(GameError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Uniform draw from `min..=max`.
    pub fn roll(&self, rng: &mut impl Rng) -> u32 {
        rng.gen_range(self.min..=self.max)
    }
}

impl TryFrom<(u32, u32)> for StatRange {
    type Error = GameError;

    fn try_from((min, max): (u32, u32)) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}

impl From<StatRange> for (u32, u32) {
    fn from(range: StatRange) -> Self {
        (range.min, range.max)
    }
}

/// Static blueprint for one kind of monster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub name: String,
    pub descriptions: Vec<String>,
    pub health: StatRange,
    pub power: StatRange,
    pub money: StatRange,
}

/// A monster for the length of one encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Monster {
    pub name: String,
    pub description: String,
    pub health: u32,
    /// Damage dealt to an unarmed player
    pub power: u32,
    /// Gold awarded on defeat
    pub money: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_stat_range_rejects_inverted_bounds() {
        assert_eq!(
            StatRange::new(10, 5),
            Err(GameError::InvalidRange { min: 10, max: 5 })
        );
        assert!(StatRange::new(5, 5).is_ok());
    }

    #[test]
    fn test_stat_range_roll_hits_both_ends() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let range = StatRange::new(1, 3).unwrap();
        let mut seen = [false; 3];
        for _ in 0..200 {
            let value = range.roll(&mut rng);
            assert!(range.contains(value), "{value} outside 1..=3");
            seen[(value - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "every value should appear: {seen:?}");
    }

    #[test]
    fn test_stat_range_single_value() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let range = StatRange::new(7, 7).unwrap();
        assert_eq!(range.roll(&mut rng), 7);
    }

    #[test]
    fn test_stat_range_json_form() {
        let range: StatRange = serde_json::from_str("[5, 10]").unwrap();
        assert_eq!((range.min(), range.max()), (5, 10));
        assert_eq!(serde_json::to_string(&range).unwrap(), "[5,10]");
        assert!(serde_json::from_str::<StatRange>("[10, 5]").is_err());
    }
}
