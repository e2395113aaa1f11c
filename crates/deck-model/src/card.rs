use serde::{Deserialize, Serialize};

use crate::enums::{CardColor, Rarity, SimpleAmount};
use crate::stat::Stat;

/// One stat modification on a card.
///
/// For multiplicative stats `value` is a multiplier around a 1.0 baseline;
/// for additive stats it is a raw offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatChange {
    pub stat: Stat,
    pub value: f64,
    /// Whether the tooltip shows this change as beneficial.
    #[serde(default = "default_positive")]
    pub positive: bool,
    #[serde(default)]
    pub simple_amount: SimpleAmount,
}

fn default_positive() -> bool {
    true
}

impl StatChange {
    pub fn new(stat: Stat, value: f64) -> Self {
        Self {
            stat,
            value,
            positive: true,
            simple_amount: SimpleAmount::NotAssigned,
        }
    }

    #[must_use]
    pub fn with_positive(mut self, positive: bool) -> Self {
        self.positive = positive;
        self
    }

    #[must_use]
    pub fn with_simple_amount(mut self, amount: SimpleAmount) -> Self {
        self.simple_amount = amount;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub art_url: String,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub color: CardColor,
    /// Emission order follows this list.
    #[serde(default)]
    pub stats: Vec<StatChange>,
}

impl Card {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Name of the generated class and source file: the card name without
    /// spaces.
    pub fn class_name(&self) -> String {
        self.name.replace(' ', "")
    }

    pub fn has_stat(&self, stat: Stat) -> bool {
        self.stats.iter().any(|change| change.stat == stat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_defaults() {
        let card = Card::new("");
        assert_eq!(card.rarity, Rarity::Common);
        assert_eq!(card.color, CardColor::TechWhite);
        assert!(card.stats.is_empty());
    }

    #[test]
    fn test_class_name_strips_spaces() {
        assert_eq!(Card::new("Big  Gun X").class_name(), "BigGunX");
    }

    #[test]
    fn test_stat_change_defaults_from_json() {
        let change: StatChange =
            serde_json::from_str(r#"{"stat":"ammo","value":-20}"#).unwrap();
        assert_eq!(change.stat, Stat::Ammo);
        assert!(change.positive);
        assert_eq!(change.simple_amount, SimpleAmount::NotAssigned);
    }
}
