//! Type-safe enumerations for card metadata.
//!
//! The variant names double as the identifiers the game framework expects,
//! so `as_str` output is emitted verbatim into generated sources.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Card rarity tier, lowest to highest.
///
/// `Exordium` is not built into the framework; the generated plugin
/// registers it at load time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Rarity {
    Trinket,
    #[default]
    Common,
    Scarce,
    Uncommon,
    Exotic,
    Rare,
    Epic,
    Legendary,
    Mythical,
    Divine,
    Unique,
    Exordium,
}

impl Rarity {
    pub const ALL: [Rarity; 12] = [
        Rarity::Trinket,
        Rarity::Common,
        Rarity::Scarce,
        Rarity::Uncommon,
        Rarity::Exotic,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythical,
        Rarity::Divine,
        Rarity::Unique,
        Rarity::Exordium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Trinket => "Trinket",
            Rarity::Common => "Common",
            Rarity::Scarce => "Scarce",
            Rarity::Uncommon => "Uncommon",
            Rarity::Exotic => "Exotic",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythical => "Mythical",
            Rarity::Divine => "Divine",
            Rarity::Unique => "Unique",
            Rarity::Exordium => "Exordium",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = ModelError;

    /// Case-insensitive, so CLI input like `legendary` is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Rarity::ALL
            .iter()
            .copied()
            .find(|rarity| rarity.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownVariant {
                kind: "rarity",
                value: s.to_string(),
            })
    }
}

/// Card theme color class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CardColor {
    DestructiveRed,
    FirepowerYellow,
    DefensiveBlue,
    #[default]
    TechWhite,
    EvilPurple,
    PoisonGreen,
    NatureBrown,
    ColdBlue,
    MagicPink,
}

impl CardColor {
    pub const ALL: [CardColor; 9] = [
        CardColor::DestructiveRed,
        CardColor::FirepowerYellow,
        CardColor::DefensiveBlue,
        CardColor::TechWhite,
        CardColor::EvilPurple,
        CardColor::PoisonGreen,
        CardColor::NatureBrown,
        CardColor::ColdBlue,
        CardColor::MagicPink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CardColor::DestructiveRed => "DestructiveRed",
            CardColor::FirepowerYellow => "FirepowerYellow",
            CardColor::DefensiveBlue => "DefensiveBlue",
            CardColor::TechWhite => "TechWhite",
            CardColor::EvilPurple => "EvilPurple",
            CardColor::PoisonGreen => "PoisonGreen",
            CardColor::NatureBrown => "NatureBrown",
            CardColor::ColdBlue => "ColdBlue",
            CardColor::MagicPink => "MagicPink",
        }
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardColor {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        CardColor::ALL
            .iter()
            .copied()
            .find(|color| color.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownVariant {
                kind: "card color",
                value: s.to_string(),
            })
    }
}

/// Qualitative magnitude shown next to a stat in the card tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SimpleAmount {
    #[default]
    #[serde(rename = "notAssigned")]
    NotAssigned,
    #[serde(rename = "aLittleBitOf")]
    ALittleBitOf,
    #[serde(rename = "Some")]
    Some,
    #[serde(rename = "aLotOf")]
    ALotOf,
    #[serde(rename = "aHugeAmountOf")]
    AHugeAmountOf,
    #[serde(rename = "slightlyLower")]
    SlightlyLower,
    #[serde(rename = "lower")]
    Lower,
    #[serde(rename = "aLotLower")]
    ALotLower,
    #[serde(rename = "slightlySmaller")]
    SlightlySmaller,
    #[serde(rename = "smaller")]
    Smaller,
}

impl SimpleAmount {
    pub const ALL: [SimpleAmount; 10] = [
        SimpleAmount::NotAssigned,
        SimpleAmount::ALittleBitOf,
        SimpleAmount::Some,
        SimpleAmount::ALotOf,
        SimpleAmount::AHugeAmountOf,
        SimpleAmount::SlightlyLower,
        SimpleAmount::Lower,
        SimpleAmount::ALotLower,
        SimpleAmount::SlightlySmaller,
        SimpleAmount::Smaller,
    ];

    /// Member name of `CardInfoStat.SimpleAmount` in the game assembly.
    pub fn as_str(&self) -> &'static str {
        match self {
            SimpleAmount::NotAssigned => "notAssigned",
            SimpleAmount::ALittleBitOf => "aLittleBitOf",
            SimpleAmount::Some => "Some",
            SimpleAmount::ALotOf => "aLotOf",
            SimpleAmount::AHugeAmountOf => "aHugeAmountOf",
            SimpleAmount::SlightlyLower => "slightlyLower",
            SimpleAmount::Lower => "lower",
            SimpleAmount::ALotLower => "aLotLower",
            SimpleAmount::SlightlySmaller => "slightlySmaller",
            SimpleAmount::Smaller => "smaller",
        }
    }
}

impl fmt::Display for SimpleAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimpleAmount {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SimpleAmount::ALL
            .iter()
            .copied()
            .find(|amount| amount.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownVariant {
                kind: "simple amount",
                value: s.to_string(),
            })
    }
}

/// When a stat's effect is applied to the player.
///
/// - `Immediate`: when the card is picked (`SetupCard`)
/// - `Secondary`: after the card is added to a player (`Added`), used by
///   armor stats that need a live player handle
/// - `Inactive`: shown on the card but has no effect handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationPhase {
    Inactive,
    Immediate,
    Secondary,
}

impl ActivationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivationPhase::Inactive => "inactive",
            ActivationPhase::Immediate => "immediate",
            ActivationPhase::Secondary => "secondary",
        }
    }
}

impl fmt::Display for ActivationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_from_str() {
        assert_eq!("Legendary".parse::<Rarity>().unwrap(), Rarity::Legendary);
        assert_eq!("exordium".parse::<Rarity>().unwrap(), Rarity::Exordium);
        assert!("Ultra".parse::<Rarity>().is_err());
    }

    #[test]
    fn test_card_color_from_str() {
        assert_eq!(
            "poisongreen".parse::<CardColor>().unwrap(),
            CardColor::PoisonGreen
        );
        assert!("Orange".parse::<CardColor>().is_err());
    }

    #[test]
    fn test_simple_amount_serde_names() {
        let json = serde_json::to_string(&SimpleAmount::ALittleBitOf).unwrap();
        assert_eq!(json, "\"aLittleBitOf\"");
        let parsed: SimpleAmount = serde_json::from_str("\"Some\"").unwrap();
        assert_eq!(parsed, SimpleAmount::Some);
    }

    #[test]
    fn test_rarity_order() {
        assert!(Rarity::Trinket < Rarity::Common);
        assert!(Rarity::Unique < Rarity::Exordium);
    }
}
