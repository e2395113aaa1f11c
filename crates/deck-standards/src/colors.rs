#![deny(unsafe_code)]

use deck_model::{CardColor, Rarity};

/// Frame color shown for a rarity tier.
pub fn rarity_color(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Trinket => "#aa9080",
        Rarity::Common => "#000b20",
        Rarity::Scarce => "#009035",
        Rarity::Uncommon => "#009cc5",
        Rarity::Exotic => "#0000dd",
        Rarity::Rare => "#f000a3",
        Rarity::Epic => "#c60011",
        Rarity::Legendary => "#f7eb00",
        Rarity::Mythical => "#00c900",
        Rarity::Divine => "#dbc47e",
        Rarity::Unique => "#FFFFFF",
        Rarity::Exordium => "#c7d100",
    }
}

/// CSS color approximating the in-game theme color.
pub fn palette_color(color: CardColor) -> &'static str {
    match color {
        CardColor::DestructiveRed => "rgb(80.19% 27.61% 27.61%)",
        CardColor::FirepowerYellow => "rgb(79.25% 73.38% 22.8%)",
        CardColor::DefensiveBlue => "rgb(31.37% 51.55% 81.96%)",
        CardColor::TechWhite => "white",
        CardColor::EvilPurple => "rgb(47.77% 31.37% 81.96%)",
        CardColor::PoisonGreen => "rgb(0% 57.55% 29.95%)",
        CardColor::NatureBrown => "rgb(57.12% 80.19% 12.48%)",
        CardColor::ColdBlue => "rgb(31.37% 73.69% 81.96%)",
        CardColor::MagicPink => "rgb(81.96% 31.37% 53.44%)",
    }
}
