//! Stat identifiers.
//!
//! Cards refer to stats by a fixed set of wire identifiers. The enum keeps
//! those identifiers closed so an unregistered stat can only appear at a
//! parse boundary, where it becomes [`ModelError::UnknownStat`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ModelError;

/// A gameplay attribute a card can modify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stat {
    Damage,
    Health,
    Reload,
    Ammo,
    Projectiles,
    Bursts,
    TimeBetweenBullets,
    AttackSpeed,
    Bounces,
    BulletSpeed,
    BlocksAmount,
    BlockHealAmount,
    BlockCooldown,
    Respawns,
    Lifesteal,
    NumberOfJumps,
    Slow,
    MovementSpeed,
    Knockback,
    Gravity,
    Spread,
    ProjectileSize,
    AmmoRegeneration,
    Size,
    ArmorHealth,
    ArmorRegen,
    RegenCooldownSeconds,
    ReactivateAfterSeconds,
    Luck,
}

impl Stat {
    /// Every stat in declaration order.
    pub const ALL: [Stat; 29] = [
        Stat::Damage,
        Stat::Health,
        Stat::Reload,
        Stat::Ammo,
        Stat::Projectiles,
        Stat::Bursts,
        Stat::TimeBetweenBullets,
        Stat::AttackSpeed,
        Stat::Bounces,
        Stat::BulletSpeed,
        Stat::BlocksAmount,
        Stat::BlockHealAmount,
        Stat::BlockCooldown,
        Stat::Respawns,
        Stat::Lifesteal,
        Stat::NumberOfJumps,
        Stat::Slow,
        Stat::MovementSpeed,
        Stat::Knockback,
        Stat::Gravity,
        Stat::Spread,
        Stat::ProjectileSize,
        Stat::AmmoRegeneration,
        Stat::Size,
        Stat::ArmorHealth,
        Stat::ArmorRegen,
        Stat::RegenCooldownSeconds,
        Stat::ReactivateAfterSeconds,
        Stat::Luck,
    ];

    /// Wire identifier used in project files and generated code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Damage => "damage",
            Stat::Health => "health",
            Stat::Reload => "reload",
            Stat::Ammo => "ammo",
            Stat::Projectiles => "projectiles",
            Stat::Bursts => "bursts",
            Stat::TimeBetweenBullets => "timeBetweenBullets",
            Stat::AttackSpeed => "attackSpeed",
            Stat::Bounces => "bounces",
            Stat::BulletSpeed => "bulletSpeed",
            Stat::BlocksAmount => "blocksamount",
            Stat::BlockHealAmount => "blockhealamount",
            Stat::BlockCooldown => "blockcooldown",
            Stat::Respawns => "respawns",
            Stat::Lifesteal => "lifesteal",
            Stat::NumberOfJumps => "numberofjumps",
            Stat::Slow => "slow",
            Stat::MovementSpeed => "movementspeed",
            Stat::Knockback => "knockback",
            Stat::Gravity => "gravity",
            Stat::Spread => "spread",
            Stat::ProjectileSize => "projectilesize",
            Stat::AmmoRegeneration => "ammoregeneration",
            Stat::Size => "size",
            Stat::ArmorHealth => "armorHealth",
            Stat::ArmorRegen => "armorRegen",
            Stat::RegenCooldownSeconds => "regenCooldownSeconds",
            Stat::ReactivateAfterSeconds => "reactivateAfterSeconds",
            Stat::Luck => "luck",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stat {
    type Err = ModelError;

    /// Identifiers are matched exactly; they are case-sensitive on the wire.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stat::ALL
            .iter()
            .copied()
            .find(|stat| stat.as_str() == s)
            .ok_or_else(|| ModelError::UnknownStat { id: s.to_string() })
    }
}

impl Serialize for Stat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Stat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        id.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_identifiers() {
        assert_eq!("damage".parse::<Stat>().unwrap(), Stat::Damage);
        assert_eq!(
            "timeBetweenBullets".parse::<Stat>().unwrap(),
            Stat::TimeBetweenBullets
        );
        assert_eq!("blocksamount".parse::<Stat>().unwrap(), Stat::BlocksAmount);
    }

    #[test]
    fn rejects_unknown_identifier() {
        let err = "mana".parse::<Stat>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownStat { ref id } if id == "mana"));
    }

    #[test]
    fn identifiers_are_unique() {
        let mut ids: Vec<&str> = Stat::ALL.iter().map(Stat::as_str).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Stat::ALL.len());
    }
}
