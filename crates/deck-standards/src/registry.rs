#![deny(unsafe_code)]

use deck_model::{ActivationPhase, Stat};

use crate::error::StandardsError;

/// Placeholder substituted with the rendered value in effect templates.
pub const VALUE_PLACEHOLDER: &str = "{value}";

/// How a stat change is applied in generated code.
///
/// Templates are C# statements containing [`VALUE_PLACEHOLDER`]. The
/// variant fixes the activation phase, so a stat cannot have a handler
/// without a phase or the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Display only: no handler exists.
    None,
    /// Applied in `SetupCard` against `gun`, `statModifiers` or `block`.
    Immediate(&'static str),
    /// Applied in `Added` against the player's `armor`.
    Secondary(&'static str),
}

impl Effect {
    pub fn phase(&self) -> ActivationPhase {
        match self {
            Effect::None => ActivationPhase::Inactive,
            Effect::Immediate(_) => ActivationPhase::Immediate,
            Effect::Secondary(_) => ActivationPhase::Secondary,
        }
    }

    pub fn template(&self) -> Option<&'static str> {
        match self {
            Effect::None => None,
            Effect::Immediate(template) | Effect::Secondary(template) => Some(*template),
        }
    }
}

/// Constraints and rendering rules for one stat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatDefinition {
    pub stat: Stat,
    pub display_name: &'static str,
    /// Suffix for additive descriptors; multiplicative stats always render `%`.
    pub unit: &'static str,
    /// `true`: rendered as a signed offset. `false`: a multiplier around 1.0.
    pub additive: bool,
    /// Values are truncated to an integer when applied.
    pub integer: bool,
    pub min: f64,
    pub max: f64,
    /// Stats that must appear on the same card.
    pub requires: &'static [Stat],
    pub effect: Effect,
}

impl StatDefinition {
    const fn multiplier(
        stat: Stat,
        display_name: &'static str,
        effect: Effect,
    ) -> StatDefinition {
        StatDefinition {
            stat,
            display_name,
            unit: "%",
            additive: false,
            integer: false,
            min: -100.0,
            max: 100.0,
            requires: &[],
            effect,
        }
    }

    const fn count(
        stat: Stat,
        display_name: &'static str,
        min: f64,
        max: f64,
        effect: Effect,
    ) -> StatDefinition {
        StatDefinition {
            stat,
            display_name,
            unit: "",
            additive: true,
            integer: true,
            min,
            max,
            requires: &[],
            effect,
        }
    }

    const fn armor(
        stat: Stat,
        display_name: &'static str,
        unit: &'static str,
        min: f64,
        max: f64,
        template: &'static str,
    ) -> StatDefinition {
        StatDefinition {
            stat,
            display_name,
            unit,
            additive: true,
            integer: false,
            min,
            max,
            requires: &[],
            effect: Effect::Secondary(template),
        }
    }

    pub fn phase(&self) -> ActivationPhase {
        self.effect.phase()
    }

    pub fn in_bounds(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

static DAMAGE: StatDefinition = StatDefinition::multiplier(
    Stat::Damage,
    "Damage",
    Effect::Immediate("gun.damage = {value};"),
);
static HEALTH: StatDefinition = StatDefinition::multiplier(
    Stat::Health,
    "Health",
    Effect::Immediate("statModifiers.health = {value};"),
);
static RELOAD: StatDefinition = StatDefinition::multiplier(
    Stat::Reload,
    "Reload Time",
    Effect::Immediate("gun.reloadTime = {value};"),
);
static AMMO: StatDefinition = StatDefinition::count(
    Stat::Ammo,
    "Ammunition",
    -100.0,
    10000.0,
    Effect::Immediate("gun.ammo = {value};"),
);
static PROJECTILES: StatDefinition = StatDefinition::count(
    Stat::Projectiles,
    "Projectiles",
    1.0,
    10000.0,
    Effect::Immediate("gun.numberOfProjectiles = Mathf.Max(1, {value});"),
);
static BURSTS: StatDefinition = StatDefinition {
    requires: &[Stat::TimeBetweenBullets],
    ..StatDefinition::count(
        Stat::Bursts,
        "Bursts",
        1.0,
        10000.0,
        Effect::Immediate("gun.bursts = {value};"),
    )
};
static TIME_BETWEEN_BULLETS: StatDefinition = StatDefinition {
    stat: Stat::TimeBetweenBullets,
    display_name: "Time Between Bullets",
    unit: " seconds",
    additive: true,
    integer: false,
    min: -100.0,
    max: 100.0,
    requires: &[Stat::Bursts],
    effect: Effect::Immediate("gun.timeBetweenBullets = {value};"),
};
static ATTACK_SPEED: StatDefinition = StatDefinition::multiplier(
    Stat::AttackSpeed,
    "Attack Speed",
    Effect::Immediate("gun.attackSpeed = {value};"),
);
static BOUNCES: StatDefinition = StatDefinition::count(
    Stat::Bounces,
    "Bounces",
    1.0,
    10000.0,
    Effect::Immediate("gun.reflects = {value};"),
);
static BULLET_SPEED: StatDefinition = StatDefinition::multiplier(
    Stat::BulletSpeed,
    "Bullet Speed",
    Effect::Immediate("gun.projectileSpeed = {value};"),
);
static BLOCKS_AMOUNT: StatDefinition = StatDefinition::count(
    Stat::BlocksAmount,
    "Additional Blocks",
    -100.0,
    100.0,
    Effect::Immediate("block.additionalBlocks = {value};"),
);
static BLOCK_HEAL_AMOUNT: StatDefinition = StatDefinition::count(
    Stat::BlockHealAmount,
    "Heal Amount",
    -100.0,
    1_000_000.0,
    Effect::Immediate("block.healing = {value};"),
);
static BLOCK_COOLDOWN: StatDefinition = StatDefinition::multiplier(
    Stat::BlockCooldown,
    "Block Cooldown",
    Effect::Immediate("block.cdMultiplier = {value};"),
);
static RESPAWNS: StatDefinition = StatDefinition::count(
    Stat::Respawns,
    "Respawns",
    1.0,
    10000.0,
    Effect::Immediate("statModifiers.respawns = {value};"),
);
static LIFESTEAL: StatDefinition = StatDefinition::multiplier(
    Stat::Lifesteal,
    "Lifesteal",
    Effect::Immediate("statModifiers.lifeSteal = {value};"),
);
static NUMBER_OF_JUMPS: StatDefinition = StatDefinition::count(
    Stat::NumberOfJumps,
    "Total Jumps",
    1.0,
    10000.0,
    Effect::Immediate("statModifiers.numberOfJumps = {value};"),
);
static SLOW: StatDefinition = StatDefinition::multiplier(
    Stat::Slow,
    "Slow",
    Effect::Immediate("gun.slow = {value};"),
);
static MOVEMENT_SPEED: StatDefinition = StatDefinition::multiplier(
    Stat::MovementSpeed,
    "Movement Speed",
    Effect::Immediate("statModifiers.movementSpeed = {value};"),
);
static KNOCKBACK: StatDefinition = StatDefinition::multiplier(
    Stat::Knockback,
    "Knockback",
    Effect::Immediate("gun.knockback = {value};"),
);
static GRAVITY: StatDefinition = StatDefinition::multiplier(
    Stat::Gravity,
    "Gravity",
    Effect::Immediate("statModifiers.gravity = {value};"),
);
static SPREAD: StatDefinition = StatDefinition::multiplier(
    Stat::Spread,
    "Spread",
    Effect::Immediate("gun.spread = {value};"),
);
static PROJECTILE_SIZE: StatDefinition = StatDefinition::multiplier(
    Stat::ProjectileSize,
    "Projectile Size",
    Effect::Immediate("gun.projectileSize = {value};"),
);
static AMMO_REGENERATION: StatDefinition = StatDefinition::multiplier(
    Stat::AmmoRegeneration,
    "Ammo Regeneration",
    Effect::Immediate("gun.ammoReg = {value};"),
);
static SIZE: StatDefinition = StatDefinition::multiplier(
    Stat::Size,
    "Size",
    Effect::Immediate("statModifiers.sizeMultiplier = {value};"),
);
static ARMOR_HEALTH: StatDefinition = StatDefinition::armor(
    Stat::ArmorHealth,
    "Armor Health",
    "",
    0.0,
    1_000_000.0,
    "armor.MaxArmorValue += (int){value};",
);
static ARMOR_REGEN: StatDefinition = StatDefinition::armor(
    Stat::ArmorRegen,
    "Armor Regeneration",
    "",
    0.0,
    1_000_000.0,
    "armor.ArmorRegenerationRate += {value};",
);
static REGEN_COOLDOWN_SECONDS: StatDefinition = StatDefinition::armor(
    Stat::RegenCooldownSeconds,
    "Regen Cooldown",
    "",
    -1_000_000.0,
    1_000_000.0,
    "if (armor.ArmorRegenCooldownSeconds < {value}) armor.ArmorRegenCooldownSeconds = {value};",
);
static REACTIVATE_AFTER_SECONDS: StatDefinition = StatDefinition::armor(
    Stat::ReactivateAfterSeconds,
    "Reactivation Time",
    " Seconds",
    -1_000_000.0,
    1_000_000.0,
    "armor.reactivateArmorType = ArmorReactivateType.Second; \
     if (armor.reactivateArmorValue < {value}) armor.reactivateArmorValue = {value};",
);
static LUCK: StatDefinition = StatDefinition::count(
    Stat::Luck,
    "Luck",
    -1_000_000.0,
    1_000_000.0,
    Effect::None,
);

/// Definition for a stat. Total over [`Stat`].
pub fn definition(stat: Stat) -> &'static StatDefinition {
    match stat {
        Stat::Damage => &DAMAGE,
        Stat::Health => &HEALTH,
        Stat::Reload => &RELOAD,
        Stat::Ammo => &AMMO,
        Stat::Projectiles => &PROJECTILES,
        Stat::Bursts => &BURSTS,
        Stat::TimeBetweenBullets => &TIME_BETWEEN_BULLETS,
        Stat::AttackSpeed => &ATTACK_SPEED,
        Stat::Bounces => &BOUNCES,
        Stat::BulletSpeed => &BULLET_SPEED,
        Stat::BlocksAmount => &BLOCKS_AMOUNT,
        Stat::BlockHealAmount => &BLOCK_HEAL_AMOUNT,
        Stat::BlockCooldown => &BLOCK_COOLDOWN,
        Stat::Respawns => &RESPAWNS,
        Stat::Lifesteal => &LIFESTEAL,
        Stat::NumberOfJumps => &NUMBER_OF_JUMPS,
        Stat::Slow => &SLOW,
        Stat::MovementSpeed => &MOVEMENT_SPEED,
        Stat::Knockback => &KNOCKBACK,
        Stat::Gravity => &GRAVITY,
        Stat::Spread => &SPREAD,
        Stat::ProjectileSize => &PROJECTILE_SIZE,
        Stat::AmmoRegeneration => &AMMO_REGENERATION,
        Stat::Size => &SIZE,
        Stat::ArmorHealth => &ARMOR_HEALTH,
        Stat::ArmorRegen => &ARMOR_REGEN,
        Stat::RegenCooldownSeconds => &REGEN_COOLDOWN_SECONDS,
        Stat::ReactivateAfterSeconds => &REACTIVATE_AFTER_SECONDS,
        Stat::Luck => &LUCK,
    }
}

/// Look up a stat by its wire identifier.
pub fn lookup(stat_id: &str) -> Result<&'static StatDefinition, StandardsError> {
    stat_id
        .parse::<Stat>()
        .map(definition)
        .map_err(|_| StandardsError::UnknownStat {
            id: stat_id.to_string(),
        })
}

/// All definitions in declaration order.
pub fn all_definitions() -> impl Iterator<Item = &'static StatDefinition> {
    Stat::ALL.into_iter().map(definition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_matches_stat() {
        for stat in Stat::ALL {
            assert_eq!(definition(stat).stat, stat);
        }
    }

    #[test]
    fn test_templates_contain_placeholder() {
        for def in all_definitions() {
            if let Some(template) = def.effect.template() {
                assert!(template.contains(VALUE_PLACEHOLDER), "{}", def.stat);
            }
        }
    }

    #[test]
    fn test_requires_are_mutual() {
        for def in all_definitions() {
            for required in def.requires {
                assert!(
                    definition(*required).requires.contains(&def.stat),
                    "{} requires {} but not the reverse",
                    def.stat,
                    required
                );
            }
        }
    }
}
