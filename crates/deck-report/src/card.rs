//! Per-card C# source.
//!
//! Each card becomes a `SimpleCard` subclass with three parts: the
//! `Details` metadata (including the `CardInfoStat` descriptors), the
//! immediate effects in `SetupCard`, and the secondary effects in `Added`.

use deck_model::{ActivationPhase, Card, StatChange};
use deck_standards::definition;

use crate::common::{change_descriptor, class_name_for, effect_statement, escape_csharp};
use crate::error::Result;

const CARD_USINGS: &[&str] = &[
    "System",
    "System.Collections",
    "System.Collections.Generic",
    "UnityEngine",
    "ModsPlus",
    "ModdingUtils",
    "RarityLib.Utils",
    "JARL.Armor",
    "JARL.Armor.Builtin",
    "JARL.Armor.Bases",
];

const SETUP_SIGNATURE: &str = "public override void SetupCard(CardInfo cardInfo, Gun gun, \
    ApplyCardStats cardStats, CharacterStatModifiers statModifiers, Block block)";

const ADDED_SIGNATURE: &str = "protected override void Added(Player player, Gun gun, \
    GunAmmo gunAmmo, CharacterData data, HealthHandler health, Gravity gravity, Block block, \
    CharacterStatModifiers characterStats)";

const ARMOR_LOOKUP: &str =
    "ArmorBase armor = ArmorFramework.ArmorHandlers[player].GetArmorByType<DefaultArmor>();";

/// Assignment statements for one activation phase, in stat-list order.
///
/// Stats of other phases are skipped without leaving gaps; display-only
/// stats never produce a statement.
pub fn effect_statements(card: &Card, phase: ActivationPhase) -> Result<Vec<String>> {
    let mut statements = Vec::new();
    for change in &card.stats {
        if definition(change.stat).phase() != phase {
            continue;
        }
        if let Some(statement) = effect_statement(change)? {
            statements.push(statement);
        }
    }
    Ok(statements)
}

fn stat_info(change: &StatChange) -> String {
    let def = definition(change.stat);
    let mut out = String::new();
    out.push_str("            new CardInfoStat()\n");
    out.push_str("            {\n");
    out.push_str(&format!("                positive = {},\n", change.positive));
    out.push_str(&format!(
        "                stat = \"{}\",\n",
        escape_csharp(def.display_name)
    ));
    out.push_str(&format!(
        "                amount = \"{}\",\n",
        escape_csharp(&change_descriptor(change))
    ));
    out.push_str(&format!(
        "                simepleAmount = CardInfoStat.SimpleAmount.{},\n",
        change.simple_amount.as_str()
    ));
    out.push_str("            },\n");
    out
}

fn push_block(out: &mut String, signature: &str, preamble: Option<&str>, body: &[String]) {
    out.push_str(&format!("    {signature}\n"));
    out.push_str("    {\n");
    if let Some(line) = preamble {
        out.push_str(&format!("        {line}\n"));
    }
    for statement in body {
        out.push_str(&format!("        {statement}\n"));
    }
    out.push_str("    }\n");
}

/// Generate the C# source for one card of the mod named `mod_name`.
pub fn generate_card_source(mod_name: &str, card: &Card) -> Result<String> {
    let class_name = class_name_for(&card.name)?;
    let immediate = effect_statements(card, ActivationPhase::Immediate)?;
    let secondary = effect_statements(card, ActivationPhase::Secondary)?;

    let mut out = String::new();
    for using in CARD_USINGS {
        out.push_str(&format!("using {using};\n"));
    }
    out.push('\n');
    out.push_str(&format!("public class {class_name} : SimpleCard\n"));
    out.push_str("{\n");
    out.push_str("    public override CardDetails Details => new CardDetails\n");
    out.push_str("    {\n");
    out.push_str(&format!(
        "        Title       = \"{}\",\n",
        escape_csharp(&card.name)
    ));
    out.push_str(&format!(
        "        Description = \"{}\",\n",
        escape_csharp(&card.description)
    ));
    out.push_str(&format!(
        "        ModName     = \"{}\",\n",
        escape_csharp(mod_name)
    ));
    out.push_str(&format!(
        "        Rarity      = RarityUtils.GetRarity(\"{}\"),\n",
        card.rarity.as_str()
    ));
    out.push_str(&format!(
        "        Theme       = CardThemeColor.CardThemeColorType.{},\n",
        card.color.as_str()
    ));
    out.push_str(&format!(
        "        Art         = DeckSmithUtil.Instance.GetArtFromUrl(\"{}\"),\n",
        escape_csharp(&card.art_url)
    ));
    out.push_str("        Stats = new CardInfoStat[]\n");
    out.push_str("        {\n");
    for change in &card.stats {
        out.push_str(&stat_info(change));
    }
    out.push_str("        }\n");
    out.push_str("    };\n");
    out.push('\n');
    push_block(&mut out, SETUP_SIGNATURE, None, &immediate);
    out.push('\n');
    // Armor lookup only when a secondary effect needs it.
    let armor = (!secondary.is_empty()).then_some(ARMOR_LOOKUP);
    push_block(&mut out, ADDED_SIGNATURE, armor, &secondary);
    out.push_str("}\n");

    tracing::trace!(
        class_name = %class_name,
        immediate = immediate.len(),
        secondary = secondary.len(),
        "generated card source"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_model::Stat;

    #[test]
    fn test_display_only_stat_emits_nothing() {
        let mut card = Card::new("Lucky");
        card.stats.push(StatChange::new(Stat::Luck, 7.0));
        for phase in [
            ActivationPhase::Inactive,
            ActivationPhase::Immediate,
            ActivationPhase::Secondary,
        ] {
            assert!(effect_statements(&card, phase).unwrap().is_empty());
        }
    }

    #[test]
    fn test_invalid_name_is_an_error() {
        assert!(generate_card_source("Mod", &Card::new("")).is_err());
    }
}
