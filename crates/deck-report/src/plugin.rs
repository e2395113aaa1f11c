//! Mod entry point: the BepInEx plugin that registers every card.

use deck_model::Mod;
use deck_standards::PLUGIN_DEPENDENCIES;

use crate::common::{class_name_for, escape_csharp};
use crate::error::Result;

const PLUGIN_USINGS: &[&str] = &[
    "System.Linq",
    "System.Collections",
    "System.Collections.Generic",
    "UnityEngine",
    "BepInEx",
    "BepInEx.Configuration",
    "HarmonyLib",
    "UnboundLib",
    "UnboundLib.Cards",
    "RarityLib.Utils",
    "UnboundLib.Utils",
    "UnboundLib.Utils.UI",
    "UnboundLib.GameModes",
    "UnboundLib.Networking",
    "ModsPlus",
];

/// Registers the extra rarity tier the framework does not ship.
const EXORDIUM_RARITY: &str = "RarityLib.Utils.RarityUtils.AddRarity(\"Exordium\", 0.003f, \
    new Color32(199, 209, 130, 0), new Color32(0, 199, 209, 0));";

/// Plugin class name for a mod.
pub fn plugin_class_name(project: &Mod) -> Result<String> {
    Ok(format!("{}Plugin", class_name_for(&project.name)?))
}

/// Generate the plugin source. Cards register in list order.
pub fn generate_plugin_source(project: &Mod) -> Result<String> {
    let class_name = plugin_class_name(project)?;
    let card_classes = project
        .cards
        .iter()
        .map(|card| class_name_for(&card.name))
        .collect::<Result<Vec<_>>>()?;

    let mut out = String::new();
    for using in PLUGIN_USINGS {
        out.push_str(&format!("using {using};\n"));
    }
    out.push('\n');
    for dependency in PLUGIN_DEPENDENCIES {
        out.push_str(&format!("[BepInDependency(\"{dependency}\")]\n"));
    }
    out.push_str("[BepInPlugin(ModId, ModName, ModVersion)]\n");
    out.push_str("[BepInProcess(\"Rounds.exe\")]\n");
    out.push_str(&format!("public class {class_name} : BaseUnityPlugin\n"));
    out.push_str("{\n");
    out.push_str(&format!(
        "    private const string ModId = \"{}\";\n",
        escape_csharp(&project.id)
    ));
    out.push_str(&format!(
        "    private const string ModName = \"{}\";\n",
        escape_csharp(&project.name)
    ));
    out.push_str(&format!(
        "    private const string ModVersion = \"{}\";\n",
        escape_csharp(&project.version)
    ));
    out.push('\n');
    out.push_str("    void Awake()\n");
    out.push_str("    {\n");
    for card_class in &card_classes {
        out.push_str(&format!(
            "        CardRegistry.RegisterCard<{card_class}>();\n"
        ));
    }
    out.push_str(&format!("        {EXORDIUM_RARITY}\n"));
    out.push_str("    }\n");
    out.push('\n');
    out.push_str("    void Start()\n");
    out.push_str("    {\n");
    out.push_str("        var harmony = new Harmony(ModId);\n");
    out.push_str("        harmony.PatchAll();\n");
    out.push_str("    }\n");
    out.push_str("}\n");
    Ok(out)
}
