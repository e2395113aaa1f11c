#![deny(unsafe_code)]

/// Homepage written into every package manifest.
pub const HOMEPAGE_URL: &str = "https://github.com/willis81808/DeckSmith";

/// Package-manager dependencies, pinned to the versions the generated code
/// is written against.
pub const FRAMEWORK_DEPENDENCIES: &[&str] = &[
    "willis81808-UnboundLib-3.2.12",
    "willis81808-DeckSmithUtil-1.0.0",
    "willis81808-ModsPlus-1.6.2",
    "CrazyCoders-RarityBundle-0.0.0",
    "AALUND13-JARL-2.6.3",
];

/// BepInEx plugin GUIDs the generated plugin declares as hard dependencies.
pub const PLUGIN_DEPENDENCIES: &[&str] = &[
    "com.willis.rounds.unbound",
    "com.willis.rounds.modsplus",
    "root.rarity.lib",
];

/// Pinned upstream package identifiers for the manifest.
pub fn framework_dependencies() -> &'static [&'static str] {
    FRAMEWORK_DEPENDENCIES
}
