//! Project editing helpers behind `decksmith new` and `decksmith card`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use deck_model::{Card, Mod, PROJECT_EXTENSION, SimpleAmount, Stat, StatChange};

/// Parse a `--stat` argument.
///
/// The form is `STAT=VALUE` optionally followed by `:positive` or
/// `:negative` and `:<simple amount>`, in any order:
/// `damage=1.5`, `ammo=-20:negative:lower`.
pub fn parse_stat_change(arg: &str) -> std::result::Result<StatChange, String> {
    let mut parts = arg.split(':');
    let head = parts.next().unwrap_or_default();
    let (stat, value) = head
        .split_once('=')
        .ok_or_else(|| format!("expected STAT=VALUE, got `{head}`"))?;
    let stat: Stat = stat.trim().parse::<Stat>().map_err(|e| e.to_string())?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid value `{}` for {stat}", value.trim()))?;
    if !value.is_finite() {
        return Err(format!("value for {stat} must be finite"));
    }

    let mut change = StatChange::new(stat, value);
    for option in parts {
        match option.trim() {
            "positive" => change.positive = true,
            "negative" => change.positive = false,
            other => {
                let amount: SimpleAmount = other.parse::<SimpleAmount>().map_err(|e| e.to_string())?;
                change.simple_amount = amount;
            }
        }
    }
    Ok(change)
}

/// Resolve the path a project is saved to, adding the project suffix when
/// the argument has no extension.
pub fn project_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".");
        name.push(PROJECT_EXTENSION);
        PathBuf::from(name)
    }
}

/// Write a fresh project file. Refuses to overwrite unless `force` is set.
pub fn create_project(path: &Path, project: &Mod, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    project
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), mod_name = %project.name, "created project");
    Ok(())
}

pub fn load_project(path: &Path) -> Result<Mod> {
    Mod::load(path).with_context(|| format!("failed to load project {}", path.display()))
}

pub fn save_project(path: &Path, project: &Mod) -> Result<()> {
    project
        .save(path)
        .with_context(|| format!("failed to save project {}", path.display()))
}

/// Append `card` and return its 1-based number.
pub fn add_card(project: &mut Mod, card: Card) -> usize {
    let index = project.add_card();
    project.cards[index] = card;
    tracing::debug!(card = %project.cards[index].name, number = index + 1, "added card");
    index + 1
}

/// Remove the card with the given 1-based number.
pub fn remove_card(project: &mut Mod, number: usize) -> Result<Card> {
    if number == 0 {
        bail!("card numbers start at 1");
    }
    let card = project
        .remove_card(number - 1)
        .with_context(|| format!("cannot remove card #{number}"))?;
    tracing::debug!(card = %card.name, number, "removed card");
    Ok(card)
}
