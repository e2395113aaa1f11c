//! Shared formatting for generated sources.

use deck_model::StatChange;
use deck_standards::{StatDefinition, VALUE_PLACEHOLDER, definition};
use deck_validate::is_valid_identifier;

use crate::error::{ReportError, Result};

/// Shortest round-trip decimal form. Negative zero renders as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

/// Human-readable amount shown on the card, e.g. `+50%` or `-20`.
pub fn descriptor(def: &StatDefinition, value: f64) -> String {
    if def.additive {
        let sign = if value < 0.0 { "" } else { "+" };
        format!("{sign}{}{}", format_number(value), def.unit)
    } else {
        let percent = ((value - 1.0) * 100.0).floor();
        let sign = if percent < 0.0 { "" } else { "+" };
        format!("{sign}{}%", format_number(percent))
    }
}

/// Descriptor for a stat change using its registry definition.
pub fn change_descriptor(change: &StatChange) -> String {
    descriptor(definition(change.stat), change.value)
}

/// C# literal for a stat value: truncated integer or `float`.
pub fn render_value(def: &StatDefinition, value: f64) -> Result<String> {
    if !value.is_finite() {
        return Err(ReportError::NonFiniteValue {
            stat: def.stat,
            value,
        });
    }
    if def.integer {
        let truncated = value.trunc();
        if truncated < f64::from(i32::MIN) || truncated > f64::from(i32::MAX) {
            return Err(ReportError::IntegerOutOfRange {
                stat: def.stat,
                value,
            });
        }
        Ok(format_number(truncated))
    } else {
        Ok(format!("{}f", format_number(value)))
    }
}

/// The assignment statement for a change, or `None` for display-only stats.
pub fn effect_statement(change: &StatChange) -> Result<Option<String>> {
    let def = definition(change.stat);
    match def.effect.template() {
        Some(template) => {
            let value = render_value(def, change.value)?;
            Ok(Some(template.replace(VALUE_PLACEHOLDER, &value)))
        }
        None => Ok(None),
    }
}

/// Escape text for a regular C# string literal.
pub fn escape_csharp(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Class name derived from a display name, checked for C# validity.
pub fn class_name_for(name: &str) -> Result<String> {
    let class_name = name.replace(' ', "");
    if is_valid_identifier(&class_name) {
        Ok(class_name)
    } else {
        Err(ReportError::InvalidClassName {
            name: name.to_string(),
        })
    }
}
