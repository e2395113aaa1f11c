//! Package readme.

use deck_model::Mod;
use deck_standards::definition;

use crate::common::change_descriptor;

/// Escape backticks and `${` so the text can sit inside a template literal.
///
/// A marker preceded by an odd run of backslashes is already escaped and
/// left alone, so escaping twice gives the same result as escaping once.
pub fn escape_readme(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut backslashes = 0usize;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        let escaped = backslashes % 2 == 1;
        match ch {
            '`' if !escaped => out.push_str("\\`"),
            '$' if !escaped && chars.peek() == Some(&'{') => out.push_str("\\$"),
            _ => out.push(ch),
        }
        backslashes = if ch == '\\' { backslashes + 1 } else { 0 };
    }
    out
}

/// Readme text: the escaped description, then one section per card listing
/// its stats as `- <Display Name> <amount>`.
pub fn generate_readme(project: &Mod) -> String {
    let mut out = format!("\n{}\n", escape_readme(&project.description));
    for card in &project.cards {
        out.push_str(&format!("\n## {}\n", escape_readme(&card.name)));
        for change in &card.stats {
            out.push_str(&format!(
                "- {} {}\n",
                definition(change.stat).display_name,
                change_descriptor(change)
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_readme() {
        assert_eq!(escape_readme("a `b` ${c} $d"), r"a \`b\` \${c} $d");
        assert_eq!(escape_readme(r"already \` \${x}"), r"already \` \${x}");
    }

    #[test]
    fn test_escaped_backslash_does_not_escape_marker() {
        assert_eq!(escape_readme(r"a\\`b"), r"a\\\`b");
        assert_eq!(escape_readme(r"a\\${b}"), r"a\\\${b}");
        assert_eq!(escape_readme(r"a\\\`b"), r"a\\\`b");
    }
}
