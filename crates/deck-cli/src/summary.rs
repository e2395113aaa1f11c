use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use deck_model::{ExportOutcome, Mod, Rarity};
use deck_report::{change_descriptor, format_number};
use deck_standards::{all_definitions, definition, rarity_color};
use deck_validate::{IssueScope, ModReport, Severity};

use crate::types::{ExportResult, GenerateResult};

pub fn print_card_table(project: &Mod) {
    println!("Mod: {} ({})", project.name, project.version);
    if project.cards.is_empty() {
        println!("No cards yet. Add one with `decksmith card add`.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Name"),
        header_cell("Class"),
        header_cell("Rarity"),
        header_cell("Theme"),
        header_cell("Stats"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, card) in project.cards.iter().enumerate() {
        let stats = if card.stats.is_empty() {
            dim_cell("-")
        } else {
            let lines: Vec<String> = card
                .stats
                .iter()
                .map(|change| {
                    format!(
                        "{} {}",
                        definition(change.stat).display_name,
                        change_descriptor(change)
                    )
                })
                .collect();
            Cell::new(lines.join("\n"))
        };
        let name = if card.name.trim().is_empty() {
            dim_cell("(unnamed)")
        } else {
            Cell::new(&card.name).add_attribute(Attribute::Bold)
        };
        table.add_row(vec![
            dim_cell(index + 1),
            name,
            Cell::new(card.class_name()),
            rarity_cell(card.rarity),
            Cell::new(card.color),
            stats,
        ]);
    }
    println!("{table}");
}

pub fn print_stats_table() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stat"),
        header_cell("Name"),
        header_cell("Kind"),
        header_cell("Unit"),
        header_cell("Integer"),
        header_cell("Range"),
        header_cell("Phase"),
        header_cell("Requires"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Right);
    for def in all_definitions() {
        let kind = if def.additive { "additive" } else { "multiplier" };
        let requires: Vec<&str> = def.requires.iter().map(|stat| stat.as_str()).collect();
        table.add_row(vec![
            Cell::new(def.stat.as_str()).fg(Color::Blue),
            Cell::new(def.display_name),
            Cell::new(kind),
            optional_cell(def.unit),
            if def.integer {
                Cell::new("✓").fg(Color::Green)
            } else {
                dim_cell("-")
            },
            Cell::new(format!(
                "{}..{}",
                format_number(def.min),
                format_number(def.max)
            )),
            phase_cell(def.phase().as_str()),
            optional_cell(&requires.join(", ")),
        ]);
    }
    println!("{table}");
}

pub fn print_report(report: &ModReport) {
    println!("Mod: {}", report.mod_name);
    let errors = report.error_count();
    let warnings = report.warning_count();
    if report.is_clean() {
        println!("No issues found.");
        return;
    }
    println!(
        "{} error{}, {} warning{}",
        errors,
        plural(errors),
        warnings,
        plural(warnings)
    );
    print_issue_table(report);
}

pub fn print_generate_summary(result: &GenerateResult) {
    if result.is_blocked() {
        print_report(&result.report);
        print_blocking(&result.blocking);
        return;
    }
    if !result.report.is_clean() {
        print_report(&result.report);
    }
    println!("Output: {}", result.output_dir.display());
    print_file_table(&result.files);
}

pub fn print_export_summary(result: &ExportResult, show_log: bool) {
    match result {
        ExportResult::Cancelled => println!("Export cancelled."),
        ExportResult::Blocked { report, blocking } => {
            print_report(report);
            print_blocking(blocking);
        }
        ExportResult::Finished {
            module_name,
            report,
            outcome,
            package,
        } => {
            if !report.is_clean() {
                print_report(report);
            }
            match outcome {
                ExportOutcome::Success { binary, output } => {
                    println!("Exported {module_name}");
                    let mut files = vec![binary.clone()];
                    if let Some(package) = package {
                        files.push(package.manifest.clone());
                        files.push(package.readme.clone());
                    }
                    print_file_table(&files);
                    if show_log && !output.is_empty() {
                        println!();
                        println!("Compiler output:");
                        println!("{output}");
                    }
                }
                ExportOutcome::Failure { message, output } => {
                    eprintln!("Export of {module_name} failed: {message}");
                    if !output.is_empty() {
                        eprintln!();
                        eprintln!("Compiler output:");
                        eprintln!("{output}");
                    }
                }
            }
        }
    }
}

fn print_blocking(blocking: &[String]) {
    eprintln!(
        "Blocked by validation errors in: {} (use --no-fail-on-errors to override)",
        blocking.join(", ")
    );
}

fn print_file_table(files: &[PathBuf]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("File"), header_cell("Path")]);
    apply_table_style(&mut table);
    for path in files {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(name).fg(Color::Green),
            dim_cell(path.display()),
        ]);
    }
    println!("{table}");
}

fn print_issue_table(report: &ModReport) {
    let mut issues: Vec<_> = report.all_issues().collect();
    // Stable: report order is kept within a severity.
    issues.sort_by_key(|(_, issue)| std::cmp::Reverse(severity_rank(issue.severity())));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Scope"),
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Stat"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for (scope, issue) in issues {
        table.add_row(vec![
            scope_cell(report, scope),
            severity_cell(issue.severity()),
            Cell::new(issue.code()),
            match issue.stat() {
                Some(stat) => Cell::new(stat.as_str()),
                None => dim_cell("-"),
            },
            Cell::new(issue.message()),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Percentage(20)),
        ColumnConstraint::UpperBoundary(Width::Fixed(9)),
        ColumnConstraint::UpperBoundary(Width::Fixed(24)),
        ColumnConstraint::UpperBoundary(Width::Fixed(22)),
        ColumnConstraint::UpperBoundary(Width::Percentage(50)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn scope_cell(report: &ModReport, scope: IssueScope) -> Cell {
    match scope {
        IssueScope::Mod => Cell::new("mod")
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        IssueScope::Card(index) => {
            let name = report
                .cards
                .get(index)
                .map(|card| card.card_name.trim())
                .filter(|name| !name.is_empty())
                .map_or_else(|| format!("card #{}", index + 1), str::to_string);
            Cell::new(name)
        }
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn severity_rank(severity: Severity) -> u8 {
    match severity {
        Severity::Error => 2,
        Severity::Warning => 1,
    }
}

fn phase_cell(phase: &str) -> Cell {
    match phase {
        "inactive" => dim_cell(phase),
        _ => Cell::new(phase),
    }
}

fn rarity_cell(rarity: Rarity) -> Cell {
    let cell = Cell::new(rarity);
    match hex_color(rarity_color(rarity)) {
        Some(color) => cell.fg(color),
        None => cell,
    }
}

/// `#rrggbb` to a terminal color.
fn hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some(Color::Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

fn optional_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
