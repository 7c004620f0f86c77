//! Report rendering: HTML page, enriched CSV, XLSX workbook, text and JSON summaries

use crate::assignment::{AssignmentResult, SlotAssignment};
use crate::config::AnalysisConfig;
use crate::roles::{RoleCatalog, RoleGroup};
use crate::scoring::PlayerRecord;
use crate::table::{PlayerTable, NAME_COLUMNS, POSITION_COLUMNS};
use anyhow::{Context, Result};
use askama::Template;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;

const DERIVED_COLUMNS: [&str; 4] = ["Spd", "Work", "Jmp", "Str"];

/// Export columns carried through to the output (everything but name and position)
pub fn passthrough_columns(table: &PlayerTable, config: &AnalysisConfig) -> Vec<String> {
    if !config.include_raw_attributes {
        return Vec::new();
    }
    let name_idx = table.column_index(NAME_COLUMNS);
    let pos_idx = table.column_index(POSITION_COLUMNS);
    table
        .headers
        .iter()
        .enumerate()
        .filter(|(i, h)| !h.is_empty() && Some(*i) != name_idx && Some(*i) != pos_idx)
        .map(|(_, h)| h.clone())
        .collect()
}

/// Header of the enriched player table
pub fn enriched_header(raw_columns: &[String], catalog: &RoleCatalog) -> Vec<String> {
    let mut header = vec!["Name".to_string(), "Position".to_string()];
    header.extend(raw_columns.iter().cloned());
    header.extend(DERIVED_COLUMNS.iter().map(|c| c.to_string()));
    header.extend(catalog.codes().map(|c| c.to_string()));
    header.push("Best_Score".to_string());
    header.push("Best_Role".to_string());
    header
}

fn enriched_row(player: &PlayerRecord, raw_columns: &[String], catalog: &RoleCatalog) -> Vec<String> {
    let mut row = vec![player.name.clone(), player.position_text.clone()];
    row.extend(raw_columns.iter().map(|c| {
        player
            .raw_attributes
            .get(c)
            .map(|v| v.as_display())
            .unwrap_or_default()
    }));
    let d = &player.derived;
    row.extend([d.speed, d.work, d.jump, d.strength].iter().map(|v| format_score(*v)));
    row.extend(
        catalog
            .codes()
            .map(|code| format_score(player.role_score(code).unwrap_or(0.0))),
    );
    row.push(format_score(player.best_score));
    row.push(player.best_role.clone().unwrap_or_default());
    row
}

fn format_score(value: f64) -> String {
    format!("{:.1}", value)
}

// ============================================================================
// CSV
// ============================================================================

pub fn write_enriched_csv(
    path: &Path,
    raw_columns: &[String],
    players: &[PlayerRecord],
    catalog: &RoleCatalog,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create output CSV: {}", path.display()))?;
    writer.write_record(enriched_header(raw_columns, catalog))?;
    for player in players {
        writer
            .write_record(enriched_row(player, raw_columns, catalog))
            .context("Failed to write CSV row")?;
    }
    writer.flush()?;
    Ok(())
}

// ============================================================================
// Text and JSON summaries
// ============================================================================

/// Line-up blocks followed by a one-line-per-formation summary table
pub fn format_formation_summary(results: &[AssignmentResult], catalog: &RoleCatalog) -> Result<String> {
    let mut out = String::new();
    if results.is_empty() {
        writeln!(out, "No formations to rank")?;
        return Ok(out);
    }

    writeln!(out, "TOP {} FORMATIONS", results.len())?;
    writeln!(out, "{}", "=".repeat(70))?;
    for (i, result) in results.iter().enumerate() {
        writeln!(out, "\n#{}. {}", i + 1, result.formation_name)?;
        writeln!(out, "Total Score: {:.2}", result.total_score)?;
        writeln!(out, "{}", "-".repeat(70))?;
        writeln!(out, "{:<36} | {:<24} | {:>5}", "Position (Role)", "Player", "Score")?;
        writeln!(out, "{}", "-".repeat(70))?;
        for slot in &result.assignments {
            writeln!(
                out,
                "{:<36} | {:<24} | {:>5.1}",
                slot_label(slot, catalog),
                slot.player_name.as_deref().unwrap_or("(unfilled)"),
                slot.score
            )?;
        }
        writeln!(out, "{}", "-".repeat(70))?;
        writeln!(
            out,
            "Filled {}/{} | Avg per slot {:.2} | Avg per filled slot {:.2}",
            result.filled_count(),
            result.slot_count(),
            result.average_per_slot(),
            result.average_per_filled_slot()
        )?;
    }

    writeln!(out, "\n\nQUICK SUMMARY")?;
    writeln!(out, "{}", "=".repeat(78))?;
    writeln!(
        out,
        "{:<4} | {:<32} | {:>8} | {:>8} | {:>10} | {:>6}",
        "Rank", "Formation", "Total", "Avg/Slot", "Avg/Filled", "Filled"
    )?;
    writeln!(out, "{}", "-".repeat(78))?;
    for (i, result) in results.iter().enumerate() {
        writeln!(
            out,
            "#{:<3} | {:<32} | {:>8.2} | {:>8.2} | {:>10.2} | {:>2}/{:<3}",
            i + 1,
            truncate(&result.formation_name, 32),
            result.total_score,
            result.average_per_slot(),
            result.average_per_filled_slot(),
            result.filled_count(),
            result.slot_count()
        )?;
    }
    writeln!(out, "{}", "=".repeat(78))?;
    Ok(out)
}

fn slot_label(slot: &SlotAssignment, catalog: &RoleCatalog) -> String {
    let role = match slot.resolution.code() {
        Some(code) => catalog.describe(code),
        None => format!("{} ~{}", slot.role_label, slot.resolution.kind()),
    };
    truncate(&format!("{} ({})", slot.requirement, role), 36)
}

fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[derive(Serialize)]
struct FormationJson<'a> {
    formation_name: &'a str,
    total_score: f64,
    average_score_per_slot: f64,
    average_score_per_filled_slot: f64,
    slot_count: usize,
    filled_count: usize,
    assignments: &'a [SlotAssignment],
}

/// Ranked results as a JSON array
pub fn results_to_json(results: &[AssignmentResult]) -> Result<String> {
    let view: Vec<FormationJson> = results
        .iter()
        .map(|r| FormationJson {
            formation_name: &r.formation_name,
            total_score: r.total_score,
            average_score_per_slot: r.average_per_slot(),
            average_score_per_filled_slot: r.average_per_filled_slot(),
            slot_count: r.slot_count(),
            filled_count: r.filled_count(),
            assignments: &r.assignments,
        })
        .collect();
    serde_json::to_string_pretty(&view).context("Failed to serialize formation results")
}

// ============================================================================
// XLSX
// ============================================================================

/// Workbook with a Players sheet (enriched table) and a Formations sheet (ranked line-ups)
pub fn write_workbook(
    path: &Path,
    raw_columns: &[String],
    players: &[PlayerRecord],
    catalog: &RoleCatalog,
    results: &[AssignmentResult],
    config: &AnalysisConfig,
) -> Result<()> {
    use rust_xlsxwriter::{Format, FormatAlign, Workbook};

    let mut workbook = Workbook::new();
    let header_fmt = Format::new().set_bold();
    let title_fmt = Format::new().set_bold().set_font_size(14);
    let left_fmt = Format::new().set_align(FormatAlign::Left);

    let band_fill = |band: &str| -> Option<Format> {
        let color = match band {
            "excellent" => "#C6EFCE",
            "good" => "#DDEBF7",
            "average" => "#FFF2CC",
            "poor" => "#FCE4D6",
            _ => return None,
        };
        Some(Format::new().set_background_color(color).set_num_format("0.0"))
    };
    let score_fmt = Format::new().set_num_format("0.0");

    // ---------------------------------------------------------------
    // Players sheet
    //   Name | Pos | [export cols...] | Spd Work Jmp Str | [role codes...] | Best_Score | Best_Role
    // ---------------------------------------------------------------
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Players")?;

        let header = enriched_header(raw_columns, catalog);
        for (col, h) in header.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, h, &header_fmt)?;
        }

        let first_score_col = 2 + raw_columns.len();
        let best_score_col = header.len() - 2;
        for (i, player) in players.iter().enumerate() {
            let row = (i + 1) as u32;
            let values = enriched_row(player, raw_columns, catalog);
            for (col, value) in values.iter().enumerate() {
                let c = col as u16;
                let is_score = col >= first_score_col && col <= best_score_col;
                if !is_score {
                    sheet.write_string(row, c, value)?;
                    continue;
                }
                let n: f64 = value.parse().unwrap_or(0.0);
                let is_role = col >= first_score_col + DERIVED_COLUMNS.len();
                match band_fill(config.thresholds.classify(n)).filter(|_| is_role) {
                    Some(fmt) => sheet.write_number_with_format(row, c, n, &fmt)?,
                    None => sheet.write_number_with_format(row, c, n, &score_fmt)?,
                };
            }
        }

        sheet.set_column_width(0, 24)?;
        sheet.set_column_width(1, 18)?;
        sheet.set_freeze_panes(1, 1)?;
        if !players.is_empty() {
            sheet.autofilter(0, 0, players.len() as u32, (header.len() - 1) as u16)?;
        }
    }

    // ---------------------------------------------------------------
    // Formations sheet
    //   Rank | Formation | Requirement | Role | Resolution | Player | Score
    // ---------------------------------------------------------------
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Formations")?;

        let columns = ["Rank", "Formation", "Requirement", "Role", "Resolution", "Player", "Score"];
        for (col, h) in columns.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *h, &header_fmt)?;
        }

        let mut row = 1u32;
        for (rank, result) in results.iter().enumerate() {
            sheet.write_number(row, 0, (rank + 1) as f64)?;
            sheet.write_string_with_format(row, 1, &result.formation_name, &title_fmt)?;
            sheet.write_string_with_format(
                row,
                2,
                format!(
                    "Total {:.1} | Avg/slot {:.2} | Avg/filled {:.2} | Filled {}/{}",
                    result.total_score,
                    result.average_per_slot(),
                    result.average_per_filled_slot(),
                    result.filled_count(),
                    result.slot_count()
                ),
                &left_fmt,
            )?;
            row += 1;

            for slot in &result.assignments {
                sheet.write_number(row, 0, (rank + 1) as f64)?;
                sheet.write_string(row, 1, &result.formation_name)?;
                sheet.write_string(row, 2, &slot.requirement)?;
                sheet.write_string(row, 3, &slot.role_label)?;
                sheet.write_string(row, 4, slot.resolution.kind())?;
                sheet.write_string(row, 5, slot.player_name.as_deref().unwrap_or(""))?;
                sheet.write_number_with_format(row, 6, slot.score, &score_fmt)?;
                row += 1;
            }
            row += 1;
        }

        sheet.set_column_width(1, 28)?;
        sheet.set_column_width(2, 14)?;
        sheet.set_column_width(3, 26)?;
        sheet.set_column_width(5, 24)?;
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    workbook
        .save(path)
        .map_err(|e| anyhow::anyhow!("Failed to save workbook: {}", e))?;
    Ok(())
}

// ============================================================================
// HTML
// ============================================================================

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate {
    source_name: String,
    player_count: usize,
    role_count: usize,
    generated: String,
    bands: Vec<ScoreCell>,
    groups: Vec<GroupView>,
    role_columns: Vec<RoleColumn>,
    players: Vec<PlayerRow>,
    formations: Vec<FormationView>,
}

/// A score with its band class (`excellent`, `good`, ...)
struct ScoreCell {
    css_class: &'static str,
    value: String,
}

impl ScoreCell {
    fn new(score: f64, config: &AnalysisConfig) -> Self {
        Self {
            css_class: config.thresholds.classify(score),
            value: format_score(score),
        }
    }
}

struct GroupView {
    short: &'static str,
    plural: &'static str,
    roles: Vec<LegendRole>,
}

struct LegendRole {
    code: String,
    description: String,
    weight: u32,
}

struct RoleColumn {
    code: String,
    description: String,
}

struct PlayerRow {
    groups: String,
    name: String,
    position: String,
    best_role: String,
    best: ScoreCell,
    derived: Vec<String>,
    scores: Vec<ScoreCell>,
}

struct FormationView {
    rank: usize,
    name: String,
    total: String,
    average_per_slot: String,
    average_per_filled_slot: String,
    filled: String,
    slots: Vec<SlotRow>,
}

struct SlotRow {
    requirement: String,
    role_label: String,
    role_tag: String,
    filled: bool,
    player: String,
    score: ScoreCell,
}

fn player_row(player: &PlayerRecord, catalog: &RoleCatalog, config: &AnalysisConfig) -> PlayerRow {
    let groups: Vec<&str> = player.groups().iter().map(|g| g.short()).collect();
    let d = &player.derived;
    PlayerRow {
        groups: groups.join(" "),
        name: player.name.clone(),
        position: player.position_text.clone(),
        best_role: player.best_role().unwrap_or("").to_string(),
        best: ScoreCell::new(player.best_score, config),
        derived: [d.speed, d.work, d.jump, d.strength].iter().map(|v| format_score(*v)).collect(),
        scores: catalog
            .codes()
            .map(|code| ScoreCell::new(player.role_score(code).unwrap_or(0.0), config))
            .collect(),
    }
}

fn formation_view(rank: usize, result: &AssignmentResult, config: &AnalysisConfig) -> FormationView {
    FormationView {
        rank,
        name: result.formation_name.clone(),
        total: format_score(result.total_score),
        average_per_slot: format!("{:.2}", result.average_per_slot()),
        average_per_filled_slot: format!("{:.2}", result.average_per_filled_slot()),
        filled: format!("{}/{}", result.filled_count(), result.slot_count()),
        slots: result
            .assignments
            .iter()
            .map(|slot| SlotRow {
                requirement: slot.requirement.clone(),
                role_label: slot.role_label.clone(),
                role_tag: slot
                    .resolution
                    .code()
                    .unwrap_or_else(|| slot.resolution.kind())
                    .to_string(),
                filled: slot.player_name.is_some(),
                player: slot.player_name.clone().unwrap_or_default(),
                score: ScoreCell::new(slot.score, config),
            })
            .collect(),
    }
}

/// Self-contained HTML report: filters, role legend, scored player table, best formations
pub fn render_html(
    source_name: &str,
    players: &[PlayerRecord],
    catalog: &RoleCatalog,
    results: &[AssignmentResult],
    config: &AnalysisConfig,
    generated: &DateTime<Local>,
) -> Result<String> {
    let t = &config.thresholds;
    let bands = [
        ("excellent", t.excellent),
        ("good", t.good),
        ("average", t.average),
        ("poor", t.poor),
    ]
    .into_iter()
    .map(|(css_class, value)| ScoreCell {
        css_class,
        value: value.to_string(),
    })
    .collect();

    let groups = RoleGroup::ALL
        .iter()
        .map(|&group| GroupView {
            short: group.short(),
            plural: group.plural(),
            roles: catalog
                .roles_in_group(group)
                .map(|role| LegendRole {
                    code: role.code.clone(),
                    description: role.description.clone(),
                    weight: role.total_weight(),
                })
                .collect(),
        })
        .collect();

    let template = ReportTemplate {
        source_name: source_name.to_string(),
        player_count: players.len(),
        role_count: catalog.len(),
        generated: generated.format("%Y-%m-%d %H:%M").to_string(),
        bands,
        groups,
        role_columns: catalog
            .iter()
            .map(|role| RoleColumn {
                code: role.code.clone(),
                description: role.description.clone(),
            })
            .collect(),
        players: players.iter().map(|p| player_row(p, catalog, config)).collect(),
        formations: results
            .iter()
            .enumerate()
            .map(|(i, r)| formation_view(i + 1, r, config))
            .collect(),
    };

    template.render().context("Failed to render HTML report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::AssignmentEngine;
    use crate::attributes::CellValue;
    use crate::formation::parse_formations;
    use crate::roles::RoleResolution;
    use crate::scoring::score_players;
    use std::collections::HashMap;

    fn sample() -> (RoleCatalog, Vec<PlayerRecord>, Vec<AssignmentResult>) {
        let catalog = RoleCatalog::standard();
        let mut raw = HashMap::new();
        raw.insert("Agi".to_string(), CellValue::Number(14.0));
        raw.insert("Ref".to_string(), CellValue::Number(16.0));
        raw.insert("Club".to_string(), CellValue::Text("Rovers & Co".to_string()));
        let players = score_players(
            vec![
                PlayerRecord::new("Keeper <1>", "GK", raw),
                PlayerRecord::new("Back", "D (C)", HashMap::new()),
            ],
            &catalog,
        );
        let formations = parse_formations("1. Mini\nGK - Goalkeeper (D)\nST C - Mystery (A)\n");
        let results = AssignmentEngine::new(&catalog).assign_all(&formations, &players);
        (catalog, players, results)
    }

    #[test]
    fn test_passthrough_columns() {
        let table = PlayerTable {
            headers: ["Name", "Position", "Club", "Pos", ""].iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        };
        let config = AnalysisConfig::default();
        // "Position" wins as the position column, so "Pos" is kept as positioning
        assert_eq!(passthrough_columns(&table, &config), vec!["Club", "Pos"]);
        assert!(passthrough_columns(&table, &config.without_raw_attributes()).is_empty());
    }

    #[test]
    fn test_enriched_csv() {
        let (catalog, players, _) = sample();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let raw_columns = vec!["Club".to_string()];
        write_enriched_csv(&path, &raw_columns, &players, &catalog).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 2 + 1 + 4 + catalog.len() + 2);
        assert_eq!(&headers[2], "Club");
        assert_eq!(&headers[7], "GKD");
        assert_eq!(headers.iter().last(), Some("Best_Role"));

        let first = reader.records().next().unwrap().unwrap();
        assert_eq!(&first[0], "Keeper <1>");
        assert_eq!(&first[2], "Rovers & Co");
        assert_eq!(&first[7], "4.7");
    }

    #[test]
    fn test_summary_text() {
        let (catalog, _, results) = sample();
        let text = format_formation_summary(&results, &catalog).unwrap();
        assert!(text.contains("TOP 1 FORMATIONS"));
        assert!(text.contains("Keeper <1>"));
        assert!(text.contains("(unfilled)"));
        assert!(text.contains("QUICK SUMMARY"));
        assert!(format_formation_summary(&[], &catalog).unwrap().contains("No formations"));
    }

    #[test]
    fn test_json_shape() {
        let (_, _, results) = sample();
        let json = results_to_json(&results).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = &value[0];
        assert_eq!(first["formation_name"], "Mini");
        assert_eq!(first["slot_count"], 2);
        assert_eq!(first["filled_count"], 1);
        assert_eq!(first["total_score"], 4.7);
        assert_eq!(first["average_score_per_slot"], 2.35);
        assert_eq!(first["average_score_per_filled_slot"], 4.7);
        let slots = first["assignments"].as_array().unwrap();
        assert_eq!(slots[0]["player_name"], "Keeper <1>");
        assert_eq!(slots[0]["resolution"]["kind"], "exact");
        assert_eq!(slots[0]["resolution"]["value"], "GKD");
        assert!(slots[1]["player_name"].is_null());
        assert_eq!(slots[1]["score"], 0.0);
        assert_eq!(slots[1]["resolution"]["value"], "Forward");
        assert_eq!(results[0].assignments[1].resolution, RoleResolution::Fallback(RoleGroup::Forward));
    }

    #[test]
    fn test_html_report() {
        let (catalog, players, results) = sample();
        let config = AnalysisConfig::default();
        let html = render_html("squad.html", &players, &catalog, &results, &config, &Local::now()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Keeper &lt;1&gt;"));
        assert!(html.contains("data-groups=\"GK\""));
        assert!(html.contains("<th title=\"Advanced Forward Attack\">AFA</th>"));
        assert!(html.contains("Best formations"));
        assert!(html.contains("<em>unfilled</em>"));
    }

    #[test]
    fn test_html_report_escapes_export_text() {
        let (catalog, players, mut results) = sample();
        results[0].formation_name = "Rock & \"Roll\"".to_string();
        let config = AnalysisConfig::default();
        let html = render_html("a&b <export>.html", &players, &catalog, &results, &config, &Local::now()).unwrap();
        assert!(html.contains("Source: a&amp;b &lt;export&gt;.html"));
        assert!(html.contains("Rock &amp; "));
        assert!(!html.contains("\"Roll\""));
        assert!(!html.contains("<export>"));
        // band legend and score classes come from the thresholds
        assert!(html.contains("<span class=\"excellent\">&ge; 15</span>"));
        assert!(html.contains("<td class=\"very-poor\">4.7</td>"));
    }

    #[test]
    fn test_workbook_is_written() {
        let (catalog, players, results) = sample();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.xlsx");
        write_workbook(&path, &["Club".to_string()], &players, &catalog, &results, &AnalysisConfig::default())
            .unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
