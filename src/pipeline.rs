//! Pipeline functions shared by the `fm-analyze` and `role-debug` binaries.
//!
//! Each operation loads what it needs, runs the scoring/assignment core and
//! returns a summary string instead of printing.

use crate::assignment::{rank_formations, AssignmentEngine, AssignmentResult};
use crate::attributes::{parse_attribute, ParseDiagnostics};
use crate::config::AnalysisConfig;
use crate::formation::{default_formations, parse_formations, Formation};
use crate::report;
use crate::roles::{RoleCatalog, RoleGroup};
use crate::scoring::{breakdown, score_players, PlayerRecord};
use crate::table::{find_latest_export, PlayerTable};
use anyhow::{Context, Result};
use chrono::Local;
use std::collections::BTreeSet;
use std::fmt::Write;
use std::path::{Path, PathBuf};

// ============================================================================
// Loading and scoring
// ============================================================================

/// A scored export
pub struct Analysis {
    /// File the players were read from
    pub source: PathBuf,
    /// Export columns carried into CSV/XLSX output
    pub raw_columns: Vec<String>,
    /// Scored players in export order
    pub players: Vec<PlayerRecord>,
    /// Attribute cells that needed parsing
    pub diagnostics: ParseDiagnostics,
}

/// Load an export and score every player against the catalog
pub fn analyze(input: &Path, catalog: &RoleCatalog, config: &AnalysisConfig) -> Result<Analysis> {
    let mut table = PlayerTable::load(input, config.delimiter)?;
    if config.hide_uid_columns {
        table.drop_uid_columns();
    }
    table.truncate(config.max_players);

    let raw_columns = report::passthrough_columns(&table, config);
    let players = table
        .into_players()
        .with_context(|| format!("Failed to read players from {}", input.display()))?;

    let attribute_codes: BTreeSet<&str> = catalog
        .iter()
        .flat_map(|r| r.key_attrs.iter().chain(&r.support_attrs).chain(&r.minor_attrs))
        .map(|a| a.as_str())
        .collect();
    let mut diagnostics = ParseDiagnostics::new();
    for player in &players {
        for code in &attribute_codes {
            if let Some(value) = player.raw_attributes.get(*code) {
                diagnostics.observe(code, value);
            }
        }
    }
    diagnostics.log_summary();

    let missing: Vec<&str> = attribute_codes
        .iter()
        .filter(|code| !players.iter().any(|p| p.raw_attributes.contains_key(**code)))
        .copied()
        .collect();
    if !players.is_empty() && !missing.is_empty() {
        log::warn!("Attributes missing from export (scored as 0): {}", missing.join(", "));
    }

    let players = score_players(players, catalog);
    Ok(Analysis {
        source: input.to_path_buf(),
        raw_columns,
        players,
        diagnostics,
    })
}

/// Formations from a file, or the built-in set when no file is given
pub fn load_formations(path: Option<&Path>) -> Result<Vec<Formation>> {
    let Some(path) = path else {
        return Ok(default_formations());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read formations file: {}", path.display()))?;
    let formations = parse_formations(&text);
    if formations.is_empty() {
        log::warn!("No formations found in {}", path.display());
    } else {
        log::info!("Loaded {} formations from {}", formations.len(), path.display());
    }
    Ok(formations)
}

/// Assign every formation and keep the top `config.top_k`
pub fn rank(
    players: &[PlayerRecord],
    formations: &[Formation],
    catalog: &RoleCatalog,
    config: &AnalysisConfig,
) -> Vec<AssignmentResult> {
    let results = AssignmentEngine::new(catalog).assign_all(formations, players);
    rank_formations(results, config.rank_metric, config.top_k)
}

fn resolve_input(input: Option<&Path>, folder: &Path, config: &AnalysisConfig) -> Result<PathBuf> {
    match input {
        Some(path) => Ok(path.to_path_buf()),
        None => {
            let latest = find_latest_export(folder, &config.output_prefix)?;
            log::info!("Using latest export: {}", latest.display());
            Ok(latest)
        }
    }
}

// ============================================================================
// Report
// ============================================================================

/// Configuration for the report operation.
pub struct ReportConfig {
    /// Export to analyze; the newest export in `folder` when not given
    pub input: Option<PathBuf>,
    /// Folder searched for exports and receiving the report
    pub folder: PathBuf,
    /// Formation file; built-in formations when not given
    pub formations: Option<PathBuf>,
    /// Also write an XLSX workbook next to the HTML report
    pub xlsx: bool,
    /// Also write the enriched CSV here
    pub csv_output: Option<PathBuf>,
}

/// Score an export and write the HTML report (plus optional workbook and CSV).
///
/// Returns a summary string on success.
pub fn generate_report(report_config: &ReportConfig, config: &AnalysisConfig) -> Result<String> {
    let catalog = RoleCatalog::standard();
    let input = resolve_input(report_config.input.as_deref(), &report_config.folder, config)?;
    let analysis = analyze(&input, &catalog, config)?;
    let formations = load_formations(report_config.formations.as_deref())?;
    let ranked = rank(&analysis.players, &formations, &catalog, config);

    let now = Local::now();
    let source_name = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("(unknown)")
        .to_string();

    std::fs::create_dir_all(&report_config.folder).with_context(|| {
        format!("Failed to create output folder: {}", report_config.folder.display())
    })?;
    let html_path = config.output_path(&report_config.folder, &now, "html");
    let html = report::render_html(&source_name, &analysis.players, &catalog, &ranked, config, &now)?;
    std::fs::write(&html_path, html)
        .with_context(|| format!("Failed to write report: {}", html_path.display()))?;

    let mut summary = String::new();
    writeln!(summary, "Report created: {}", html_path.display())?;
    writeln!(summary, "  Source: {}", input.display())?;
    writeln!(summary, "  Players: {}", analysis.players.len())?;
    writeln!(summary, "  Formations evaluated: {}", formations.len())?;

    if report_config.xlsx {
        let xlsx_path = config.output_path(&report_config.folder, &now, "xlsx");
        report::write_workbook(
            &xlsx_path,
            &analysis.raw_columns,
            &analysis.players,
            &catalog,
            &ranked,
            config,
        )?;
        writeln!(summary, "  Workbook: {}", xlsx_path.display())?;
    }
    if let Some(csv_path) = &report_config.csv_output {
        report::write_enriched_csv(csv_path, &analysis.raw_columns, &analysis.players, &catalog)?;
        writeln!(summary, "  CSV: {}", csv_path.display())?;
    }
    if let Some(best) = ranked.first() {
        write!(
            summary,
            "  Best formation: {} (total {:.1}, {}/{} filled)",
            best.formation_name,
            best.total_score,
            best.filled_count(),
            best.slot_count()
        )?;
    }
    Ok(summary.trim_end().to_string())
}

// ============================================================================
// Formations
// ============================================================================

/// Rank formations for an export and return either the text summary or JSON
pub fn best_formations(
    input: &Path,
    formations: Option<&Path>,
    config: &AnalysisConfig,
    json: bool,
) -> Result<String> {
    let catalog = RoleCatalog::standard();
    let analysis = analyze(input, &catalog, config)?;
    let formations = load_formations(formations)?;
    let ranked = rank(&analysis.players, &formations, &catalog, config);
    if json {
        report::results_to_json(&ranked)
    } else {
        report::format_formation_summary(&ranked, &catalog)
    }
}

// ============================================================================
// Score
// ============================================================================

/// Write the enriched player table as CSV
pub fn score_to_csv(input: &Path, output: &Path, config: &AnalysisConfig) -> Result<String> {
    let catalog = RoleCatalog::standard();
    let analysis = analyze(input, &catalog, config)?;
    report::write_enriched_csv(output, &analysis.raw_columns, &analysis.players, &catalog)?;

    let mut summary = format!(
        "Scored {} players against {} roles\n  Output: {}",
        analysis.players.len(),
        catalog.len(),
        output.display()
    );
    let parsed: usize = analysis.diagnostics.columns().map(|(_, d)| d.count).sum();
    if parsed > 0 {
        summary.push_str(&format!("\n  Attribute cells parsed from text: {}", parsed));
    }
    Ok(summary)
}

// ============================================================================
// Roles
// ============================================================================

/// Catalog listing, optionally limited to one group
pub fn list_roles(catalog: &RoleCatalog, group: Option<RoleGroup>) -> Result<String> {
    let mut out = String::new();
    for g in RoleGroup::ALL {
        if group.map(|only| only != g).unwrap_or(false) {
            continue;
        }
        writeln!(out, "{}", g.plural())?;
        writeln!(out, "{}", "-".repeat(100))?;
        for role in catalog.roles_in_group(g) {
            writeln!(
                out,
                "{:<6} {:<36} w={:<3} key: {} | support: {} | minor: {}",
                role.code,
                role.description,
                role.total_weight(),
                role.key_attrs.join(" "),
                role.support_attrs.join(" "),
                role.minor_attrs.join(" ")
            )?;
        }
        writeln!(out)?;
    }
    Ok(out.trim_end().to_string())
}

// ============================================================================
// Player debug
// ============================================================================

/// Find a player (exact name first, then substring, both case-insensitive)
pub fn find_player<'a>(players: &'a [PlayerRecord], name: &str) -> Option<&'a PlayerRecord> {
    let wanted = name.trim().to_lowercase();
    players
        .iter()
        .find(|p| p.name.to_lowercase() == wanted)
        .or_else(|| players.iter().find(|p| p.name.to_lowercase().contains(&wanted)))
}

/// Per-role breakdown for one player: tier sums, weight, raw and rounded score
pub fn debug_player(input: &Path, name: &str, config: &AnalysisConfig) -> Result<String> {
    let catalog = RoleCatalog::standard();
    let analysis = analyze(input, &catalog, config)?;
    let player = find_player(&analysis.players, name)
        .ok_or_else(|| anyhow::anyhow!("Player '{}' not found in {}", name, input.display()))?;

    let mut out = String::new();
    writeln!(out, "=== {} ===", player.name)?;
    writeln!(out, "Positions: {}", player.position_text)?;
    writeln!(
        out,
        "Tokens: {}",
        player.canonical_positions.iter().cloned().collect::<Vec<_>>().join(", ")
    )?;
    let d = &player.derived;
    writeln!(
        out,
        "Spd {:.1} | Work {:.1} | Jmp {:.1} | Str {:.1}",
        d.speed, d.work, d.jump, d.strength
    )?;

    writeln!(out, "\n=== Attributes ===")?;
    let mut codes: Vec<&String> = player.raw_attributes.keys().collect();
    codes.sort();
    for code in codes {
        let value = &player.raw_attributes[code];
        let parsed = parse_attribute(value);
        if value.needs_parsing() {
            writeln!(out, "{:<6} {:>5.1}  (from {:?})", code, parsed, value.as_display())?;
        } else {
            writeln!(out, "{:<6} {:>5.1}", code, parsed)?;
        }
    }

    writeln!(out, "\n=== Roles ===")?;
    writeln!(
        out,
        "  {:<6} {:<36} {:>6} {:>7} {:>6} {:>4} {:>7} {:>5}",
        "Code", "Role", "Key", "Support", "Minor", "W", "Raw", "Score"
    )?;
    for role in catalog.iter() {
        let b = breakdown(&player.raw_attributes, role);
        let marker = if player.best_role() == Some(role.code.as_str()) {
            '*'
        } else {
            ' '
        };
        writeln!(
            out,
            "{} {:<6} {:<36} {:>6.1} {:>7.1} {:>6.1} {:>4} {:>7.3} {:>5.1}",
            marker,
            b.code,
            role.description,
            b.key_sum,
            b.support_sum,
            b.minor_sum,
            b.total_weight,
            b.raw,
            b.score
        )?;
    }
    write!(
        out,
        "\nBest: {} ({:.1})",
        player
            .best_role()
            .map(|c| catalog.describe(c))
            .unwrap_or_else(|| "-".to_string()),
        player.best_score()
    )?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as IoWrite;

    fn write_squad(dir: &Path) -> PathBuf {
        let path = dir.join("squad.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "UID,Name,Pos,Agi,Ref,Tck,Mar,Hea,Fin,Acc,Pac").unwrap();
        writeln!(f, "1,Keeper,GK,14,16,3,3,5,2,9,8").unwrap();
        writeln!(f, "2,Stopper,D (C),9,4,15,14,16,6,12,11").unwrap();
        writeln!(f, "3,Hitman,ST (C),12,5,4,3,11,13-17,15,16").unwrap();
        path
    }

    #[test]
    fn test_analyze_drops_uid_and_scores() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_squad(dir.path());
        let catalog = RoleCatalog::standard();
        let analysis = analyze(&path, &catalog, &AnalysisConfig::default()).unwrap();
        assert_eq!(analysis.players.len(), 3);
        assert!(!analysis.raw_columns.iter().any(|c| c == "UID"));
        assert_eq!(analysis.raw_columns[0], "Agi");
        assert_eq!(analysis.players[0].role_score("GKD"), Some(4.7));
        assert_eq!(analysis.diagnostics.get("Fin").map(|d| d.count), Some(1));
    }

    #[test]
    fn test_analyze_respects_max_players() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_squad(dir.path());
        let config = AnalysisConfig::default().with_max_players(2);
        let analysis = analyze(&path, &RoleCatalog::standard(), &config).unwrap();
        assert_eq!(analysis.players.len(), 2);
    }

    #[test]
    fn test_load_formations_default_and_file() {
        assert_eq!(load_formations(None).unwrap().len(), 6);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("formations.txt");
        std::fs::write(&path, "1. Solo\nGK = GKD\n").unwrap();
        let formations = load_formations(Some(&path)).unwrap();
        assert_eq!(formations.len(), 1);
        assert_eq!(formations[0].slots[0].preferred_role_label, "GKD");

        assert!(load_formations(Some(&dir.path().join("missing.txt"))).is_err());
    }

    #[test]
    fn test_best_formations_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_squad(dir.path());
        let formations = dir.path().join("f.txt");
        std::fs::write(&formations, "1. Spine\nGK - Goalkeeper (D)\nDC - Central Def (D)\nST C - Poacher (A)\n2. Keeper only\nGK - GKD\n").unwrap();
        let json = best_formations(&path, Some(&formations), &AnalysisConfig::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["formation_name"], "Spine");
        assert_eq!(value[0]["filled_count"], 3);
        assert_eq!(value[1]["formation_name"], "Keeper only");

        let text = best_formations(&path, Some(&formations), &AnalysisConfig::default().with_top_k(1), false).unwrap();
        assert!(text.contains("TOP 1 FORMATIONS"));
        assert!(!text.contains("Keeper only"));
    }

    #[test]
    fn test_generate_report() {
        let dir = tempfile::tempdir().unwrap();
        write_squad(dir.path());
        let csv_out = dir.path().join("enriched.csv");
        let report_config = ReportConfig {
            input: None,
            folder: dir.path().to_path_buf(),
            formations: None,
            xlsx: true,
            csv_output: Some(csv_out.clone()),
        };
        let summary = generate_report(&report_config, &AnalysisConfig::default()).unwrap();
        assert!(summary.contains("Report created"));
        assert!(summary.contains("Players: 3"));
        assert!(csv_out.exists());

        let outputs: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .filter(|n| n.starts_with("fm_analysis_"))
            .collect();
        assert!(outputs.iter().any(|n| n.ends_with(".html")));
        assert!(outputs.iter().any(|n| n.ends_with(".xlsx")));
    }

    #[test]
    fn test_score_to_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_squad(dir.path());
        let out = dir.path().join("scores.csv");
        let summary = score_to_csv(&path, &out, &AnalysisConfig::default()).unwrap();
        assert!(summary.contains("Scored 3 players against 85 roles"));
        assert!(summary.contains("parsed from text: 1"));
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("Name,Position,Agi"));
    }

    #[test]
    fn test_list_roles() {
        let catalog = RoleCatalog::standard();
        let all = list_roles(&catalog, None).unwrap();
        assert!(all.contains("Goalkeepers"));
        assert!(all.contains("TREA"));
        let keepers = list_roles(&catalog, Some(RoleGroup::Goalkeeper)).unwrap();
        assert!(keepers.contains("SKA"));
        assert!(!keepers.contains("Forwards"));
    }

    #[test]
    fn test_debug_player() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_squad(dir.path());
        let out = debug_player(&path, "hit", &AnalysisConfig::default()).unwrap();
        assert!(out.starts_with("=== Hitman ==="));
        assert!(out.contains("Tokens: STC"));
        assert!(out.contains("(from \"13-17\")"));
        assert!(out.contains("AFA"));
        assert!(debug_player(&path, "nobody", &AnalysisConfig::default()).is_err());
    }
}
