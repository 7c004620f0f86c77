//! Integration test for export loading, scoring and formation ranking
//!
//! Builds a small HTML export the way the game writes it (a single table with
//! scouted ranges and placeholder cells), then runs it through the same library
//! calls the `fm-analyze` binary uses.

use fm_role_analyzer::assignment::rank_formations;
use fm_role_analyzer::formation::{default_formations, parse_formations};
use fm_role_analyzer::pipeline::{analyze, best_formations, find_player};
use fm_role_analyzer::{AnalysisConfig, AssignmentEngine, RankMetric, RoleCatalog, RoleResolution};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const ATTRIBUTES: &[&str] = &[
    "Acc", "Pac", "Sta", "Wor", "Agi", "Ref", "Aer", "Cmd", "Han", "Kic", "Cnt", "Pos", "1v1", "Thr",
    "Ant", "Dec", "Cmp", "Jum", "Hea", "Mar", "Str", "Tck", "Pas", "Tea", "Tec", "Vis", "Fir", "OtB",
    "Cro", "Dri", "Fin", "Fla", "Lon", "Agg", "Bra", "Bal",
];

/// (name, position, base rating, overrides)
fn squad() -> Vec<(&'static str, &'static str, u32, Vec<(&'static str, &'static str)>)> {
    vec![
        ("Keeper One", "GK", 8, vec![("Agi", "16"), ("Ref", "17"), ("Han", "15")]),
        ("Keeper Two", "GK", 7, vec![("Agi", "12"), ("Ref", "13 (12-14)")]),
        ("Right Back", "D/WB (R)", 11, vec![("Cro", "14")]),
        ("Left Back", "D/WB (L)", 10, vec![("Cro", "13-15")]),
        ("Centre Half A", "D (C)", 12, vec![("Tck", "16"), ("Mar", "15"), ("Hea", "16")]),
        ("Centre Half B", "D (C)", 11, vec![("Tck", "14"), ("Jum", "N/A")]),
        ("Centre Half C", "D (LC)", 10, vec![]),
        ("Holding Mid", "DM, M (C)", 12, vec![("Tck", "15"), ("Pos", "15")]),
        ("Playmaker", "M/AM (C)", 12, vec![("Pas", "17"), ("Vis", "16")]),
        ("Runner", "M (C)", 11, vec![("Sta", "16"), ("Wor", "16")]),
        ("Right Winger", "AM (R), M (R)", 12, vec![("Dri", "15"), ("Cro", "14")]),
        ("Left Winger", "AM (L), M (L)", 11, vec![("Dri", "14"), ("Cro", "\u{2014}")]),
        ("Striker", "ST (C)", 12, vec![("Fin", "16"), ("OtB", "15")]),
        ("Target Man", "ST (C)", 10, vec![("Str", "17"), ("Hea", "16")]),
    ]
}

fn write_export(dir: &Path) -> PathBuf {
    let mut html = String::from("<html><head><title>Squad</title></head><body>\n<table>\n<tr>");
    html.push_str("<th>UID</th><th>Name</th><th>Position</th>");
    for a in ATTRIBUTES {
        html.push_str(&format!("<th>{}</th>", a));
    }
    html.push_str("</tr>\n");

    for (i, (name, position, base, overrides)) in squad().into_iter().enumerate() {
        html.push_str(&format!("<tr><td>{}</td><td>{}</td><td>{}</td>", 1000 + i, name, position));
        for a in ATTRIBUTES {
            let value = overrides
                .iter()
                .find(|(k, _)| k == a)
                .map(|(_, v)| v.to_string())
                .unwrap_or_else(|| base.to_string());
            html.push_str(&format!("<td>{}</td>", value));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n</body></html>\n");

    let path = dir.join("squad.html");
    fs::write(&path, html).unwrap();
    path
}

#[test]
fn test_html_export_is_scored() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_export(dir.path());
    let catalog = RoleCatalog::standard();
    let analysis = analyze(&path, &catalog, &AnalysisConfig::default()).unwrap();

    assert_eq!(analysis.players.len(), 14);
    assert!(!analysis.raw_columns.iter().any(|c| c == "UID"));
    // "Position" is the position column, so "Pos" stays an attribute
    assert!(analysis.raw_columns.iter().any(|c| c == "Pos"));

    for player in &analysis.players {
        assert_eq!(player.role_scores.len(), 85, "{}", player.name);
        assert!(player.best_role.is_some());
    }

    let keeper = find_player(&analysis.players, "keeper one").unwrap();
    let best = keeper.best_role().unwrap();
    assert!(["GKD", "SKD", "SKS", "SKA"].contains(&best), "{}", best);

    let ranged = find_player(&analysis.players, "Keeper Two").unwrap();
    assert!(ranged.canonical_positions.contains("GK"));
    assert!(analysis.diagnostics.get("Ref").is_some());
    assert!(analysis.diagnostics.get("Jum").is_none());
}

#[test]
fn test_default_formations_fill_from_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_export(dir.path());
    let catalog = RoleCatalog::standard();
    let analysis = analyze(&path, &catalog, &AnalysisConfig::default()).unwrap();

    let engine = AssignmentEngine::new(&catalog);
    let results = engine.assign_all(&default_formations(), &analysis.players);
    assert_eq!(results.len(), 6);

    for result in &results {
        let names: Vec<&str> = result
            .assignments
            .iter()
            .filter_map(|a| a.player_name.as_deref())
            .collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len(), "{} reuses a player", result.formation_name);
        assert!(result
            .assignments
            .iter()
            .all(|a| matches!(a.resolution, RoleResolution::Exact(_))));
        assert_eq!(result.assignments[0].player_name.as_deref(), Some("Keeper One"));
        let sum: f64 = result.assignments.iter().map(|a| a.score).sum();
        assert!((sum - result.total_score).abs() < 0.05);
    }

    let four_four_two = &results[0];
    assert_eq!(four_four_two.filled_count(), 11);

    let ranked = rank_formations(results.clone(), RankMetric::Total, 3);
    assert_eq!(ranked.len(), 3);
    assert!(ranked[0].total_score >= ranked[1].total_score);
    assert!(ranked[1].total_score >= ranked[2].total_score);
}

#[test]
fn test_repeated_runs_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_export(dir.path());
    let config = AnalysisConfig::default();
    let first = best_formations(&path, None, &config, true).unwrap();
    let second = best_formations(&path, None, &config, true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_custom_formation_file_with_unfillable_slot() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_export(dir.path());
    let formations = dir.path().join("formations.txt");
    fs::write(
        &formations,
        "1. Three Keepers\nGK - Goalkeeper (D)\nGK - Sweeper Keeper (S)\nGK = GKD\n\n2. Front Two\nST C - Poacher (A)\nST C - Target Forward (S)\n",
    )
    .unwrap();

    let json = best_formations(&path, Some(&formations), &AnalysisConfig::default(), true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let ranked = value.as_array().unwrap();
    assert_eq!(ranked.len(), 2);

    let keepers = ranked
        .iter()
        .find(|f| f["formation_name"] == "Three Keepers")
        .unwrap();
    assert_eq!(keepers["slot_count"], 3);
    assert_eq!(keepers["filled_count"], 2);
    assert!(keepers["assignments"][2]["player_name"].is_null());
    assert_eq!(keepers["assignments"][2]["score"], 0.0);

    let front = ranked.iter().find(|f| f["formation_name"] == "Front Two").unwrap();
    assert_eq!(front["filled_count"], 2);
}

#[test]
fn test_formation_text_order_is_kept() {
    let formations = parse_formations("2. Second\nGK - GKD\n1. First\nGK - GKD\n");
    let names: Vec<&str> = formations.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Second", "First"]);
}
