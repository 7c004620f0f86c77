//! Loading exported player tables
//!
//! Exports come either as CSV or as the HTML page the game writes, which holds
//! a single `<table>` with a header row of `<th>` cells.

use crate::attributes::CellValue;
use crate::scoring::PlayerRecord;
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Identity column names, first match wins
pub const NAME_COLUMNS: &[&str] = &["Name", "Player"];
/// Position column names, first match wins. "Pos" doubles as the positioning
/// attribute in some exports, so an explicit "Position" column takes precedence.
pub const POSITION_COLUMNS: &[&str] = &["Position", "Pos"];

lazy_static! {
    static ref TABLE_RE: Regex = Regex::new(r"(?is)<table[^>]*>(.*?)</table>").unwrap();
    static ref ROW_RE: Regex = Regex::new(r"(?is)<tr[^>]*>(.*?)</tr>").unwrap();
    static ref CELL_RE: Regex = Regex::new(r"(?is)<t[hd][^>]*>(.*?)</t[hd]>").unwrap();
    static ref TAG_RE: Regex = Regex::new(r"(?s)<[^>]+>").unwrap();
    static ref ENTITY_RE: Regex = Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);").unwrap();
}

/// Raw exported table: header names plus string rows
#[derive(Debug, Clone, Default)]
pub struct PlayerTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PlayerTable {
    pub fn read_csv(path: &Path, delimiter: u8) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("Failed to open input CSV: {}", path.display()))?;
        let headers: Vec<String> = reader
            .headers()
            .context("Failed to read CSV header")?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.context("Failed to read CSV row")?;
            rows.push(record.iter().map(|s| s.trim().to_string()).collect());
        }
        Ok(Self { headers, rows })
    }

    pub fn read_html(path: &Path) -> Result<Self> {
        let html = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read HTML export: {}", path.display()))?;
        Self::from_html(&html).with_context(|| format!("No player table in {}", path.display()))
    }

    /// Parse the first `<table>` of an HTML document
    pub fn from_html(html: &str) -> Result<Self> {
        let table = TABLE_RE
            .captures(html)
            .map(|caps| caps[1].to_string())
            .ok_or_else(|| anyhow::anyhow!("No <table> element found"))?;

        let mut rows = ROW_RE.captures_iter(&table).map(|row| {
            CELL_RE
                .captures_iter(&row[1])
                .map(|cell| clean_cell(&cell[1]))
                .collect::<Vec<String>>()
        });
        let headers = rows
            .next()
            .ok_or_else(|| anyhow::anyhow!("Table has no rows"))?;
        let rows = rows.filter(|r| r.iter().any(|c| !c.is_empty())).collect();
        Ok(Self { headers, rows })
    }

    /// Pick the reader from the file extension; anything that is not HTML is read as CSV
    pub fn load(path: &Path, delimiter: u8) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        let table = match ext.as_str() {
            "html" | "htm" => Self::read_html(path)?,
            _ => Self::read_csv(path, delimiter)?,
        };
        log::info!(
            "Loaded {} rows x {} columns from {}",
            table.rows.len(),
            table.headers.len(),
            path.display()
        );
        Ok(table)
    }

    pub fn column_index(&self, candidates: &[&str]) -> Option<usize> {
        candidates
            .iter()
            .find_map(|c| self.headers.iter().position(|h| h.eq_ignore_ascii_case(c)))
    }

    /// Drop every column whose header contains "uid"
    pub fn drop_uid_columns(&mut self) {
        let keep: Vec<bool> = self
            .headers
            .iter()
            .map(|h| !h.to_lowercase().contains("uid"))
            .collect();
        if keep.iter().all(|k| *k) {
            return;
        }
        let removed: Vec<&String> = self
            .headers
            .iter()
            .zip(&keep)
            .filter(|(_, k)| !**k)
            .map(|(h, _)| h)
            .collect();
        log::info!("Removing UID columns: {:?}", removed);

        let filter = |row: &Vec<String>| -> Vec<String> {
            row.iter()
                .zip(keep.iter().chain(std::iter::repeat(&true)))
                .filter(|(_, k)| **k)
                .map(|(c, _)| c.clone())
                .collect()
        };
        self.headers = filter(&self.headers);
        self.rows = self.rows.iter().map(filter).collect();
    }

    /// Keep at most `max` rows
    pub fn truncate(&mut self, max: usize) {
        if self.rows.len() > max {
            log::warn!("Export has {} players, only the first {} are analyzed", self.rows.len(), max);
            self.rows.truncate(max);
        }
    }

    /// Convert rows into unscored player records.
    ///
    /// The name column is required; a missing position column only leaves every
    /// player without positions. Rows with a blank name are skipped.
    pub fn into_players(self) -> Result<Vec<PlayerRecord>> {
        let name_idx = self.column_index(NAME_COLUMNS).ok_or_else(|| {
            anyhow::anyhow!("No player name column found (expected one of {:?})", NAME_COLUMNS)
        })?;
        let pos_idx = self.column_index(POSITION_COLUMNS);
        if pos_idx.is_none() {
            log::warn!("No position column found; no player will be eligible for any slot");
        }

        let mut players = Vec::with_capacity(self.rows.len());
        let mut seen = HashSet::new();
        for (row_num, row) in self.rows.iter().enumerate() {
            let name = row.get(name_idx).map(|s| s.trim()).unwrap_or("");
            if name.is_empty() {
                log::debug!("Row {}: no player name, skipped", row_num + 1);
                continue;
            }
            if !seen.insert(name.to_string()) {
                log::warn!("Duplicate player name '{}'", name);
            }

            let position_text = pos_idx
                .and_then(|i| row.get(i))
                .map(|s| s.as_str())
                .unwrap_or("");

            let raw: HashMap<String, CellValue> = self
                .headers
                .iter()
                .enumerate()
                .filter(|(i, h)| *i != name_idx && Some(*i) != pos_idx && !h.is_empty())
                .map(|(i, h)| {
                    let value = row.get(i).map(|c| CellValue::from_cell(c)).unwrap_or(CellValue::Empty);
                    (h.clone(), value)
                })
                .collect();

            players.push(PlayerRecord::new(name, position_text, raw));
        }
        Ok(players)
    }
}

fn clean_cell(raw: &str) -> String {
    let text = TAG_RE.replace_all(raw, "");
    let decoded = decode_entities(&text);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode character references in one pass; unknown named entities are left as written.
fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &regex::Captures| {
            let entity = &caps[1];
            let hex = entity.strip_prefix("#x").or_else(|| entity.strip_prefix("#X"));
            let decoded = if let Some(hex) = hex {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = entity.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                named_entity(entity)
            };
            match decoded {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "minus" => '\u{2212}',
        _ => return None,
    };
    Some(c)
}

/// Most recently modified `.html`/`.htm`/`.csv` in `folder`, skipping our own reports
pub fn find_latest_export(folder: &Path, output_prefix: &str) -> Result<PathBuf> {
    let entries = std::fs::read_dir(folder)
        .with_context(|| format!("Failed to read folder: {}", folder.display()))?;

    let mut latest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        if !matches!(ext.as_str(), "html" | "htm" | "csv") {
            continue;
        }
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if file_name.starts_with(output_prefix) {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|m| m.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        if latest.as_ref().map(|(t, _)| modified > *t).unwrap_or(true) {
            latest = Some((modified, path));
        }
    }

    latest
        .map(|(_, path)| path)
        .ok_or_else(|| anyhow::anyhow!("No .html or .csv export found in {}", folder.display()))
}
