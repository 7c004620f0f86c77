//! Attribute cell parsing
//!
//! Exported attribute cells are usually plain numbers, but players that are only
//! partially scouted show ranges ("13-16"), a value with its range ("14 (13-16)")
//! or placeholders such as "-" and "N/A". Everything is reduced to a single `f64`
//! and nothing here ever fails: unparseable input becomes 0.0.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

/// Values treated as "no attribute" (compared after trimming, case-insensitive)
const SENTINELS: &[&str] = &["N/A", "NA", "NONE", "-", "\u{2013}", "\u{2014}", "\u{2212}"];

/// Maximum number of example values kept per column for diagnostics
const MAX_EXAMPLES: usize = 5;

lazy_static! {
    static ref RANGE_RE: Regex = Regex::new(r"^(\d{1,3})\s*-\s*(\d{1,3})$").unwrap();
    static ref LEADING_RE: Regex = Regex::new(r"^(\d{1,3})(?:\D|$)").unwrap();
    static ref EMBEDDED_RANGE_RE: Regex = Regex::new(r"(\d{1,3})\s*-\s*(\d{1,3})").unwrap();
    static ref NUMBER_RE: Regex = Regex::new(r"\d{1,3}").unwrap();
}

/// A raw table cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

impl CellValue {
    /// Classify a raw cell: finite numbers become `Number`, blanks `Empty`, the rest `Text`.
    pub fn from_cell(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => CellValue::Number(n),
            _ => CellValue::Text(trimmed.to_string()),
        }
    }

    /// Display form used when the raw value is written back out
    pub fn as_display(&self) -> String {
        match self {
            CellValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            CellValue::Number(n) => format!("{}", n),
            CellValue::Text(s) => s.clone(),
            CellValue::Empty => String::new(),
        }
    }

    /// True when the value is text that is not a placeholder, i.e. it had to be parsed
    pub fn needs_parsing(&self) -> bool {
        match self {
            CellValue::Text(s) => !is_sentinel(s),
            _ => false,
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::from_cell(s)
    }
}

/// Numeric value of an attribute cell. Never fails; unparseable input is 0.0.
pub fn parse_attribute(value: &CellValue) -> f64 {
    match value {
        CellValue::Number(n) => *n,
        CellValue::Empty => 0.0,
        CellValue::Text(s) => parse_attribute_str(s),
    }
}

/// Text form of [`parse_attribute`].
///
/// Order of interpretation:
/// 1. blank or placeholder -> 0.0
/// 2. plain number -> that number
/// 3. whole-cell range "A-B" -> midpoint
/// 4. leading integer followed by a non-digit ("14 (13-16)") -> that integer
/// 5. embedded range -> midpoint
/// 6. first embedded integer
/// 7. otherwise 0.0
pub fn parse_attribute_str(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() || is_sentinel(trimmed) {
        return 0.0;
    }
    if let Ok(n) = trimmed.parse::<f64>() {
        if n.is_finite() {
            return n;
        }
    }

    let text = normalize_dashes(trimmed);

    if let Some(caps) = RANGE_RE.captures(&text) {
        return midpoint(&caps[1], &caps[2]);
    }
    if let Some(caps) = LEADING_RE.captures(&text) {
        return caps[1].parse::<f64>().unwrap_or(0.0);
    }
    if let Some(caps) = EMBEDDED_RANGE_RE.captures(&text) {
        return midpoint(&caps[1], &caps[2]);
    }
    NUMBER_RE
        .find(&text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

fn is_sentinel(value: &str) -> bool {
    let upper = value.trim().to_uppercase();
    SENTINELS.iter().any(|s| *s == upper)
}

fn normalize_dashes(value: &str) -> String {
    value.replace(|c: char| matches!(c, '\u{2013}' | '\u{2014}' | '\u{2212}'), "-")
}

fn midpoint(a: &str, b: &str) -> f64 {
    let a = a.parse::<f64>().unwrap_or(0.0);
    let b = b.parse::<f64>().unwrap_or(0.0);
    (a + b) / 2.0
}

/// Per-column record of attribute cells that were text rather than plain numbers.
///
/// Purely informational; it never changes a parsed value.
#[derive(Debug, Default, Clone)]
pub struct ParseDiagnostics {
    columns: BTreeMap<String, ColumnDiagnostic>,
}

#[derive(Debug, Default, Clone)]
pub struct ColumnDiagnostic {
    pub count: usize,
    pub examples: Vec<String>,
}

impl ParseDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Note a cell of `column` if it needed parsing
    pub fn observe(&mut self, column: &str, value: &CellValue) {
        if let CellValue::Text(raw) = value {
            if !value.needs_parsing() {
                return;
            }
            let entry = self.columns.entry(column.to_string()).or_default();
            entry.count += 1;
            if entry.examples.len() < MAX_EXAMPLES && !entry.examples.contains(raw) {
                entry.examples.push(raw.clone());
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, column: &str) -> Option<&ColumnDiagnostic> {
        self.columns.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&String, &ColumnDiagnostic)> {
        self.columns.iter()
    }

    /// Emit one debug line per affected column
    pub fn log_summary(&self) {
        for (column, diag) in &self.columns {
            log::debug!(
                "Column '{}': {} value(s) required parsing, e.g. {:?}",
                column,
                diag.count,
                diag.examples
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(parse_attribute(&CellValue::Number(17.0)), 17.0);
        assert_eq!(parse_attribute(&CellValue::Number(12.5)), 12.5);
        assert_eq!(parse_attribute_str(" 17 "), 17.0);
        assert_eq!(parse_attribute_str("8.5"), 8.5);
    }

    #[test]
    fn test_sentinels_are_zero() {
        for s in ["N/A", "n/a", "NA", "none", "None", "-", "\u{2013}", "\u{2014}", "\u{2212}", "  -  ", ""] {
            assert_eq!(parse_attribute_str(s), 0.0, "sentinel {:?}", s);
        }
        assert_eq!(parse_attribute(&CellValue::Empty), 0.0);
    }

    #[test]
    fn test_value_with_scouted_range() {
        assert_eq!(parse_attribute_str("14 (13-16)"), 14.0);
        assert_eq!(parse_attribute_str("9 (7\u{2013}11)"), 9.0);
    }

    #[test]
    fn test_range_midpoint() {
        assert_eq!(parse_attribute_str("13-16"), 14.5);
        assert_eq!(parse_attribute_str("13 - 16"), 14.5);
        assert_eq!(parse_attribute_str("10\u{2013}12"), 11.0);
        assert_eq!(parse_attribute_str("(13-16)"), 14.5);
    }

    #[test]
    fn test_embedded_integer() {
        assert_eq!(parse_attribute_str("approx 12"), 12.0);
        assert_eq!(parse_attribute_str("~7 or 9"), 7.0);
    }

    #[test]
    fn test_garbage_is_zero() {
        assert_eq!(parse_attribute_str("unknown"), 0.0);
        assert_eq!(parse_attribute_str("??"), 0.0);
        assert_eq!(parse_attribute_str("inf"), 0.0);
    }

    #[test]
    fn test_from_cell() {
        assert_eq!(CellValue::from_cell(" 15 "), CellValue::Number(15.0));
        assert_eq!(CellValue::from_cell("   "), CellValue::Empty);
        assert_eq!(CellValue::from_cell("13-16"), CellValue::Text("13-16".to_string()));
        assert_eq!(CellValue::from_cell("NaN"), CellValue::Text("NaN".to_string()));
        assert_eq!(CellValue::Number(15.0).as_display(), "15");
    }

    #[test]
    fn test_diagnostics_skip_numbers_and_sentinels() {
        let mut diag = ParseDiagnostics::new();
        diag.observe("Pac", &CellValue::Number(12.0));
        diag.observe("Pac", &CellValue::Text("-".to_string()));
        assert!(diag.is_empty());

        for raw in ["13-16", "13-16", "12 (11-13)", "8-9", "1-2", "3-4", "5-6"] {
            diag.observe("Acc", &CellValue::from_cell(raw));
        }
        let acc = diag.get("Acc").unwrap();
        assert_eq!(acc.count, 7);
        assert_eq!(acc.examples.len(), MAX_EXAMPLES);
        assert_eq!(acc.examples[0], "13-16");
    }
}
