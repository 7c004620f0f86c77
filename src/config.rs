//! Analysis configuration

use crate::assignment::RankMetric;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Prefix of every generated report file
pub const DEFAULT_OUTPUT_PREFIX: &str = "fm_analysis_";

/// Score bands used to colour report cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreThresholds {
    pub excellent: f64,
    pub good: f64,
    pub average: f64,
    pub poor: f64,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            excellent: 15.0,
            good: 12.0,
            average: 8.0,
            poor: 5.0,
        }
    }
}

impl ScoreThresholds {
    /// CSS class / band name for a score
    pub fn classify(&self, score: f64) -> &'static str {
        if score >= self.excellent {
            "excellent"
        } else if score >= self.good {
            "good"
        } else if score >= self.average {
            "average"
        } else if score >= self.poor {
            "poor"
        } else {
            "very-poor"
        }
    }
}

/// Settings shared by every pipeline operation
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Number of formations kept after ranking
    pub top_k: usize,
    /// Figure formations are ranked by
    pub rank_metric: RankMetric,
    pub thresholds: ScoreThresholds,
    /// Drop `*uid*` columns from the export before scoring
    pub hide_uid_columns: bool,
    /// Keep the export's own columns in CSV/XLSX output
    pub include_raw_attributes: bool,
    /// Rows beyond this are ignored
    pub max_players: usize,
    /// CSV field delimiter
    pub delimiter: u8,
    pub output_prefix: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            rank_metric: RankMetric::Total,
            thresholds: ScoreThresholds::default(),
            hide_uid_columns: true,
            include_raw_attributes: true,
            max_players: 10_000,
            delimiter: b',',
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
        }
    }
}

impl AnalysisConfig {
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_rank_metric(mut self, metric: RankMetric) -> Self {
        self.rank_metric = metric;
        self
    }

    pub fn with_thresholds(mut self, thresholds: ScoreThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Keep UID columns in the output
    pub fn with_uid_columns(mut self) -> Self {
        self.hide_uid_columns = false;
        self
    }

    /// Only name, position, derived attributes and role scores in CSV/XLSX output
    pub fn without_raw_attributes(mut self) -> Self {
        self.include_raw_attributes = false;
        self
    }

    /// `<folder>/<prefix><YYYYMMDD_HHMMSS>.<ext>`
    pub fn output_path(&self, folder: &Path, timestamp: &DateTime<Local>, ext: &str) -> PathBuf {
        folder.join(format!(
            "{}{}.{}",
            self.output_prefix,
            timestamp.format("%Y%m%d_%H%M%S"),
            ext
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.top_k, 5);
        assert_eq!(config.rank_metric, RankMetric::Total);
        assert!(config.hide_uid_columns);
        assert_eq!(config.max_players, 10_000);
    }

    #[test]
    fn test_builders() {
        let config = AnalysisConfig::default()
            .with_top_k(3)
            .with_rank_metric(RankMetric::AveragePerSlot)
            .with_uid_columns()
            .without_raw_attributes();
        assert_eq!(config.top_k, 3);
        assert_eq!(config.rank_metric, RankMetric::AveragePerSlot);
        assert!(!config.hide_uid_columns);
        assert!(!config.include_raw_attributes);
    }

    #[test]
    fn test_classify() {
        let t = ScoreThresholds::default();
        assert_eq!(t.classify(15.0), "excellent");
        assert_eq!(t.classify(14.9), "good");
        assert_eq!(t.classify(8.0), "average");
        assert_eq!(t.classify(5.5), "poor");
        assert_eq!(t.classify(1.0), "very-poor");
    }

    #[test]
    fn test_output_path() {
        let ts = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let path = AnalysisConfig::default().output_path(Path::new("/tmp/exports"), &ts, "html");
        assert_eq!(path, PathBuf::from("/tmp/exports/fm_analysis_20240309_140507.html"));
    }
}
