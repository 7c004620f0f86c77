//! FM Role Analyzer
//!
//! Role suitability scoring and best-formation selection for Football Manager
//! player exports.
//!
//! This library provides:
//! - `attributes`: Parsing of raw attribute cells (numbers, scouted ranges, placeholders)
//! - `roles`: The role catalog and role label resolution
//! - `scoring`: Weighted role scores and per-player best role
//! - `positions`: Position notation normalization and slot eligibility
//! - `formation`: Formation text parsing and the built-in formations
//! - `assignment`: Greedy formation assignment and ranking
//! - `table`, `report`, `pipeline`: Export loading, report output and end-to-end operations
//!
//! Binaries:
//! - `fm-analyze`: Report, formation ranking, CSV scoring and role listing
//! - `role-debug`: Per-role score breakdown for a single player

pub mod assignment;
pub mod attributes;
pub mod config;
pub mod formation;
pub mod pipeline;
pub mod positions;
pub mod report;
pub mod roles;
pub mod scoring;
pub mod table;

pub use assignment::{AssignmentEngine, AssignmentResult, RankMetric, SlotAssignment};
pub use attributes::{parse_attribute, CellValue};
pub use config::{AnalysisConfig, ScoreThresholds};
pub use formation::{Formation, FormationSlot};
pub use roles::{RoleCatalog, RoleDefinition, RoleGroup, RoleResolution};
pub use scoring::PlayerRecord;
