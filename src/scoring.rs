//! Role score calculation
//!
//! Every (player, role) pair gets
//! `((5 * sum(key) + 3 * sum(support) + sum(minor)) / total_weight)`, rounded to
//! one decimal. Attributes missing from the export count as 0.

use crate::attributes::{parse_attribute, CellValue};
use crate::positions;
use crate::roles::{RoleCatalog, RoleDefinition, RoleGroup};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Round to one decimal place, halves away from zero.
pub fn round_score(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Tier sums behind a single role score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleBreakdown {
    pub code: String,
    pub key_sum: f64,
    pub support_sum: f64,
    pub minor_sum: f64,
    pub total_weight: u32,
    /// Unrounded weighted average
    pub raw: f64,
    pub score: f64,
}

pub fn breakdown(attributes: &HashMap<String, CellValue>, role: &RoleDefinition) -> RoleBreakdown {
    let sum = |attrs: &[String]| -> f64 {
        attrs
            .iter()
            .map(|a| attributes.get(a).map(parse_attribute).unwrap_or(0.0))
            .sum()
    };
    let key_sum = sum(&role.key_attrs);
    let support_sum = sum(&role.support_attrs);
    let minor_sum = sum(&role.minor_attrs);
    let total_weight = role.total_weight();

    let raw = if total_weight == 0 {
        0.0
    } else {
        (5.0 * key_sum + 3.0 * support_sum + minor_sum) / total_weight as f64
    };

    RoleBreakdown {
        code: role.code.clone(),
        key_sum,
        support_sum,
        minor_sum,
        total_weight,
        raw,
        score: round_score(raw),
    }
}

/// Score one player's raw attributes against one role
pub fn score(attributes: &HashMap<String, CellValue>, role: &RoleDefinition) -> f64 {
    breakdown(attributes, role).score
}

/// Composite attributes shown next to a player's best role
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DerivedAttributes {
    /// (Pac + Acc) / 2
    pub speed: f64,
    /// (Wor + Sta) / 2
    pub work: f64,
    /// Jumping reach
    pub jump: f64,
    pub strength: f64,
}

impl DerivedAttributes {
    pub fn from_attributes(attributes: &HashMap<String, CellValue>) -> Self {
        let get = |code: &str| attributes.get(code).map(parse_attribute).unwrap_or(0.0);
        Self {
            speed: round_score((get("Pac") + get("Acc")) / 2.0),
            work: round_score((get("Wor") + get("Sta")) / 2.0),
            jump: get("Jum"),
            strength: get("Str"),
        }
    }
}

/// One exported player with computed role scores
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    /// All non-identity columns of the export row, keyed by header
    pub raw_attributes: HashMap<String, CellValue>,
    pub position_text: String,
    pub canonical_positions: BTreeSet<String>,
    pub role_scores: HashMap<String, f64>,
    pub best_role: Option<String>,
    pub best_score: f64,
    pub derived: DerivedAttributes,
}

impl PlayerRecord {
    /// Unscored record; positions are normalized immediately
    pub fn new(
        name: impl Into<String>,
        position_text: impl Into<String>,
        raw_attributes: HashMap<String, CellValue>,
    ) -> Self {
        let position_text = position_text.into();
        let canonical_positions = positions::normalize(&position_text);
        Self {
            name: name.into(),
            raw_attributes,
            position_text,
            canonical_positions,
            role_scores: HashMap::new(),
            best_role: None,
            best_score: 0.0,
            derived: DerivedAttributes::default(),
        }
    }

    pub fn role_score(&self, code: &str) -> Option<f64> {
        self.role_scores.get(&code.trim().to_uppercase()).copied()
    }

    pub fn best_role(&self) -> Option<&str> {
        self.best_role.as_deref()
    }

    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    /// Mean over every scored role (0.0 when unscored)
    pub fn average_score(&self) -> f64 {
        mean(self.role_scores.values().copied())
    }

    /// Mean over the catalog roles of one group that this player has scores for
    pub fn group_average(&self, catalog: &RoleCatalog, group: RoleGroup) -> f64 {
        mean(
            catalog
                .roles_in_group(group)
                .filter_map(|role| self.role_scores.get(&role.code).copied()),
        )
    }

    /// Position groups the player can cover
    pub fn groups(&self) -> BTreeSet<RoleGroup> {
        positions::player_groups(&self.canonical_positions)
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        round_score(sum / count as f64)
    }
}

/// Fill in role scores, best role and derived attributes.
///
/// Best role is the first maximum in catalog order.
pub fn score_player(player: &mut PlayerRecord, catalog: &RoleCatalog) {
    let mut scores = HashMap::with_capacity(catalog.len());
    let mut best: Option<(&str, f64)> = None;

    for role in catalog.iter() {
        let value = score(&player.raw_attributes, role);
        match best {
            Some((_, top)) if value <= top => {}
            _ => best = Some((role.code.as_str(), value)),
        }
        scores.insert(role.code.clone(), value);
    }

    player.role_scores = scores;
    player.best_role = best.map(|(code, _)| code.to_string());
    player.best_score = best.map(|(_, s)| s).unwrap_or(0.0);
    player.derived = DerivedAttributes::from_attributes(&player.raw_attributes);
}

/// Score every player in parallel. Output order equals input order.
pub fn score_players(mut players: Vec<PlayerRecord>, catalog: &RoleCatalog) -> Vec<PlayerRecord> {
    players
        .par_iter_mut()
        .for_each(|player| score_player(player, catalog));
    log::debug!("Scored {} players against {} roles", players.len(), catalog.len());
    players
}
