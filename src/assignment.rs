//! Greedy best-formation assignment
//!
//! Slots are filled in declared order. Each slot takes the unused eligible player
//! with the strictly highest score for the slot's role; ties keep the player that
//! comes first in the input. This is deliberately greedy: an earlier slot can take
//! a player a later slot needed more, and the result is not a global optimum.

use crate::formation::{Formation, FormationSlot};
use crate::positions;
use crate::roles::{RoleCatalog, RoleResolution};
use crate::scoring::{round_score, PlayerRecord};
use serde::Serialize;
use std::cmp::Ordering;
use std::str::FromStr;

/// Which figure formations are ranked by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankMetric {
    #[default]
    Total,
    AveragePerSlot,
}

impl FromStr for RankMetric {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "total" => Ok(RankMetric::Total),
            "average" | "avg" | "average_per_slot" => Ok(RankMetric::AveragePerSlot),
            other => anyhow::bail!("Unknown rank metric '{}' (expected total or average)", other),
        }
    }
}

/// Outcome for one slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotAssignment {
    pub requirement: String,
    pub role_label: String,
    pub resolution: RoleResolution,
    pub player_name: Option<String>,
    /// Score the player was picked with; 0 when unfilled
    pub score: f64,
}

impl SlotAssignment {
    pub fn is_filled(&self) -> bool {
        self.player_name.is_some()
    }
}

/// One formation's line-up and totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentResult {
    pub formation_name: String,
    pub assignments: Vec<SlotAssignment>,
    pub total_score: f64,
}

impl AssignmentResult {
    pub fn slot_count(&self) -> usize {
        self.assignments.len()
    }

    pub fn filled_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_filled()).count()
    }

    /// Total divided by every slot, filled or not. Used for ranking.
    pub fn average_per_slot(&self) -> f64 {
        match self.slot_count() {
            0 => 0.0,
            n => self.total_score / n as f64,
        }
    }

    /// Total divided by filled slots only. Used for display.
    pub fn average_per_filled_slot(&self) -> f64 {
        match self.filled_count() {
            0 => 0.0,
            n => self.total_score / n as f64,
        }
    }

    pub fn metric(&self, metric: RankMetric) -> f64 {
        match metric {
            RankMetric::Total => self.total_score,
            RankMetric::AveragePerSlot => self.average_per_slot(),
        }
    }
}

/// Fills formations from a scored player pool
pub struct AssignmentEngine<'a> {
    catalog: &'a RoleCatalog,
}

impl<'a> AssignmentEngine<'a> {
    pub fn new(catalog: &'a RoleCatalog) -> Self {
        Self { catalog }
    }

    /// Score a player would bring to a slot with the given resolution
    pub fn slot_score(&self, player: &PlayerRecord, resolution: &RoleResolution) -> f64 {
        match resolution {
            RoleResolution::Exact(code) | RoleResolution::Mapped(code) => {
                player.role_score(code).unwrap_or(0.0)
            }
            RoleResolution::Fallback(group) => player.group_average(self.catalog, *group),
            RoleResolution::Unscored => player.average_score(),
        }
    }

    pub fn assign(&self, formation: &Formation, players: &[PlayerRecord]) -> AssignmentResult {
        let mut used = vec![false; players.len()];
        let mut assignments = Vec::with_capacity(formation.slots.len());

        for slot in &formation.slots {
            let resolution = self
                .catalog
                .resolve_label(&slot.preferred_role_label, slot.group());
            if resolution.code().is_none() {
                log::debug!(
                    "{}: role '{}' not in catalog, using {:?}",
                    formation.name,
                    slot.preferred_role_label,
                    resolution
                );
            }

            let pick = self.best_candidate(slot, &resolution, players, &used);
            let (player_name, score) = match pick {
                Some((idx, score)) => {
                    used[idx] = true;
                    (Some(players[idx].name.clone()), score)
                }
                None => (None, 0.0),
            };

            assignments.push(SlotAssignment {
                requirement: slot.requirement.clone(),
                role_label: slot.preferred_role_label.clone(),
                resolution,
                player_name,
                score,
            });
        }

        let total: f64 = assignments.iter().map(|a| a.score).sum();
        AssignmentResult {
            formation_name: formation.name.clone(),
            assignments,
            total_score: round_score(total),
        }
    }

    fn best_candidate(
        &self,
        slot: &FormationSlot,
        resolution: &RoleResolution,
        players: &[PlayerRecord],
        used: &[bool],
    ) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, player) in players.iter().enumerate() {
            if used[idx] || !positions::is_eligible(&slot.tokens, &player.canonical_positions) {
                continue;
            }
            let score = self.slot_score(player, resolution);
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((idx, score)),
            }
        }
        best
    }

    /// Assign every formation independently; player usage never carries over
    pub fn assign_all(&self, formations: &[Formation], players: &[PlayerRecord]) -> Vec<AssignmentResult> {
        formations.iter().map(|f| self.assign(f, players)).collect()
    }
}

/// Sort descending by `metric` (stable, so equal formations keep their order) and keep `top_k`
pub fn rank_formations(
    mut results: Vec<AssignmentResult>,
    metric: RankMetric,
    top_k: usize,
) -> Vec<AssignmentResult> {
    results.sort_by(|a, b| {
        b.metric(metric)
            .partial_cmp(&a.metric(metric))
            .unwrap_or(Ordering::Equal)
    });
    results.truncate(top_k);
    results
}
