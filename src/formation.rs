//! Formation text format
//!
//! ```text
//! 1. 4-4-2
//! GK – Goalkeeper (D)
//! D R – Full Back (S)
//! DC = CDD
//! ```
//!
//! A numbered header starts a formation; every following `requirement <sep> role`
//! line is a slot, where `<sep>` is `-`, an en dash, an em dash or `=`. Anything
//! else is ignored.

use crate::positions;
use crate::roles::RoleGroup;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;

lazy_static! {
    static ref HEADER_RE: Regex = Regex::new(r"^(\d+)\.\s+(.+)$").unwrap();
    static ref SLOT_RE: Regex = Regex::new(r"^(.+?)\s*[-\u{2013}\u{2014}=]\s*(.+)$").unwrap();
    static ref REQUIREMENT_RE: Regex = Regex::new(r"^[A-Za-z/() ]+$").unwrap();
}

/// One position to fill
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormationSlot {
    /// Position requirement as written, e.g. "D/WB R"
    pub requirement: String,
    /// Role label or code, e.g. "Wing Back (S)" or "WBS"
    pub preferred_role_label: String,
    /// Canonical tokens of the requirement
    #[serde(skip)]
    pub tokens: BTreeSet<String>,
}

impl FormationSlot {
    pub fn new(requirement: &str, preferred_role_label: &str) -> Self {
        let requirement = requirement.trim().to_string();
        let tokens = positions::normalize(&requirement);
        Self {
            requirement,
            preferred_role_label: preferred_role_label.trim().to_string(),
            tokens,
        }
    }

    /// Position group of the slot, taken from the first token that has one
    pub fn group(&self) -> Option<RoleGroup> {
        self.tokens.iter().find_map(|t| positions::position_group(t))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Formation {
    pub name: String,
    pub slots: Vec<FormationSlot>,
}

impl Formation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: Vec::new(),
        }
    }
}

/// Parse formation text. Never fails; unrecognized lines are skipped.
pub fn parse_formations(text: &str) -> Vec<Formation> {
    let mut formations: Vec<Formation> = Vec::new();
    let mut orphaned = 0usize;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = HEADER_RE.captures(line) {
            formations.push(Formation::new(caps[2].trim()));
            continue;
        }

        let Some(slot) = parse_slot(line) else {
            log::debug!("Ignoring formation line: {}", line);
            continue;
        };
        match formations.last_mut() {
            Some(current) => current.slots.push(slot),
            None => orphaned += 1,
        }
    }

    if orphaned > 0 {
        log::debug!("Dropped {} slot line(s) before the first formation header", orphaned);
    }
    formations
}

fn parse_slot(line: &str) -> Option<FormationSlot> {
    let caps = SLOT_RE.captures(line)?;
    let requirement = caps[1].trim();
    let label = caps[2].trim();
    if label.is_empty() || !REQUIREMENT_RE.is_match(requirement) {
        return None;
    }
    let slot = FormationSlot::new(requirement, label);
    // must name at least one real position
    slot.group()?;
    Some(slot)
}

/// The six formations offered when no formation file is given
pub fn default_formations() -> Vec<Formation> {
    parse_formations(DEFAULT_FORMATIONS)
}

pub const DEFAULT_FORMATIONS: &str = "\
1. 4-4-2
GK – Goalkeeper (D)
D R – Full Back (S)
DC – Central Defender (D)
DC – Central Defender (D)
D L – Full Back (S)
M R – Winger (S)
MC – Box-to-Box Mid (S)
MC – Ball-Winning Mid (D)
M L – Winger (A)
ST C – Advanced Forward (A)
ST C – Deep-Lying Forward (S)

2. 4-2-3-1 Wide
GK – Sweeper Keeper (S)
D/WB R – Wing Back (S)
DC – Ball-Playing Def (D)
DC – Central Def (D)
D/WB L – Wing Back (S)
DM – Deep-Lying Playmaker (S)
DM – Def Mid (D)
AM R – Inside Forward (A)
AMC – Att Mid (S)
AM L – Winger (A)
ST C – Pressing Forward (A)

3. 4-3-3 DM Wide
GK – Sweeper Keeper (S)
D/WB R – Wing Back (S)
DC – Central Def (D)
DC – Central Def (D)
D/WB L – Wing Back (S)
DM – Anchor Man (D)
MC – Box-to-Box Mid (S)
MC – Advanced Playmaker (S)
AM R – Inside Forward (A)
AM L – Winger (A)
ST C – Advanced Forward (A)

4. 4-1-2-1-2 Narrow (Diamond)
GK – Goalkeeper (D)
D R – Full Back (S)
DC – Central Def (D)
DC – Central Def (D)
D L – Full Back (S)
DM – Def Mid (D)
MC – Box-to-Box Mid (S)
MC – Mezzala (S)
AMC – Advanced Playmaker (A)
ST C – Poacher (A)
ST C – Deep-Lying Forward (S)

5. 3-5-2
GK – Sweeper Keeper (S)
DC – Wide Centre-Back (S)
DC – Central Def (D)
DC – Wide Centre-Back (S)
D/WB R – Wing Back (S)
D/WB L – Wing Back (S)
MC – Ball-Winning Mid (D)
MC – Deep-Lying Playmaker (S)
MC – Mezzala (S)
ST C – Pressing Forward (A)
ST C – Target Forward (S)

6. 5-3-2 WB
GK – Sweeper Keeper (S)
D/WB R – Wing Back (S)
DC – Central Def (D)
DC – Ball-Playing Def (D)
DC – Central Def (D)
D/WB L – Wing Back (S)
MC – Box-to-Box Mid (S)
MC – Deep-Lying Playmaker (S)
MC – Ball-Winning Mid (D)
ST C – Target Forward (S)
ST C – Poacher (A)
";
