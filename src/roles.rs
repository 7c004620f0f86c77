//! Role catalog and role label resolution
//!
//! Every tactical role is scored with the same three-tier formula: key attributes
//! weigh 5, support attributes 3 and minor attributes 1. The catalog below is
//! fixed data; declaration order is significant because it is the tie-break
//! order for a player's best role.
//!
//! The catalog is an explicitly constructed value (`RoleCatalog::standard()`)
//! that callers hand to the scorer and the assignment engine.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;

/// Broad positional family a role (or a formation slot) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RoleGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl RoleGroup {
    pub const ALL: [RoleGroup; 4] = [
        RoleGroup::Goalkeeper,
        RoleGroup::Defender,
        RoleGroup::Midfielder,
        RoleGroup::Forward,
    ];

    /// Short filter label used in reports ("GK", "D", "M", "F")
    pub fn short(&self) -> &'static str {
        match self {
            RoleGroup::Goalkeeper => "GK",
            RoleGroup::Defender => "D",
            RoleGroup::Midfielder => "M",
            RoleGroup::Forward => "F",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            RoleGroup::Goalkeeper => "Goalkeepers",
            RoleGroup::Defender => "Defenders",
            RoleGroup::Midfielder => "Midfielders",
            RoleGroup::Forward => "Forwards",
        }
    }
}

impl std::str::FromStr for RoleGroup {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GK" | "G" | "GOALKEEPER" | "GOALKEEPERS" => Ok(RoleGroup::Goalkeeper),
            "D" | "DEF" | "DEFENDER" | "DEFENDERS" => Ok(RoleGroup::Defender),
            "M" | "MID" | "MIDFIELDER" | "MIDFIELDERS" => Ok(RoleGroup::Midfielder),
            "F" | "FWD" | "FORWARD" | "FORWARDS" => Ok(RoleGroup::Forward),
            other => anyhow::bail!("Unknown role group '{}' (expected GK, D, M or F)", other),
        }
    }
}

/// A single role with its weighted attribute lists
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleDefinition {
    /// Canonical short code (e.g. "BPDD")
    pub code: String,
    /// Full description including the duty (e.g. "Ball Playing Defender Defend")
    pub description: String,
    /// Positional family, taken from the catalog section the role is declared in
    pub group: RoleGroup,
    /// Attributes weighted 5x
    pub key_attrs: Vec<String>,
    /// Attributes weighted 3x
    pub support_attrs: Vec<String>,
    /// Attributes weighted 1x
    pub minor_attrs: Vec<String>,
}

impl RoleDefinition {
    pub fn new(
        code: &str,
        description: &str,
        group: RoleGroup,
        key_attrs: &[&str],
        support_attrs: &[&str],
        minor_attrs: &[&str],
    ) -> Self {
        let owned = |attrs: &[&str]| attrs.iter().map(|a| a.to_string()).collect::<Vec<_>>();
        Self {
            code: code.to_uppercase(),
            description: description.to_string(),
            group,
            key_attrs: owned(key_attrs),
            support_attrs: owned(support_attrs),
            minor_attrs: owned(minor_attrs),
        }
    }

    /// Denominator of the score formula: 5 per key, 3 per support, 1 per minor attribute
    pub fn total_weight(&self) -> u32 {
        (self.key_attrs.len() * 5 + self.support_attrs.len() * 3 + self.minor_attrs.len()) as u32
    }

    /// Role name without the duty word ("Ball Playing Defender")
    pub fn name(&self) -> &str {
        match self.description.rfind(' ') {
            Some(idx) => &self.description[..idx],
            None => &self.description,
        }
    }

    /// Duty letter, i.e. the last character of the code (D, S, A or C)
    pub fn duty_letter(&self) -> Option<char> {
        self.code.chars().last()
    }
}

/// How a formation slot's role label was turned into something scoreable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RoleResolution {
    /// Label is a catalog code or an entry of the fixed label table
    Exact(String),
    /// Label matched a catalog role by name prefix and duty
    Mapped(String),
    /// No role found; scored as the player's average over this group's roles
    Fallback(RoleGroup),
    /// No role and no usable group; scored as the player's average over all roles
    Unscored,
}

impl RoleResolution {
    /// Role code when the label resolved to a concrete role
    pub fn code(&self) -> Option<&str> {
        match self {
            RoleResolution::Exact(code) | RoleResolution::Mapped(code) => Some(code),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RoleResolution::Exact(_) => "exact",
            RoleResolution::Mapped(_) => "mapped",
            RoleResolution::Fallback(_) => "fallback",
            RoleResolution::Unscored => "unscored",
        }
    }
}

lazy_static! {
    // "Central Def (D)", "Winger (Attack)"
    static ref DUTY_LABEL_RE: Regex = Regex::new(r"^(.*?)\s*\(\s*([A-Za-z]+)\s*\)\s*$").unwrap();
}

/// Immutable role catalog shared by the scorer and the assignment engine
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Vec<RoleDefinition>,
    index: HashMap<String, usize>,
    labels: HashMap<String, String>,
}

impl RoleCatalog {
    /// The 85-role catalog plus the formation label table
    pub fn standard() -> Self {
        let roles = STANDARD_ROLES
            .iter()
            .map(|(code, description, group, key, support, minor)| {
                RoleDefinition::new(code, description, *group, key, support, minor)
            })
            .collect();
        Self::from_definitions(roles).with_labels(ROLE_LABELS)
    }

    /// Build a catalog from arbitrary definitions. Order is kept; a repeated code
    /// keeps its first definition.
    pub fn from_definitions(definitions: Vec<RoleDefinition>) -> Self {
        let mut roles = Vec::with_capacity(definitions.len());
        let mut index = HashMap::new();
        for def in definitions {
            if index.contains_key(&def.code) {
                log::warn!("Duplicate role code '{}' ignored", def.code);
                continue;
            }
            if def.total_weight() == 0 {
                log::warn!("Role '{}' has no weighted attributes and always scores 0", def.code);
            }
            index.insert(def.code.clone(), roles.len());
            roles.push(def);
        }
        Self {
            roles,
            index,
            labels: HashMap::new(),
        }
    }

    /// Add free-text label -> code entries. Entries pointing at unknown codes are skipped.
    pub fn with_labels(mut self, labels: &[(&str, &str)]) -> Self {
        for (label, code) in labels {
            let code = code.to_uppercase();
            if self.index.contains_key(&code) {
                self.labels.insert(label_key(label), code);
            } else {
                log::debug!("Label '{}' points at unknown role '{}'", label, code);
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Roles in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, RoleDefinition> {
        self.roles.iter()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(|r| r.code.as_str())
    }

    /// Case-insensitive lookup by code
    pub fn get(&self, code: &str) -> Option<&RoleDefinition> {
        self.index
            .get(&code.trim().to_uppercase())
            .map(|&idx| &self.roles[idx])
    }

    pub fn roles_in_group(&self, group: RoleGroup) -> impl Iterator<Item = &RoleDefinition> {
        self.roles.iter().filter(move |r| r.group == group)
    }

    /// Human readable description for a code, e.g. "AFA" -> "Advanced Forward Attack".
    ///
    /// Codes outside the catalog are split into base + duty word when the last letter
    /// is a known duty, otherwise the code itself is returned.
    pub fn describe(&self, code: &str) -> String {
        if let Some(def) = self.get(code) {
            return def.description.clone();
        }
        let code = code.trim().to_uppercase();
        let duty = match code.chars().last() {
            Some('A') => "Attack",
            Some('D') => "Defend",
            Some('S') => "Support",
            _ => return code,
        };
        if code.len() > 1 {
            format!("{} {}", &code[..code.len() - 1], duty)
        } else {
            code
        }
    }

    /// Resolve a formation slot's role label.
    ///
    /// Order: catalog code, label table, name-prefix match with the same duty
    /// letter, then the slot's group (if any).
    pub fn resolve_label(&self, label: &str, group: Option<RoleGroup>) -> RoleResolution {
        let trimmed = label.trim();
        if !trimmed.is_empty() {
            if let Some(def) = self.get(trimmed) {
                return RoleResolution::Exact(def.code.clone());
            }
            if let Some(code) = self.labels.get(&label_key(trimmed)) {
                return RoleResolution::Exact(code.clone());
            }
            if let Some(code) = self.match_by_name(trimmed) {
                return RoleResolution::Mapped(code);
            }
        }
        match group {
            Some(group) => RoleResolution::Fallback(group),
            None => RoleResolution::Unscored,
        }
    }

    fn match_by_name(&self, label: &str) -> Option<String> {
        let (name, duty) = match DUTY_LABEL_RE.captures(label) {
            Some(caps) => (
                caps[1].to_string(),
                caps[2].chars().next().map(|c| c.to_ascii_uppercase()),
            ),
            None => (label.to_string(), None),
        };
        let wanted = label_key(&name);
        let wanted: Vec<&str> = wanted.split_whitespace().collect();
        if wanted.is_empty() {
            return None;
        }

        self.roles
            .iter()
            .find(|role| {
                if duty.is_some() && role.duty_letter() != duty {
                    return false;
                }
                let role_name = label_key(role.name());
                let words: Vec<&str> = role_name.split_whitespace().collect();
                words.len() == wanted.len()
                    && words.iter().zip(&wanted).all(|(w, p)| w.starts_with(p))
            })
            .map(|role| role.code.clone())
    }
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Lowercase, dashes to spaces, single spaces, a space before "("
fn label_key(label: &str) -> String {
    label
        .to_lowercase()
        .replace(['-', '_'], " ")
        .replace('(', " (")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Labels used by the built-in formations and the formation builder
const ROLE_LABELS: &[(&str, &str)] = &[
    ("Goalkeeper (D)", "GKD"),
    ("Sweeper Keeper (D)", "SKD"),
    ("Sweeper Keeper (S)", "SKS"),
    ("Sweeper Keeper (A)", "SKA"),
    ("Full Back (D)", "FBD"),
    ("Full Back (S)", "FBS"),
    ("Full Back (A)", "FBA"),
    ("Wing Back (D)", "WBD"),
    ("Wing Back (S)", "WBS"),
    ("Wing Back (A)", "WBA"),
    ("Central Defender (D)", "CDD"),
    ("Central Defender (S)", "CDS"),
    ("Central Defender (C)", "CDC"),
    ("Central Def (D)", "CDD"),
    ("Central Def (S)", "CDS"),
    ("Central Def (C)", "CDC"),
    ("Ball-Playing Def (D)", "BPDD"),
    ("Ball-Playing Def (S)", "BPDS"),
    ("Ball-Playing Def (C)", "BPDC"),
    ("Wide Centre-Back (D)", "WCBD"),
    ("Wide Centre-Back (S)", "WCBS"),
    ("Wide Centre-Back (A)", "WCBA"),
    ("Def Mid (D)", "DMD"),
    ("Def Mid (S)", "DMS"),
    ("Anchor Man (D)", "AD"),
    ("Half Back (D)", "HBD"),
    ("Deep-Lying Playmaker (D)", "DLPD"),
    ("Deep-Lying Playmaker (S)", "DLPS"),
    ("Ball-Winning Mid (D)", "BWMD"),
    ("Ball-Winning Mid (S)", "BWMS"),
    ("Box-to-Box Mid (S)", "B2BS"),
    ("Central Mid (D)", "CMD"),
    ("Central Mid (S)", "CMS"),
    ("Central Mid (A)", "CMA"),
    ("Mezzala (S)", "MEZS"),
    ("Mezzala (A)", "MEZA"),
    ("Advanced Playmaker (S)", "APS"),
    ("Advanced Playmaker (A)", "APA"),
    ("Att Mid (S)", "AMS"),
    ("Att Mid (A)", "AMA"),
    ("Winger (S)", "WS"),
    ("Winger (A)", "WA"),
    ("Inside Forward (S)", "IFS"),
    ("Inside Forward (A)", "IFA"),
    ("Inverted Winger (S)", "IWS"),
    ("Inverted Winger (A)", "IWA"),
    ("Advanced Forward (A)", "AFA"),
    ("Deep-Lying Forward (S)", "DLFS"),
    ("Deep-Lying Forward (A)", "DLFA"),
    ("Pressing Forward (D)", "PFD"),
    ("Pressing Forward (S)", "PFS"),
    ("Pressing Forward (A)", "PFA"),
    ("Target Forward (S)", "TFS"),
    ("Target Forward (A)", "TFA"),
    ("Poacher (A)", "PA"),
    ("False Nine (S)", "F9S"),
    ("Complete Forward (S)", "CFS"),
    ("Complete Forward (A)", "CFA"),
];

const GK: RoleGroup = RoleGroup::Goalkeeper;
const D: RoleGroup = RoleGroup::Defender;
const M: RoleGroup = RoleGroup::Midfielder;
const F: RoleGroup = RoleGroup::Forward;

type RoleRow = (
    &'static str,
    &'static str,
    RoleGroup,
    &'static [&'static str],
    &'static [&'static str],
    &'static [&'static str],
);

/// (code, description, group, key, support, minor) in display order
#[rustfmt::skip]
const STANDARD_ROLES: &[RoleRow] = &[
    // Goalkeepers
    ("GKD", "Goalkeeper Defend", GK, &["Agi", "Ref"], &["Aer", "Cmd", "Cnt", "Han", "Kic", "Pos"], &["1v1", "Ant", "Dec", "Thr"]),
    ("SKD", "Sweeper Keeper Defend", GK, &["Agi", "Ref"], &["1v1", "Ant", "Cmd", "Cnt", "Kic", "Pos"], &["Acc", "Aer", "Dec", "Fir", "Han", "Pas", "TRO", "Vis"]),
    ("SKS", "Sweeper Keeper Support", GK, &["Agi", "Ref"], &["1v1", "Ant", "Cmd", "Cnt", "Kic", "Pos"], &["Acc", "Aer", "Dec", "Fir", "Han", "Pas", "TRO", "Vis"]),
    ("SKA", "Sweeper Keeper Attack", GK, &["Agi", "Ref"], &["1v1", "Ant", "Cmd", "Cnt", "Kic", "Pos"], &["Acc", "Aer", "Dec", "Fir", "Han", "Pas", "TRO", "Vis"]),

    // Defenders
    ("BPDD", "Ball Playing Defender Defend", D, &["Acc", "Cmp", "Jum", "Pac"], &["Hea", "Mar", "Pas", "Pos", "Str", "Tck"], &["Agg", "Ant", "Bra", "Cnt", "Dec", "Fir", "Tec", "Vis"]),
    ("BPDS", "Ball Playing Defender Stopper", D, &["Acc", "Cmp", "Jum", "Pac"], &["Agg", "Bra", "Dec", "Hea", "Pas", "Pos", "Str", "Tck"], &["Ant", "Cnt", "Fir", "Mar", "Tec", "Vis"]),
    ("BPDC", "Ball Playing Defender Cover", D, &["Acc", "Cmp", "Jum", "Pac"], &["Ant", "Cnt", "Dec", "Mar", "Pas", "Pos", "Tck"], &["Bra", "Fir", "Hea", "Str", "Tec", "Vis"]),
    ("CDD", "Central Defender Defend", D, &["Acc", "Cmp", "Jum", "Pac"], &["Hea", "Mar", "Pos", "Str", "Tck"], &["Agg", "Ant", "Bra", "Cnt", "Dec"]),
    ("CDS", "Central Defender Stopper", D, &["Acc", "Cmp", "Jum", "Pac"], &["Agg", "Bra", "Dec", "Hea", "Pos", "Str", "Tck"], &["Ant", "Cnt", "Mar"]),
    ("CDC", "Central Defender Cover", D, &["Acc", "Cmp", "Jum", "Pac"], &["Ant", "Cnt", "Dec", "Mar", "Pos", "Tck"], &["Bra", "Hea", "Str"]),
    ("CWBS", "Complete Wing Back Support", D, &["Acc", "Pac", "Sta", "Wor"], &["Cro", "Dri", "OtB", "Tea", "Tec"], &["Agi", "Ant", "Bal", "Dec", "Fir", "Fla", "Mar", "Pas", "Pos", "Tck"]),
    ("CWBA", "Complete Wing Back Attack", D, &["Acc", "Pac", "Sta", "Wor"], &["Cro", "Dri", "Fla", "OtB", "Tea", "Tec"], &["Agi", "Ant", "Bal", "Dec", "Fir", "Mar", "Pas", "Pos", "Tck"]),
    ("FBD", "Full Back Defend", D, &["Acc", "Pac", "Sta", "Wor"], &["Ant", "Cnt", "Mar", "Pos", "Tck"], &["Cro", "Dec", "Pas", "Tea"]),
    ("FBS", "Full Back Support", D, &["Acc", "Pac", "Sta", "Wor"], &["Ant", "Cnt", "Mar", "Pos", "Tck", "Tea"], &["Cro", "Dec", "Dri", "Pas", "Tec"]),
    ("FBA", "Full Back Attack", D, &["Acc", "Pac", "Sta", "Wor"], &["Ant", "Cro", "Mar", "Pos", "Tck", "Tea"], &["Agi", "Cnt", "Dec", "Dri", "Fir", "OtB", "Pas", "Tec"]),
    ("IFBD", "Inverted Full Back Defend", D, &["Acc", "Pac", "Sta", "Wor"], &["Hea", "Mar", "Pos", "Str", "Tck"], &["Agg", "Agi", "Ant", "Bra", "Cnt", "Cmp", "Dec", "Dri", "Fir", "Jum", "Pas", "Tec"]),
    ("IWBD", "Inverted Wing Back Defend", D, &["Acc", "Pac", "Sta", "Wor"], &["Ant", "Dec", "Pas", "Pos", "Tck", "Tea"], &["Agi", "Cnt", "Cmp", "Fir", "Mar", "OtB", "Tec"]),
    ("IWBS", "Inverted Wing Back Support", D, &["Acc", "Pac", "Sta", "Wor"], &["Cmp", "Dec", "Fir", "Pas", "Tck", "Tea"], &["Agi", "Ant", "Cnt", "Mar", "OtB", "Pos", "Tec", "Vis"]),
    ("IWBA", "Inverted Wing Back Attack", D, &["Acc", "Pac", "Sta", "Wor"], &["Cmp", "Dec", "Fir", "OtB", "Pas", "Tck", "Tea", "Tec", "Vis"], &["Agi", "Ant", "Cnt", "Cro", "Dri", "Fla", "Lon", "Mar", "Pos"]),
    ("LD", "Libero Defend", D, &["Acc", "Cmp", "Jum", "Pac"], &["Dec", "Fir", "Hea", "Mar", "Pas", "Pos", "Str", "Tck", "Tea", "Tec"], &["Ant", "Bra", "Cnt", "Sta"]),
    ("LS", "Libero Support", D, &["Acc", "Cmp", "Jum", "Pac"], &["Dec", "Fir", "Hea", "Mar", "Pas", "Pos", "Str", "Tck", "Tea", "Tec"], &["Ant", "Bra", "Cnt", "Dri", "Sta", "Vis"]),
    ("NCBD", "No-nonsense Centre Back Defend", D, &["Acc", "Cmp", "Jum", "Pac"], &["Hea", "Mar", "Pos", "Str", "Tck"], &["Agg", "Ant", "Bra", "Cnt"]),
    ("NCBS", "No-nonsense Centre Back Support", D, &["Acc", "Cmp", "Jum", "Pac"], &["Agg", "Bra", "Hea", "Pos", "Str", "Tck"], &["Ant", "Cnt", "Mar"]),
    ("NCBC", "No-nonsense Centre Back Cover", D, &["Acc", "Cmp", "Jum", "Pac"], &["Ant", "Cnt", "Mar", "Pos", "Tck"], &["Bra", "Hea", "Str"]),
    ("NFBD", "No-nonsense Full Back Defend", D, &["Acc", "Pac", "Sta", "Wor"], &["Ant", "Mar", "Pos", "Str", "Tck"], &["Agg", "Bra", "Cnt", "Hea", "Tea"]),
    ("WCBD", "Wide Centre Back Defend", D, &["Acc", "Cmp", "Jum", "Pac"], &["Hea", "Mar", "Pos", "Str", "Tck"], &["Agg", "Agi", "Ant", "Bra", "Cnt", "Dec", "Dri", "Fir", "Pas", "Tec", "Wor"]),
    ("WCBS", "Wide Centre Back Support", D, &["Acc", "Cmp", "Jum", "Pac"], &["Dri", "Hea", "Mar", "Pos", "Str", "Tck"], &["Agg", "Agi", "Ant", "Bra", "Cnt", "Cro", "Dec", "Fir", "OtB", "Pas", "Sta", "Tec", "Wor"]),
    ("WCBA", "Wide Centre Back Attack", D, &["Acc", "Cmp", "Jum", "Pac"], &["Cro", "Dri", "Hea", "Mar", "OtB", "Sta", "Str", "Tck"], &["Agg", "Agi", "Ant", "Bra", "Cnt", "Dec", "Fir", "Pas", "Pos", "Tec", "Wor"]),
    ("WBD", "Wing Back Defend", D, &["Acc", "Pac", "Sta", "Wor"], &["Ant", "Mar", "Pos", "Tck", "Tea"], &["Agi", "Bal", "Cnt", "Cro", "Dec", "Dri", "Fir", "OtB", "Pas", "Tec"]),
    ("WBS", "Wing Back Support", D, &["Acc", "Pac", "Sta", "Wor"], &["Cro", "Dri", "Mar", "OtB", "Tck", "Tea"], &["Agi", "Ant", "Bal", "Cnt", "Dec", "Fir", "Pas", "Pos", "Tec"]),
    ("WBA", "Wing Back Attack", D, &["Acc", "Pac", "Sta", "Wor"], &["Cro", "Dri", "OtB", "Tck", "Tea", "Tec"], &["Agi", "Ant", "Bal", "Cnt", "Dec", "Fir", "Fla", "Mar", "Pas", "Pos"]),

    // Midfielders
    ("APS", "Advanced Playmaker Support", M, &["Acc", "Pac", "Sta", "Wor"], &["Cmp", "Dec", "Fir", "OtB", "Pas", "Tea", "Tec", "Vis"], &["Agi", "Ant", "Dri", "Fla"]),
    ("APA", "Advanced Playmaker Attack", M, &["Acc", "Pac", "Sta", "Wor"], &["Cmp", "Dec", "Fir", "OtB", "Pas", "Tea", "Tec", "Vis"], &["Agi", "Ant", "Dri", "Fla"]),
    ("AD", "Anchor Defend", M, &["Acc", "Pac", "Sta", "Wor"], &["Ant", "Cnt", "Dec", "Mar", "Pos", "Tck"], &["Cmp", "Str", "Tea"]),
    ("AMS", "Attacking Midfielder Support", M, &["Acc", "Pac", "Sta", "Wor"], &["Ant", "Dec", "Fir", "Fla", "Lon", "OtB", "Pas", "Tec"], &["Agi", "Cmp", "Dri", "Vis"]),
    ("AMA", "Attacking Midfielder Attack", M, &["Acc", "Pac", "Sta", "Wor"], &["Ant", "Dec", "Dri", "Fir", "Fla", "Lon", "OtB", "Pas", "Tec"], &["Agi", "Cmp", "Fin", "Vis"]),
    ("BWMD", "Ball Winning Midfielder Defend", M, &["Acc", "Pac", "Sta", "Wor"], &["Agg", "Ant", "Tck", "Tea"], &["Agi", "Bra", "Cnt", "Mar", "Pos", "Str"]),
    ("BWMS", "Ball Winning Midfielder Support", M, &["Acc", "Pac", "Sta", "Wor"], &["Agg", "Ant", "Tck", "Tea"], &["Agi", "Bra", "Cnt", "Mar", "Pas", "Str"]),
    ("B2BS", "Box to Box Midfielder Support", M, &["Acc", "Pac", "Sta", "Wor"], &["OtB", "Pas", "Tck", "Tea"], &["Agg", "Ant", "Bal", "Cmp", "Dec", "Dri", "Fin", "Fir", "Lon", "Pos", "Str", "Tec"]),
    ("CARS", "Carrilero Support", M, &["Acc", "Pac", "Sta", "Wor"], &["Dec", "Fir", "Pas", "Pos", "Tck", "Tea"], &["Ant", "Cnt", "Cmp", "OtB", "Tec", "Vis"]),
    ("CMD", "Central Midfielder Defend", M, &["Acc", "Pac", "Sta", "Wor"], &["Cnt", "Dec", "Pos", "Tck", "Tea"], &["Agg", "Ant", "Cmp", "Fir", "Mar", "Pas", "Tec"]),
    ("CMS", "Central Midfielder Support", M, &["Acc", "Pac", "Sta", "Wor"], &["Dec", "Fir", "Pas", "Tck", "Tea"], &["Ant", "Cnt", "Cmp", "OtB", "Tec", "Vis"]),
    ("CMA", "Central Midfielder Attack", M, &["Acc", "Pac", "Sta", "Wor"], &["Dec", "Fir", "OtB", "Pas"], &["Ant", "Cmp", "Lon", "Tck", "Tea", "Tec", "Vis"]),
    ("DLPD", "Deep Lying Playmaker Defend", M, &["Acc", "Pac", "Sta", "Wor"], &["Cmp", "Dec", "Fir", "Pas", "Tea", "Tec", "Vis"], &["Ant", "Bal", "Pos", "Tck"]),
    ("DLPS", "Deep Lying Playmaker Support", M, &["Acc", "Pac", "Sta", "Wor"], &["Cmp", "Dec", "Fir", "Pas", "Tea", "Tec", "Vis"], &["Ant", "Bal", "OtB", "Pos"]),
    ("DMD", "Defensive Midfielder Defend", M, &["Acc", "Pac", "Sta", "Wor"], &["Ant", "Cnt", "Pos", "Tck", "Tea"], &["Agg", "Cmp", "Dec", "Mar", "Pas"]),
    ("DMS", "Defensive Midfielder Support", M, &["Acc", "Pac", "Sta", "Wor"], &["Ant", "Cnt", "Pos", "Tck", "Tea"], &["Agg", "Cmp", "Dec", "Fir", "Mar", "Pas", "Str"]),
    ("DWD", "Defensive Winger Defend", M, &["Acc", "Pac", "Sta", "Wor"], &["Ant", "OtB", "Pos", "Tea", "Tec"], &["Agg", "Cnt", "Cro", "Dec", "Dri", "Fir", "Mar", "Tck"]),
    ("DWS", "Defensive Winger Support", M, &["Acc", "Pac", "Sta", "Wor"], &["Cro", "OtB", "Tea", "Tec"], &["Agg", "Ant", "Cnt", "Cmp", "Dec", "Dri", "Fir", "Mar", "Pas", "Pos", "Tck"]),
    ("ENGS", "Enganche Support", M, &["Acc", "Pac", "Sta", "Wor"], &["Cmp", "Dec", "Fir", "Pas", "Tec", "Vis"], &["Agi", "Ant", "Dri", "Fla", "OtB", "Tea"]),
    ("HBD", "Half Back Defend", M, &["Acc", "Pac", "Sta", "Wor"], &["Ant", "Cnt", "Cmp", "Dec", "Mar", "Pos", "Tck", "Tea"], &["Agg", "Bra", "Fir", "Jum", "Pas", "Str"]),
    ("IFS", "Inside Forward Support", M, &["Acc", "Pac", "Sta", "Wor"], &["Agi", "Dri", "Fin", "Fir", "OtB", "Tec"], &["Ant", "Bal", "Cmp", "Fla", "Lon", "Pas", "Vis"]),
    ("IFA", "Inside Forward Attack", M, &["Acc", "Pac", "Sta", "Wor"], &["Agi", "Ant", "Dri", "Fin", "Fir", "OtB", "Tec"], &["Bal", "Cmp", "Fla", "Lon", "Pas"]),
    ("IWS", "Inverted Winger Support", M, &["Acc", "Pac", "Sta", "Wor"], &["Agi", "Cro", "Dri", "Pas", "Tec"], &["Bal", "Cmp", "Dec", "Fir", "Lon", "OtB", "Vis"]),
    ("IWA", "Inverted Winger Attack", M, &["Acc", "Pac", "Sta", "Wor"], &["Agi", "Cro", "Dri", "Pas", "Tec"], &["Ant", "Bal", "Cmp", "Dec", "Fir", "Fla", "Lon", "OtB", "Vis"]),
    ("MEZS", "Mezzala Support", M, &["Acc", "Pac", "Sta", "Wor"], &["Dec", "OtB", "Pas", "Tec"], &["Ant", "Bal", "Cmp", "Dri", "Fir", "Lon", "Tck", "Vis"]),
    ("MEZA", "Mezzala Attack", M, &["Acc", "Pac", "Sta", "Wor"], &["Dec", "Dri", "OtB", "Pas", "Tec", "Vis"], &["Ant", "Bal", "Cmp", "Fin", "Fir", "Fla", "Lon"]),
    ("RAUA", "Raumdeuter Attack", M, &["Acc", "Pac", "Sta", "Wor"], &["Ant", "Bal", "Cnt", "Cmp", "Dec", "Fin", "OtB"], &["Fir", "Tec"]),
    ("REGS", "Regista Support", M, &["Acc", "Pac", "Sta", "Wor"], &["Cmp", "Dec", "Fir", "Fla", "OtB", "Pas", "Tea", "Tec", "Vis"], &["Ant", "Bal", "Dri", "Lon"]),
    ("RPS", "Roaming Playmaker Support", M, &["Acc", "Pac", "Sta", "Wor"], &["Ant", "Cmp", "Dec", "Fir", "OtB", "Pas", "Tea", "Tec", "Vis"], &["Agi", "Bal", "Cnt", "Dri", "Lon", "Pos"]),
    ("SVS", "Segundo Volante Support", M, &["Acc", "Pac", "Sta", "Wor"], &["Mar", "OtB", "Pas", "Pos", "Tck"], &["Ant", "Bal", "Cnt", "Cmp", "Dec", "Fin", "Fir", "Lon", "Str"]),
    ("SVA", "Segundo Volante Attack", M, &["Acc", "Pac", "Sta", "Wor"], &["Ant", "Fin", "Lon", "OtB", "Pas", "Pos", "Tck"], &["Bal", "Cnt", "Cmp", "Dec", "Fir", "Mar"]),
    ("SSA", "Shadow Striker Attack", M, &["Acc", "Pac", "Sta", "Wor"], &["Ant", "Cmp", "Dri", "Fin", "Fir", "OtB"], &["Agi", "Bal", "Cnt", "Dec", "Pas", "Tec"]),
    ("WMD", "Wide Midfielder Defend", M, &["Acc", "Pac", "Sta", "Wor"], &["Cnt", "Dec", "Pas", "Pos", "Tck", "Tea"], &["Ant", "Cmp", "Cro", "Fir", "Mar", "Tec"]),
    ("WMS", "Wide Midfielder Support", M, &["Acc", "Pac", "Sta", "Wor"], &["Dec", "Pas", "Tck", "Tea"], &["Ant", "Cnt", "Cmp", "Cro", "Fir", "OtB", "Pos", "Tec", "Vis"]),
    ("WMA", "Wide Midfielder Attack", M, &["Acc", "Pac", "Sta", "Wor"], &["Cro", "Dec", "Fir", "Pas", "Tea"], &["Ant", "Cmp", "OtB", "Tck", "Tec", "Vis"]),
    ("WPS", "Wide Playmaker Support", M, &["Acc", "Pac", "Sta", "Wor"], &["Cmp", "Dec", "Fir", "Pas", "Tea", "Tec", "Vis"], &["Agi", "Dri", "OtB"]),
    ("WPA", "Wide Playmaker Attack", M, &["Acc", "Pac", "Sta", "Wor"], &["Cmp", "Dec", "Dri", "Fir", "OtB", "Pas", "Tea", "Tec", "Vis"], &["Agi", "Ant", "Fla"]),
    ("WTFS", "Wide Target Forward Support", M, &["Acc", "Pac", "Sta", "Wor"], &["Bra", "Hea", "Jum", "Str", "Tea"], &["Ant", "Bal", "Cro", "Fir", "OtB"]),
    ("WTFA", "Wide Target Forward Attack", M, &["Acc", "Pac", "Sta", "Wor"], &["Bra", "Hea", "Jum", "OtB", "Str"], &["Ant", "Bal", "Cro", "Fin", "Fir", "Tea"]),
    ("WS", "Winger Support", M, &["Acc", "Pac", "Sta", "Wor"], &["Agi", "Cro", "Dri", "Tec"], &["Bal", "Fir", "OtB", "Pas"]),
    ("WA", "Winger Attack", M, &["Acc", "Pac", "Sta", "Wor"], &["Agi", "Cro", "Dri", "Tec"], &["Ant", "Bal", "Fir", "Fla", "OtB", "Pas"]),

    // Forwards
    ("AFA", "Advanced Forward Attack", F, &["Acc", "Fin", "Pac"], &["Cmp", "Dri", "Fir", "OtB", "Tec"], &["Agi", "Ant", "Bal", "Dec", "Pas", "Sta", "Wor"]),
    ("CFS", "Complete Forward Support", F, &["Acc", "Fin", "Pac"], &["Agi", "Ant", "Cmp", "Dec", "Dri", "Fir", "Hea", "Lon", "OtB", "Pas", "Str", "Tec", "Vis"], &["Bal", "Jum", "Sta", "Tea", "Wor"]),
    ("CFA", "Complete Forward Attack", F, &["Acc", "Fin", "Pac"], &["Agi", "Ant", "Cmp", "Dri", "Fir", "Hea", "OtB", "Str", "Tec"], &["Bal", "Dec", "Jum", "Lon", "Pas", "Sta", "Tea", "Vis", "Wor"]),
    ("DLFS", "Deep Lying Forward Support", F, &["Acc", "Fin", "Pac"], &["Cmp", "Dec", "Fir", "OtB", "Pas", "Tea", "Tec"], &["Ant", "Bal", "Fla", "Str", "Vis"]),
    ("DLFA", "Deep Lying Forward Attack", F, &["Acc", "Fin", "Pac"], &["Cmp", "Dec", "Fir", "OtB", "Pas", "Tea", "Tec"], &["Ant", "Bal", "Dri", "Fla", "Str", "Vis"]),
    ("F9S", "False Nine Support", F, &["Acc", "Fin", "Pac"], &["Agi", "Cmp", "Dec", "Dri", "Fir", "OtB", "Pas", "Tec", "Vis"], &["Ant", "Bal", "Fla", "Tea"]),
    ("PA", "Poacher Attack", F, &["Acc", "Fin", "Pac"], &["Ant", "Cmp", "OtB"], &["Dec", "Fir", "Hea", "Tec"]),
    ("PFD", "Pressing Forward Defend", F, &["Acc", "Fin", "Pac"], &["Agg", "Ant", "Bra", "Dec", "Sta", "Tea", "Wor"], &["Agi", "Bal", "Cnt", "Cmp", "Fir", "Str"]),
    ("PFS", "Pressing Forward Support", F, &["Acc", "Fin", "Pac"], &["Agg", "Ant", "Bra", "Dec", "Sta", "Tea", "Wor"], &["Agi", "Bal", "Cnt", "Cmp", "Fir", "OtB", "Pas", "Str"]),
    ("PFA", "Pressing Forward Attack", F, &["Acc", "Fin", "Pac"], &["Agg", "Ant", "Bra", "OtB", "Sta", "Tea", "Wor"], &["Agi", "Bal", "Cnt", "Cmp", "Dec", "Fir", "Str"]),
    ("TFS", "Target Forward Support", F, &["Acc", "Fin", "Pac"], &["Bal", "Bra", "Hea", "Jum", "Str", "Tea"], &["Agg", "Ant", "Cmp", "Dec", "Fir", "OtB"]),
    ("TFA", "Target Forward Attack", F, &["Acc", "Fin", "Pac"], &["Bal", "Bra", "Cmp", "Hea", "Jum", "OtB", "Str"], &["Agg", "Ant", "Dec", "Fir", "Tea"]),
    ("TREA", "Trequartista Attack", F, &["Acc", "Fin", "Pac"], &["Cmp", "Dec", "Dri", "Fir", "Fla", "OtB", "Pas", "Tec", "Vis"], &["Agi", "Ant", "Bal"]),
];
