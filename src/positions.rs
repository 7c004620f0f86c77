//! Position notation normalization and slot eligibility
//!
//! Exports write positions as "D (RLC), M/AM (R)", "AM L", "GK" and so on. All of
//! them are reduced to canonical tokens made of a base and an optional side letter
//! ("DC", "DR", "AMR", "GK"), which are then matched against formation slot
//! requirements written in the same notation.

use crate::roles::RoleGroup;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

/// Bases that may carry a trailing side letter
const KNOWN_BASES: &[&str] = &[
    "GK", "D", "WB", "DM", "M", "AM", "ST", "F", "CB", "CF", "CM", "LB", "RB", "LWB", "RWB",
];

/// Requirement base -> player bases it accepts
const COMPATIBLE_BASES: &[(&str, &[&str])] = &[
    ("D", &["D", "WB", "CB", "LB", "RB", "LWB", "RWB"]),
    ("M", &["M", "AM", "CM", "DM"]),
    ("ST", &["ST", "CF", "F"]),
];

const SIDES: &[char] = &['L', 'R', 'C'];

lazy_static! {
    // "D/WB (R)", "D (RLC)"
    static ref PAREN_SIDES_RE: Regex = Regex::new(r"^([A-Z/ ]+?)\s*\(([A-Z ]+)\)$").unwrap();
    // "AM L", "D/WB R", "ST C"
    static ref TRAILING_SIDES_RE: Regex = Regex::new(r"^([A-Z/]+)\s+([LRC]+)$").unwrap();
}

/// A canonical token split into base and side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionToken {
    pub base: String,
    pub side: Option<char>,
}

impl std::fmt::Display for PositionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.side {
            Some(side) => write!(f, "{}{}", self.base, side),
            None => write!(f, "{}", self.base),
        }
    }
}

/// Split a canonical token into base and side.
///
/// A trailing L/R/C is only treated as a side when the rest is a known base, so
/// "DC" is D + C while "CB" stays a base of its own.
pub fn parse_token(token: &str) -> PositionToken {
    let token = token.trim().to_uppercase();
    if let Some(last) = token.chars().last() {
        if token.len() > 1 && SIDES.contains(&last) {
            let base = &token[..token.len() - 1];
            if KNOWN_BASES.contains(&base) {
                return PositionToken {
                    base: base.to_string(),
                    side: Some(last),
                };
            }
        }
    }
    PositionToken {
        base: token,
        side: None,
    }
}

/// Free-text positions -> canonical token set. Unreadable entries contribute nothing.
pub fn normalize(position_text: &str) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    for entry in position_text.split(',') {
        let entry = entry.trim().to_uppercase();
        if entry.is_empty() {
            continue;
        }

        let (bases, sides) = if let Some(caps) = PAREN_SIDES_RE.captures(&entry) {
            (split_bases(&caps[1]), side_letters(&caps[2]))
        } else if let Some(caps) = TRAILING_SIDES_RE.captures(&entry) {
            (split_bases(&caps[1]), side_letters(&caps[2]))
        } else {
            let bare: String = entry.chars().filter(|c| *c != '(' && *c != ')').collect();
            (split_bases(&bare), Vec::new())
        };

        for base in &bases {
            if sides.is_empty() {
                tokens.insert(base.clone());
            } else {
                for side in &sides {
                    tokens.insert(format!("{}{}", base, side));
                }
            }
        }
    }
    tokens
}

fn split_bases(text: &str) -> Vec<String> {
    text.split('/')
        .map(|b| b.chars().filter(|c| c.is_ascii_alphanumeric()).collect::<String>())
        .filter(|b| !b.is_empty())
        .collect()
}

fn side_letters(text: &str) -> Vec<char> {
    let mut sides = Vec::new();
    for c in text.chars() {
        if SIDES.contains(&c) && !sides.contains(&c) {
            sides.push(c);
        }
    }
    sides
}

/// Can a player holding `player` fill a slot asking for `requirement`?
///
/// Rules, first match wins:
/// 1. identical tokens
/// 2. same base, and the requirement has no side or the same side
/// 3. the requirement base accepts the player base and the sides do not conflict
/// 4. one token is the other plus a single side letter
///
/// Rule 3 is narrower than a lookup of bases alone: when both tokens carry a
/// side they must match, so a `WBL` player never fills a `DR` slot.
pub fn is_compatible(requirement: &str, player: &str) -> bool {
    let requirement = requirement.trim().to_uppercase();
    let player = player.trim().to_uppercase();
    if requirement.is_empty() || player.is_empty() {
        return false;
    }
    if requirement == player {
        return true;
    }

    let req = parse_token(&requirement);
    let have = parse_token(&player);

    if req.base == have.base && (req.side.is_none() || req.side == have.side) {
        return true;
    }

    let sides_agree = match (req.side, have.side) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    };
    if sides_agree {
        let accepted = COMPATIBLE_BASES
            .iter()
            .find(|(base, _)| *base == req.base)
            .map(|(_, accepts)| accepts.contains(&have.base.as_str()))
            .unwrap_or(false);
        if accepted {
            return true;
        }
    }

    is_side_suffix(&requirement, &player) || is_side_suffix(&player, &requirement)
}

fn is_side_suffix(longer: &str, shorter: &str) -> bool {
    longer.len() == shorter.len() + 1
        && longer.starts_with(shorter)
        && longer.chars().last().map(|c| SIDES.contains(&c)).unwrap_or(false)
}

/// Any requirement token compatible with any player token
pub fn is_eligible(requirement: &BTreeSet<String>, player: &BTreeSet<String>) -> bool {
    requirement
        .iter()
        .any(|req| player.iter().any(|have| is_compatible(req, have)))
}

/// Group of a single canonical token
pub fn position_group(token: &str) -> Option<RoleGroup> {
    match parse_token(token).base.as_str() {
        "GK" => Some(RoleGroup::Goalkeeper),
        "D" | "CB" | "LB" | "RB" | "WB" | "LWB" | "RWB" | "SW" => Some(RoleGroup::Defender),
        "DM" | "M" | "CM" | "AM" | "WM" => Some(RoleGroup::Midfielder),
        "ST" | "F" | "CF" => Some(RoleGroup::Forward),
        _ => None,
    }
}

pub fn player_groups(tokens: &BTreeSet<String>) -> BTreeSet<RoleGroup> {
    tokens.iter().filter_map(|t| position_group(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_side_group_expands() {
        assert_eq!(normalize("D (RLC)"), set(&["DL", "DR", "DC"]));
    }

    #[test]
    fn test_slash_alternatives_with_side() {
        let tokens = normalize("D/WB (R)");
        assert!(tokens.contains("DR"));
        assert!(tokens.contains("WBR"));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_mixed_entries() {
        assert_eq!(
            normalize("D (RLC), M/AM (R)"),
            set(&["DL", "DR", "DC", "MR", "AMR"])
        );
        assert_eq!(normalize("GK"), set(&["GK"]));
        assert_eq!(normalize(" dm , st (c)"), set(&["DM", "STC"]));
    }

    #[test]
    fn test_trailing_side_shorthand() {
        assert_eq!(normalize("AM L"), set(&["AML"]));
        assert_eq!(normalize("D R"), set(&["DR"]));
        assert_eq!(normalize("D/WB RL"), set(&["DR", "DL", "WBR", "WBL"]));
    }

    #[test]
    fn test_unreadable_input() {
        assert!(normalize("").is_empty());
        assert!(normalize(" , ,").is_empty());
        assert_eq!(normalize("D (XYZ)"), set(&["D"]));
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(parse_token("DC"), PositionToken { base: "D".into(), side: Some('C') });
        assert_eq!(parse_token("WBR"), PositionToken { base: "WB".into(), side: Some('R') });
        assert_eq!(parse_token("CB"), PositionToken { base: "CB".into(), side: None });
        assert_eq!(parse_token("GK"), PositionToken { base: "GK".into(), side: None });
        assert_eq!(parse_token("AMC").to_string(), "AMC");
    }

    #[test]
    fn test_compatibility_rules() {
        // exact
        assert!(is_compatible("GK", "GK"));
        // same base, side rules
        assert!(is_compatible("D", "DL"));
        assert!(is_compatible("DC", "DC"));
        assert!(!is_compatible("DR", "DL"));
        // table
        assert!(is_compatible("DR", "WBR"));
        assert!(is_compatible("D", "CB"));
        assert!(is_compatible("MC", "DMC"));
        assert!(is_compatible("STC", "CF"));
        assert!(!is_compatible("DR", "WBL"));
        assert!(!is_compatible("ST", "AMC"));
        // suffix
        assert!(is_compatible("SW", "SWC"));
        // nothing
        assert!(!is_compatible("GK", "DC"));
        assert!(!is_compatible("", "DC"));
    }

    #[test]
    fn test_compatible_base_keeps_side() {
        assert!(is_compatible("DL", "WBL"));
        assert!(!is_compatible("DL", "WBR"));
        assert!(!is_compatible("ML", "AMR"));
        // side-less on either end still matches the table
        assert!(is_compatible("D", "WBL"));
        assert!(is_compatible("DR", "WB"));
    }

    #[test]
    fn test_eligibility() {
        let player = normalize("D (RLC), M/AM (R)");
        assert!(is_eligible(&normalize("D L"), &player));
        assert!(is_eligible(&normalize("AM R"), &player));
        assert!(!is_eligible(&normalize("GK"), &player));
        assert!(!is_eligible(&normalize("ST C"), &player));
        assert!(!is_eligible(&BTreeSet::new(), &player));
    }

    #[test]
    fn test_groups() {
        assert_eq!(position_group("GK"), Some(RoleGroup::Goalkeeper));
        assert_eq!(position_group("WBL"), Some(RoleGroup::Defender));
        assert_eq!(position_group("DMC"), Some(RoleGroup::Midfielder));
        assert_eq!(position_group("STC"), Some(RoleGroup::Forward));
        assert_eq!(position_group("XYZ"), None);
        let groups = player_groups(&normalize("D (C), DM"));
        assert_eq!(
            groups.into_iter().collect::<Vec<_>>(),
            vec![RoleGroup::Defender, RoleGroup::Midfielder]
        );
    }
}
