//! Activity roles
//!
//! A role classifies what an activity is for inside a quest (the grind that
//! builds a skill, the reward after it, and so on). The set of roles is closed.

use serde::Serialize;

/// Classification of an activity's purpose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Role {
    #[serde(rename = "UL")]
    Unlocker,
    #[serde(rename = "GR")]
    Grind,
    #[serde(rename = "SU")]
    Support,
    #[serde(rename = "RW")]
    Reward,
    #[serde(rename = "CH")]
    Challenge,
    #[serde(rename = "CD")]
    CoolDown,
}

impl Role {
    /// Every role, in filter display order
    pub const ALL: [Role; 6] = [
        Role::Unlocker,
        Role::Grind,
        Role::Support,
        Role::Reward,
        Role::Challenge,
        Role::CoolDown,
    ];

    /// Two-letter code shown on activity chips
    pub fn code(&self) -> &'static str {
        match self {
            Role::Unlocker => "UL",
            Role::Grind => "GR",
            Role::Support => "SU",
            Role::Reward => "RW",
            Role::Challenge => "CH",
            Role::CoolDown => "CD",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Role::Unlocker => "Unlocker",
            Role::Grind => "Grind",
            Role::Support => "Support",
            Role::Reward => "Reward",
            Role::Challenge => "Challenge",
            Role::CoolDown => "Cool-down",
        }
    }

    /// Look up a role by code or display name, ignoring case
    pub fn parse(value: &str) -> Option<Role> {
        let value = value.trim();
        Role::ALL.into_iter().find(|role| {
            role.code().eq_ignore_ascii_case(value) || role.name().eq_ignore_ascii_case(value)
        })
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} — {}", self.code(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_codes_are_unique() {
        let mut codes: Vec<&str> = Role::ALL.iter().map(|r| r.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), Role::ALL.len());
    }

    #[test]
    fn test_role_parse_by_code() {
        assert_eq!(Role::parse("GR"), Some(Role::Grind));
        assert_eq!(Role::parse("su"), Some(Role::Support));
    }

    #[test]
    fn test_role_parse_by_name() {
        assert_eq!(Role::parse("Cool-down"), Some(Role::CoolDown));
        assert_eq!(Role::parse(" unlocker "), Some(Role::Unlocker));
    }

    #[test]
    fn test_role_parse_unknown() {
        assert_eq!(Role::parse("XX"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Reward.to_string(), "RW — Reward");
    }

    #[test]
    fn test_role_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Role::Challenge).unwrap(), "\"CH\"");
    }
}
