//! Age-bracket stages shared by every domain

use serde::Serialize;

/// Number of stages every domain defines
pub const STAGE_COUNT: usize = 3;

/// Age bracket bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Stage {
    #[serde(rename = "Stage 0–1 (2–4 yrs)")]
    Early,
    #[serde(rename = "Stage 2–3 (4–5 yrs)")]
    Middle,
    #[serde(rename = "Stage 4+ (5+ yrs)")]
    Late,
}

impl Stage {
    /// Every stage, in column order
    pub const ALL: [Stage; STAGE_COUNT] = [Stage::Early, Stage::Middle, Stage::Late];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Early => "Stage 0–1 (2–4 yrs)",
            Stage::Middle => "Stage 2–3 (4–5 yrs)",
            Stage::Late => "Stage 4+ (5+ yrs)",
        }
    }

    /// Short ASCII key accepted on the command line and in config files
    pub fn key(&self) -> &'static str {
        match self {
            Stage::Early => "0-1",
            Stage::Middle => "2-3",
            Stage::Late => "4+",
        }
    }

    /// Column index into a domain's stage table
    pub fn index(&self) -> usize {
        match self {
            Stage::Early => 0,
            Stage::Middle => 1,
            Stage::Late => 2,
        }
    }

    /// Look up a stage by short key or full label
    pub fn parse(value: &str) -> Option<Stage> {
        let value = value.trim();
        Stage::ALL
            .into_iter()
            .find(|stage| stage.key() == value || stage.label() == value)
    }
}
