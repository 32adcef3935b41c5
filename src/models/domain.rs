//! Curriculum data structures
//!
//! Domains, their per-stage activities and the quest patterns that walk
//! across domains. All of it is `'static` data declared in `crate::dataset`.

use serde::Serialize;

use super::role::Role;
use super::stage::{STAGE_COUNT, Stage};

/// A single named quest inside one domain and stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub name: &'static str,
    pub role: Role,
}

/// Top-level curriculum category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    /// Color/identity key, referenced by pattern steps
    pub key: &'static str,
    pub label: &'static str,
    pub initials: &'static str,
    /// Activities per stage, indexed by `Stage::index`
    pub stages: [&'static [Activity]; STAGE_COUNT],
}

impl Domain {
    /// Activities declared for `stage`, in declaration order
    pub fn activities(&self, stage: Stage) -> &'static [Activity] {
        self.stages[stage.index()]
    }

    /// Iterate `(stage, activities)` in column order
    pub fn stage_entries(&self) -> impl Iterator<Item = (Stage, &'static [Activity])> + '_ {
        Stage::ALL.into_iter().map(|stage| (stage, self.activities(stage)))
    }
}

/// Named ordered walk across domains ("quest path")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub id: &'static str,
    /// Domain keys, one per step; a key may repeat
    pub steps: &'static [&'static str],
    /// Short display token per step
    pub label: &'static [&'static str],
}

impl Pattern {
    /// Display label with steps joined by ` > `
    pub fn display_label(&self) -> String {
        self.label.join(" > ")
    }
}
