//! The built-in quest curriculum
//!
//! Six domains, each with activities for all three stages, and the three
//! quest patterns that can be highlighted. Everything here is static data;
//! `Dataset::validate` checks the string-keyed references once at startup.

use std::collections::HashSet;

use crate::error::DatasetError;
use crate::models::{Activity, Domain, Pattern, Role};
use crate::models::role::Role::{
    Challenge as CH, CoolDown as CD, Grind as GR, Reward as RW, Support as SU, Unlocker as UL,
};

const fn act(name: &'static str, role: Role) -> Activity {
    Activity { name, role }
}

/// Domains in declaration order
pub static DOMAINS: [Domain; 6] = [
    Domain {
        key: "red",
        label: "Language & Literacy",
        initials: "R",
        stages: [
            &[act("Vocabulary", GR), act("Storytime", UL)],
            &[act("Echo Reading", GR), act("Word Building", GR)],
            &[act("Story Builder", RW), act("Writing Prompts", CH)],
        ],
    },
    Domain {
        key: "blue",
        label: "Exploration & Science",
        initials: "B",
        stages: [
            &[act("Identify Colors", GR), act("Animals", GR)],
            &[act("Scavenger Hunts", GR), act("Object Naming", GR)],
            &[act("Science Magnifier", GR), act("Explore Camera", GR)],
        ],
    },
    Domain {
        key: "green",
        label: "Logic & Critical Thinking",
        initials: "G",
        stages: [
            &[act("Sorting", GR), act("Counting", GR)],
            &[act("Puzzles", GR), act("Pattern Recognition", GR)],
            &[act("Problem Solving", CH), act("Critical Thinking Prompts", CH)],
        ],
    },
    Domain {
        key: "yellow",
        label: "Physical / Motor Skills",
        initials: "Y",
        stages: [
            &[act("Tap to Respond", GR), act("Gesture Mimicry", CD)],
            &[act("Drag & Drop", GR), act("Drawing Shapes", CD)],
            &[act("Movement Challenges", CH), act("Real-world Coordination", CH)],
        ],
    },
    Domain {
        key: "purple",
        label: "Creativity & Imagination",
        initials: "P",
        stages: [
            &[act("Simple Art Prompts", RW), act("Singing", RW)],
            &[act("Creative Play", RW), act("Simple Story Builder", RW)],
            &[act("Open Inquiry", RW), act("Project Mode", RW)],
        ],
    },
    Domain {
        key: "orange",
        label: "Social & Emotional Learning",
        initials: "H",
        stages: [
            &[act("Emotions Recognition", SU)],
            &[act("Empathy Games", SU), act("Perspective-taking", SU)],
            &[act("Conflict Resolution", SU), act("Social Scenarios", SU)],
        ],
    },
];

/// Quest patterns; the first one is selected on start
pub static PATTERNS: [Pattern; 3] = [
    Pattern {
        id: "R-Y-G-P",
        steps: &["red", "yellow", "green", "purple"],
        label: &["R", "Y", "G", "P"],
    },
    Pattern {
        id: "Y-Y-G-H-P",
        steps: &["yellow", "yellow", "green", "orange", "purple"],
        label: &["Y", "Y", "G", "H", "P"],
    },
    Pattern {
        id: "R-Y-H-Y-G-P",
        steps: &["red", "yellow", "orange", "yellow", "green", "purple"],
        label: &["R", "Y", "H", "Y", "G", "P"],
    },
];

/// A domain table together with the patterns that walk it
#[derive(Debug, Clone, Copy)]
pub struct Dataset {
    pub domains: &'static [Domain],
    pub patterns: &'static [Pattern],
}

static BUILTIN: Dataset = Dataset {
    domains: &DOMAINS,
    patterns: &PATTERNS,
};

impl Dataset {
    /// The compiled-in curriculum
    pub fn builtin() -> &'static Dataset {
        &BUILTIN
    }

    /// Find a domain by key
    pub fn domain(&self, key: &str) -> Option<&'static Domain> {
        self.domains.iter().find(|d| d.key == key)
    }

    /// Find a pattern by id
    pub fn pattern(&self, id: &str) -> Option<&'static Pattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    /// Pattern selected when no other choice was made
    pub fn default_pattern(&self) -> Option<&'static Pattern> {
        self.patterns.first()
    }

    /// Check the references that the type system cannot.
    ///
    /// Roles and stages are closed enums, so what remains are the string keys:
    /// domain keys and pattern ids must be unique, every pattern step must name
    /// a declared domain and carry exactly one label token.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.domains.is_empty() {
            return Err(DatasetError::NoDomains);
        }
        if self.patterns.is_empty() {
            return Err(DatasetError::NoPatterns);
        }

        let mut keys = HashSet::new();
        for domain in self.domains {
            if !keys.insert(domain.key) {
                return Err(DatasetError::DuplicateDomainKey(domain.key));
            }
        }

        let mut ids = HashSet::new();
        for pattern in self.patterns {
            if !ids.insert(pattern.id) {
                return Err(DatasetError::DuplicatePatternId(pattern.id));
            }
            if pattern.steps.len() != pattern.label.len() {
                return Err(DatasetError::LabelMismatch {
                    pattern: pattern.id,
                    steps: pattern.steps.len(),
                    labels: pattern.label.len(),
                });
            }
            if let Some(&key) = pattern.steps.iter().find(|key| !keys.contains(*key)) {
                return Err(DatasetError::UnknownDomainInPattern {
                    pattern: pattern.id,
                    key,
                });
            }
        }

        Ok(())
    }
}
