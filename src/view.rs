//! Derived view of the quest grid
//!
//! Given the dataset and a `FilterState`, compute what is on screen: domains
//! reordered so the highlighted pattern comes first, a step annotation per
//! domain, and per stage the activities whose role is enabled. Nothing here
//! removes a domain or a stage column; filtering only dims or drops chips.

use std::fmt;

use im::OrdSet;
use serde::{Serialize, Serializer};

use crate::dataset::Dataset;
use crate::filter::FilterState;
use crate::models::{Activity, Domain, Role, Stage};

/// Order domains for display.
///
/// Domains whose key occurs in `steps` come first, by the index of their first
/// occurrence; the rest follow in declaration order.
pub fn order_domains<'a>(domains: &'a [Domain], steps: &[&str]) -> Vec<&'a Domain> {
    let first_index = |domain: &Domain| steps.iter().position(|key| *key == domain.key);

    let (mut in_pattern, others): (Vec<&Domain>, Vec<&Domain>) =
        domains.iter().partition(|d| first_index(*d).is_some());
    in_pattern.sort_by_key(|d| first_index(*d));
    in_pattern.extend(others);
    in_pattern
}

/// Zero-based indices of every occurrence of `key` in `steps`
pub fn step_indices(key: &str, steps: &[&str]) -> Vec<usize> {
    steps
        .iter()
        .enumerate()
        .filter(|(_, step)| **step == key)
        .map(|(i, _)| i)
        .collect()
}

/// Where a domain sits in the highlighted pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAnnotation {
    NotInPattern,
    /// 1-indexed step number
    Step(usize),
    /// 1-indexed step numbers, ascending
    Steps(Vec<usize>),
}

impl StepAnnotation {
    /// Annotate `key` against `steps`
    pub fn for_key(key: &str, steps: &[&str]) -> Self {
        let numbers: Vec<usize> = step_indices(key, steps).into_iter().map(|i| i + 1).collect();
        match numbers.as_slice() {
            [] => StepAnnotation::NotInPattern,
            [single] => StepAnnotation::Step(*single),
            _ => StepAnnotation::Steps(numbers),
        }
    }

    pub fn in_pattern(&self) -> bool {
        !matches!(self, StepAnnotation::NotInPattern)
    }

    /// 1-indexed step numbers; empty when not in the pattern
    pub fn step_numbers(&self) -> Vec<usize> {
        match self {
            StepAnnotation::NotInPattern => Vec::new(),
            StepAnnotation::Step(n) => vec![*n],
            StepAnnotation::Steps(ns) => ns.clone(),
        }
    }
}

impl fmt::Display for StepAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepAnnotation::NotInPattern => write!(f, "Not in selected pattern"),
            StepAnnotation::Step(n) => write!(f, "Step {n}"),
            StepAnnotation::Steps(ns) => {
                let joined: Vec<String> = ns.iter().map(|n| n.to_string()).collect();
                write!(f, "Steps {}", joined.join(", "))
            }
        }
    }
}

impl Serialize for StepAnnotation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Activities of one stage whose role is enabled, in declaration order
pub fn visible_activities(
    activities: &'static [Activity],
    roles: &OrdSet<Role>,
) -> Vec<&'static Activity> {
    activities.iter().filter(|a| roles.contains(&a.role)).collect()
}

/// One stage column of a domain card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageView {
    pub stage: Stage,
    /// `false` renders the column de-emphasized
    pub enabled: bool,
    pub activities: Vec<&'static Activity>,
}

/// One domain card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainView {
    pub key: &'static str,
    pub label: &'static str,
    pub initials: &'static str,
    pub annotation: StepAnnotation,
    pub in_pattern: bool,
    pub steps: Vec<usize>,
    pub stages: Vec<StageView>,
}

impl DomainView {
    fn build(domain: &'static Domain, steps: &[&str], filter: &FilterState) -> Self {
        let annotation = StepAnnotation::for_key(domain.key, steps);
        let stages = domain
            .stage_entries()
            .map(|(stage, activities)| StageView {
                stage,
                enabled: filter.stage_enabled(stage),
                activities: visible_activities(activities, &filter.role_filter),
            })
            .collect();

        Self {
            key: domain.key,
            label: domain.label,
            initials: domain.initials,
            in_pattern: annotation.in_pattern(),
            steps: annotation.step_numbers(),
            annotation,
            stages,
        }
    }

    /// Number of chips rendered across all stages
    pub fn chip_count(&self) -> usize {
        self.stages.iter().map(|s| s.activities.len()).sum()
    }
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixView {
    pub active_pattern: String,
    pub active_steps: Vec<&'static str>,
    pub domains: Vec<DomainView>,
}

impl MatrixView {
    pub fn build(dataset: &Dataset, filter: &FilterState) -> Self {
        let steps = filter.active_steps(dataset);
        let domains = order_domains(dataset.domains, steps)
            .into_iter()
            .map(|domain| DomainView::build(domain, steps, filter))
            .collect();

        Self {
            active_pattern: filter.active_pattern_id.clone(),
            active_steps: steps.to_vec(),
            domains,
        }
    }

    pub fn domain(&self, key: &str) -> Option<&DomainView> {
        self.domains.iter().find(|d| d.key == key)
    }
}

/// Memoized `MatrixView`, rebuilt only when the filter state changes
#[derive(Debug, Clone)]
pub struct ViewCache {
    key: FilterState,
    view: MatrixView,
}

impl ViewCache {
    pub fn new(dataset: &Dataset, filter: &FilterState) -> Self {
        Self {
            key: filter.clone(),
            view: MatrixView::build(dataset, filter),
        }
    }

    /// View for `filter`, recomputed if the cached one is stale
    pub fn get(&mut self, dataset: &Dataset, filter: &FilterState) -> &MatrixView {
        if !self.is_fresh(filter) {
            tracing::trace!(pattern = %filter.active_pattern_id, "recomputing matrix view");
            self.key = filter.clone();
            self.view = MatrixView::build(dataset, filter);
        }
        &self.view
    }

    /// Last computed view
    pub fn view(&self) -> &MatrixView {
        &self.view
    }

    /// Whether the cached view was computed for exactly `filter`
    pub fn is_fresh(&self, filter: &FilterState) -> bool {
        &self.key == filter
    }
}
