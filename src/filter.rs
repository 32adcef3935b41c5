//! Filter state for the quest grid
//!
//! Three independent selections drive the derived view: which stages are
//! enabled, which roles are enabled and which quest pattern is highlighted.
//! The sets are persistent `im::OrdSet`s; every change produces a new set.

use im::OrdSet;

use crate::dataset::Dataset;
use crate::models::{Role, Stage};

/// Return a new set with `value`'s membership flipped.
pub fn toggle<T: Ord + Clone>(set: &OrdSet<T>, value: &T) -> OrdSet<T> {
    if set.contains(value) {
        set.without(value)
    } else {
        set.update(value.clone())
    }
}

/// Steps of the pattern with `id`, or an empty slice when no pattern matches.
pub fn active_steps(dataset: &Dataset, id: &str) -> &'static [&'static str] {
    dataset.pattern(id).map(|p| p.steps).unwrap_or(&[])
}

/// Initial selections, as resolved from the config file and command line.
/// `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitialFilters {
    pub stages: Option<OrdSet<Stage>>,
    pub roles: Option<OrdSet<Role>>,
    pub pattern: Option<String>,
}

/// Current user selections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub stage_filter: OrdSet<Stage>,
    pub role_filter: OrdSet<Role>,
    pub active_pattern_id: String,
}

impl FilterState {
    /// Build a fresh state: all stages, all roles, first pattern, unless
    /// `initial` says otherwise.
    pub fn new(dataset: &Dataset, initial: &InitialFilters) -> Self {
        let active_pattern_id = initial
            .pattern
            .clone()
            .or_else(|| dataset.default_pattern().map(|p| p.id.to_string()))
            .unwrap_or_default();

        Self {
            stage_filter: initial
                .stages
                .clone()
                .unwrap_or_else(|| Stage::ALL.into_iter().collect()),
            role_filter: initial
                .roles
                .clone()
                .unwrap_or_else(|| Role::ALL.into_iter().collect()),
            active_pattern_id,
        }
    }

    pub fn toggle_stage(&mut self, stage: Stage) {
        self.stage_filter = toggle(&self.stage_filter, &stage);
        tracing::debug!(stage = stage.key(), enabled = self.stage_enabled(stage), "stage toggled");
    }

    pub fn toggle_role(&mut self, role: Role) {
        self.role_filter = toggle(&self.role_filter, &role);
        tracing::debug!(role = role.code(), enabled = self.role_enabled(role), "role toggled");
    }

    /// Select a pattern; the id is taken as-is.
    pub fn select_pattern(&mut self, id: &str) {
        self.active_pattern_id = id.to_string();
        tracing::debug!(pattern = id, "pattern selected");
    }

    pub fn stage_enabled(&self, stage: Stage) -> bool {
        self.stage_filter.contains(&stage)
    }

    pub fn role_enabled(&self, role: Role) -> bool {
        self.role_filter.contains(&role)
    }

    /// Steps of the currently selected pattern
    pub fn active_steps(&self, dataset: &Dataset) -> &'static [&'static str] {
        active_steps(dataset, &self.active_pattern_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_state() -> FilterState {
        FilterState::new(Dataset::builtin(), &InitialFilters::default())
    }

    #[test]
    fn test_toggle_removes_present_value() {
        let set: OrdSet<u8> = [1, 2, 3].into_iter().collect();
        let next = toggle(&set, &2);
        assert!(!next.contains(&2));
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn test_toggle_adds_absent_value() {
        let set: OrdSet<u8> = [1].into_iter().collect();
        let next = toggle(&set, &5);
        assert!(next.contains(&5));
    }

    #[test]
    fn test_toggle_leaves_input_untouched() {
        let set: OrdSet<u8> = [1, 2].into_iter().collect();
        let _ = toggle(&set, &1);
        let _ = toggle(&set, &9);
        assert_eq!(set, [1, 2].into_iter().collect());
    }

    #[test]
    fn test_default_state_enables_everything() {
        let state = default_state();
        assert_eq!(state.stage_filter.len(), 3);
        assert_eq!(state.role_filter.len(), 6);
        assert_eq!(state.active_pattern_id, "R-Y-G-P");
    }

    #[test]
    fn test_initial_filters_override_defaults() {
        let initial = InitialFilters {
            stages: Some([Stage::Late].into_iter().collect()),
            roles: Some(OrdSet::new()),
            pattern: Some("Y-Y-G-H-P".to_string()),
        };
        let state = FilterState::new(Dataset::builtin(), &initial);
        assert!(state.stage_enabled(Stage::Late));
        assert!(!state.stage_enabled(Stage::Early));
        assert!(state.role_filter.is_empty());
        assert_eq!(state.active_pattern_id, "Y-Y-G-H-P");
    }

    #[test]
    fn test_toggle_stage_and_role() {
        let mut state = default_state();
        state.toggle_stage(Stage::Middle);
        state.toggle_role(Role::Reward);
        assert!(!state.stage_enabled(Stage::Middle));
        assert!(!state.role_enabled(Role::Reward));
        state.toggle_stage(Stage::Middle);
        assert!(state.stage_enabled(Stage::Middle));
    }

    #[test]
    fn test_select_pattern_is_unconditional() {
        let mut state = default_state();
        state.select_pattern("does-not-exist");
        assert_eq!(state.active_pattern_id, "does-not-exist");
        assert!(state.active_steps(Dataset::builtin()).is_empty());
    }

    #[test]
    fn test_active_steps_lookup() {
        let steps = active_steps(Dataset::builtin(), "Y-Y-G-H-P");
        assert_eq!(steps, &["yellow", "yellow", "green", "orange", "purple"]);
    }
}
