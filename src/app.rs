//! Application state and core logic for the Quest Mapper.
//!
//! This module contains the `App` struct which owns the filter state for the
//! interactive grid, the focus/cursor state of the control panels and the
//! memoized derived view.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::dataset::Dataset;
use crate::filter::{FilterState, InitialFilters};
use crate::models::{FocusPanel, Role, Stage};
use crate::view::{MatrixView, ViewCache};

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

/// Application state
pub struct App {
    pub dataset: &'static Dataset,
    // Selections the grid mounts with (and returns to on reset)
    pub initial: InitialFilters,
    pub filter: FilterState,
    // Compact layout for constrained hosts
    pub embedded: bool,
    pub focus: FocusPanel,
    // Cursor position inside each control panel
    pub stage_cursor: usize,
    pub role_cursor: usize,
    pub pattern_cursor: usize,
    // Index of the first domain card shown in the grid
    pub grid_scroll_offset: usize,
    view_cache: ViewCache,
}

/// Move `index` by `delta` inside `0..len`, wrapping at both ends
fn wrap_index(index: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    (index as isize + delta).rem_euclid(len as isize) as usize
}

impl App {
    pub fn new(dataset: &'static Dataset, initial: InitialFilters, embedded: bool) -> Self {
        let filter = FilterState::new(dataset, &initial);
        let view_cache = ViewCache::new(dataset, &filter);
        let pattern_cursor = Self::pattern_index(dataset, &filter.active_pattern_id);

        Self {
            dataset,
            initial,
            filter,
            embedded,
            focus: FocusPanel::default(),
            stage_cursor: 0,
            role_cursor: 0,
            pattern_cursor,
            grid_scroll_offset: 0,
            view_cache,
        }
    }

    /// Index of pattern `id` in the dataset (or 0 if unknown)
    fn pattern_index(dataset: &Dataset, id: &str) -> usize {
        dataset.patterns.iter().position(|p| p.id == id).unwrap_or(0)
    }

    /// Derived view for the current filter state
    pub fn view(&self) -> &MatrixView {
        self.view_cache.view()
    }

    fn refresh_view(&mut self) {
        self.view_cache.get(self.dataset, &self.filter);
    }

    /// Rebuild the filter state from the initial selections
    pub fn reset(&mut self) {
        self.filter = FilterState::new(self.dataset, &self.initial);
        self.pattern_cursor = Self::pattern_index(self.dataset, &self.filter.active_pattern_id);
        self.grid_scroll_offset = 0;
        tracing::info!("filters reset");
        self.refresh_view();
    }

    /// Select the pattern at `index`, if there is one
    pub fn select_pattern_at(&mut self, index: usize) {
        if let Some(pattern) = self.dataset.patterns.get(index) {
            self.pattern_cursor = index;
            self.filter.select_pattern(pattern.id);
            self.grid_scroll_offset = 0;
            self.refresh_view();
        }
    }

    /// Largest useful grid scroll offset
    pub fn max_grid_scroll(&self) -> usize {
        self.dataset.domains.len().saturating_sub(1)
    }

    fn move_cursor(&mut self, delta: isize) {
        match self.focus {
            FocusPanel::Stages => {
                self.stage_cursor = wrap_index(self.stage_cursor, Stage::ALL.len(), delta);
            }
            FocusPanel::Roles => {
                self.role_cursor = wrap_index(self.role_cursor, Role::ALL.len(), delta);
            }
            FocusPanel::Patterns => {
                self.pattern_cursor =
                    wrap_index(self.pattern_cursor, self.dataset.patterns.len(), delta);
            }
            FocusPanel::Grid => {
                self.grid_scroll_offset = if delta < 0 {
                    self.grid_scroll_offset.saturating_sub(delta.unsigned_abs())
                } else {
                    (self.grid_scroll_offset + delta as usize).min(self.max_grid_scroll())
                };
            }
        }
    }

    /// Toggle or select whatever the cursor is on in the focused panel
    fn activate(&mut self) {
        match self.focus {
            FocusPanel::Stages => {
                if let Some(&stage) = Stage::ALL.get(self.stage_cursor) {
                    self.filter.toggle_stage(stage);
                }
            }
            FocusPanel::Roles => {
                if let Some(&role) = Role::ALL.get(self.role_cursor) {
                    self.filter.toggle_role(role);
                }
            }
            FocusPanel::Patterns => self.select_pattern_at(self.pattern_cursor),
            FocusPanel::Grid => {}
        }
        self.refresh_view();
    }

    /// Apply a key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> AppAction {
        tracing::trace!(?code, ?modifiers, focus = self.focus.label(), "key");
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                return AppAction::Quit;
            }
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
                self.move_cursor(-1)
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
                self.move_cursor(1)
            }
            KeyCode::PageUp => self.grid_scroll_offset = 0,
            KeyCode::PageDown => self.grid_scroll_offset = self.max_grid_scroll(),
            KeyCode::Char(' ') | KeyCode::Enter => self.activate(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.select_pattern_at(index);
            }
            _ => {}
        }
        AppAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Dataset::builtin(), InitialFilters::default(), false)
    }

    fn press(app: &mut App, code: KeyCode) -> AppAction {
        app.handle_key(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(0, 3, -1), 2);
        assert_eq!(wrap_index(2, 3, 1), 0);
        assert_eq!(wrap_index(1, 3, 1), 2);
        assert_eq!(wrap_index(0, 0, 1), 0);
    }

    #[test]
    fn test_new_app_uses_defaults() {
        let app = app();
        assert_eq!(app.focus, FocusPanel::Stages);
        assert_eq!(app.filter.active_pattern_id, "R-Y-G-P");
        assert_eq!(app.view().domains[0].key, "red");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(press(&mut app, KeyCode::Esc), AppAction::Quit);
        assert_eq!(
            app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            AppAction::Quit
        );
        assert_eq!(press(&mut app, KeyCode::Char('c')), AppAction::Continue);
    }

    #[test]
    fn test_space_toggles_focused_stage() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.filter.stage_enabled(Stage::Middle));
        assert!(app.view().domains.iter().all(|d| !d.stages[1].enabled));

        press(&mut app, KeyCode::Enter);
        assert!(app.filter.stage_enabled(Stage::Middle));
    }

    #[test]
    fn test_role_toggle_updates_view() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, FocusPanel::Roles);
        // Cursor on SU
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.filter.role_enabled(Role::Support));
        let orange = app.view().domain("orange").unwrap();
        assert_eq!(orange.chip_count(), 0);
    }

    #[test]
    fn test_pattern_selection_by_cursor() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, FocusPanel::Patterns);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.filter.active_pattern_id, "Y-Y-G-H-P");
        assert_eq!(app.view().domains[0].annotation.to_string(), "Steps 1, 2");
    }

    #[test]
    fn test_pattern_selection_by_digit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.filter.active_pattern_id, "R-Y-H-Y-G-P");
        assert_eq!(app.pattern_cursor, 2);

        // No fourth pattern: nothing changes
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.filter.active_pattern_id, "R-Y-H-Y-G-P");
    }

    #[test]
    fn test_grid_scroll_is_clamped() {
        let mut app = app();
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, FocusPanel::Grid);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.grid_scroll_offset, 0);
        for _ in 0..20 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.grid_scroll_offset, app.max_grid_scroll());
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.grid_scroll_offset, 0);
    }

    #[test]
    fn test_reset_restores_initial_selection() {
        let initial = InitialFilters {
            pattern: Some("Y-Y-G-H-P".to_string()),
            ..Default::default()
        };
        let mut app = App::new(Dataset::builtin(), initial, false);
        assert_eq!(app.pattern_cursor, 1);

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.filter.stage_enabled(Stage::Early));

        press(&mut app, KeyCode::Char('r'));
        assert!(app.filter.stage_enabled(Stage::Early));
        assert_eq!(app.filter.active_pattern_id, "Y-Y-G-H-P");
        assert_eq!(app.pattern_cursor, 1);
        assert_eq!(app.view().domains[0].key, "yellow");
    }
}
