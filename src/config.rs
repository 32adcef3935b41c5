//! Initial filter configuration.
//!
//! The grid mounts with everything enabled and the first pattern selected.
//! A JSON config file and command-line flags can change those starting
//! selections; nothing is ever written back.

use std::path::{Path, PathBuf};

use im::OrdSet;
use serde::Deserialize;

use crate::dataset::Dataset;
use crate::error::ConfigError;
use crate::filter::InitialFilters;
use crate::models::{Role, Stage};

/// File name looked up in the working directory
pub const LOCAL_CONFIG: &str = "quest-mapper.json";

/// Raw, unvalidated filter selections
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterConfig {
    pub initial_stage_filter: Option<Vec<String>>,
    pub initial_role_filter: Option<Vec<String>>,
    pub initial_pattern: Option<String>,
}

impl FilterConfig {
    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Field-by-field merge; values present in `overrides` win
    pub fn merge(self, overrides: FilterConfig) -> FilterConfig {
        FilterConfig {
            initial_stage_filter: overrides.initial_stage_filter.or(self.initial_stage_filter),
            initial_role_filter: overrides.initial_role_filter.or(self.initial_role_filter),
            initial_pattern: overrides.initial_pattern.or(self.initial_pattern),
        }
    }

    /// Validate against the closed universes and the dataset's patterns
    pub fn resolve(&self, dataset: &Dataset) -> Result<InitialFilters, ConfigError> {
        let stages = self
            .initial_stage_filter
            .as_ref()
            .map(|values| {
                values
                    .iter()
                    .map(|v| Stage::parse(v).ok_or_else(|| ConfigError::UnknownStage(v.clone())))
                    .collect::<Result<OrdSet<Stage>, _>>()
            })
            .transpose()?;

        let roles = self
            .initial_role_filter
            .as_ref()
            .map(|values| {
                values
                    .iter()
                    .map(|v| Role::parse(v).ok_or_else(|| ConfigError::UnknownRole(v.clone())))
                    .collect::<Result<OrdSet<Role>, _>>()
            })
            .transpose()?;

        let pattern = match &self.initial_pattern {
            Some(id) if dataset.pattern(id).is_none() => {
                return Err(ConfigError::UnknownPattern(id.clone()));
            }
            other => other.clone(),
        };

        Ok(InitialFilters {
            stages,
            roles,
            pattern,
        })
    }
}

/// Config file locations in order of priority:
/// 1. ./quest-mapper.json (local project customization)
/// 2. <config dir>/quest-mapper/config.json (global user config)
pub fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("quest-mapper").join("config.json"));
    }
    paths
}

/// Find and load the config file.
///
/// An explicit path must exist; otherwise the first existing entry of
/// `search_paths` is used, and having none is not an error.
pub fn find_config(
    explicit: Option<&Path>,
    search_paths: &[PathBuf],
) -> Result<Option<(FilterConfig, PathBuf)>, ConfigError> {
    if let Some(path) = explicit {
        return FilterConfig::load(path).map(|config| Some((config, path.to_path_buf())));
    }

    for path in search_paths {
        if path.exists() {
            let config = FilterConfig::load(path)?;
            return Ok(Some((config, path.clone())));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn create_temp_config(content: &str) -> (tempfile::NamedTempFile, PathBuf) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        let path = file.path().to_path_buf();
        (file, path)
    }

    #[test]
    fn test_load_full_config() {
        let (_file, path) = create_temp_config(
            r#"{
                "initialStageFilter": ["0-1", "4+"],
                "initialRoleFilter": ["GR", "Reward"],
                "initialPattern": "Y-Y-G-H-P"
            }"#,
        );
        let config = FilterConfig::load(&path).unwrap();
        let initial = config.resolve(Dataset::builtin()).unwrap();

        let stages = initial.stages.unwrap();
        assert!(stages.contains(&Stage::Early));
        assert!(stages.contains(&Stage::Late));
        assert!(!stages.contains(&Stage::Middle));

        let roles = initial.roles.unwrap();
        assert_eq!(roles.len(), 2);
        assert!(roles.contains(&Role::Reward));
        assert_eq!(initial.pattern.as_deref(), Some("Y-Y-G-H-P"));
    }

    #[test]
    fn test_empty_config_resolves_to_defaults() {
        let (_file, path) = create_temp_config("{}");
        let config = FilterConfig::load(&path).unwrap();
        assert_eq!(
            config.resolve(Dataset::builtin()).unwrap(),
            InitialFilters::default()
        );
    }

    #[test]
    fn test_load_invalid_json() {
        let (_file, path) = create_temp_config("{ invalid json }");
        assert!(matches!(
            FilterConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_unknown_field() {
        let (_file, path) = create_temp_config(r#"{"initialPatern": "R-Y-G-P"}"#);
        assert!(matches!(
            FilterConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let path = PathBuf::from("/nonexistent/path/quest-mapper.json");
        assert!(matches!(
            FilterConfig::load(&path),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_resolve_rejects_unknown_values() {
        let bad_stage = FilterConfig {
            initial_stage_filter: Some(vec!["9-10".to_string()]),
            ..Default::default()
        };
        assert!(matches!(
            bad_stage.resolve(Dataset::builtin()),
            Err(ConfigError::UnknownStage(s)) if s == "9-10"
        ));

        let bad_role = FilterConfig {
            initial_role_filter: Some(vec!["ZZ".to_string()]),
            ..Default::default()
        };
        assert!(matches!(
            bad_role.resolve(Dataset::builtin()),
            Err(ConfigError::UnknownRole(r)) if r == "ZZ"
        ));

        let bad_pattern = FilterConfig {
            initial_pattern: Some("X-X".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            bad_pattern.resolve(Dataset::builtin()),
            Err(ConfigError::UnknownPattern(p)) if p == "X-X"
        ));
    }

    #[test]
    fn test_merge_overrides_per_field() {
        let file = FilterConfig {
            initial_stage_filter: Some(vec!["0-1".to_string()]),
            initial_role_filter: Some(vec!["GR".to_string()]),
            initial_pattern: Some("R-Y-G-P".to_string()),
        };
        let cli = FilterConfig {
            initial_pattern: Some("R-Y-H-Y-G-P".to_string()),
            ..Default::default()
        };
        let merged = file.merge(cli);
        assert_eq!(merged.initial_stage_filter, Some(vec!["0-1".to_string()]));
        assert_eq!(merged.initial_pattern.as_deref(), Some("R-Y-H-Y-G-P"));
    }

    #[test]
    fn test_find_config_first_existing_wins() {
        let (_first, first_path) = create_temp_config(r#"{"initialPattern": "Y-Y-G-H-P"}"#);
        let (_second, second_path) = create_temp_config(r#"{"initialPattern": "R-Y-G-P"}"#);
        let missing = PathBuf::from("/nonexistent/quest-mapper.json");

        let found = find_config(None, &[missing, first_path.clone(), second_path])
            .unwrap()
            .unwrap();
        assert_eq!(found.1, first_path);
        assert_eq!(found.0.initial_pattern.as_deref(), Some("Y-Y-G-H-P"));
    }

    #[test]
    fn test_find_config_none_found() {
        let missing = PathBuf::from("/nonexistent/quest-mapper.json");
        assert!(find_config(None, &[missing]).unwrap().is_none());
    }

    #[test]
    fn test_find_config_explicit_must_exist() {
        let missing = PathBuf::from("/nonexistent/quest-mapper.json");
        assert!(find_config(Some(&missing), &[]).is_err());
    }
}
