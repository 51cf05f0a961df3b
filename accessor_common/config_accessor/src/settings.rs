/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2025. All rights reserved.
 * Global Trust Authority is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

use std::env;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::OnceLock;

use log::{info, warn};
use serde::Deserialize;

use crate::error::AccessorError;
use crate::scope::SingletonScope;

/// Environment variable overriding the configured default scope.
pub const SCOPE_ENV_KEY: &str = "CONFIG_ACCESSOR_SCOPE";

/// Settings file layout:
///
/// ```yaml
/// accessor:
///   default_scope: thread
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AccessorSettings {
    #[serde(default)]
    pub accessor: AccessorSection,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AccessorSection {
    /// Scope resolved by `ConfigAccessor` when none is given
    #[serde(default)]
    pub default_scope: SingletonScope,
}

impl AccessorSettings {
    pub fn with_scope(scope: SingletonScope) -> Self {
        AccessorSettings {
            accessor: AccessorSection { default_scope: scope },
        }
    }

    pub fn default_scope(&self) -> SingletonScope {
        self.accessor.default_scope
    }

    /// Reads and parses a YAML settings file.
    ///
    /// # Errors
    ///
    /// * `SettingsIo` if the file cannot be opened or read
    /// * `SettingsParse` if the content does not match the settings layout
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, AccessorError> {
        let file = File::open(path).map_err(|e| AccessorError::SettingsIo(e.to_string()))?;
        let mut contents = String::new();
        BufReader::new(file)
            .read_to_string(&mut contents)
            .map_err(|e| AccessorError::SettingsIo(e.to_string()))?;
        Self::from_str(&contents)
    }

    /// Parses settings from YAML text. Empty text yields the defaults.
    pub fn from_str(content: &str) -> Result<Self, AccessorError> {
        if content.trim().is_empty() {
            return Ok(AccessorSettings::default());
        }
        serde_yaml::from_str(content).map_err(|e| AccessorError::SettingsParse(e.to_string()))
    }

    /// Replaces the default scope with `CONFIG_ACCESSOR_SCOPE` when it is set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSettings` if the variable names an unknown scope.
    pub fn apply_env_overrides(mut self) -> Result<Self, AccessorError> {
        match env::var(SCOPE_ENV_KEY) {
            Ok(value) => {
                let scope = value.parse::<SingletonScope>()?;
                info!("Default scope overridden by {}: {}", SCOPE_ENV_KEY, scope);
                self.accessor.default_scope = scope;
            },
            Err(env::VarError::NotPresent) => {},
            Err(e) => warn!("Ignoring {}: {}", SCOPE_ENV_KEY, e),
        }
        Ok(self)
    }
}

/// Write-once holder for values loaded from a YAML file.
///
/// The first successful `initialize` wins; later calls return `Ok(())` and
/// keep the existing value.
pub struct ConfigSingleton<T: for<'a> Deserialize<'a> + Send + Sync + 'static> {
    instance: OnceLock<T>,
}

impl<T: for<'a> Deserialize<'a> + Send + Sync + 'static> ConfigSingleton<T> {
    pub const fn new() -> Self {
        ConfigSingleton { instance: OnceLock::new() }
    }

    /// Loads `path` through `load` unless a value is already present.
    pub fn initialize_with<P, F>(&self, path: P, load: F) -> Result<(), AccessorError>
    where
        P: AsRef<Path>,
        F: FnOnce(&Path) -> Result<T, AccessorError>,
    {
        if self.instance.get().is_some() {
            return Ok(());
        }
        let value = load(path.as_ref())?;
        let _ = self.instance.set(value);
        Ok(())
    }

    pub fn get_instance(&self) -> Result<&T, AccessorError> {
        self.instance.get().ok_or(AccessorError::SettingsNotInitialized)
    }
}

impl<T: for<'a> Deserialize<'a> + Send + Sync + 'static> Default for ConfigSingleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSingleton<AccessorSettings> {
    /// Loads the settings file and applies environment overrides.
    pub fn initialize<P: AsRef<Path>>(&self, path: P) -> Result<(), AccessorError> {
        self.initialize_with(path, |path| AccessorSettings::from_yaml(path)?.apply_env_overrides())
    }
}

/// Process settings. Call `SETTINGS.initialize(path)` once at startup.
pub static SETTINGS: ConfigSingleton<AccessorSettings> = ConfigSingleton::new();

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_settings(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write settings");
        file
    }

    #[test]
    fn test_parse_scope_from_yaml() {
        let settings = AccessorSettings::from_str("accessor:\n  default_scope: request\n").unwrap();
        assert_eq!(settings.default_scope(), SingletonScope::Request);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        assert_eq!(AccessorSettings::from_str("").unwrap(), AccessorSettings::default());
        assert_eq!(AccessorSettings::from_str("accessor: {}\n").unwrap().default_scope(), SingletonScope::Thread);
    }

    #[test]
    fn test_unknown_scope_is_parse_error() {
        let err = AccessorSettings::from_str("accessor:\n  default_scope: forever\n").unwrap_err();
        assert!(matches!(err, AccessorError::SettingsParse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AccessorSettings::from_yaml("/nonexistent/accessor.yaml").unwrap_err();
        assert!(matches!(err, AccessorError::SettingsIo(_)));
    }

    #[test]
    fn test_from_yaml_file() {
        let file = write_settings("accessor:\n  default_scope: process\n");
        let settings = AccessorSettings::from_yaml(file.path()).unwrap();
        assert_eq!(settings.default_scope(), SingletonScope::Process);
    }

    #[test]
    #[serial]
    fn test_env_override_replaces_scope() {
        env::set_var(SCOPE_ENV_KEY, "process");
        let settings = AccessorSettings::with_scope(SingletonScope::Request).apply_env_overrides();
        env::remove_var(SCOPE_ENV_KEY);
        assert_eq!(settings.unwrap().default_scope(), SingletonScope::Process);
    }

    #[test]
    #[serial]
    fn test_env_override_rejects_unknown_scope() {
        env::set_var(SCOPE_ENV_KEY, "galaxy");
        let result = AccessorSettings::default().apply_env_overrides();
        env::remove_var(SCOPE_ENV_KEY);
        assert!(matches!(result, Err(AccessorError::InvalidSettings(_))));
    }

    #[test]
    #[serial]
    fn test_env_override_absent_keeps_scope() {
        env::remove_var(SCOPE_ENV_KEY);
        let settings = AccessorSettings::with_scope(SingletonScope::Request).apply_env_overrides().unwrap();
        assert_eq!(settings.default_scope(), SingletonScope::Request);
    }

    #[test]
    #[serial]
    fn test_config_singleton_initializes_once() {
        env::remove_var(SCOPE_ENV_KEY);
        let singleton: ConfigSingleton<AccessorSettings> = ConfigSingleton::new();
        assert_eq!(singleton.get_instance().unwrap_err(), AccessorError::SettingsNotInitialized);

        let first = write_settings("accessor:\n  default_scope: request\n");
        singleton.initialize(first.path()).unwrap();
        let second = write_settings("accessor:\n  default_scope: process\n");
        singleton.initialize(second.path()).unwrap();

        assert_eq!(singleton.get_instance().unwrap().default_scope(), SingletonScope::Request);
    }

    #[test]
    fn test_config_singleton_failed_load_stays_uninitialized() {
        let singleton: ConfigSingleton<AccessorSettings> = ConfigSingleton::new();
        assert!(singleton.initialize("/nonexistent/accessor.yaml").is_err());
        assert!(singleton.get_instance().is_err());
    }
}
