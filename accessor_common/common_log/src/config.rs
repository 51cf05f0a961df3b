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

use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_MAX_ZIP_COUNT: u32 = 6;

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub loggers: Vec<LoggerConfig>,
}

/// One logger. Without `log_directory` it writes to the console.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggerConfig {
    pub path_prefix: String,
    pub level: String,
    #[serde(default)]
    pub log_directory: Option<String>,
    #[serde(default)]
    pub log_file_name: Option<String>,
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
    #[serde(default = "default_max_zip_count")]
    pub max_zip_count: u32,
}

fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

fn default_max_zip_count() -> u32 {
    DEFAULT_MAX_ZIP_COUNT
}

impl LoggerConfig {
    pub fn console(path_prefix: &str, level: &str) -> Self {
        LoggerConfig {
            path_prefix: path_prefix.to_string(),
            level: level.to_string(),
            log_directory: None,
            log_file_name: None,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_zip_count: DEFAULT_MAX_ZIP_COUNT,
        }
    }
}

impl LogConfig {
    pub fn from_yaml(path: impl Into<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let config_str = std::fs::read_to_string(path.into())?;
        let config: LogConfig = serde_yaml::from_str(&config_str)?;
        Ok(config)
    }

    pub fn get_logger_config(&self, path_prefix: &str) -> Option<&LoggerConfig> {
        self.loggers.iter().find(|l| path_prefix.starts_with(&l.path_prefix))
    }

    pub fn get_root_config(&self) -> Option<&LoggerConfig> {
        self.get_logger_config("root")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config: LogConfig = serde_yaml::from_str(
            "loggers:\n  - path_prefix: root\n    level: info\n",
        )
        .unwrap();
        let root = config.get_root_config().unwrap();
        assert_eq!(root.level, "info");
        assert!(root.log_directory.is_none());
        assert_eq!(root.max_file_size, DEFAULT_MAX_FILE_SIZE);
        assert_eq!(root.max_zip_count, DEFAULT_MAX_ZIP_COUNT);
    }

    #[test]
    fn test_logger_lookup_by_prefix() {
        let config = LogConfig {
            loggers: vec![LoggerConfig::console("config_accessor", "debug"), LoggerConfig::console("root", "warn")],
        };
        let found = config.get_logger_config("config_accessor::scope::thread").unwrap();
        assert_eq!(found.level, "debug");
        assert!(config.get_logger_config("tokio").is_none());
        assert_eq!(config.get_root_config().unwrap().level, "warn");
    }
}
