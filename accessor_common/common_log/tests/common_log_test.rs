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

use common_log::config::{LogConfig, LoggerConfig};
use std::io::Write;
use tempfile::NamedTempFile;

/// The global logger can be installed once; later attempts report an error
#[test]
fn test_logger_initializes_once_and_reloads() {
    assert!(common_log::reload(&LogConfig { loggers: vec![] }).is_err());

    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(b"loggers:\n  - path_prefix: root\n    level: debug\n").expect("Failed to write config");
    common_log::init_with_yaml(file.path()).expect("Failed to initialize logger");
    common_log::info!("logger installed");

    assert!(common_log::init_console("info").is_err());
    let quieter = LogConfig { loggers: vec![LoggerConfig::console("root", "warn")] };
    assert!(common_log::reload(&quieter).is_ok());
}

#[test]
fn test_missing_yaml_is_error() {
    assert!(common_log::init_with_yaml("/nonexistent/logging.yaml").is_err());
}
