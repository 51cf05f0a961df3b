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

use thiserror::Error;

/// Errors raised by the ambient layers around the configuration accessor.
///
/// Reading the configuration value itself never fails; only scope resolution
/// and settings loading can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessorError {
    /// The request scope was used outside of `request::scope`
    #[error("No active request context")]
    NoActiveRequestContext,

    /// Settings file could not be opened or read
    #[error("Failed to read settings file: {0}")]
    SettingsIo(String),

    /// Settings content is not valid YAML for the expected shape
    #[error("Failed to parse settings: {0}")]
    SettingsParse(String),

    /// Settings parsed but carry an unsupported value
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Settings not initialized")]
    SettingsNotInitialized,
}
