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

/// Value exposed by every configuration holder.
pub const APP_CONFIGURATION_VALUE: &str = "App-wide configuration loaded";

/// Read-only configuration holder.
///
/// Instances are only built by an [`ExecutionContext`](crate::ExecutionContext),
/// at most once per context. Callers get `&ConfigurationHolder` or an
/// `Arc<ConfigurationHolder>` and have no way to mutate or construct one.
///
/// ```compile_fail
/// let holder = config_accessor::ConfigurationHolder::new();
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct ConfigurationHolder {
    configuration_value: String,
}

impl ConfigurationHolder {
    pub(crate) fn new() -> Self {
        ConfigurationHolder {
            configuration_value: APP_CONFIGURATION_VALUE.to_string(),
        }
    }

    /// Returns the configuration value unchanged.
    pub fn get_config(&self) -> &str {
        &self.configuration_value
    }
}
