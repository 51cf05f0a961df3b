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

use std::sync::Arc;

use crate::error::AccessorError;
use crate::holder::ConfigurationHolder;
use crate::scope::{process, request, thread, SingletonScope};
use crate::settings::{AccessorSettings, SETTINGS};

/// Entry point for callers that do not carry an `ExecutionContext` themselves.
///
/// Resolves the holder of the caller's current context for the configured scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigAccessor {
    scope: SingletonScope,
}

impl ConfigAccessor {
    pub fn new(scope: SingletonScope) -> Self {
        ConfigAccessor { scope }
    }

    pub fn from_settings(settings: &AccessorSettings) -> Self {
        ConfigAccessor::new(settings.default_scope())
    }

    /// Uses the process `SETTINGS` when they are initialized, the default scope otherwise.
    pub fn from_process_settings() -> Self {
        match SETTINGS.get_instance() {
            Ok(settings) => ConfigAccessor::from_settings(settings),
            Err(_) => ConfigAccessor::new(SingletonScope::default()),
        }
    }

    pub fn scope(&self) -> SingletonScope {
        self.scope
    }

    /// Returns the holder of the current context for this accessor's scope.
    ///
    /// # Errors
    ///
    /// Only the request scope can fail, with `NoActiveRequestContext`.
    pub fn get_instance(&self) -> Result<Arc<ConfigurationHolder>, AccessorError> {
        match self.scope {
            SingletonScope::Request => request::get_instance(),
            SingletonScope::Thread => Ok(thread::get_instance()),
            SingletonScope::Process => Ok(process::context().shared_instance()),
        }
    }

    pub fn get_config(&self) -> Result<String, AccessorError> {
        Ok(self.get_instance()?.get_config().to_string())
    }
}

impl Default for ConfigAccessor {
    fn default() -> Self {
        ConfigAccessor::new(SingletonScope::default())
    }
}
