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

use std::sync::{Arc, OnceLock};

use log::{debug, info};
use uuid::Uuid;

use crate::holder::ConfigurationHolder;

/// One logical unit of work owning at most one [`ConfigurationHolder`].
///
/// The holder is created on the first call to [`get_instance`](Self::get_instance)
/// and lives as long as the context. A context is never reset; start a new one
/// to observe a fresh holder.
#[derive(Debug)]
pub struct ExecutionContext {
    id: Uuid,
    label: String,
    holder: OnceLock<Arc<ConfigurationHolder>>,
}

impl ExecutionContext {
    /// Creates a new, uninitialized context.
    pub fn new(label: impl Into<String>) -> Self {
        let context = ExecutionContext {
            id: Uuid::new_v4(),
            label: label.into(),
            holder: OnceLock::new(),
        };
        debug!("Execution context created, id: {}, label: {}", context.id, context.label);
        context
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the context's holder, constructing it on first access.
    pub fn get_instance(&self) -> &ConfigurationHolder {
        self.holder_cell()
    }

    /// Same holder as [`get_instance`](Self::get_instance), as a shared handle
    /// that can outlive the borrow of the context.
    pub fn shared_instance(&self) -> Arc<ConfigurationHolder> {
        Arc::clone(self.holder_cell())
    }

    /// Whether the holder has been constructed, without constructing it.
    pub fn is_initialized(&self) -> bool {
        self.holder.get().is_some()
    }

    fn holder_cell(&self) -> &Arc<ConfigurationHolder> {
        self.holder.get_or_init(|| {
            info!("Configuration holder initialized, context id: {}, label: {}", self.id, self.label);
            Arc::new(ConfigurationHolder::new())
        })
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        ExecutionContext::new("default")
    }
}
