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

use once_cell::sync::Lazy;

use crate::context::ExecutionContext;
use crate::holder::ConfigurationHolder;

static PROCESS_CONTEXT: Lazy<ExecutionContext> = Lazy::new(|| ExecutionContext::new("process"));

/// The context shared by the whole process.
pub fn context() -> &'static ExecutionContext {
    &PROCESS_CONTEXT
}

/// Returns the process-wide holder, constructing it on first access.
pub fn get_instance() -> &'static ConfigurationHolder {
    PROCESS_CONTEXT.get_instance()
}
