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

use std::cell::RefCell;
use std::sync::Arc;

use log::debug;

use crate::context::ExecutionContext;
use crate::holder::ConfigurationHolder;

thread_local! {
    static CURRENT: RefCell<Option<Arc<ExecutionContext>>> = RefCell::new(None);
}

fn thread_label() -> String {
    format!("thread:{}", std::thread::current().name().unwrap_or("unnamed"))
}

/// The calling thread's current context, created on first use.
pub fn current_context() -> Arc<ExecutionContext> {
    CURRENT.with(|current| {
        let mut current = current.borrow_mut();
        Arc::clone(current.get_or_insert_with(|| Arc::new(ExecutionContext::new(thread_label()))))
    })
}

/// Returns the holder of the calling thread's current context.
pub fn get_instance() -> Arc<ConfigurationHolder> {
    current_context().shared_instance()
}

/// Runs `f` inside a new context for the calling thread.
///
/// The previous context (if any) is restored when `f` returns or unwinds.
/// Holders obtained inside `f` are distinct from those obtained outside.
pub fn with_fresh_context<R>(f: impl FnOnce() -> R) -> R {
    let fresh = Arc::new(ExecutionContext::new(thread_label()));
    debug!("Entering fresh thread context, id: {}", fresh.id());
    let previous = CURRENT.with(|current| current.replace(Some(fresh)));
    let _restore = scopeguard::guard(previous, |previous| {
        CURRENT.with(|current| {
            current.replace(previous);
        });
    });
    f()
}
