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

use std::future::Future;
use std::sync::Arc;

use uuid::Uuid;

use crate::context::ExecutionContext;
use crate::error::AccessorError;
use crate::holder::ConfigurationHolder;

tokio::task_local! {
    static REQUEST_CONTEXT: Arc<ExecutionContext>;
}

/// Runs `future` as one request with its own context.
pub async fn scope<F: Future>(future: F) -> F::Output {
    scope_with_label("request", future).await
}

/// Like [`scope`], with a caller-chosen label for log lines.
pub async fn scope_with_label<F: Future>(label: impl Into<String>, future: F) -> F::Output {
    let context = Arc::new(ExecutionContext::new(label));
    REQUEST_CONTEXT.scope(context, future).await
}

/// Synchronous counterpart of [`scope`] for blocking request handlers.
pub fn sync_scope<R>(f: impl FnOnce() -> R) -> R {
    let context = Arc::new(ExecutionContext::new("request"));
    REQUEST_CONTEXT.sync_scope(context, f)
}

/// Returns the holder of the active request.
///
/// # Errors
///
/// Returns `AccessorError::NoActiveRequestContext` when called outside of a request scope.
pub fn get_instance() -> Result<Arc<ConfigurationHolder>, AccessorError> {
    REQUEST_CONTEXT
        .try_with(|context| context.shared_instance())
        .map_err(|_| AccessorError::NoActiveRequestContext)
}

pub fn current_context_id() -> Result<Uuid, AccessorError> {
    REQUEST_CONTEXT
        .try_with(|context| context.id())
        .map_err(|_| AccessorError::NoActiveRequestContext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_request_scope_fails() {
        assert_eq!(get_instance().unwrap_err(), AccessorError::NoActiveRequestContext);
        assert_eq!(current_context_id().unwrap_err(), AccessorError::NoActiveRequestContext);
    }

    #[test]
    fn test_sync_scope_reuses_holder() {
        let (first, second) = sync_scope(|| (get_instance().unwrap(), get_instance().unwrap()));
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_scope_reuses_holder_across_await_points() {
        scope(async {
            let first = get_instance().unwrap();
            tokio::task::yield_now().await;
            let second = get_instance().unwrap();
            assert!(Arc::ptr_eq(&first, &second));
        })
        .await;
    }
}
