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

//! Lazily created, context-scoped access to the application configuration value.
//!
//! Every execution context owns at most one [`ConfigurationHolder`], built on the
//! first call to `get_instance` and reused afterwards. Contexts are either passed
//! explicitly ([`ExecutionContext`]) or resolved from the caller's scope
//! ([`scope::request`], [`scope::thread`], [`scope::process`]).
//!
//! # Example
//!
//! ```
//! use config_accessor::ExecutionContext;
//!
//! let context = ExecutionContext::new("import-job");
//! let first = context.get_instance();
//! let second = context.get_instance();
//! assert!(std::ptr::eq(first, second));
//! assert_eq!(first.get_config(), "App-wide configuration loaded");
//! ```
pub mod accessor;
pub mod context;
pub mod error;
pub mod holder;
pub mod scope;
pub mod settings;

pub use accessor::ConfigAccessor;
pub use context::ExecutionContext;
pub use error::AccessorError;
pub use holder::{ConfigurationHolder, APP_CONFIGURATION_VALUE};
pub use scope::SingletonScope;
pub use settings::{AccessorSettings, ConfigSingleton, SETTINGS};
