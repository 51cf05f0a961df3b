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

//! Ambient accessors resolving the execution context of the caller.
//!
//! * [`request`] - one context per async task started through [`request::scope`]
//! * [`thread`] - one context per thread, replaceable with [`thread::with_fresh_context`]
//! * [`process`] - a single context for the whole process

pub mod process;
pub mod request;
pub mod thread;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::AccessorError;

/// Which execution context an ambient accessor resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SingletonScope {
    Request,
    #[default]
    Thread,
    Process,
}

impl FromStr for SingletonScope {
    type Err = AccessorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "request" => Ok(SingletonScope::Request),
            "thread" => Ok(SingletonScope::Thread),
            "process" => Ok(SingletonScope::Process),
            other => Err(AccessorError::InvalidSettings(format!("Unknown singleton scope: {}", other))),
        }
    }
}

impl fmt::Display for SingletonScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SingletonScope::Request => "request",
            SingletonScope::Thread => "thread",
            SingletonScope::Process => "process",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scope_names() {
        assert_eq!("request".parse::<SingletonScope>().unwrap(), SingletonScope::Request);
        assert_eq!(" Thread ".parse::<SingletonScope>().unwrap(), SingletonScope::Thread);
        assert_eq!("PROCESS".parse::<SingletonScope>().unwrap(), SingletonScope::Process);
    }

    #[test]
    fn test_parse_unknown_scope() {
        let err = "transaction".parse::<SingletonScope>().unwrap_err();
        assert_eq!(err, AccessorError::InvalidSettings("Unknown singleton scope: transaction".to_string()));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for scope in [SingletonScope::Request, SingletonScope::Thread, SingletonScope::Process] {
            assert_eq!(scope.to_string().parse::<SingletonScope>().unwrap(), scope);
        }
    }

    #[test]
    fn test_default_scope_is_thread() {
        assert_eq!(SingletonScope::default(), SingletonScope::Thread);
    }
}
