// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const ERROR_MAX_INSTANCES: &str = "Save aborted, only one Disclaimer Config object is allowed";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Answer returned to the hosting application before a configuration
/// change is committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreSaveResponse {
    pub success: bool,
    pub message: String,
}

impl PreSaveResponse {
    pub fn success() -> Self {
        Self {
            success: true,
            message: String::new(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
