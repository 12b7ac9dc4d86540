// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use object_query::ArtifactId;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingletonCheckResult {
    Available,
    Violation(SingletonViolation),
}

impl SingletonCheckResult {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// At most one configuration record may ever exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingletonViolation {
    MultipleInstances {
        total_count: usize,
    },
    /// `existing` is `None` when the service reported a match without
    /// returning it
    DifferentInstanceExists {
        existing: Option<ArtifactId>,
    },
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
