// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use itertools::Itertools;
use thiserror::Error;

use crate::ArtifactId;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const ARTIFACT_ID_FIELD_NAME: &str = "Artifact ID";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Non-empty ordered group of identifiers used to scope a full-object
/// re-query. Only exists while a batch is being retrieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierBatch {
    ids: Vec<ArtifactId>,
}

impl IdentifierBatch {
    pub fn new(ids: Vec<ArtifactId>) -> Result<Self, EmptyBatchError> {
        if ids.is_empty() {
            return Err(EmptyBatchError);
        }
        Ok(Self { ids })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// `('Artifact ID' IN (1,2,3))`
    pub fn membership_condition(&self) -> String {
        format!(
            "('{ARTIFACT_ID_FIELD_NAME}' IN ({}))",
            self.ids.iter().join(",")
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("Identifier batch must not be empty")]
pub struct EmptyBatchError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
