// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use serde::{Deserialize, Serialize};

use crate::{ArtifactId, FieldRef};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValuePair {
    pub field: FieldRef,
    pub value: serde_json::Value,
}

/// A single object returned by the remote object service. Its identity is
/// its [`ArtifactId`]; field values are whatever the query asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryObject {
    pub artifact_id: ArtifactId,
    #[serde(default)]
    pub field_values: Vec<FieldValuePair>,
}

impl QueryObject {
    pub fn new(artifact_id: ArtifactId) -> Self {
        Self {
            artifact_id,
            field_values: Vec::new(),
        }
    }

    pub fn with_value(mut self, field: FieldRef, value: impl Into<serde_json::Value>) -> Self {
        self.field_values.push(FieldValuePair {
            field,
            value: value.into(),
        });
        self
    }

    pub fn value(&self, field: &FieldRef) -> Option<&serde_json::Value> {
        self.field_values
            .iter()
            .find(|pair| &pair.field == field)
            .map(|pair| &pair.value)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
