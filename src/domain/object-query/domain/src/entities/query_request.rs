// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use serde::{Deserialize, Serialize};
use uuid::Uuid;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectTypeRef {
    Guid(Uuid),
    Name(String),
    ArtifactTypeId(i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldRef {
    Guid(Uuid),
    Name(String),
}

impl FieldRef {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sort {
    pub field: FieldRef,
    pub direction: SortDirection,
}

impl Sort {
    pub fn ascending(field: FieldRef) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: FieldRef) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A query against the remote object service.
///
/// Requests are never mutated once sent: every phase of a batched query
/// derives its own request from the caller's original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub object_type: ObjectTypeRef,
    #[serde(default)]
    pub fields: Vec<FieldRef>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub sorts: Vec<Sort>,
    #[serde(default)]
    pub relational_field: Option<FieldRef>,
}

impl QueryRequest {
    pub fn new(object_type: ObjectTypeRef) -> Self {
        Self {
            object_type,
            fields: Vec::new(),
            condition: None,
            sorts: Vec::new(),
            relational_field: None,
        }
    }

    pub fn with_fields(mut self, fields: Vec<FieldRef>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn with_sorts(mut self, sorts: Vec<Sort>) -> Self {
        self.sorts = sorts;
        self
    }

    pub fn with_relational_field(mut self, relational_field: FieldRef) -> Self {
        self.relational_field = Some(relational_field);
        self
    }

    /// Same query, but asking for identifiers only
    pub fn identifiers_only(&self) -> Self {
        Self {
            object_type: self.object_type.clone(),
            fields: Vec::new(),
            condition: self.condition.clone(),
            sorts: self.sorts.clone(),
            relational_field: self.relational_field.clone(),
        }
    }

    /// Same query with its condition replaced by `condition`.
    /// The original condition is dropped, not combined.
    pub fn scoped_to(&self, condition: String) -> Self {
        Self {
            object_type: self.object_type.clone(),
            fields: self.fields.clone(),
            condition: Some(condition),
            sorts: self.sorts.clone(),
            relational_field: self.relational_field.clone(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
